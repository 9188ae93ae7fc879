use super::*;
use mockito::Matcher;

const INPUT: &str = "Matricula,Justificativa_processada\n\
                     101,\n\
                     102,PARADA DO FORNO 2\n\
                     103,ORGANIZAÇÃO DO GALPÃO\n";

/// Matches a request whose single message ends with `text`.
fn prompt_ending_with(text: &str) -> Matcher {
    Matcher::Regex(format!(r#"\\n\\n{}""#, text))
}

#[tokio::test]
async fn classifies_every_row_and_keeps_original_columns() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let downtime = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(prompt_ending_with("PARADA DO FORNO 2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Parada de Máquina"))
        .expect(1)
        .create_async()
        .await;
    let external = server
        .mock("POST", "/chat/completions")
        .match_body(prompt_ending_with("ORGANIZAÇÃO DO GALPÃO"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Outros Eventos Externos\n"))
        .expect(1)
        .create_async()
        .await;

    let mut config = test_config(dir.path(), &server.url());
    config.language = Language::Portuguese;
    std::fs::write(&config.input_path, INPUT).unwrap();

    let summary = run(&config).await.unwrap();

    downtime.assert_async().await;
    external.assert_async().await;
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.fast_path, 1);
    assert_eq!(summary.classified, 2);

    let output = Dataset::from_path(&config.output_path).unwrap();
    assert_eq!(output.len(), 3);
    assert_eq!(
        output.headers().collect::<Vec<_>>(),
        vec![
            "Matricula",
            "Justificativa_processada",
            "Justificativa_classificada"
        ]
    );
    assert_eq!(
        output.column("Matricula").unwrap(),
        vec![Some("101"), Some("102"), Some("103")]
    );
    assert_eq!(
        output.column("Justificativa_classificada").unwrap(),
        vec![
            Some("Não classificado"),
            Some("Parada de Máquina"),
            Some("Outros Eventos Externos"),
        ]
    );
}

#[tokio::test]
async fn unreachable_classifier_degrades_rows_instead_of_failing() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":{"message":"The server had an error","type":"server_error","param":null,"code":null}}"#)
        .expect(6)
        .create_async()
        .await;

    let config = test_config(dir.path(), &server.url());
    std::fs::write(&config.input_path, INPUT).unwrap();

    let summary = run(&config).await.unwrap();

    failing.assert_async().await;
    assert_eq!(summary.failed, 2);
    let output = Dataset::from_path(&config.output_path).unwrap();
    assert_eq!(
        output.column("Justificativa_classificada").unwrap(),
        vec![
            Some("Not Classified"),
            Some("Error after 3 attempts"),
            Some("Error after 3 attempts"),
        ]
    );
}

#[tokio::test]
async fn missing_input_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new_async().await;
    let never = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let config = test_config(dir.path(), &server.url());

    let err = run(&config).await.unwrap_err();

    assert!(err.to_string().contains("justificativas.csv"));
    assert!(!config.output_path.exists());
    never.assert_async().await;
}
