use justification_classifier::ClassifierConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut config = ClassifierConfig::from_env()?;
    config.logging.load_logger()?;

    tracing::info!(
        "Classifying column {:?} of {} with {} (labels: {})",
        config.text_column,
        config.input_path.display(),
        config.request.model,
        config.language
    );
    tracing::debug!("Request config:{}", config.request);
    justification_classifier::run(&config).await?;
    Ok(())
}
