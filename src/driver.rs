use crate::{
    classifier::{ClassificationOutcome, JustificationClassifier},
    config::ClassifierConfig,
    dataset::Dataset,
    llms::{CompletionBackend, OpenAiBackend},
};
use colorful::Colorful;
use std::time::Duration;

/// Which columns to read and write, and how long to wait after each row.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub text_column: String,
    pub label_column: String,
    pub pacing_delay: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub fast_path: usize,
    pub classified: usize,
    /// Classified rows whose answer is not one of the known categories.
    pub off_list: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: ClassificationOutcome) {
        self.rows += 1;
        match outcome {
            ClassificationOutcome::FastPath => self.fast_path += 1,
            ClassificationOutcome::Classified { on_list } => {
                self.classified += 1;
                if !on_list {
                    self.off_list += 1;
                }
            }
            ClassificationOutcome::Exhausted { .. } => self.failed += 1,
        }
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows: {}, classified: {} ({} off-list), not classified: {}, failed: {}",
            self.rows, self.classified, self.off_list, self.fast_path, self.failed
        )
    }
}

/// Classifies every row of `dataset` in order and stores the labels in
/// `config.label_column`. The dataset is only modified once all rows are done.
pub async fn classify_dataset<B: CompletionBackend>(
    classifier: &JustificationClassifier<B>,
    dataset: &mut Dataset,
    config: &DriverConfig,
) -> crate::Result<RunSummary> {
    let texts = dataset.column(&config.text_column)?;
    let total = texts.len();
    let mut labels = Vec::with_capacity(total);
    let mut summary = RunSummary::default();

    for (i, text) in texts.into_iter().enumerate() {
        let classification = classifier.classify_with_outcome(text).await;
        crate::info!("[{}/{}] {}", i + 1, total, classification.label);
        summary.record(classification.outcome);
        labels.push(classification.label);
        tokio::time::sleep(config.pacing_delay).await;
    }

    dataset.set_column(&config.label_column, &labels)?;
    Ok(summary)
}

/// Reads the input file, classifies it with an OpenAI backend built from
/// `config`, and writes the output file.
pub async fn run(config: &ClassifierConfig) -> crate::Result<RunSummary> {
    let backend = std::sync::Arc::new(OpenAiBackend::new(config.openai_config())?);
    run_with_backend(config, backend).await
}

pub async fn run_with_backend<B: CompletionBackend>(
    config: &ClassifierConfig,
    backend: std::sync::Arc<B>,
) -> crate::Result<RunSummary> {
    let mut dataset = Dataset::from_path(&config.input_path)?;
    let classifier = JustificationClassifier::new(backend)
        .with_language(config.language)
        .with_request_config(config.request.clone());

    let summary = classify_dataset(&classifier, &mut dataset, &config.driver_config()).await?;
    dataset.write_to_path(&config.output_path)?;

    crate::info!(
        "Classification finished and saved to {}. {}",
        config.output_path.display(),
        summary
    );
    println!(
        "{}",
        format!(
            "Classification finished and saved to {}",
            config.output_path.display()
        )
        .color(colorful::RGB::new(0, 139, 248))
        .bold()
    );
    Ok(summary)
}
