mod category;

pub use category::Category;

/// Language of the prompt and of every label written to the dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    /// Label used for empty or placeholder text, which is never sent to the model.
    pub fn not_classified_label(&self) -> &'static str {
        match self {
            Language::English => "Not Classified",
            Language::Portuguese => "Não classificado",
        }
    }

    /// Label written when every attempt failed.
    pub fn exhausted_label(&self, attempts: u8) -> String {
        match self {
            Language::English => format!("Error after {attempts} attempts"),
            Language::Portuguese => format!("Erro após {attempts} tentativas"),
        }
    }

    /// Builds the one-shot classification prompt with `text` appended at the end.
    pub fn classification_prompt(&self, text: &str) -> String {
        let c = |category: Category| category.label(*self);
        match self {
            Language::English => indoc::formatdoc! {"
                Analyze the overtime justification below.

                Classify it into ONE of the following categories:

                Categories:
                1. {downtime}
                2. {maintenance}
                3. {substitution}
                4. {external}
                5. {not_classified}

                Instructions:
                - Answer with the category name only (e.g. \"{downtime}\").
                - Do NOT explain the reason.
                - If the text mentions several aspects, classify by the PRINCIPAL one.

                Examples:
                1. ACOMPANHAMENTO DO FORNO 2 --> {maintenance}
                2. PARADA DO FORNO 2 --> {downtime}
                3. SUBSTITUIÇÃO DE AUSÊNCIA --> {substitution}
                4. ELEIÇÕES MUNICIPAIS 2024 --> {external}
                5. ORGANIZAÇÃO DO GALPÃO --> {external}

                Now classify:

                {text}",
                downtime = c(Category::MachineDowntime),
                maintenance = c(Category::MachineMaintenance),
                substitution = c(Category::EmployeeSubstitution),
                external = c(Category::OtherExternalEvents),
                not_classified = c(Category::NotClassified),
                text = text,
            },
            Language::Portuguese => indoc::formatdoc! {"
                Analise a justificativa de hora extra abaixo.

                Classifique em UMA das categorias abaixo:

                Categorias:
                1. {downtime}
                2. {maintenance}
                3. {substitution}
                4. {external}
                5. {not_classified}

                Instruções:
                - Cite apenas a categoria (ex: \"{downtime}\").
                - NÃO explique o motivo.
                - Se o texto mencionar vários aspectos, classifique pelo PRINCIPAL.

                Exemplos:
                1. ACOMPANHAMENTO DO FORNO 2 --> {maintenance}
                2. PARADA DO FORNO 2 --> {downtime}
                3. SUBSTITUIÇÃO DE AUSÊNCIA --> {substitution}
                4. ELEIÇÕES MUNICIPAIS 2024 --> {external}
                5. ORGANIZAÇÃO DO GALPÃO --> {external}

                Agora classifique:

                {text}",
                downtime = c(Category::MachineDowntime),
                maintenance = c(Category::MachineMaintenance),
                substitution = c(Category::EmployeeSubstitution),
                external = c(Category::OtherExternalEvents),
                not_classified = c(Category::NotClassified),
                text = text,
            },
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "pt-br" | "pt_br" | "portuguese" => Ok(Language::Portuguese),
            other => Err(format!("unknown language '{other}', expected 'en' or 'pt'")),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Portuguese => write!(f, "pt"),
        }
    }
}
