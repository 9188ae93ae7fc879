use super::Language;

/// The closed set of labels the model is asked to choose from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    MachineDowntime,
    MachineMaintenance,
    EmployeeSubstitution,
    OtherExternalEvents,
    NotClassified,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MachineDowntime,
        Category::MachineMaintenance,
        Category::EmployeeSubstitution,
        Category::OtherExternalEvents,
        Category::NotClassified,
    ];

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::MachineDowntime, Language::English) => "Machine Downtime",
            (Category::MachineMaintenance, Language::English) => {
                "Machine Maintenance/Inspection/Test"
            }
            (Category::EmployeeSubstitution, Language::English) => "Employee Substitution",
            (Category::OtherExternalEvents, Language::English) => "Other External Events",
            (Category::NotClassified, Language::English) => "Not Classified",
            (Category::MachineDowntime, Language::Portuguese) => "Parada de Máquina",
            (Category::MachineMaintenance, Language::Portuguese) => {
                "Manutenção/Inspeção/Teste de Máquina"
            }
            (Category::EmployeeSubstitution, Language::Portuguese) => {
                "Substituição de Colaborador"
            }
            (Category::OtherExternalEvents, Language::Portuguese) => "Outros Eventos Externos",
            (Category::NotClassified, Language::Portuguese) => "Não Classificado",
        }
    }

    /// Matches a model answer against the label set, ignoring case and surrounding
    /// quotes or a trailing period.
    pub fn from_label(label: &str, language: Language) -> Option<Category> {
        let normalized = label
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim_end_matches('.')
            .trim()
            .to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label(language).to_lowercase() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_per_language() {
        for language in [Language::English, Language::Portuguese] {
            for category in Category::ALL {
                assert_eq!(
                    Category::from_label(category.label(language), language),
                    Some(category)
                );
            }
        }
    }

    #[test]
    fn from_label_is_lenient_on_decoration_only() {
        assert_eq!(
            Category::from_label("\"machine downtime.\"", Language::English),
            Some(Category::MachineDowntime)
        );
        assert_eq!(
            Category::from_label("PARADA DE MÁQUINA", Language::Portuguese),
            Some(Category::MachineDowntime)
        );
        assert_eq!(
            Category::from_label("Machine Downtime because the oven stopped", Language::English),
            None
        );
        assert_eq!(
            Category::from_label("Parada de Máquina", Language::English),
            None
        );
    }
}
