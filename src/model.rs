use std::collections::BTreeMap;

/// The seven section headings that structure every criterion in the
/// catalogue, in the order they appear in the PDF (and in the CSV output).
/// Variant order is canonical column order; `BTreeMap<FieldLabel, _>`
/// iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldLabel {
    Relevance,
    EvaluationRequirement,
    EvaluationPrinciple,
    SupportiveGuidance,
    EvaluationMethod,
    EvaluationTools,
    EuAiActReference,
}

impl FieldLabel {
    pub const ALL: [FieldLabel; 7] = [
        FieldLabel::Relevance,
        FieldLabel::EvaluationRequirement,
        FieldLabel::EvaluationPrinciple,
        FieldLabel::SupportiveGuidance,
        FieldLabel::EvaluationMethod,
        FieldLabel::EvaluationTools,
        FieldLabel::EuAiActReference,
    ];

    /// The heading exactly as printed in the PDF (and used as CSV column name).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldLabel::Relevance => "Relevance based on use case parametrization",
            FieldLabel::EvaluationRequirement => "Evaluation requirement",
            FieldLabel::EvaluationPrinciple => "Evaluation principle",
            FieldLabel::SupportiveGuidance => "Supportive guidance",
            FieldLabel::EvaluationMethod => "Evaluation method",
            FieldLabel::EvaluationTools => "Evaluation tools",
            FieldLabel::EuAiActReference => "Reference to EU AI Act",
        }
    }

    /// Exact, case-sensitive match against a trimmed line. A line that merely
    /// contains a heading is content, not a label.
    pub fn from_line(line: &str) -> Option<FieldLabel> {
        FieldLabel::ALL.iter().copied().find(|l| l.as_str() == line)
    }
}

/// One catalogued criterion: ID code, reconstructed title, and whichever of
/// the seven fields the document actually provided for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub fields: BTreeMap<FieldLabel, String>,
}

impl Criterion {
    pub fn new(id: String) -> Self {
        Criterion {
            id,
            name: String::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, label: FieldLabel) -> Option<&str> {
        self.fields.get(&label).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for label in FieldLabel::ALL {
            assert_eq!(FieldLabel::from_line(label.as_str()), Some(label));
        }
    }

    #[test]
    fn label_match_is_exact() {
        assert_eq!(FieldLabel::from_line("Evaluation method"), Some(FieldLabel::EvaluationMethod));
        assert_eq!(FieldLabel::from_line("evaluation method"), None);
        assert_eq!(FieldLabel::from_line("Evaluation method:"), None);
        assert_eq!(FieldLabel::from_line("The Evaluation method is"), None);
    }

    #[test]
    fn btreemap_iterates_in_column_order() {
        let mut c = Criterion::new("ABC-01".into());
        c.fields.insert(FieldLabel::EuAiActReference, "x".into());
        c.fields.insert(FieldLabel::Relevance, "y".into());
        let keys: Vec<FieldLabel> = c.fields.keys().copied().collect();
        assert_eq!(keys, vec![FieldLabel::Relevance, FieldLabel::EuAiActReference]);
    }
}
