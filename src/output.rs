use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Criterion, FieldLabel};

/// Write the catalogue as CSV: header row, then one row per criterion.
/// Columns are ID, name, then the seven field labels in canonical order;
/// missing fields render as empty cells.
pub fn write_csv(path: &Path, criteria: &[Criterion]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    write_records(file, criteria)?;
    Ok(())
}

fn write_records<W: Write>(wtr: W, criteria: &[Criterion]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(wtr);

    let mut header = vec!["Criterion ID", "Criterion name"];
    header.extend(FieldLabel::ALL.iter().map(|l| l.as_str()));
    wtr.write_record(&header)?;

    for crit in criteria {
        let mut row = vec![crit.id.as_str(), crit.name.as_str()];
        row.extend(FieldLabel::ALL.iter().map(|&l| crit.field(l).unwrap_or("")));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Per-field presence summary over the final record sequence: how many
/// criteria carry a non-empty value for each of the seven fields.
pub struct FieldCoverage {
    pub total: usize,
    pub counts: [usize; 7],
}

impl FieldCoverage {
    pub fn from_records(criteria: &[Criterion]) -> Self {
        let mut counts = [0usize; 7];
        for (slot, &label) in counts.iter_mut().zip(FieldLabel::ALL.iter()) {
            *slot = criteria
                .iter()
                .filter(|c| c.field(label).is_some_and(|v| !v.trim().is_empty()))
                .count();
        }
        FieldCoverage {
            total: criteria.len(),
            counts,
        }
    }

    pub fn print(&self) {
        println!("Field statistics:");
        for (&count, &label) in self.counts.iter().zip(FieldLabel::ALL.iter()) {
            println!("  - {}: {}/{}", label.as_str(), count, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Criterion> {
        let mut a = Criterion::new("AB-01".into());
        a.name = "First".into();
        a.fields.insert(FieldLabel::EvaluationRequirement, "req".into());
        a.fields.insert(FieldLabel::EvaluationTools, "".into());

        let mut b = Criterion::new("AB-02".into());
        b.name = "Second".into();
        b.fields.insert(FieldLabel::EvaluationRequirement, "   ".into());

        vec![a, b]
    }

    fn rendered(criteria: &[Criterion]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, criteria).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_has_nine_fixed_columns() {
        let out = rendered(&[]);
        let header = out.lines().next().unwrap();
        assert_eq!(header.split(',').count(), 9);
        assert!(header.starts_with("Criterion ID,Criterion name,"));
        assert!(header.ends_with("Reference to EU AI Act"));
    }

    #[test]
    fn missing_fields_are_empty_cells() {
        let out = rendered(&sample());
        let mut lines = out.lines().skip(1);
        let row = lines.next().unwrap();
        // AB-01: requirement filled, tools present-but-empty, rest absent
        assert_eq!(row, "AB-01,First,,req,,,,,");
        let row = lines.next().unwrap();
        assert_eq!(row, "AB-02,Second,,   ,,,,,");
    }

    #[test]
    fn multiline_field_is_quoted() {
        let mut c = Criterion::new("AB-03".into());
        c.fields
            .insert(FieldLabel::EvaluationMethod, "line one\nline two".into());
        let out = rendered(&[c]);
        assert!(out.contains("\"line one\nline two\""));
    }

    #[test]
    fn coverage_counts_only_non_blank_values() {
        let cov = FieldCoverage::from_records(&sample());
        assert_eq!(cov.total, 2);
        // Requirement: "req" counts, whitespace-only does not.
        assert_eq!(cov.counts[1], 1);
        // Tools: present with empty string does not count.
        assert_eq!(cov.counts[5], 0);
        // Absent everywhere.
        assert_eq!(cov.counts[0], 0);
    }

    #[test]
    fn coverage_of_empty_catalogue() {
        let cov = FieldCoverage::from_records(&[]);
        assert_eq!(cov.total, 0);
        assert_eq!(cov.counts, [0; 7]);
    }
}
