use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Criterion, FieldLabel};

// Criterion code, alone on its line: "ABC-01".
static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{2,}-\d{2}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Before the first criterion code; everything here is discarded.
    SeekingId,
    /// Accumulating the (possibly wrapped) criterion title.
    ReadingName,
    /// Accumulating content under the most recent field heading.
    ReadingField,
}

#[derive(Debug)]
struct Assembler {
    phase: Phase,
    current: Option<Criterion>,
    active: Option<FieldLabel>,
    done: Vec<Criterion>,
}

/// Single forward pass over the filtered line stream. A criterion-code line
/// always finalizes the in-progress record and opens the next one; an exact
/// field heading switches the active field even when the line would also read
/// as a continuation of the previous one.
pub fn assemble(lines: &[String]) -> Vec<Criterion> {
    let mut asm = Assembler {
        phase: Phase::SeekingId,
        current: None,
        active: None,
        done: Vec::new(),
    };
    for line in lines {
        asm.step(line);
    }
    asm.flush();
    asm.done
}

impl Assembler {
    fn step(&mut self, raw: &str) {
        let trimmed = raw.trim();

        if ID_RE.is_match(trimmed) {
            self.flush();
            self.current = Some(Criterion::new(trimmed.to_string()));
            self.active = None;
            self.phase = Phase::ReadingName;
            return;
        }

        match self.phase {
            Phase::SeekingId => {}
            Phase::ReadingName => {
                if let Some(label) = FieldLabel::from_line(trimmed) {
                    self.open_field(label);
                } else if let Some(current) = self.current.as_mut() {
                    join_wrapped(&mut current.name, raw, Separator::Space);
                }
            }
            Phase::ReadingField => {
                if let Some(label) = FieldLabel::from_line(trimmed) {
                    self.open_field(label);
                } else if let (Some(current), Some(label)) = (self.current.as_mut(), self.active) {
                    let acc = current.fields.entry(label).or_default();
                    join_wrapped(acc, raw, Separator::Line);
                } else {
                    debug!(line = raw, "content line with no active field, dropped");
                }
            }
        }
    }

    fn open_field(&mut self, label: FieldLabel) {
        if let Some(current) = self.current.as_mut() {
            current.fields.insert(label, String::new());
        }
        self.active = Some(label);
        self.phase = Phase::ReadingField;
    }

    fn flush(&mut self) {
        if let Some(record) = self.current.take() {
            self.done.push(record);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Separator {
    /// Names join on a single space.
    Space,
    /// Field content keeps intentional line structure (list items etc.).
    Line,
}

/// Merge one physically wrapped line into accumulated text. A trailing hyphen
/// is a mid-word page-layout break; a lowercase start right after a letter is
/// a wrap whose space the extractor swallowed. Anything else is a genuine new
/// fragment and gets the separator. The `Line` separator keeps the raw line,
/// so indentation inside field content survives.
fn join_wrapped(acc: &mut String, raw: &str, sep: Separator) {
    let frag = raw.trim();
    if acc.ends_with('-') {
        acc.pop();
        acc.push_str(frag);
    } else if ends_in_letter(acc) && starts_lowercase(frag) {
        acc.push_str(frag);
    } else {
        match sep {
            Separator::Space => {
                if !acc.is_empty() {
                    acc.push(' ');
                }
                acc.push_str(frag);
            }
            Separator::Line => {
                if !acc.is_empty() {
                    acc.push('\n');
                }
                acc.push_str(raw);
            }
        }
    }
}

fn ends_in_letter(s: &str) -> bool {
    s.chars().last().is_some_and(|c| c.is_alphabetic())
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_lowercase())
}
