pub mod assembler;
pub mod filter;

use crate::model::Criterion;

/// Two-pass pipeline: per-page text → filtered content lines → criteria.
pub fn parse_pages(pages: &[String]) -> Vec<Criterion> {
    let lines = filter::content_lines(pages);
    assembler::assemble(&lines)
}
