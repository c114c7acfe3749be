use crate::rules::RULES;
use crate::token::{Span, Token};
use thiserror::Error;

/// The single failure mode of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No rule consumed anything at the cursor. The junk fallback matches
    /// any char outside the covered classes, so reaching this means the
    /// pattern table itself is broken, not the input.
    #[error("no rule matched at byte {position} near {snippet:?}")]
    UnmatchedInput { position: usize, snippet: String },
}

impl ScanError {
    fn unmatched(line: &str, position: usize) -> Self {
        ScanError::UnmatchedInput {
            position,
            snippet: line[position..].chars().take(8).collect(),
        }
    }
}

/// Runs the pattern table over an already-normalized line.
///
/// At each cursor position the table rules are tried in order; the first
/// rule matching a non-empty prefix wins and the cursor advances by its
/// length. Whitespace advances without emitting. Token spans index the
/// input given here.
pub fn scan(line: &str) -> Result<Vec<Token>, ScanError> {
    let mut tokens = Vec::new();
    let mut input = line;

    while !input.is_empty() {
        let position = line.len() - input.len();
        let mut matched_len = 0;

        for (rule, category) in RULES.iter() {
            let Ok((rest, matched)) = rule(input) else {
                continue;
            };
            // An empty match cannot advance the cursor; treat it as a miss
            if matched.is_empty() {
                continue;
            }
            if let Some(category) = category {
                tokens.push(Token {
                    category: *category,
                    text: matched.to_string(),
                    span: Span::new(position, position + matched.len()),
                });
            }
            matched_len = matched.len();
            input = rest;
            break;
        }

        if matched_len == 0 {
            return Err(ScanError::unmatched(line, position));
        }
    }

    // Post-condition of the contract: the whole line was consumed
    if !input.is_empty() {
        return Err(ScanError::unmatched(line, line.len() - input.len()));
    }

    Ok(tokens)
}

/// Primary entry point: normalizes the line (digraph expansion, zero-width
/// joiner removal), then scans it. Spans index the normalized text, which
/// differs from the raw line only when normalization rewrote something.
pub fn tokenize(line: &str) -> Result<Vec<Token>, ScanError> {
    let normalized = hebtok_normal::undigraph(line);
    scan(&normalized)
}
