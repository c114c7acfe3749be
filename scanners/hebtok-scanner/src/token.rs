use hebtok_protocol::Category;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte range into the normalized line a token was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One scanned token: the winning rule's category and the exact substring
/// it consumed. Tokens arrive in left-to-right input order; concatenating
/// their texts together with the skipped whitespace reproduces the line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Token {
    pub category: Category,
    pub text: String,
    pub span: Span,
}
