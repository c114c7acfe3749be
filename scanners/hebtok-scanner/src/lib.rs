pub mod rules;
pub mod scanner;
pub mod token;

// Re-export the full calling surface
pub use hebtok_protocol::{Category, CharClass};
pub use scanner::{scan, tokenize, ScanError};
pub use token::{Span, Token};
