use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Closed set of token classes produced by the scanner.
///
/// The order here mirrors the rule priority of the pattern table, but the
/// tag itself carries no priority: overlaps are resolved at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Category {
    Url = 0,
    Heb = 1,
    Eng = 2,
    Num = 3,
    Punct = 4,
    Junk = 5,
}

impl Category {
    /// Stable uppercase name, used for display and line-oriented output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Url => "URL",
            Category::Heb => "HEB",
            Category::Eng => "ENG",
            Category::Num => "NUM",
            Category::Punct => "PUNCT",
            Category::Junk => "JUNK",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
