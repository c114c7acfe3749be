#![no_std] // Keeps the type layer embeddable; the scan loop lives elsewhere

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod charclass;

// Re-export core types for convenience
pub use category::Category;
pub use charclass::CharClass;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_layout() {
        // The tag is a closed u8 enum; callers may pack it freely
        assert_eq!(core::mem::size_of::<Category>(), 1);
        assert_eq!(core::mem::size_of::<Option<Category>>(), 1);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Url.as_str(), "URL");
        assert_eq!(Category::Heb.as_str(), "HEB");
        assert_eq!(Category::Eng.as_str(), "ENG");
        assert_eq!(Category::Num.as_str(), "NUM");
        assert_eq!(Category::Punct.as_str(), "PUNCT");
        assert_eq!(Category::Junk.as_str(), "JUNK");
    }

    #[test]
    fn test_hebrew_classification() {
        assert_eq!(CharClass::of('א'), CharClass::HEBREW_LETTER);
        assert_eq!(CharClass::of('ת'), CharClass::HEBREW_LETTER);
        // Vowel point (hiriq) and cantillation (etnahta) are both marks
        assert_eq!(CharClass::of('\u{05B4}'), CharClass::HEBREW_MARK);
        assert_eq!(CharClass::of('\u{0591}'), CharClass::HEBREW_MARK);
        // Ligatures are NOT letters; they must be expanded before scanning
        assert_eq!(CharClass::of('\u{05F2}'), CharClass::empty());
    }

    #[test]
    fn test_latin_digit_classification() {
        assert_eq!(CharClass::of('a'), CharClass::LATIN);
        assert_eq!(CharClass::of('Z'), CharClass::LATIN);
        assert_eq!(CharClass::of('7'), CharClass::DIGIT);
        // Non-ASCII letters fall outside every class
        assert_eq!(CharClass::of('é'), CharClass::empty());
    }

    #[test]
    fn test_covered_punct_set() {
        for c in "!?.,:;-()[]{}".chars() {
            assert_eq!(CharClass::of(c), CharClass::COVERED_PUNCT, "{c:?}");
        }
        // Quotes, ampersand, percent and slashes are handled by rules but
        // are NOT in the covered set (a junk run may swallow them)
        for c in "'\"`&%/\\+ ".chars() {
            assert_eq!(CharClass::of(c), CharClass::empty(), "{c:?}");
        }
    }
}
