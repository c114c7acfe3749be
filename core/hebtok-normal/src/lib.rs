#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::borrow::Cow;
use alloc::string::String;

/// Zero-width joiner; carries no content and is deleted outright.
const ZWJ: char = '\u{200D}';

/// Two-letter expansion for the Hebrew ligature code points the scanner
/// refuses to know about. The HEB rule matches plain letters only, so a
/// line must pass through [`undigraph`] before it is scanned.
fn expansion(c: char) -> Option<&'static str> {
    match c {
        '\u{05F0}' => Some("וו"), // ligature double-vav
        '\u{05F1}' => Some("וי"), // ligature vav-yod
        '\u{05F2}' => Some("יי"), // ligature double-yod
        '\u{FB4F}' => Some("אא"), // doubled-alef presentation form
        _ => None,
    }
}

/// Expands ligature code points to their digraphs and strips zero-width
/// joiners. Returns the input borrowed when nothing needs rewriting, which
/// is the common case for modern Hebrew text.
///
/// Idempotent: the replacement strings contain no replaceable code points.
pub fn undigraph(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| c == ZWJ || expansion(c).is_some()) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == ZWJ {
            continue;
        }
        match expansion(c) {
            Some(digraph) => out.push_str(digraph),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ligature_expansions() {
        assert_eq!(undigraph("\u{05F0}"), "וו");
        assert_eq!(undigraph("\u{05F1}"), "וי");
        assert_eq!(undigraph("\u{05F2}"), "יי");
        assert_eq!(undigraph("\u{FB4F}"), "אא");
    }

    #[test]
    fn test_zwj_deleted() {
        assert_eq!(undigraph("א\u{200D}ב"), "אב");
    }

    #[test]
    fn test_mixed_line() {
        // Yiddish-style spelling with a double-yod ligature mid-word
        assert_eq!(undigraph("א\u{05F2}ער גוט"), "אייער גוט");
    }

    #[test]
    fn test_clean_input_is_borrowed() {
        let line = "שלום world 123";
        assert!(matches!(undigraph(line), Cow::Borrowed(_)));
    }

    proptest! {
        #[test]
        fn test_idempotent(line in any::<String>()) {
            let once = undigraph(&line).into_owned();
            let twice = undigraph(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_no_ligature_survives(line in "[\u{05D0}-\u{05EA}\u{05F0}-\u{05F2}\u{FB4F}a-z0-9 ]*") {
            let normalized = undigraph(&line).into_owned();
            prop_assert!(!normalized.chars().any(|c| expansion(c).is_some()));
            prop_assert!(!normalized.contains(ZWJ));
        }
    }
}
