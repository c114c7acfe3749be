use bitflags::bitflags;

bitflags! {
    /// Character classes the pattern table is written against.
    ///
    /// A char maps to at most one flag; the bitflags form exists so rule
    /// predicates can test unions (`HEBREW_LETTER | HEBREW_MARK`) in one
    /// intersection check.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CharClass: u8 {
        /// Hebrew alphabet block, א (U+05D0) through ת (U+05EA).
        const HEBREW_LETTER = 1;
        /// Vowel points and cantillation, U+0591 through U+05C4. These
        /// attach to letters without breaking word continuity.
        const HEBREW_MARK = 2;
        /// ASCII Latin letters.
        const LATIN = 4;
        /// ASCII digits.
        const DIGIT = 8;
        /// The punctuation the junk rule treats as covered:
        /// `! ? . , : ; - ( ) [ ] { }`. Quotes, backtick, `& % / \ +` are
        /// matched by punctuation rules too, but stay OUTSIDE this set,
        /// so a junk run swallows them mid-run.
        const COVERED_PUNCT = 16;
    }
}

impl CharClass {
    /// Classifies one char. Returns `empty()` for anything the table has
    /// no specific knowledge of (exotic symbols, emoji, whitespace).
    pub fn of(c: char) -> CharClass {
        match c {
            '\u{05D0}'..='\u{05EA}' => CharClass::HEBREW_LETTER,
            '\u{0591}'..='\u{05C4}' => CharClass::HEBREW_MARK,
            'a'..='z' | 'A'..='Z' => CharClass::LATIN,
            '0'..='9' => CharClass::DIGIT,
            '!' | '?' | '.' | ',' | ':' | ';' | '-' | '(' | ')' | '[' | ']' | '{' | '}' => {
                CharClass::COVERED_PUNCT
            }
            _ => CharClass::empty(),
        }
    }
}
