use hebtok_protocol::{Category, CharClass};
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{one_of, satisfy};
use nom::combinator::recognize;
use nom::error::{Error, ErrorKind};
use nom::sequence::{pair, tuple};
use nom::{Err, IResult};

/// One lexical rule: matches a non-empty prefix of the remaining input or
/// fails. Rules never backtrack across each other; priority lives in the
/// table order, not in the rules themselves.
pub type Rule = fn(&str) -> IResult<&str, &str>;

/// The pattern table. Rules are tried top to bottom at every cursor
/// position and the first match wins, even when a later rule could have
/// matched a longer span. The whitespace entry consumes without emitting.
///
/// The order is part of the contract: URL runs before the word rules so a
/// scheme prefix is not eaten as a Latin word, the word rules run before
/// NUM so digits inside a word attach to the word, and JUNK is last as the
/// guaranteed-progress fallback.
pub const RULES: [(Rule, Option<Category>); 10] = [
    (whitespace, None),
    (url, Some(Category::Url)),
    (hebrew_word, Some(Category::Heb)),
    (latin_word, Some(Category::Eng)),
    (numeric, Some(Category::Num)),
    (opening_punct, Some(Category::Punct)),
    (closing_punct, Some(Category::Punct)),
    (eos_punct, Some(Category::Punct)),
    (internal_punct, Some(Category::Punct)),
    (junk, Some(Category::Junk)),
];

/// Chars a Hebrew word may start on: letters or attached marks.
fn is_hebrew_start(c: char) -> bool {
    CharClass::of(c).intersects(CharClass::HEBREW_LETTER | CharClass::HEBREW_MARK)
}

/// Chars that continue a Hebrew word on their own. Digits and the two
/// quote marks count, which is why a trailing geresh stays inside the
/// token (ג' for loanword phonemes, ה' as an abbreviation).
fn is_hebrew_word_char(c: char) -> bool {
    c == '\''
        || c == '`'
        || CharClass::of(c).intersects(
            CharClass::HEBREW_LETTER | CharClass::HEBREW_MARK | CharClass::DIGIT,
        )
}

/// Internal separators. Consumed only together with a following
/// word-character; a trailing one is left for the punctuation rules.
fn is_hebrew_separator(c: char) -> bool {
    matches!(c, '.' | '\'' | '`' | '"' | '-' | '/' | '\\')
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

/// Lowercase scheme, `://`, then everything up to the next whitespace.
fn url(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        take_while1(|c: char| c.is_ascii_lowercase()),
        tag("://"),
        take_while1(|c: char| !c.is_whitespace()),
    )))(input)
}

/// Greedy Hebrew word scan. Grows one word-character at a time, and
/// crosses an internal separator only when another word-character follows
/// it, so `ב-23` holds together while the dash in `יום- ` is left out.
fn hebrew_word(input: &str) -> IResult<&str, &str> {
    let mut len = match input.chars().next() {
        Some(c) if is_hebrew_start(c) => c.len_utf8(),
        _ => return Err(Err::Error(Error::new(input, ErrorKind::Char))),
    };

    loop {
        let mut rest = input[len..].chars();
        match rest.next() {
            Some(c) if is_hebrew_word_char(c) => len += c.len_utf8(),
            Some(sep) if is_hebrew_separator(sep) => match rest.next() {
                Some(c) if is_hebrew_word_char(c) => len += sep.len_utf8() + c.len_utf8(),
                _ => break,
            },
            _ => break,
        }
    }

    Ok((&input[len..], &input[..len]))
}

/// Latin word: one letter, then letters/digits/apostrophes/dots. Trailing
/// dots attach (`U.S.A.` is one token); abbreviation-versus-sentence-end
/// is deliberately not disambiguated for Latin text.
fn latin_word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '\'' || c == '.'),
    ))(input)
}

/// Numeric expression: optional sign, then a run over digits and the
/// internal separators `. , / - :` that both starts and ends on a digit,
/// then an optional `%`. Dates, times, decimals and ratios all land here;
/// a trailing separator is not consumed.
fn numeric(input: &str) -> IResult<&str, &str> {
    let sign = match input.chars().next() {
        Some('+') | Some('-') => 1,
        _ => 0,
    };
    let body = &input[sign..];
    if !body.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Err::Error(Error::new(input, ErrorKind::Digit)));
    }

    let run = body
        .find(|c: char| !matches!(c, '0'..='9' | '.' | ',' | '/' | '-' | ':'))
        .unwrap_or(body.len());
    let run = match body[..run].rfind(|c: char| c.is_ascii_digit()) {
        Some(last_digit) => last_digit + 1,
        None => return Err(Err::Error(Error::new(input, ErrorKind::Digit))),
    };

    let mut len = sign + run;
    if input[len..].starts_with('%') {
        len += 1;
    }
    Ok((&input[len..], &input[..len]))
}

fn opening_punct(input: &str) -> IResult<&str, &str> {
    recognize(one_of("[('`\"{"))(input)
}

fn closing_punct(input: &str) -> IResult<&str, &str> {
    recognize(one_of("])'`\"}"))(input)
}

/// Maximal run of end-of-sentence punctuation.
fn eos_punct(input: &str) -> IResult<&str, &str> {
    take_while1(|c| matches!(c, '!' | '?' | '.'))(input)
}

fn internal_punct(input: &str) -> IResult<&str, &str> {
    recognize(one_of(",;:-&"))(input)
}

/// Catch-all: a maximal run of chars outside every covered class. Such a
/// run can only START where every other rule failed, but once started it
/// also swallows whitespace, quotes, `& % / \ +` and anything else the
/// covered set does not claim.
fn junk(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| CharClass::of(c).is_empty())(input)
}
