// Whitespace tokenizer and word cleaner.
//
// A "word" is a whitespace-delimited token reduced to lowercase ASCII
// letters. Digits, punctuation and any other symbol are stripped, even when
// they sit in the middle of a token ("test-case." becomes "testcase").
// Tokens with no letters left are dropped from the word list entirely.

use std::sync::LazyLock;

use regex_lite::Regex;

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z]").expect("static pattern compiles"));

/// Split text on runs of whitespace, keeping appearance order.
///
/// The ASCII information separators U+001C..U+001F also count as
/// whitespace here, although `char::is_whitespace` excludes them.
pub fn split(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Lowercase a token and keep only the letters a–z.
///
/// Returns an empty string when nothing alphabetic remains.
pub fn clean(token: &str) -> String {
    let lower = token.to_lowercase();
    NON_LETTER.replace_all(&lower, "").trim().to_string()
}

/// The full pipeline: split, clean, and discard tokens that cleaned to empty.
pub fn words(text: &str) -> Vec<String> {
    split(text)
        .into_iter()
        .map(clean)
        .filter(|w| !w.is_empty())
        .collect()
}
