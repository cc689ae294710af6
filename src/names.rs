//! Filename related helpers
//!
//! Turns raw media filenames into something readable before they are used
//! for lookups and renaming.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Removes `.` and `_` between words in a file name
///
/// Dots within decimal numbers are left intact, a separator preceded by a
/// digit is kept unless it starts or ends the name.
///
/// # Examples
/// ```
/// use unameit::names::clean_name;
///
/// assert_eq!(clean_name("How.I.Met.Your.Mother"), "How I Met Your Mother");
/// assert_eq!(clean_name("foo_bar_1.2"), "foo bar 1.2");
/// ```
pub fn clean_name(name: &str) -> String {
    static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[._]").expect("Failed to compile regex pattern for clean_name")
    });

    let mut new_name = String::with_capacity(name.len());
    let mut last = 0;
    for m in SEPARATOR_RE.find_iter(name) {
        new_name.push_str(&name[last..m.start()]);
        let after_digit = name[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit());

        if m.start() == 0 || m.end() == name.len() || !after_digit {
            new_name.push(' ');
        } else {
            new_name.push_str(m.as_str());
        }
        last = m.end();
    }
    new_name.push_str(&name[last..]);

    if new_name != name {
        debug!("Changed string {name} => {new_name}");
    }
    new_name.trim().to_string()
}

/// Capitalizes every word in `s`
///
/// Words in all UPPERCASE are left unchanged, apostrophes inside a word
/// (`they're`) do not start a new word.
///
/// # Examples
/// ```
/// use unameit::names::capitalize;
///
/// assert_eq!(capitalize("born in the USA"), "Born In The USA");
/// ```
pub fn capitalize(s: &str) -> String {
    static WORD_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[A-Za-z]+('[A-Za-z]+)?").expect("Failed to compile regex pattern for capitalize")
    });

    WORD_RE
        .replace_all(s, |caps: &Captures| {
            let word = &caps[0];
            if is_upper(word) {
                return word.to_string();
            }

            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
                None => String::new(),
            }
        })
        .to_string()
}

fn is_upper(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_dots_and_underscores() {
        for name in [
            "How.I.Met.Your.Mother",
            "How_I_Met_Your_Mother",
            "How.I.Met.Your.Mother_",
            "How.I.Met.Your.Mother.",
            "_How.I.Met.Your.Mother",
            ".How.I.Met.Your.Mother_",
            "How_I.Met_Your.Mother",
        ] {
            assert_eq!(clean_name(name), "How I Met Your Mother", "input: {name}");
        }
    }

    #[test]
    fn test_clean_name_decimal_numbers() {
        assert_eq!(clean_name("foo.bar.1.2"), "foo bar 1.2");
        assert_eq!(clean_name("foo_bar_1.2"), "foo bar 1.2");
    }

    #[test]
    fn test_clean_name_trailing_separator_after_digit() {
        assert_eq!(clean_name("Season.2."), "Season 2");
    }

    #[test]
    fn test_clean_name_separators_around_digits() {
        assert_eq!(clean_name("_1_2_"), "1_2");
        assert_eq!(clean_name(".1.2."), "1.2");
        assert_eq!(clean_name("Show_2_Part.1"), "Show 2_Part 1");
    }

    #[test]
    fn test_clean_name_unchanged() {
        assert_eq!(clean_name("Plain Name"), "Plain Name");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("they're bill's friends"), "They're Bill's Friends");
        assert_eq!(capitalize("hello world. My name is"), "Hello World. My Name Is");
        assert_eq!(capitalize("Hello"), "Hello");
    }

    #[test]
    fn test_capitalize_all_capitals() {
        assert_eq!(capitalize("Born in the USA"), "Born In The USA");
        assert_eq!(capitalize("USA-EU cooperation is OK"), "USA-EU Cooperation Is OK");
    }

    #[test]
    fn test_capitalize_mixed_case() {
        assert_eq!(capitalize("mIxEd cAsE"), "Mixed Case");
        assert_eq!(capitalize("s01e02 the pilot"), "S01E02 The Pilot");
    }
}
