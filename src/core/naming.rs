//! Name casing transforms for enum members.
//!
//! Member names are written in capitalized-word form (`FlexStart`). The two
//! rendered views are derived on demand and never stored:
//!
//! - upper snake (`FLEX_START`), used for constant names
//! - lower hyphen (`flex-start`), the canonical external name used by
//!   stringify and parse

/// Split a name into segments at lower-to-upper transitions.
///
/// A segment starts at character `i >= 1` when that character is upper-case
/// and the one before it is not. Acronyms such as `LTR` therefore stay in a
/// single segment. Digits and underscores never start a segment.
pub fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev_upper = false;

    for (i, (offset, c)) in name.char_indices().enumerate() {
        let upper = c.is_uppercase();
        if i != 0 && upper && !prev_upper {
            words.push(&name[start..offset]);
            start = offset;
        }
        prev_upper = upper;
    }

    if start < name.len() {
        words.push(&name[start..]);
    }

    words
}

/// Render a name as `UPPER_SNAKE`.
pub fn to_upper_snake(name: &str) -> String {
    join_words(name, '_', |c, out| out.extend(c.to_uppercase()))
}

/// Render a name as `lower-hyphen`, the canonical external name.
pub fn to_lower_hyphen(name: &str) -> String {
    join_words(name, '-', |c, out| out.extend(c.to_lowercase()))
}

fn join_words(name: &str, delimiter: char, transform: impl Fn(char, &mut String)) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, word) in split_words(name).into_iter().enumerate() {
        if i != 0 {
            out.push(delimiter);
        }
        for c in word.chars() {
            transform(c, &mut out);
        }
    }
    out
}
