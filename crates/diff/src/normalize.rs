//! Case and whitespace normalization of the comparison basis.
//!
//! Normalized text is only ever used as a key for matching lines; the
//! engine displays the original text.

use std::borrow::Cow;

use crate::options::DiffOptions;

/// Normalize a whole document.
///
/// Case folding lowercases the text. Whitespace collapsing replaces every
/// maximal whitespace run (newlines included) with one space and trims the
/// ends, so a multi-line document collapses onto a single line.
pub fn normalize<'a>(text: &'a str, options: &DiffOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);

    if options.ignore_case {
        text = Cow::Owned(text.to_lowercase());
    }

    if options.ignore_whitespace {
        text = Cow::Owned(collapse_whitespace(&text));
    }

    text
}

/// Normalize a single line, producing the key the line differ compares
pub fn normalize_line<'a>(line: &'a str, options: &DiffOptions) -> Cow<'a, str> {
    // A line holds no line breaks, so the document transform is the line transform
    normalize(line, options)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
