//! Recognizers for the constructs that can start at a `<`.
//!
//! The recognizers overlap: `</a>` and `<!-- -->` also match the catch-all
//! `<...>` of [`Lexeme::Other`]. So they are always tried in the fixed
//! order start tag, end tag, comment, other.

use crate::base::{count_while, find_byte, find_str, is_html_whitespace, skip_whitespace};
use crate::token::{scan_attributes, QuoteMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'i> {
    StartTag {
        len: usize,
        raw_name: &'i str,
        raw_attributes: &'i str,
        self_closing: bool,
        quote_mode: QuoteMode,
    },
    EndTag {
        len: usize,
        raw_name: &'i str,
    },
    Comment {
        len: usize,
        text: &'i str,
    },
    Other {
        len: usize,
        content: &'i str,
    },
    NoMatch,
}

#[inline]
fn is_tag_name_char(ch: u8) -> bool {
    !is_html_whitespace(ch) && !matches!(ch, b'=' | b'/' | b'!' | b'>')
}

/// Classifies the construct at the beginning of `input`.
pub fn next_lexeme(input: &str) -> Lexeme<'_> {
    if !input.starts_with('<') {
        return Lexeme::NoMatch;
    }

    start_tag(input)
        .or_else(|| end_tag(input))
        .or_else(|| comment(input))
        .or_else(|| other(input))
        .unwrap_or(Lexeme::NoMatch)
}

// <name (\s+attr(\s*=\s*value)?)* \s* /? >
fn start_tag(input: &str) -> Option<Lexeme<'_>> {
    let bytes = input.as_bytes();
    let name_len = count_while(&bytes[1..], is_tag_name_char);

    if name_len == 0 {
        return None;
    }

    let name_end = 1 + name_len;

    // NOTE: backslashes in quoted values are read as escapes first and as
    // ordinary characters if that doesn't leave a well-formed tag.
    [QuoteMode::Escaped, QuoteMode::Literal]
        .into_iter()
        .find_map(|quote_mode| {
            let attrs_end = scan_attributes(bytes, name_end, quote_mode);
            let mut pos = skip_whitespace(bytes, attrs_end);
            let self_closing = bytes.get(pos) == Some(&b'/');

            if self_closing {
                pos += 1;
            }

            (bytes.get(pos) == Some(&b'>')).then(|| Lexeme::StartTag {
                len: pos + 1,
                raw_name: &input[1..name_end],
                raw_attributes: &input[name_end..attrs_end],
                self_closing,
                quote_mode,
            })
        })
}

// </name[^>]*>
fn end_tag(input: &str) -> Option<Lexeme<'_>> {
    if !input.starts_with("</") {
        return None;
    }

    let name_len = count_while(&input.as_bytes()[2..], |ch| {
        !is_html_whitespace(ch) && ch != b'>'
    });

    if name_len == 0 {
        return None;
    }

    let name_end = 2 + name_len;
    let close = name_end + find_byte(b'>', &input[name_end..])?;

    Some(Lexeme::EndTag {
        len: close + 1,
        raw_name: &input[2..name_end],
    })
}

// <!--text-->
fn comment(input: &str) -> Option<Lexeme<'_>> {
    if !input.starts_with("<!--") {
        return None;
    }

    let text_end = 4 + find_str("-->", &input[4..])?;

    Some(Lexeme::Comment {
        len: text_end + 3,
        text: &input[4..text_end],
    })
}

// <content>
fn other(input: &str) -> Option<Lexeme<'_>> {
    let content_end = 1 + find_byte(b'>', &input[1..])?;

    Some(Lexeme::Other {
        len: content_end + 1,
        content: &input[1..content_end],
    })
}
