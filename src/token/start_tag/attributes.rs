use crate::base::{count_while, is_html_whitespace, skip_whitespace};
use hashbrown::hash_map::{Entry, HashMap};
use memchr::memchr;
use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::ops::{Deref, Range};

/// A single attribute of a start tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Attribute<'i> {
    name: String,
    raw_name: &'i str,
    value: Option<&'i str>,
}

impl<'i> Attribute<'i> {
    #[inline]
    fn new(raw_name: &'i str, value: Option<&'i str>) -> Self {
        Attribute {
            name: raw_name.to_lowercase(),
            raw_name,
            value,
        }
    }

    /// Lower-cased attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute name as written in the input.
    #[inline]
    pub fn raw_name(&self) -> &'i str {
        self.raw_name
    }

    /// Attribute value with the quotes stripped, or `None` if the attribute had no `=`.
    ///
    /// Values are verbatim: character references and backslash escapes are left as is.
    #[inline]
    pub fn value(&self) -> Option<&'i str> {
        self.value
    }

    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl Debug for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// How a backslash inside a quoted attribute value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteMode {
    /// A backslash escapes the next byte, so `\"` doesn't close a `"` quoted value.
    /// If no escaped closing quote exists, the first quote closes the value.
    Escaped,
    /// A backslash is an ordinary character.
    Literal,
}

#[inline]
fn is_attr_name_char(ch: u8) -> bool {
    !is_html_whitespace(ch) && !matches!(ch, b'=' | b'/' | b'>')
}

fn find_escaped_quote(bytes: &[u8], quote: u8) -> Option<usize> {
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            ch if ch == quote => return Some(i),
            _ => i += 1,
        }
    }

    None
}

/// Scans an attribute value starting at `pos`.
///
/// A quote without a closing counterpart starts an unquoted value instead. Returns the
/// value range (without quotes) and the position right after the value.
fn scan_attr_value(bytes: &[u8], pos: usize, mode: QuoteMode) -> Option<(Range<usize>, usize)> {
    let first = *bytes.get(pos)?;

    if first == b'"' || first == b'\'' {
        let body = &bytes[pos + 1..];

        let close = match mode {
            QuoteMode::Escaped => find_escaped_quote(body, first).or_else(|| memchr(first, body)),
            QuoteMode::Literal => memchr(first, body),
        };

        if let Some(close) = close {
            let close = pos + 1 + close;

            return Some((pos + 1..close, close + 1));
        }
    }

    let len = count_while(&bytes[pos..], |ch| !is_html_whitespace(ch) && ch != b'>');

    if len == 0 {
        None
    } else {
        Some((pos..pos + len, pos + len))
    }
}

/// Scans an optional `= value` part following an attribute name at `pos`.
///
/// Returns `None` if there is no `=`. Otherwise returns the value range (empty if
/// the `=` isn't followed by a value) and the position after it.
fn scan_attr_assignment(
    bytes: &[u8],
    pos: usize,
    mode: QuoteMode,
) -> Option<(Range<usize>, usize)> {
    let eq_pos = skip_whitespace(bytes, pos);

    if bytes.get(eq_pos) != Some(&b'=') {
        return None;
    }

    let value_pos = skip_whitespace(bytes, eq_pos + 1);

    Some(scan_attr_value(bytes, value_pos, mode).unwrap_or((value_pos..value_pos, value_pos)))
}

/// Skips attribute-like tokens (`whitespace+ name (= value)?`) starting at `pos` and
/// returns the position after the last one.
pub(crate) fn scan_attributes(bytes: &[u8], mut pos: usize, mode: QuoteMode) -> usize {
    loop {
        let attr_start = skip_whitespace(bytes, pos);
        let name_len = count_while(&bytes[attr_start..], is_attr_name_char);

        if attr_start == pos || name_len == 0 {
            return pos;
        }

        pos = attr_start + name_len;

        if let Some((_, value_end)) = scan_attr_assignment(bytes, pos, mode) {
            pos = value_end;
        }
    }
}

/// Attributes of a start tag, keyed by lower-cased name.
///
/// Iteration yields attributes in the order their names first appeared. If a name
/// is repeated, the last occurrence's value wins.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Attributes<'i> {
    items: Vec<Attribute<'i>>,
    index: HashMap<String, usize>,
}

impl<'i> Attributes<'i> {
    /// Decomposes the attribute span of a start tag, i.e. everything between the tag
    /// name and the closing `/` or `>`.
    ///
    /// Backslashes in quoted values escape the following quote, unless that leaves the
    /// span with something other than whitespace-separated attributes. Then they are
    /// read as ordinary characters, so `href="C:\" title="t"` has two attributes.
    pub fn parse(span: &'i str) -> Self {
        let bytes = span.as_bytes();
        let covers_span =
            |mode| skip_whitespace(bytes, scan_attributes(bytes, 0, mode)) == bytes.len();

        let mode = if !covers_span(QuoteMode::Escaped) && covers_span(QuoteMode::Literal) {
            QuoteMode::Literal
        } else {
            QuoteMode::Escaped
        };

        Attributes::parse_with_mode(span, mode)
    }

    pub(crate) fn parse_with_mode(span: &'i str, mode: QuoteMode) -> Self {
        let bytes = span.as_bytes();
        let mut attributes = Attributes::default();
        let mut pos = 0;

        loop {
            pos = skip_whitespace(bytes, pos);

            if pos >= bytes.len() {
                break;
            }

            let name_len = count_while(&bytes[pos..], is_attr_name_char);

            if name_len == 0 {
                // NOTE: stray `=`, `/` or `>`, all of them are single byte.
                pos += 1;
                continue;
            }

            let raw_name = &span[pos..pos + name_len];

            pos += name_len;

            let value = match scan_attr_assignment(bytes, pos, mode) {
                Some((value_range, value_end)) => {
                    pos = value_end;
                    Some(&span[value_range])
                }
                None => None,
            };

            attributes.insert(Attribute::new(raw_name, value));
        }

        attributes
    }

    fn insert(&mut self, attribute: Attribute<'i>) {
        match self.index.entry(attribute.name.clone()) {
            Entry::Occupied(entry) => self.items[*entry.get()] = attribute,
            Entry::Vacant(entry) => {
                entry.insert(self.items.len());
                self.items.push(attribute);
            }
        }
    }

    /// Looks up an attribute by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Attribute<'i>> {
        let name = if name.bytes().any(|ch| !ch.is_ascii() || ch.is_ascii_uppercase()) {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };

        self.index.get(&*name).map(|&idx| &self.items[idx])
    }

    /// Value of the attribute, `None` if it is either missing or has no `=`.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&'i str> {
        self.get(name).and_then(Attribute::value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<'i> Deref for Attributes<'i> {
    type Target = [Attribute<'i>];

    #[inline]
    fn deref(&self) -> &[Attribute<'i>] {
        &self.items
    }
}

impl Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|a| (a.name(), a.value())))
            .finish()
    }
}
