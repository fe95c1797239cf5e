//! Extension points that decide which elements have raw text content and where
//! that content ends.

use crate::base::find_closing_tag_ci;

/// Decides whether a start tag opens a raw text element.
///
/// Implemented for closures, so `|name: &str| name == "textarea"` can be used directly.
pub trait RawTagClassifier {
    /// `name` is the tag name as written in the input, its case is preserved.
    fn is_raw_tag(&self, name: &str) -> bool;
}

impl<F: Fn(&str) -> bool> RawTagClassifier for F {
    #[inline]
    fn is_raw_tag(&self, name: &str) -> bool {
        self(name)
    }
}

/// `style` and `script`, compared ASCII case-insensitively.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRawTags;

impl RawTagClassifier for DefaultRawTags {
    #[inline]
    fn is_raw_tag(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case("style") || name.eq_ignore_ascii_case("script")
    }
}

/// An arbitrary set of raw element names, compared ASCII case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct RawTagList(Vec<String>);

impl RawTagList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawTagList(names.into_iter().map(Into::into).collect())
    }
}

impl RawTagClassifier for RawTagList {
    #[inline]
    fn is_raw_tag(&self, name: &str) -> bool {
        self.0.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}

/// Locates the closing sequence of a raw element.
///
/// Implemented for closures taking the raw tag name and the raw element body.
pub trait EndMatcher {
    /// Returns the byte offset in `input` where the closing sequence of `tag_name` begins.
    fn find_end(&self, tag_name: &str, input: &str) -> Option<usize>;
}

impl<F: Fn(&str, &str) -> Option<usize>> EndMatcher for F {
    #[inline]
    fn find_end(&self, tag_name: &str, input: &str) -> Option<usize> {
        self(tag_name, input)
    }
}

/// Matches `</` followed by the tag name, ignoring ASCII case.
///
/// Nothing after the name is checked, so `</scripts` closes a `<script>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClosingTagMatcher;

impl EndMatcher for ClosingTagMatcher {
    #[inline]
    fn find_end(&self, tag_name: &str, input: &str) -> Option<usize> {
        find_closing_tag_ci(tag_name, input)
    }
}
