mod attributes;

use std::fmt::{self, Debug};

pub use self::attributes::{Attribute, Attributes};
pub(crate) use self::attributes::{scan_attributes, QuoteMode};

pub struct StartTag<'i> {
    raw: &'i str,
    raw_name: &'i str,
    name: String,
    raw_attributes: &'i str,
    attributes: Attributes<'i>,
    self_closing: bool,
    remainder: &'i str,
}

impl<'i> StartTag<'i> {
    pub(crate) fn new(
        raw: &'i str,
        raw_name: &'i str,
        raw_attributes: &'i str,
        self_closing: bool,
        quote_mode: QuoteMode,
        remainder: &'i str,
    ) -> Self {
        StartTag {
            raw,
            raw_name,
            name: raw_name.to_lowercase(),
            raw_attributes,
            attributes: Attributes::parse_with_mode(raw_attributes, quote_mode),
            self_closing,
            remainder,
        }
    }

    /// The whole tag as it appears in the input, e.g. `<a href="x">`.
    #[inline]
    pub fn raw(&self) -> &'i str {
        self.raw
    }

    /// Lower-cased tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name with its original case.
    #[inline]
    pub fn raw_name(&self) -> &'i str {
        self.raw_name
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes<'i> {
        &self.attributes
    }

    /// The undecoded attribute span between the tag name and the closing `/` or `>`.
    #[inline]
    pub fn raw_attributes(&self) -> &'i str {
        self.raw_attributes
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    /// Input that follows the tag.
    #[inline]
    pub fn remainder(&self) -> &'i str {
        self.remainder
    }
}

impl Debug for StartTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartTag")
            .field("name", &self.name())
            .field("attributes", &self.attributes())
            .field("self_closing", &self.self_closing)
            .finish()
    }
}
