use crate::html::TextType;
use std::fmt::{self, Debug};

pub struct TextChunk<'i> {
    text: &'i str,
    text_type: TextType,
    remainder: &'i str,
}

impl<'i> TextChunk<'i> {
    pub(crate) fn new(text: &'i str, text_type: TextType, remainder: &'i str) -> Self {
        TextChunk {
            text,
            text_type,
            remainder,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'i str {
        self.text
    }

    #[inline]
    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    /// Whether this is the body of a raw element such as `<script>`.
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.text_type.is_raw()
    }

    #[inline]
    pub fn remainder(&self) -> &'i str {
        self.remainder
    }
}

impl Debug for TextChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextChunk")
            .field("text", &self.as_str())
            .field("text_type", &self.text_type)
            .finish()
    }
}
