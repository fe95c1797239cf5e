use std::fmt::{self, Debug};

pub struct Comment<'i> {
    raw: &'i str,
    text: &'i str,
    remainder: &'i str,
}

impl<'i> Comment<'i> {
    pub(crate) fn new(raw: &'i str, text: &'i str, remainder: &'i str) -> Self {
        Comment {
            raw,
            text,
            remainder,
        }
    }

    /// The whole comment including `<!--` and `-->`.
    #[inline]
    pub fn raw(&self) -> &'i str {
        self.raw
    }

    /// Text between `<!--` and `-->`.
    #[inline]
    pub fn text(&self) -> &'i str {
        self.text
    }

    #[inline]
    pub fn remainder(&self) -> &'i str {
        self.remainder
    }
}

impl Debug for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment").field("text", &self.text()).finish()
    }
}
