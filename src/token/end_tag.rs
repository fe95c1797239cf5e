use std::fmt::{self, Debug};

pub struct EndTag<'i> {
    raw: &'i str,
    raw_name: &'i str,
    name: String,
    remainder: &'i str,
}

impl<'i> EndTag<'i> {
    pub(crate) fn new(raw: &'i str, raw_name: &'i str, remainder: &'i str) -> Self {
        EndTag {
            raw,
            raw_name,
            name: raw_name.to_lowercase(),
            remainder,
        }
    }

    /// The whole tag as it appears in the input, e.g. `</DIV >`.
    #[inline]
    pub fn raw(&self) -> &'i str {
        self.raw
    }

    /// Lower-cased tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn raw_name(&self) -> &'i str {
        self.raw_name
    }

    #[inline]
    pub fn remainder(&self) -> &'i str {
        self.remainder
    }
}

impl Debug for EndTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndTag").field("name", &self.name()).finish()
    }
}
