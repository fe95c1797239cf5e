use std::fmt::{self, Debug};

/// Any bracketed construct that is neither a tag nor a comment, e.g. a doctype
/// declaration or a processing instruction.
pub struct Other<'i> {
    raw: &'i str,
    content: &'i str,
    remainder: &'i str,
}

impl<'i> Other<'i> {
    pub(crate) fn new(raw: &'i str, content: &'i str, remainder: &'i str) -> Self {
        Other {
            raw,
            content,
            remainder,
        }
    }

    #[inline]
    pub fn raw(&self) -> &'i str {
        self.raw
    }

    /// Text between `<` and `>`, e.g. `!DOCTYPE html` for `<!DOCTYPE html>`.
    #[inline]
    pub fn content(&self) -> &'i str {
        self.content
    }

    #[inline]
    pub fn remainder(&self) -> &'i str {
        self.remainder
    }
}

impl Debug for Other<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Other")
            .field("content", &self.content())
            .finish()
    }
}
