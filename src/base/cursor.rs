/// Read position over the immutable input buffer.
///
/// The tokenizer never copies the input: everything it hands out is a
/// subslice of `input`, and the cursor only ever moves forward.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Cursor<'i> {
    #[inline]
    pub fn new(input: &'i str) -> Self {
        Cursor { input, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn rest(&self) -> &'i str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Consumes `count` bytes and returns them.
    #[inline]
    pub fn consume(&mut self, count: usize) -> &'i str {
        let consumed = &self.input[self.pos..self.pos + count];

        self.pos += count;

        consumed
    }

    #[inline]
    pub fn consume_rest(&mut self) -> &'i str {
        self.consume(self.input.len() - self.pos)
    }
}
