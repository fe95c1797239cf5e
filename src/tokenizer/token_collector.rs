use super::TokenHandler;
use crate::errors::HandlerResult;
use crate::token::{Comment, EndTag, Other, StartTag, TextChunk, Token, TokenCaptureFlags};

/// [`TokenHandler`] that stores tokens of the captured kinds.
#[derive(Debug)]
pub struct TokenCollector<'i> {
    capture_flags: TokenCaptureFlags,
    tokens: Vec<Token<'i>>,
}

impl<'i> TokenCollector<'i> {
    pub fn new(capture_flags: TokenCaptureFlags) -> Self {
        TokenCollector {
            capture_flags,
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub fn tokens(&self) -> &[Token<'i>] {
        &self.tokens
    }

    #[inline]
    pub fn into_tokens(self) -> Vec<Token<'i>> {
        self.tokens
    }

    #[inline]
    fn capture(&mut self, token: impl Into<Token<'i>>) -> HandlerResult {
        let token = token.into();

        if self.capture_flags.contains(token.capture_flag()) {
            self.tokens.push(token);
        }

        Ok(())
    }
}

impl<'i> TokenHandler<'i> for TokenCollector<'i> {
    #[inline]
    fn handle_start_tag(&mut self, tag: StartTag<'i>) -> HandlerResult {
        self.capture(tag)
    }

    #[inline]
    fn handle_end_tag(&mut self, tag: EndTag<'i>) -> HandlerResult {
        self.capture(tag)
    }

    #[inline]
    fn handle_text(&mut self, text: TextChunk<'i>) -> HandlerResult {
        self.capture(text)
    }

    #[inline]
    fn handle_comment(&mut self, comment: Comment<'i>) -> HandlerResult {
        self.capture(comment)
    }

    #[inline]
    fn handle_other(&mut self, other: Other<'i>) -> HandlerResult {
        self.capture(other)
    }
}
