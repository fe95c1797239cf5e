mod lexeme;
mod raw_text;
mod token_collector;

use self::lexeme::{next_lexeme, Lexeme};
use self::raw_text::find_raw_text_end;
use crate::base::{find_byte, Cursor};
use crate::errors::{HandlerResult, StalledProgressError, TokenizerError};
use crate::html::{ClosingTagMatcher, DefaultRawTags, EndMatcher, RawTagClassifier, TextType};
use crate::token::{Comment, EndTag, Other, StartTag, TextChunk};
use std::fmt::{self, Debug};

pub use self::token_collector::TokenCollector;

/// Receives the tokens produced by the [`Tokenizer`].
///
/// Every method defaults to ignoring the token. Returning an error from any of them
/// stops tokenization, the error is returned from [`Tokenizer::run`].
pub trait TokenHandler<'i> {
    fn handle_start_tag(&mut self, _tag: StartTag<'i>) -> HandlerResult {
        Ok(())
    }

    fn handle_end_tag(&mut self, _tag: EndTag<'i>) -> HandlerResult {
        Ok(())
    }

    fn handle_text(&mut self, _text: TextChunk<'i>) -> HandlerResult {
        Ok(())
    }

    fn handle_comment(&mut self, _comment: Comment<'i>) -> HandlerResult {
        Ok(())
    }

    fn handle_other(&mut self, _other: Other<'i>) -> HandlerResult {
        Ok(())
    }

    /// Called when the input contains a `<` that can't be tokenized.
    ///
    /// Returning the error aborts tokenization. Returning `Ok(())` makes the
    /// tokenizer emit the stray `<`, along with the text up to the next `<`, as
    /// a text chunk and carry on.
    fn handle_stalled_progress(
        &mut self,
        err: StalledProgressError,
    ) -> Result<(), StalledProgressError> {
        Err(err)
    }
}

/// Single-pass tokenizer.
///
/// The tokenizer itself holds only configuration, all the parsing state lives
/// on the stack of [`Tokenizer::run`]. So it can be reused and handlers may
/// call into it recursively.
pub struct Tokenizer<'h> {
    raw_tags: Box<dyn RawTagClassifier + 'h>,
    end_matcher: Box<dyn EndMatcher + 'h>,
}

impl<'h> Tokenizer<'h> {
    pub fn new(
        raw_tags: impl RawTagClassifier + 'h,
        end_matcher: impl EndMatcher + 'h,
    ) -> Self {
        Tokenizer::from_boxed(Box::new(raw_tags), Box::new(end_matcher))
    }

    pub(crate) fn from_boxed(
        raw_tags: Box<dyn RawTagClassifier + 'h>,
        end_matcher: Box<dyn EndMatcher + 'h>,
    ) -> Self {
        Tokenizer {
            raw_tags,
            end_matcher,
        }
    }

    /// Tokenizes `input`, feeding every token to `handler` in input order.
    pub fn run<'i, H: TokenHandler<'i>>(
        &self,
        input: &'i str,
        handler: &mut H,
    ) -> Result<(), TokenizerError> {
        let mut cursor = Cursor::new(input);

        while !cursor.is_at_end() {
            let checkpoint = cursor.pos();

            self.step(&mut cursor, handler)?;

            if cursor.pos() == checkpoint {
                recover_from_stalled_progress(&mut cursor, handler)?;
            }
        }

        Ok(())
    }

    fn step<'i, H: TokenHandler<'i>>(
        &self,
        cursor: &mut Cursor<'i>,
        handler: &mut H,
    ) -> Result<(), TokenizerError> {
        let pos = cursor.pos();

        match next_lexeme(cursor.rest()) {
            Lexeme::StartTag {
                len,
                raw_name,
                raw_attributes,
                self_closing,
                quote_mode,
            } => {
                let raw = cursor.consume(len);

                trace!(@lexeme "start tag", pos, raw);

                let tag = StartTag::new(
                    raw,
                    raw_name,
                    raw_attributes,
                    self_closing,
                    quote_mode,
                    cursor.rest(),
                );

                handler
                    .handle_start_tag(tag)
                    .map_err(TokenizerError::ContentHandlerError)?;

                if self.raw_tags.is_raw_tag(raw_name) {
                    let end = find_raw_text_end(raw_name, cursor.rest(), &*self.end_matcher);

                    trace!(@raw raw_name, end);

                    emit_text(cursor, end, TextType::RawText, handler)?;
                }
            }
            Lexeme::EndTag { len, raw_name } => {
                let raw = cursor.consume(len);

                trace!(@lexeme "end tag", pos, raw);

                handler
                    .handle_end_tag(EndTag::new(raw, raw_name, cursor.rest()))
                    .map_err(TokenizerError::ContentHandlerError)?;
            }
            Lexeme::Comment { len, text } => {
                let raw = cursor.consume(len);

                trace!(@lexeme "comment", pos, raw);

                handler
                    .handle_comment(Comment::new(raw, text, cursor.rest()))
                    .map_err(TokenizerError::ContentHandlerError)?;
            }
            Lexeme::Other { len, content } => {
                let raw = cursor.consume(len);

                trace!(@lexeme "other", pos, raw);

                handler
                    .handle_other(Other::new(raw, content, cursor.rest()))
                    .map_err(TokenizerError::ContentHandlerError)?;
            }
            Lexeme::NoMatch => {
                let end = find_byte(b'<', cursor.rest());

                emit_text(cursor, end, TextType::Data, handler)?;
            }
        }

        Ok(())
    }
}

impl Default for Tokenizer<'_> {
    #[inline]
    fn default() -> Self {
        Tokenizer::new(DefaultRawTags, ClosingTagMatcher)
    }
}

impl Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tokenizer")
    }
}

/// Consumes text up to `end`, or the rest of the input if `end` is `None`.
/// Empty text isn't emitted.
fn emit_text<'i, H: TokenHandler<'i>>(
    cursor: &mut Cursor<'i>,
    end: Option<usize>,
    text_type: TextType,
    handler: &mut H,
) -> Result<(), TokenizerError> {
    let pos = cursor.pos();

    let text = match end {
        Some(end) => cursor.consume(end),
        None => cursor.consume_rest(),
    };

    if text.is_empty() {
        return Ok(());
    }

    trace!(@text text_type, pos, text);

    handler
        .handle_text(TextChunk::new(text, text_type, cursor.rest()))
        .map_err(TokenizerError::ContentHandlerError)
}

// NOTE: progress only stalls on a `<` that isn't followed by `>` anywhere:
// no lexeme matches there and the text scan stops right at it.
fn recover_from_stalled_progress<'i, H: TokenHandler<'i>>(
    cursor: &mut Cursor<'i>,
    handler: &mut H,
) -> Result<(), TokenizerError> {
    let err = StalledProgressError {
        position: cursor.pos(),
        remainder: cursor.rest().to_owned(),
    };

    trace!(@error err);

    handler.handle_stalled_progress(err)?;

    let end = find_byte(b'<', &cursor.rest()[1..]).map(|pos| pos + 1);

    emit_text(cursor, end, TextType::Data, handler)
}
