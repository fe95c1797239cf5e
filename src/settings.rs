use crate::errors::{HandlerResult, StalledProgressError};
use crate::html::{ClosingTagMatcher, DefaultRawTags, EndMatcher, RawTagClassifier};
use crate::token::{Comment, EndTag, Other, StartTag, TextChunk};
use crate::tokenizer::{TokenHandler, Tokenizer};

pub type StartTagHandler<'h> = Box<dyn FnMut(&StartTag<'_>) -> HandlerResult + 'h>;
pub type EndTagHandler<'h> = Box<dyn FnMut(&EndTag<'_>) -> HandlerResult + 'h>;
pub type TextHandler<'h> = Box<dyn FnMut(&TextChunk<'_>) -> HandlerResult + 'h>;
pub type CommentHandler<'h> = Box<dyn FnMut(&Comment<'_>) -> HandlerResult + 'h>;
pub type OtherHandler<'h> = Box<dyn FnMut(&Other<'_>) -> HandlerResult + 'h>;
pub type ErrorHandler<'h> = Box<dyn FnMut(StalledProgressError) + 'h>;

/// Callbacks for each kind of token. Unset callbacks ignore their tokens.
///
/// ```
/// use tagstream::ContentHandlers;
///
/// let mut tags = vec![];
///
/// let handlers = ContentHandlers::default().start_tag(|t| {
///     tags.push(t.name().to_string());
///     Ok(())
/// });
/// # drop(handlers);
/// ```
#[derive(Default)]
pub struct ContentHandlers<'h> {
    pub(crate) start_tag: Option<StartTagHandler<'h>>,
    pub(crate) end_tag: Option<EndTagHandler<'h>>,
    pub(crate) text: Option<TextHandler<'h>>,
    pub(crate) comments: Option<CommentHandler<'h>>,
    pub(crate) other: Option<OtherHandler<'h>>,
}

impl<'h> ContentHandlers<'h> {
    #[inline]
    pub fn start_tag(mut self, handler: impl FnMut(&StartTag<'_>) -> HandlerResult + 'h) -> Self {
        self.start_tag = Some(Box::new(handler));

        self
    }

    #[inline]
    pub fn end_tag(mut self, handler: impl FnMut(&EndTag<'_>) -> HandlerResult + 'h) -> Self {
        self.end_tag = Some(Box::new(handler));

        self
    }

    #[inline]
    pub fn text(mut self, handler: impl FnMut(&TextChunk<'_>) -> HandlerResult + 'h) -> Self {
        self.text = Some(Box::new(handler));

        self
    }

    #[inline]
    pub fn comments(mut self, handler: impl FnMut(&Comment<'_>) -> HandlerResult + 'h) -> Self {
        self.comments = Some(Box::new(handler));

        self
    }

    #[inline]
    pub fn other(mut self, handler: impl FnMut(&Other<'_>) -> HandlerResult + 'h) -> Self {
        self.other = Some(Box::new(handler));

        self
    }
}

macro_rules! call_handler {
    ($handler:expr, $token:expr) => {
        match $handler.as_mut() {
            Some(handler) => handler(&$token),
            None => Ok(()),
        }
    };
}

impl<'i> TokenHandler<'i> for ContentHandlers<'_> {
    #[inline]
    fn handle_start_tag(&mut self, tag: StartTag<'i>) -> HandlerResult {
        call_handler!(self.start_tag, tag)
    }

    #[inline]
    fn handle_end_tag(&mut self, tag: EndTag<'i>) -> HandlerResult {
        call_handler!(self.end_tag, tag)
    }

    #[inline]
    fn handle_text(&mut self, text: TextChunk<'i>) -> HandlerResult {
        call_handler!(self.text, text)
    }

    #[inline]
    fn handle_comment(&mut self, comment: Comment<'i>) -> HandlerResult {
        call_handler!(self.comments, comment)
    }

    #[inline]
    fn handle_other(&mut self, other: Other<'i>) -> HandlerResult {
        call_handler!(self.other, other)
    }
}

/// Configuration of a single [`parse`](crate::parse) call.
pub struct Settings<'h> {
    pub content_handlers: ContentHandlers<'h>,

    /// Receives malformed input errors. If set, the tokenizer reports the error here
    /// and keeps going. Otherwise the error aborts parsing.
    pub error_handler: Option<ErrorHandler<'h>>,

    /// Decides which start tags open raw text elements.
    pub raw_tags: Box<dyn RawTagClassifier + 'h>,

    /// Finds the end of a raw text element's body.
    pub end_matcher: Box<dyn EndMatcher + 'h>,
}

impl<'h> Settings<'h> {
    pub(crate) fn into_parts(self) -> (Tokenizer<'h>, SettingsHandler<'h>) {
        let tokenizer = Tokenizer::from_boxed(self.raw_tags, self.end_matcher);

        let handler = SettingsHandler {
            content_handlers: self.content_handlers,
            error_handler: self.error_handler,
        };

        (tokenizer, handler)
    }
}

impl Default for Settings<'_> {
    #[inline]
    fn default() -> Self {
        Settings {
            content_handlers: ContentHandlers::default(),
            error_handler: None,
            raw_tags: Box::new(DefaultRawTags),
            end_matcher: Box::new(ClosingTagMatcher),
        }
    }
}

pub(crate) struct SettingsHandler<'h> {
    content_handlers: ContentHandlers<'h>,
    error_handler: Option<ErrorHandler<'h>>,
}

impl<'i> TokenHandler<'i> for SettingsHandler<'_> {
    #[inline]
    fn handle_start_tag(&mut self, tag: StartTag<'i>) -> HandlerResult {
        self.content_handlers.handle_start_tag(tag)
    }

    #[inline]
    fn handle_end_tag(&mut self, tag: EndTag<'i>) -> HandlerResult {
        self.content_handlers.handle_end_tag(tag)
    }

    #[inline]
    fn handle_text(&mut self, text: TextChunk<'i>) -> HandlerResult {
        self.content_handlers.handle_text(text)
    }

    #[inline]
    fn handle_comment(&mut self, comment: Comment<'i>) -> HandlerResult {
        self.content_handlers.handle_comment(comment)
    }

    #[inline]
    fn handle_other(&mut self, other: Other<'i>) -> HandlerResult {
        self.content_handlers.handle_other(other)
    }

    fn handle_stalled_progress(
        &mut self,
        err: StalledProgressError,
    ) -> Result<(), StalledProgressError> {
        match self.error_handler {
            Some(ref mut handler) => {
                handler(err);
                Ok(())
            }
            None => Err(err),
        }
    }
}
