mod capture;
mod comment;
mod end_tag;
mod other;
mod start_tag;
mod text_chunk;

pub use self::capture::TokenCaptureFlags;
pub use self::comment::Comment;
pub use self::end_tag::EndTag;
pub use self::other::Other;
pub use self::start_tag::{Attribute, Attributes, StartTag};
pub use self::text_chunk::TextChunk;

pub(crate) use self::start_tag::{scan_attributes, QuoteMode};

/// A lexical unit of the input.
#[derive(Debug)]
pub enum Token<'i> {
    StartTag(StartTag<'i>),
    EndTag(EndTag<'i>),
    Comment(Comment<'i>),
    Other(Other<'i>),
    TextChunk(TextChunk<'i>),
}

impl<'i> Token<'i> {
    /// The input text the token was produced from.
    ///
    /// Concatenating `raw()` of all tokens in order yields the original input.
    #[inline]
    pub fn raw(&self) -> &'i str {
        match self {
            Token::StartTag(t) => t.raw(),
            Token::EndTag(t) => t.raw(),
            Token::Comment(t) => t.raw(),
            Token::Other(t) => t.raw(),
            Token::TextChunk(t) => t.as_str(),
        }
    }

    /// Input that follows the token.
    #[inline]
    pub fn remainder(&self) -> &'i str {
        match self {
            Token::StartTag(t) => t.remainder(),
            Token::EndTag(t) => t.remainder(),
            Token::Comment(t) => t.remainder(),
            Token::Other(t) => t.remainder(),
            Token::TextChunk(t) => t.remainder(),
        }
    }

    #[inline]
    pub fn capture_flag(&self) -> TokenCaptureFlags {
        match self {
            Token::StartTag(_) => TokenCaptureFlags::START_TAGS,
            Token::EndTag(_) => TokenCaptureFlags::END_TAGS,
            Token::Comment(_) => TokenCaptureFlags::COMMENTS,
            Token::Other(_) => TokenCaptureFlags::OTHERS,
            Token::TextChunk(_) => TokenCaptureFlags::TEXT,
        }
    }
}

macro_rules! impl_from {
    ($($Type:ident),+) => {
        $(
            impl<'i> From<$Type<'i>> for Token<'i> {
                #[inline]
                fn from(token: $Type<'i>) -> Self {
                    Token::$Type(token)
                }
            }
        )+
    };
}

impl_from!(StartTag, EndTag, Comment, Other, TextChunk);
