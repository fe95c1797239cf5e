//! A single-pass, event-driven HTML tokenizer.
//!
//! The input is walked once, left to right. Each lexical unit (start tag, end tag,
//! comment, other bracketed construct such as a doctype, or a run of text) is handed to
//! a callback together with its decoded parts and the input that follows it. There is
//! no tree construction, no character reference decoding and no validation.
//!
//! The bodies of raw text elements (`<script>` and `<style>` by default) are emitted as
//! a single raw text chunk that extends to the element's closing tag. A closing tag inside
//! an HTML comment in the body doesn't end the element.
//!
//! # Example
//!
//! ```
//! use tagstream::{parse, ContentHandlers, Settings};
//!
//! let mut links = vec![];
//! let mut texts = vec![];
//!
//! parse(
//!     r#"<a href="/home">Home</a>"#,
//!     Settings {
//!         content_handlers: ContentHandlers::default()
//!             .start_tag(|t| {
//!                 links.extend(t.attributes().value("href").map(String::from));
//!                 Ok(())
//!             })
//!             .text(|t| {
//!                 texts.push(t.as_str().to_string());
//!                 Ok(())
//!             }),
//!         ..Settings::default()
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(links, ["/home"]);
//! assert_eq!(texts, ["Home"]);
//! ```
//!
//! Tokens can also be collected:
//!
//! ```
//! use tagstream::{tokenize, Token, TokenCaptureFlags};
//!
//! let tokens = tokenize("<!-- c -->text", TokenCaptureFlags::all()).unwrap();
//!
//! assert!(matches!(&tokens[0], Token::Comment(c) if c.text() == " c "));
//! assert!(matches!(&tokens[1], Token::TextChunk(t) if t.as_str() == "text"));
//! ```

#[macro_use]
mod debug_trace;

mod base;
mod errors;
mod html;
mod settings;
mod token;
mod tokenizer;

use encoding_rs::Encoding;

pub use self::errors::{HandlerError, HandlerResult, StalledProgressError, TokenizerError};
pub use self::html::{
    ClosingTagMatcher, DefaultRawTags, EndMatcher, RawTagClassifier, RawTagList, TextType,
};
pub use self::settings::*;
pub use self::token::*;
pub use self::tokenizer::{TokenCollector, TokenHandler, Tokenizer};

/// Tokenizes `input`, calling the handlers from `settings` for every token.
///
/// Returns an error if a handler fails, or if the input has a `<` that can't be
/// tokenized and no error handler is set.
pub fn parse(input: &str, settings: Settings<'_>) -> Result<(), TokenizerError> {
    let (tokenizer, mut handler) = settings.into_parts();

    tokenizer.run(input, &mut handler)
}

/// Decodes `input` with the given encoding and tokenizes the result like [`parse`].
///
/// No encoding sniffing is performed and a byte order mark isn't treated specially.
/// Malformed byte sequences are replaced with U+FFFD.
pub fn parse_bytes(
    input: &[u8],
    encoding: &'static Encoding,
    settings: Settings<'_>,
) -> Result<(), TokenizerError> {
    let (decoded, _) = encoding.decode_without_bom_handling(input);

    parse(&decoded, settings)
}

/// Tokenizes `input` with the default settings and collects tokens of the kinds
/// specified by `capture_flags`.
pub fn tokenize(
    input: &str,
    capture_flags: TokenCaptureFlags,
) -> Result<Vec<Token<'_>>, TokenizerError> {
    let mut collector = TokenCollector::new(capture_flags);

    Tokenizer::default().run(input, &mut collector)?;

    Ok(collector.into_tokens())
}
