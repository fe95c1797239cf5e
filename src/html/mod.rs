mod raw_tags;
mod text_type;

pub use self::raw_tags::{ClosingTagMatcher, DefaultRawTags, EndMatcher, RawTagClassifier, RawTagList};
pub use self::text_type::TextType;
