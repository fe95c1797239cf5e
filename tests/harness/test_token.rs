use hashbrown::HashMap;
use serde_derive::Deserialize;
use tagstream::Token;

#[derive(Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type")]
pub enum TestToken {
    StartTag {
        raw: String,
        name: String,
        #[serde(default)]
        attributes: HashMap<String, Option<String>>,
        #[serde(default)]
        self_closing: bool,
        remainder: String,
    },

    EndTag {
        raw: String,
        name: String,
        remainder: String,
    },

    Text {
        text: String,
        #[serde(default)]
        raw_text: bool,
        remainder: String,
    },

    Comment {
        raw: String,
        text: String,
        remainder: String,
    },

    Other {
        raw: String,
        content: String,
        remainder: String,
    },
}

impl From<&Token<'_>> for TestToken {
    fn from(token: &Token<'_>) -> Self {
        match token {
            Token::StartTag(t) => TestToken::StartTag {
                raw: t.raw().into(),
                name: t.name().into(),
                attributes: t
                    .attributes()
                    .iter()
                    .map(|a| (a.name().to_string(), a.value().map(String::from)))
                    .collect(),
                self_closing: t.self_closing(),
                remainder: t.remainder().into(),
            },

            Token::EndTag(t) => TestToken::EndTag {
                raw: t.raw().into(),
                name: t.name().into(),
                remainder: t.remainder().into(),
            },

            Token::TextChunk(t) => TestToken::Text {
                text: t.as_str().into(),
                raw_text: t.is_raw(),
                remainder: t.remainder().into(),
            },

            Token::Comment(t) => TestToken::Comment {
                raw: t.raw().into(),
                text: t.text().into(),
                remainder: t.remainder().into(),
            },

            Token::Other(t) => TestToken::Other {
                raw: t.raw().into(),
                content: t.content().into(),
                remainder: t.remainder().into(),
            },
        }
    }
}
