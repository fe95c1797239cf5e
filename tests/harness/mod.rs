mod test_token;

pub use self::suite::{get_test_cases, TestCase};
pub use self::test_token::TestToken;

use tagstream::{Token, TokenCaptureFlags, TokenCollector, Tokenizer};

/// Tokenizes `input` with the default tokenizer, returning the tokens produced
/// before an error, if any, and the error position.
pub fn tokenize_partially(input: &str) -> (Vec<TestToken>, Option<usize>) {
    let mut collector = TokenCollector::new(TokenCaptureFlags::all());
    let res = Tokenizer::default().run(input, &mut collector);

    let tokens = collector.tokens().iter().map(TestToken::from).collect();
    let error_position = res
        .err()
        .map(|e| e.as_stalled_progress().expect("Stalled progress error").position);

    (tokens, error_position)
}

pub fn concat_raw(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(Token::raw).collect()
}
