use crate::harness::concat_raw;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tagstream::{tokenize, TokenCaptureFlags};

const FRAGMENTS: &[&str] = &[
    "<div>",
    "</div>",
    "<P CLASS=x>",
    "<br/>",
    "<input disabled value=\"a > b\" name='n'>",
    "<a href=x/>",
    "<script>",
    "</script>",
    "<style>",
    "</STYLE>",
    "<!-- comment -->",
    "<!-- </script> -->",
    "<!DOCTYPE html>",
    "<?php echo 1; ?>",
    "<!-->",
    "</>",
    "<>",
    "text",
    " ",
    "\n",
    "&amp;",
    "héllo wörld",
    "a > b",
    "=",
    "\"",
    "'",
];

fn random_input(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..20);

    (0..len)
        .map(|_| *FRAGMENTS.choose(&mut *rng).unwrap())
        .collect::<String>()
}

#[test]
fn tokens_cover_whole_input() {
    let mut rng = StdRng::seed_from_u64(0x7a65);

    for _ in 0..2000 {
        // NOTE: every fragment has a `>` after each `<`, so
        // generated inputs never stall.
        let input = random_input(&mut rng);
        let tokens = tokenize(&input, TokenCaptureFlags::all()).unwrap();

        assert_eq!(concat_raw(&tokens), input, "Tokens of {input:?}");

        for (token, next) in tokens.iter().tuple_windows() {
            assert_eq!(
                token.remainder().len(),
                next.raw().len() + next.remainder().len(),
                "Remainder mismatch in {input:?}"
            );
        }

        if let Some(last) = tokens.last() {
            assert_eq!(last.remainder(), "");
        }
    }
}

#[test]
fn no_empty_text_chunks() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let input = random_input(&mut rng);

        for token in tokenize(&input, TokenCaptureFlags::TEXT).unwrap() {
            assert!(!token.raw().is_empty(), "Empty text in {input:?}");
        }
    }
}

#[test]
fn tokenization_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let input = random_input(&mut rng);

        let first = tokenize(&input, TokenCaptureFlags::all()).unwrap();
        let second = tokenize(&input, TokenCaptureFlags::all()).unwrap();

        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }
}
