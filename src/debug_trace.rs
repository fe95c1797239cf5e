use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @lexeme $kind:expr, $pos:expr, $raw:expr ) => {
                println!("@lexeme {} at {}: {:?}", $kind, $pos, $raw);
            };

            ( @text $text_type:expr, $pos:expr, $text:expr ) => {
                println!("@text {:?} at {}: {:?}", $text_type, $pos, $text);
            };

            ( @raw $tag_name:expr, $end:expr ) => {
                println!("@raw <{}> ends at {:?}", $tag_name, $end);
            };

            ( @raw_skip_comment $start:expr, $end:expr ) => {
                println!("@raw skipping comment {}..{}", $start, $end);
            };

            ( @error $err:expr ) => {
                println!("@error {}", $err);
            };
        }
    } else {
        // NOTE: arguments are still referenced so that builds without
        // tracing don't complain about bindings that only exist for it.
        macro_rules! trace {
            ( @$tag:ident $($args:expr),* ) => {
                $( let _ = &$args; )*
            };
        }
    }
}
