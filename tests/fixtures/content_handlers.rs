use std::cell::RefCell;
use tagstream::*;

/// Records every handler call as a line of text. Content handlers of `settings`
/// are replaced with the recording ones.
fn parse_to_log(input: &str, settings: Settings<'_>) -> Vec<String> {
    let log = RefCell::new(Vec::new());

    let handlers = ContentHandlers::default()
        .start_tag(|t| {
            log.borrow_mut().push(format!(
                "start {:?} {} {:?} {:?}",
                t.raw(),
                t.name(),
                t.attributes(),
                t.remainder()
            ));
            Ok(())
        })
        .end_tag(|t| {
            log.borrow_mut()
                .push(format!("end {:?} {} {:?}", t.raw(), t.name(), t.remainder()));
            Ok(())
        })
        .text(|t| {
            log.borrow_mut().push(format!(
                "text {:?} {} {:?}",
                t.as_str(),
                t.is_raw(),
                t.remainder()
            ));
            Ok(())
        })
        .comments(|c| {
            log.borrow_mut()
                .push(format!("comment {:?} {:?} {:?}", c.raw(), c.text(), c.remainder()));
            Ok(())
        })
        .other(|o| {
            log.borrow_mut()
                .push(format!("other {:?} {:?} {:?}", o.raw(), o.content(), o.remainder()));
            Ok(())
        });

    parse(
        input,
        Settings {
            content_handlers: handlers,
            ..settings
        },
    )
    .unwrap();

    log.into_inner()
}

#[test]
fn link_with_text() {
    assert_eq!(
        parse_to_log(r#"<a href="x">hi</a>"#, Settings::default()),
        [
            r#"start "<a href=\"x\">" a {"href": Some("x")} "hi</a>""#,
            r#"text "hi" false "</a>""#,
            r#"end "</a>" a """#,
        ]
    );
}

#[test]
fn comment_and_text() {
    assert_eq!(
        parse_to_log("<!-- c -->text", Settings::default()),
        [
            r#"comment "<!-- c -->" " c " "text""#,
            r#"text "text" false """#,
        ]
    );
}

#[test]
fn doctype() {
    assert_eq!(
        parse_to_log("<!doctype html>", Settings::default()),
        [r#"other "<!doctype html>" "!doctype html" """#]
    );
}

#[test]
fn empty_input() {
    assert!(parse_to_log("", Settings::default()).is_empty());
}

#[test]
fn attribute_value_forms() {
    assert_eq!(
        parse_to_log(r#"<input disabled value="" name=foo>"#, Settings::default()),
        [r#"start "<input disabled value=\"\" name=foo>" input {"disabled": None, "value": Some(""), "name": Some("foo")} """#]
    );
}

#[test]
fn custom_raw_tags() {
    let log = parse_to_log(
        "<title><b></title><script><b>",
        Settings {
            raw_tags: Box::new(RawTagList::new(["title"])),
            ..Settings::default()
        },
    );

    assert_eq!(
        log,
        [
            r#"start "<title>" title {} "<b></title><script><b>""#,
            r#"text "<b>" true "</title><script><b>""#,
            r#"end "</title>" title "<script><b>""#,
            r#"start "<script>" script {} "<b>""#,
            r#"start "<b>" b {} """#,
        ]
    );
}

#[test]
fn custom_end_matcher() {
    let log = parse_to_log(
        "<script>a</script>b]]c",
        Settings {
            end_matcher: Box::new(|_: &str, input: &str| input.find("]]")),
            ..Settings::default()
        },
    );

    assert_eq!(
        log,
        [
            r#"start "<script>" script {} "a</script>b]]c""#,
            r#"text "a</script>b" true "]]c""#,
            r#"text "]]c" false """#,
        ]
    );
}

#[test]
fn handler_error_propagation() {
    let mut texts = 0;

    let err = parse(
        "<a>x<b>y",
        Settings {
            content_handlers: ContentHandlers::default()
                .start_tag(|t| {
                    if t.name() == "b" {
                        Err("Stop at <b>".into())
                    } else {
                        Ok(())
                    }
                })
                .text(|_| {
                    texts += 1;
                    Ok(())
                }),
            error_handler: Some(Box::new(|_: StalledProgressError| {
                panic!("Handler errors must not reach the error handler")
            })),
            ..Settings::default()
        },
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Stop at <b>");
    assert!(err.as_stalled_progress().is_none());
    assert_eq!(texts, 1);
}

#[test]
fn stalled_progress_without_error_handler() {
    let mut tags = vec![];

    let err = parse(
        "<p>a <b",
        Settings {
            content_handlers: ContentHandlers::default().start_tag(|t| {
                tags.push(t.name().to_string());
                Ok(())
            }),
            ..Settings::default()
        },
    )
    .unwrap_err();

    assert_eq!(tags, ["p"]);
    assert_eq!(
        err.as_stalled_progress(),
        Some(&StalledProgressError {
            position: 5,
            remainder: "<b".into()
        })
    );
}

#[test]
fn stalled_progress_with_error_handler() {
    let mut errors = vec![];

    let log = parse_to_log(
        "a <b <c",
        Settings {
            error_handler: Some(Box::new(|e: StalledProgressError| errors.push(e.position))),
            ..Settings::default()
        },
    );

    assert_eq!(errors, [2, 5]);
    assert_eq!(
        log,
        [
            r#"text "a " false "<b <c""#,
            r#"text "<b " false "<c""#,
            r#"text "<c" false """#,
        ]
    );
}

#[test]
fn recursive_parsing_from_handler() {
    let mut inner_tags = vec![];

    parse(
        r#"<div data-html="<b><i>"></div>"#,
        Settings {
            content_handlers: ContentHandlers::default().start_tag(|t| {
                if let Some(html) = t.attributes().value("data-html") {
                    parse(
                        html,
                        Settings {
                            content_handlers: ContentHandlers::default().start_tag(|t| {
                                inner_tags.push(t.name().to_string());
                                Ok(())
                            }),
                            ..Settings::default()
                        },
                    )?;
                }

                Ok(())
            }),
            ..Settings::default()
        },
    )
    .unwrap();

    assert_eq!(inner_tags, ["b", "i"]);
}

#[test]
fn repeated_parsing_is_identical() {
    let input = "<!DOCTYPE html><style>a{}</style><p a b=1>x<!-- y --></p>";

    assert_eq!(
        parse_to_log(input, Settings::default()),
        parse_to_log(input, Settings::default())
    );
}

#[test]
fn legacy_encoding() {
    let mut texts = vec![];

    parse_bytes(
        b"<p>\xE9t\xE9</p>",
        encoding_rs::WINDOWS_1252,
        Settings {
            content_handlers: ContentHandlers::default().text(|t| {
                texts.push(t.as_str().to_string());
                Ok(())
            }),
            ..Settings::default()
        },
    )
    .unwrap();

    assert_eq!(texts, ["été"]);
}
