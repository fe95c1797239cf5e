use crate::base::find_str;
use crate::html::EndMatcher;
use std::ops::Range;

fn find_comment(input: &str) -> Option<Range<usize>> {
    let start = find_str("<!--", input)?;
    let text_start = start + 4;
    let end = text_start + find_str("-->", &input[text_start..])? + 3;

    Some(start..end)
}

/// Finds where the body of a raw element ends, i.e. the offset of the `<` that
/// opens the closing sequence located by `end_matcher`.
///
/// A closing sequence inside an HTML comment doesn't count: if a comment starts
/// before the candidate, the search resumes after that comment. Returns `None` if
/// the element isn't closed, in which case the rest of the input is its body.
pub fn find_raw_text_end(
    tag_name: &str,
    input: &str,
    end_matcher: &dyn EndMatcher,
) -> Option<usize> {
    let mut offset = 0;
    let mut rest = input;

    loop {
        // NOTE: a custom matcher may return garbage, `is_char_boundary`
        // rejects both out of range and mid-character offsets.
        let end = end_matcher
            .find_end(tag_name, rest)
            .filter(|&end| rest.is_char_boundary(end))?;

        match find_comment(rest) {
            Some(comment) if comment.start < end => {
                trace!(@raw_skip_comment offset + comment.start, offset + comment.end);

                offset += comment.end;
                rest = &rest[comment.end..];
            }
            _ => return Some(offset + end),
        }
    }
}
