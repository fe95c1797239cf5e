use memchr::{memchr, memchr_iter, memmem};

/// NOTE: `\x0B` (vertical tab) isn't HTML whitespace.
#[inline]
pub fn is_html_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r')
}

/// Length of the leading run of bytes for which `pred` holds.
#[inline]
pub fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().position(|&b| !pred(b)).unwrap_or(bytes.len())
}

#[inline]
pub fn skip_whitespace(bytes: &[u8], pos: usize) -> usize {
    pos + count_while(&bytes[pos..], is_html_whitespace)
}

#[inline]
pub fn find_byte(needle: u8, haystack: &str) -> Option<usize> {
    memchr(needle, haystack.as_bytes())
}

#[inline]
pub fn find_str(needle: &str, haystack: &str) -> Option<usize> {
    memmem::find(haystack.as_bytes(), needle.as_bytes())
}

/// Finds the first `</` followed by `name`, comparing the name ASCII case-insensitively.
pub fn find_closing_tag_ci(name: &str, haystack: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let name = name.as_bytes();

    memchr_iter(b'<', haystack).find(|&pos| {
        let candidate = &haystack[pos + 1..];

        candidate.first() == Some(&b'/')
            && candidate.len() > name.len()
            && candidate[1..=name.len()].eq_ignore_ascii_case(name)
    })
}
