/// Kind of content a text chunk was scanned as.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TextType {
    /// Ordinary text between markup constructs.
    Data,
    /// Verbatim body of a raw element such as `<script>` or `<style>`.
    RawText,
}

impl TextType {
    #[inline]
    pub fn is_raw(self) -> bool {
        self == TextType::RawText
    }
}
