use bitflags::bitflags;

bitflags! {
    /// Kinds of tokens to collect with [`tokenize`](crate::tokenize).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenCaptureFlags: u8 {
        const START_TAGS = 0b0000_0001;
        const END_TAGS = 0b0000_0010;
        const COMMENTS = 0b0000_0100;
        const OTHERS = 0b0000_1000;
        const TEXT = 0b0001_0000;
    }
}
