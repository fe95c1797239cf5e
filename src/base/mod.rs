mod bytes;
mod cursor;

pub use self::bytes::*;
pub use self::cursor::Cursor;
