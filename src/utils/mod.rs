pub mod format;
pub mod hashtags;
pub mod ranking;
pub mod text;

pub use format::*;
pub use hashtags::*;
pub use ranking::*;
pub use text::*;
