pub mod fragments;
pub mod page;

pub use fragments::*;
pub use page::*;
