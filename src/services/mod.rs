pub mod earnings_service;
pub mod insight_service;
pub mod search_service;
pub mod tips_service;

pub use earnings_service::*;
pub use insight_service::*;
pub use search_service::*;
pub use tips_service::*;
