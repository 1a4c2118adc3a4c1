pub mod content;
pub mod dispatch;
pub mod enums;
pub mod schema;
pub mod shared;
