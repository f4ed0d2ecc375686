pub mod auth;
pub mod models;
pub mod subscription;

pub use auth::*;
pub use models::*;
pub use subscription::*;
