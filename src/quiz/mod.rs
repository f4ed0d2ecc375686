pub mod answers;
pub mod archetype;
pub mod bank;
pub mod constants;
pub mod profile;
pub mod scoring;
pub mod session;
pub mod types;

pub use answers::*;
pub use archetype::*;
pub use bank::*;
pub use profile::*;
pub use scoring::*;
pub use session::*;
pub use types::*;
