mod builder;
mod context;
mod error;
#[cfg(feature = "glow")]
mod glow_context;
mod program;
mod types;

pub use builder::*;
pub use context::*;
pub use error::*;
pub use program::*;
pub use types::*;
