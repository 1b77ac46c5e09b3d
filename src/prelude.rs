pub use super::diagnostics::*;
pub use super::math::*;
pub use super::shader::*;
