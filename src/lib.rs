//! Shader program building and MVP matrix helpers for immediate-mode OpenGL rendering

/// Pluggable sinks for compile and link diagnostics
pub mod diagnostics;
/// Matrix and vector math for model-view-projection transforms
pub mod math;
/// Predefined types and traits for easy access
pub mod prelude;
/// Shader stage compilation and program linking
pub mod shader;
/// Utility functions and types for common tasks
pub mod utils;
