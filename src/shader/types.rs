use std::{fmt, sync::Arc};

use crate::diagnostics::{DiagnosticSink, Silent};

/// Bytes of a driver info log kept for errors and diagnostics.
pub const DEFAULT_INFO_LOG_CAPACITY: usize = 499;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Knobs shared by [`super::compile_stage`] and [`super::build_program_with`].
#[derive(Clone)]
pub struct ShaderOptions {
    /// Upper bound, in bytes, on the info log captured from the driver.
    pub info_log_capacity: usize,
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl ShaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info_log_capacity(mut self, capacity: usize) -> Self {
        self.info_log_capacity = capacity;
        self
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Arc::new(sink);
        self
    }
}

impl Default for ShaderOptions {
    fn default() -> Self {
        Self {
            info_log_capacity: DEFAULT_INFO_LOG_CAPACITY,
            diagnostics: Arc::new(Silent),
        }
    }
}

impl fmt::Debug for ShaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderOptions")
            .field("info_log_capacity", &self.info_log_capacity)
            .finish_non_exhaustive()
    }
}

/// Cuts `log` down to at most `capacity` bytes on a char boundary.
pub(crate) fn truncate_log(mut log: String, capacity: usize) -> String {
    if log.len() > capacity {
        let mut end = capacity;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }

    log
}
