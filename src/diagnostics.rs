//! Pluggable sinks for compile and link diagnostics.
//!
//! The host application picks the sink at runtime through
//! [`crate::shader::ShaderOptions::with_diagnostics`]. Nothing but the
//! diagnostic output itself depends on which sink is installed.

/// Receives one formatted line per compile or link failure.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn emit(&self, _line: &str) {}
}

/// Writes `[auxgl] <line>` to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl DiagnosticSink for Stderr {
    fn emit(&self, line: &str) {
        eprintln!("[auxgl] {}", line);
    }
}

/// Forwards each line to `tracing` at warn level under the `auxgl` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracing;

impl DiagnosticSink for Tracing {
    fn emit(&self, line: &str) {
        tracing::warn!(target: "auxgl", "{}", line);
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, line: &str) {
        self(line)
    }
}
