use std::path::PathBuf;

use thiserror::Error;

use super::ShaderStage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("driver could not create a {0} stage")]
    CreateFailed(ShaderStage),
    #[error("{stage} stage failed to compile: {log}")]
    Rejected { stage: ShaderStage, log: String },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no {0} shader source was provided")]
    MissingSource(ShaderStage),
    #[error("failed to read shader file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("driver could not create a {0} stage")]
    StageCreateFailed(ShaderStage),
    #[error("vertex shader failed to compile: {0}")]
    VertexCompileFailed(String),
    #[error("fragment shader failed to compile: {0}")]
    FragmentCompileFailed(String),
    #[error("driver could not create a program object")]
    ProgramCreateFailed,
    #[error("program failed to link: {0}")]
    LinkFailed(String),
}

impl From<CompileError> for BuildError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::CreateFailed(stage) => BuildError::StageCreateFailed(stage),
            CompileError::Rejected {
                stage: ShaderStage::Vertex,
                log,
            } => BuildError::VertexCompileFailed(log),
            CompileError::Rejected {
                stage: ShaderStage::Fragment,
                log,
            } => BuildError::FragmentCompileFailed(log),
        }
    }
}
