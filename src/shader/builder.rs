use std::path::Path;

use super::{BuildError, ShaderContext, ShaderOptions, ShaderStage, build_program_with};

/// Builder for linking a vertex + fragment program against a [`ShaderContext`].
///
/// This builder allows you to set the GLSL vertex and fragment sources from
/// files or strings, list the attributes to bind, and tune the
/// [`ShaderOptions`] before calling [`ProgramBuilder::build`].
pub struct ProgramBuilder<'a, C: ShaderContext + ?Sized> {
    ctx: &'a C,
    // A failed file read is kept in the slot until that stage is set again.
    vertex: Option<Result<String, BuildError>>,
    fragment: Option<Result<String, BuildError>>,
    attributes: Vec<String>,
    options: ShaderOptions,
}

impl<'a, C: ShaderContext + ?Sized> ProgramBuilder<'a, C> {
    pub fn new(ctx: &'a C) -> Self {
        Self {
            ctx,
            vertex: None,
            fragment: None,
            attributes: Vec::new(),
            options: ShaderOptions::default(),
        }
    }

    /// Sets the vertex shader source code from a string.
    pub fn set_vertex_code(mut self, source: &str) -> Self {
        self.vertex = Some(Ok(source.to_string()));
        self
    }

    /// Sets the fragment shader source code from a string.
    pub fn set_fragment_code(mut self, source: &str) -> Self {
        self.fragment = Some(Ok(source.to_string()));
        self
    }

    /// Sets the vertex shader source code from a file.
    ///
    /// A read failure is reported by [`ProgramBuilder::build`] unless the
    /// vertex source is replaced first.
    pub fn set_vertex_file(mut self, path: impl AsRef<Path>) -> Self {
        self.vertex = Some(read_source(path.as_ref()));
        self
    }

    /// Sets the fragment shader source code from a file.
    ///
    /// A read failure is reported by [`ProgramBuilder::build`] unless the
    /// fragment source is replaced first.
    pub fn set_fragment_file(mut self, path: impl AsRef<Path>) -> Self {
        self.fragment = Some(read_source(path.as_ref()));
        self
    }

    /// Attribute names, bound to locations 0, 1, 2, ... in order.
    pub fn with_attributes<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.attributes = names.iter().map(|name| name.as_ref().to_string()).collect();
        self
    }

    pub fn with_options(mut self, options: ShaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<C::Program, BuildError> {
        let vertex = self
            .vertex
            .unwrap_or(Err(BuildError::MissingSource(ShaderStage::Vertex)))?;
        let fragment = self
            .fragment
            .unwrap_or(Err(BuildError::MissingSource(ShaderStage::Fragment)))?;
        let attributes: Vec<&str> = self.attributes.iter().map(String::as_str).collect();

        build_program_with(self.ctx, &vertex, &fragment, &attributes, &self.options)
    }
}

fn read_source(path: &Path) -> Result<String, BuildError> {
    std::fs::read_to_string(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
