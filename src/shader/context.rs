use std::fmt::Debug;

use super::ShaderStage;

/// The slice of a graphics driver needed to compile and link a program.
///
/// The context is passed explicitly to every builder call instead of being
/// picked up from ambient state, so whatever thread affinity the driver has
/// lives in the implementing type. Handles are owned by the driver; the
/// builder only ever deletes handles it created itself.
pub trait ShaderContext {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;

    /// Returns `None` if the driver could not allocate a stage object.
    fn create_stage(&self, stage: ShaderStage) -> Option<Self::Shader>;
    fn set_source(&self, shader: Self::Shader, source: &str);
    fn compile(&self, shader: Self::Shader);
    fn compile_status(&self, shader: Self::Shader) -> bool;
    /// The driver may ignore `capacity`; callers truncate the result anyway.
    fn stage_info_log(&self, shader: Self::Shader, capacity: usize) -> String;
    fn delete_stage(&self, shader: Self::Shader);

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_stage(&self, program: Self::Program, shader: Self::Shader);
    fn bind_attribute_location(&self, program: Self::Program, location: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program, capacity: usize) -> String;
    fn delete_program(&self, program: Self::Program);

    /// Location of an active attribute after linking.
    fn attribute_location(&self, program: Self::Program, name: &str) -> Option<u32>;
}
