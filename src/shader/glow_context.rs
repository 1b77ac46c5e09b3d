use glow::HasContext;

use super::{ShaderContext, ShaderStage};

type GlShader = <glow::Context as HasContext>::Shader;
type GlProgram = <glow::Context as HasContext>::Program;

// SAFETY (all blocks below): the caller owns a current GL context on this
// thread and only passes handles created by that same context.
impl ShaderContext for glow::Context {
    type Shader = GlShader;
    type Program = GlProgram;

    fn create_stage(&self, stage: ShaderStage) -> Option<GlShader> {
        let ty = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };

        unsafe { HasContext::create_shader(self, ty) }.ok()
    }

    fn set_source(&self, shader: GlShader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile(&self, shader: GlShader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn compile_status(&self, shader: GlShader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn stage_info_log(&self, shader: GlShader, _capacity: usize) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_stage(&self, shader: GlShader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Option<GlProgram> {
        unsafe { HasContext::create_program(self) }.ok()
    }

    fn attach_stage(&self, program: GlProgram, shader: GlShader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn bind_attribute_location(&self, program: GlProgram, location: u32, name: &str) {
        unsafe { HasContext::bind_attrib_location(self, program, location, name) }
    }

    fn link_program(&self, program: GlProgram) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn link_status(&self, program: GlProgram) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: GlProgram, _capacity: usize) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn delete_program(&self, program: GlProgram) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn attribute_location(&self, program: GlProgram, name: &str) -> Option<u32> {
        unsafe { HasContext::get_attrib_location(self, program, name) }
    }
}
