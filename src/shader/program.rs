use scopeguard::{ScopeGuard, guard};

use super::{
    BuildError, CompileError, ShaderContext, ShaderOptions, ShaderStage, types::truncate_log,
};

/// Compiles a single stage.
///
/// On failure the driver's info log (bounded by
/// [`ShaderOptions::info_log_capacity`]) is sent to the diagnostic sink and
/// returned in the error, and the stage object is deleted before returning.
pub fn compile_stage<C: ShaderContext + ?Sized>(
    ctx: &C,
    source: &str,
    stage: ShaderStage,
    options: &ShaderOptions,
) -> Result<C::Shader, CompileError> {
    let shader = ctx
        .create_stage(stage)
        .ok_or(CompileError::CreateFailed(stage))?;
    let shader = guard(shader, |shader| ctx.delete_stage(shader));

    ctx.set_source(*shader, source);
    ctx.compile(*shader);

    if !ctx.compile_status(*shader) {
        let capacity = options.info_log_capacity;
        let log = truncate_log(ctx.stage_info_log(*shader, capacity), capacity);

        options
            .diagnostics
            .emit(&format!("GLSL error in {} shader: {}", stage, log.trim_end()));
        crate::dbg_log!(?stage, "shader stage rejected by driver");

        return Err(CompileError::Rejected { stage, log });
    }

    let shader = ScopeGuard::into_inner(shader);
    crate::dbg_log!(?stage, ?shader, "compiled shader stage");
    Ok(shader)
}

/// Compiles, binds and links a program with default [`ShaderOptions`].
///
/// See [`build_program_with`].
pub fn build_program<C: ShaderContext + ?Sized>(
    ctx: &C,
    vertex_source: &str,
    fragment_source: &str,
    attributes: &[&str],
) -> Result<C::Program, BuildError> {
    build_program_with(
        ctx,
        vertex_source,
        fragment_source,
        attributes,
        &ShaderOptions::default(),
    )
}

/// Compiles both stages, binds `attributes[i]` to location `i`, links and
/// checks the link status.
///
/// Binding stops at the first empty name. Every stage handle created here is
/// deleted before returning, and the program is deleted again if linking
/// fails, so an `Err` never leaves driver objects behind.
pub fn build_program_with<C: ShaderContext + ?Sized>(
    ctx: &C,
    vertex_source: &str,
    fragment_source: &str,
    attributes: &[&str],
    options: &ShaderOptions,
) -> Result<C::Program, BuildError> {
    let vertex = compile_stage(ctx, vertex_source, ShaderStage::Vertex, options)?;
    let vertex = guard(vertex, |shader| ctx.delete_stage(shader));

    let fragment = compile_stage(ctx, fragment_source, ShaderStage::Fragment, options)?;
    let fragment = guard(fragment, |shader| ctx.delete_stage(shader));

    let Some(program) = ctx.create_program() else {
        crate::error_log!("driver could not create a program object");
        return Err(BuildError::ProgramCreateFailed);
    };
    let program = guard(program, |program| ctx.delete_program(program));

    ctx.attach_stage(*program, *vertex);
    ctx.attach_stage(*program, *fragment);

    for (location, name) in attributes
        .iter()
        .take_while(|name| !name.is_empty())
        .enumerate()
    {
        ctx.bind_attribute_location(*program, location as u32, name);
        crate::dbg_log!(location, name, "bound attribute location");
    }

    ctx.link_program(*program);

    // Attached stages stay alive inside the program until it is deleted.
    drop(vertex);
    drop(fragment);

    if !ctx.link_status(*program) {
        let capacity = options.info_log_capacity;
        let log = truncate_log(ctx.program_info_log(*program, capacity), capacity);

        options
            .diagnostics
            .emit(&format!("GLSL link error: {}", log.trim_end()));
        crate::dbg_log!("program failed to link");

        return Err(BuildError::LinkFailed(log));
    }

    let program = ScopeGuard::into_inner(program);
    crate::dbg_log!(?program, "linked program");
    Ok(program)
}
