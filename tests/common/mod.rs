#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use auxgl::shader::{ShaderContext, ShaderStage};

/// Marker that makes the fake compiler reject a source.
pub const BROKEN: &str = "#error";

pub const VERTEX_SOURCE: &str = "#version 120
attribute vec3 position;
attribute vec4 color;
uniform mat4 mvp;
varying vec4 v_color;
void main() {
    v_color = color;
    gl_Position = mvp * vec4(position, 1.0);
}
";

pub const FRAGMENT_SOURCE: &str = "#version 120
varying vec4 v_color;
void main() {
    gl_FragColor = v_color;
}
";

#[derive(Debug)]
struct FakeStage {
    kind: ShaderStage,
    source: String,
    compiled: bool,
    deleted: bool,
}

#[derive(Debug, Default)]
struct FakeProgram {
    attached: Vec<u32>,
    pending: HashMap<String, u32>,
    locations: HashMap<String, u32>,
    linked: bool,
    deleted: bool,
}

#[derive(Debug, Default)]
struct FakeState {
    next_handle: u32,
    stages: HashMap<u32, FakeStage>,
    programs: HashMap<u32, FakeProgram>,
    calls: Vec<String>,
}

/// In-memory stand-in for a GL context.
///
/// A stage compiles unless its source contains [`BROKEN`] or lacks a
/// `main`. Handles start at 1 and are shared between stages and programs.
#[derive(Debug, Default)]
pub struct FakeContext {
    state: RefCell<FakeState>,
    refuse_stages: bool,
    refuse_programs: bool,
    fail_link: bool,
}

impl FakeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing_stages() -> Self {
        Self {
            refuse_stages: true,
            ..Self::default()
        }
    }

    pub fn refusing_programs() -> Self {
        Self {
            refuse_programs: true,
            ..Self::default()
        }
    }

    pub fn failing_link() -> Self {
        Self {
            fail_link: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn live_stages(&self) -> usize {
        self.state
            .borrow()
            .stages
            .values()
            .filter(|stage| !stage.deleted)
            .count()
    }

    pub fn live_programs(&self) -> usize {
        self.state
            .borrow()
            .programs
            .values()
            .filter(|program| !program.deleted)
            .count()
    }

    pub fn created_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn attached(&self, program: u32) -> Vec<ShaderStage> {
        let state = self.state.borrow();
        state.programs[&program]
            .attached
            .iter()
            .map(|shader| state.stages[shader].kind)
            .collect()
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_handle(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        state.next_handle
    }
}

impl ShaderContext for FakeContext {
    type Shader = u32;
    type Program = u32;

    fn create_stage(&self, stage: ShaderStage) -> Option<u32> {
        if self.refuse_stages {
            self.record(format!("create_stage({}) = none", stage));
            return None;
        }

        let handle = self.next_handle();
        self.state.borrow_mut().stages.insert(
            handle,
            FakeStage {
                kind: stage,
                source: String::new(),
                compiled: false,
                deleted: false,
            },
        );
        self.record(format!("create_stage({}) = {}", stage, handle));
        Some(handle)
    }

    fn set_source(&self, shader: u32, source: &str) {
        self.record(format!("set_source({})", shader));
        if let Some(stage) = self.state.borrow_mut().stages.get_mut(&shader) {
            stage.source = source.to_string();
        }
    }

    fn compile(&self, shader: u32) {
        self.record(format!("compile({})", shader));
        if let Some(stage) = self.state.borrow_mut().stages.get_mut(&shader) {
            stage.compiled = stage.source.contains("void main") && !stage.source.contains(BROKEN);
        }
    }

    fn compile_status(&self, shader: u32) -> bool {
        self.record(format!("compile_status({})", shader));
        self.state
            .borrow()
            .stages
            .get(&shader)
            .is_some_and(|stage| stage.compiled)
    }

    fn stage_info_log(&self, shader: u32, _capacity: usize) -> String {
        self.record(format!("stage_info_log({})", shader));
        let state = self.state.borrow();
        match state.stages.get(&shader) {
            Some(stage) if !stage.compiled => {
                format!("ERROR: 0:1: '{}' : syntax error\n", stage.source.trim())
            }
            _ => String::new(),
        }
    }

    fn delete_stage(&self, shader: u32) {
        self.record(format!("delete_stage({})", shader));
        if let Some(stage) = self.state.borrow_mut().stages.get_mut(&shader) {
            stage.deleted = true;
        }
    }

    fn create_program(&self) -> Option<u32> {
        if self.refuse_programs {
            self.record("create_program() = none".to_string());
            return None;
        }

        let handle = self.next_handle();
        self.state
            .borrow_mut()
            .programs
            .insert(handle, FakeProgram::default());
        self.record(format!("create_program() = {}", handle));
        Some(handle)
    }

    fn attach_stage(&self, program: u32, shader: u32) {
        self.record(format!("attach_stage({}, {})", program, shader));
        if let Some(program) = self.state.borrow_mut().programs.get_mut(&program) {
            program.attached.push(shader);
        }
    }

    fn bind_attribute_location(&self, program: u32, location: u32, name: &str) {
        self.record(format!(
            "bind_attribute_location({}, {}, {})",
            program, location, name
        ));
        if let Some(program) = self.state.borrow_mut().programs.get_mut(&program) {
            program.pending.insert(name.to_string(), location);
        }
    }

    fn link_program(&self, program: u32) {
        self.record(format!("link_program({})", program));
        let mut state = self.state.borrow_mut();
        let compiled = match state.programs.get(&program) {
            Some(p) => {
                p.attached.len() == 2 && p.attached.iter().all(|s| state.stages[s].compiled)
            }
            None => false,
        };

        if let Some(p) = state.programs.get_mut(&program) {
            p.linked = compiled && !self.fail_link;
            if p.linked {
                p.locations = p.pending.clone();
            }
        }
    }

    fn link_status(&self, program: u32) -> bool {
        self.record(format!("link_status({})", program));
        self.state
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32, _capacity: usize) -> String {
        self.record(format!("program_info_log({})", program));
        "error: varying v_color is not written by the vertex shader\n".to_string()
    }

    fn delete_program(&self, program: u32) {
        self.record(format!("delete_program({})", program));
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.deleted = true;
        }
    }

    fn attribute_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let p = state.programs.get(&program)?;
        if !p.linked || p.deleted {
            return None;
        }

        p.locations.get(name).copied()
    }
}
