//! GLSL shader compilation and linking.
//!
//! A [`ShaderProgram`] is either fully linked and usable, or construction
//! failed with a [`ShaderError`] carrying the driver's info log — no
//! partially-usable state escapes. Callers decide whether a failed program is
//! fatal for them.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use glam::Mat4;
use glow::HasContext;
use thiserror::Error;

/// One of the two programmable pipeline stages the demos use.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure while building a shader program.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader source {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to allocate a GL shader object: {0}")]
    Create(String),

    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program link failed:\n{log}")]
    Link { log: String },
}

/// A linked, GPU-executable combination of a vertex and a fragment stage.
pub struct ShaderProgram {
    program: glow::Program,
}

impl ShaderProgram {
    /// Reads both stages from UTF-8 source files, then compiles and links.
    pub fn from_paths(
        gl: &glow::Context,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex_src = read_source(vertex_path.as_ref())?;
        let fragment_src = read_source(fragment_path.as_ref())?;
        Self::from_sources(gl, &vertex_src, &fragment_src)
    }

    /// Compiles both stages and links them into a program.
    ///
    /// The stage objects are deleted once linking has happened; the linked
    /// program is the only handle kept.
    pub fn from_sources(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(message) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(ShaderError::Create(message));
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link { log });
            }

            Ok(Self { program })
        }
    }

    /// Makes this program current for subsequent draw calls.
    ///
    /// GL keeps exactly one program active per context; this replaces
    /// whatever was active before.
    pub fn activate(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Sets a boolean uniform (GLSL `bool` is an integer on the wire).
    pub fn set_bool(&self, gl: &glow::Context, name: &str, value: bool) {
        self.set_int(gl, name, value as i32);
    }

    /// Sets an integer uniform (also used for sampler bindings).
    ///
    /// The location is resolved by name on every call. A name absent from the
    /// linked program is a silent no-op, matching the driver's behavior for
    /// location -1 — the linker strips declared-but-unread uniforms, so
    /// treating this as an error would reject working programs. The same
    /// holds for the other setters.
    pub fn set_int(&self, gl: &glow::Context, name: &str, value: i32) {
        self.activate(gl);
        unsafe {
            if let Some(location) = gl.get_uniform_location(self.program, name) {
                gl.uniform_1_i32(Some(&location), value);
            }
        }
    }

    pub fn set_float(&self, gl: &glow::Context, name: &str, value: f32) {
        self.activate(gl);
        unsafe {
            if let Some(location) = gl.get_uniform_location(self.program, name) {
                gl.uniform_1_f32(Some(&location), value);
            }
        }
    }

    pub fn set_mat4(&self, gl: &glow::Context, name: &str, value: &Mat4) {
        self.activate(gl);
        unsafe {
            if let Some(location) = gl.get_uniform_location(self.program, name) {
                gl.uniform_matrix_4_f32_slice(Some(&location), false, value.as_ref());
            }
        }
    }

    /// Raw program handle, for calls this wrapper does not cover.
    pub fn id(&self) -> glow::Program {
        self.program
    }

    /// Deletes the program object. Call before the context is torn down.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    src: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl.create_shader(stage.gl_type()).map_err(ShaderError::Create)?;
        gl.shader_source(shader, src);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── diagnostics ───────────────────────────────────────────────────────

    #[test]
    fn stage_names_match_pipeline_terms() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn compile_error_names_the_failing_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:3(1): error: syntax error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("fragment"));
        assert!(message.contains("syntax error"));
    }

    #[test]
    fn link_error_carries_the_linker_log() {
        let err = ShaderError::Link {
            log: "error: varying `ourColor' not written".to_string(),
        };
        assert!(err.to_string().contains("ourColor"));
    }

    #[test]
    fn io_error_names_the_path() {
        let err = ShaderError::Io {
            path: PathBuf::from("shaders/missing.vert"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("shaders/missing.vert"));
    }

    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        let err = read_source(Path::new("no/such/shader.vert")).unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
    }
}
