use crate::assets::shaders::ShaderSource;
use gl::types::*;
use std::ffi::{CString, NulError};
use std::fmt;
use std::ptr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader source not found at {path}: {source}")]
    SourceNotFound {
        path: String,
        source: std::io::Error,
    },
    #[error("{kind} shader compilation failed: {log}")]
    Compilation { kind: ShaderKind, log: String },
    #[error("program linking failed: {0}")]
    Linking(String),
    #[error("program validation failed: {0}")]
    Validation(String),
    #[error("null byte in shader source: {0}")]
    Nul(#[from] NulError),
}

/// The two pipeline stages a two-section shader file provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => write!(f, "vertex"),
            ShaderKind::Fragment => write!(f, "fragment"),
        }
    }
}

/// A linked GPU program. Owns the GL handle and deletes it on drop.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a program. The intermediate
    /// shader objects are released once the program holds the linked code.
    /// Any compile, link, or validation failure carries the driver's log and
    /// leaves no GL objects behind.
    pub fn build(source: &ShaderSource) -> Result<Self, ShaderError> {
        let vertex_shader = Self::compile_shader(ShaderKind::Vertex, &source.vertex_source)?;
        let fragment_shader =
            match Self::compile_shader(ShaderKind::Fragment, &source.fragment_source) {
                Ok(shader) => shader,
                Err(err) => {
                    unsafe { gl::DeleteShader(vertex_shader) };
                    return Err(err);
                }
            };

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }
        if success == 0 {
            let log = Self::program_info_log(program);
            unsafe { gl::DeleteProgram(program) };
            return Err(ShaderError::Linking(log));
        }

        unsafe {
            gl::ValidateProgram(program);
            gl::GetProgramiv(program, gl::VALIDATE_STATUS, &mut success);
        }
        if success == 0 {
            let log = Self::program_info_log(program);
            unsafe { gl::DeleteProgram(program) };
            return Err(ShaderError::Validation(log));
        }

        Ok(ShaderProgram { id: program })
    }

    fn compile_shader(kind: ShaderKind, source: &str) -> Result<GLuint, ShaderError> {
        let source_cstring = CString::new(source.as_bytes())?;
        let shader = unsafe { gl::CreateShader(kind.gl_enum()) };

        unsafe {
            gl::ShaderSource(shader, 1, &source_cstring.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }
        if success == 0 {
            let log = Self::shader_info_log(shader);
            unsafe { gl::DeleteShader(shader) };
            return Err(ShaderError::Compilation { kind, log });
        }

        Ok(shader)
    }

    fn shader_info_log(shader: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = Self::create_whitespace_cstring_with_len(len as usize);
        unsafe {
            gl::GetShaderInfoLog(shader, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
        }
        log.to_string_lossy().into_owned()
    }

    fn program_info_log(program: GLuint) -> String {
        let mut len = 0;
        unsafe {
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = Self::create_whitespace_cstring_with_len(len as usize);
        unsafe {
            gl::GetProgramInfoLog(program, len, ptr::null_mut(), log.as_ptr() as *mut GLchar);
        }
        log.to_string_lossy().into_owned()
    }

    fn create_whitespace_cstring_with_len(len: usize) -> CString {
        // Allocate buffer of correct size
        let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
        // Fill it with spaces
        buffer.extend([b' '].iter().cycle().take(len));
        // Convert buffer to CString
        unsafe { CString::from_vec_unchecked(buffer) }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}
