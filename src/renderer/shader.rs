use gl::types::*;
use glam::{Mat4, Vec3};
use std::collections::HashMap;
use std::ffi::CString;
use std::ptr;

pub struct ShaderProgram {
    pub id: GLuint,
    uniform_cache: HashMap<&'static str, GLint>,
}

impl ShaderProgram {
    pub fn from_sources(vert_src: &str, frag_src: &str) -> Result<Self, String> {
        unsafe {
            let vert = compile_shader(vert_src, gl::VERTEX_SHADER)?;
            let frag = match compile_shader(frag_src, gl::FRAGMENT_SHADER) {
                Ok(frag) => frag,
                Err(e) => {
                    gl::DeleteShader(vert);
                    return Err(e);
                }
            };

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            // Shaders are no longer needed once linked (or failed to link).
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success == 0 {
                let msg = info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
                gl::DeleteProgram(program);
                return Err(format!("shader link error: {msg}"));
            }

            Ok(Self {
                id: program,
                uniform_cache: HashMap::new(),
            })
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Unknown names resolve to -1, which GL silently ignores.
    fn uniform_location(&mut self, name: &'static str) -> GLint {
        let id = self.id;
        *self.uniform_cache.entry(name).or_insert_with(|| {
            CString::new(name)
                .map(|cname| unsafe { gl::GetUniformLocation(id, cname.as_ptr()) })
                .unwrap_or(-1)
        })
    }

    pub fn set_mat4(&mut self, name: &'static str, mat: &Mat4) {
        let loc = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix4fv(loc, 1, gl::FALSE, mat.to_cols_array().as_ptr());
        }
    }

    pub fn set_vec3(&mut self, name: &'static str, v: Vec3) {
        let loc = self.uniform_location(name);
        unsafe {
            gl::Uniform3f(loc, v.x, v.y, v.z);
        }
    }

    pub fn set_float(&mut self, name: &'static str, val: f32) {
        let loc = self.uniform_location(name);
        unsafe {
            gl::Uniform1f(loc, val);
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

type GetIv = unsafe fn(GLuint, GLenum, *mut GLint);
type GetInfoLog = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

unsafe fn info_log(object: GLuint, get_iv: GetIv, get_log: GetInfoLog) -> String {
    let mut len = 0;
    get_iv(object, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u8; len as usize];
    get_log(object, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    buf.pop(); // null terminator
    String::from_utf8_lossy(&buf).trim_end().to_string()
}

unsafe fn compile_shader(src: &str, shader_type: GLenum) -> Result<GLuint, String> {
    let kind = if shader_type == gl::VERTEX_SHADER {
        "vertex"
    } else {
        "fragment"
    };
    let c_src = CString::new(src).map_err(|e| format!("{kind} shader source: {e}"))?;

    let shader = gl::CreateShader(shader_type);
    gl::ShaderSource(shader, 1, &c_src.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == 0 {
        let msg = info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog);
        gl::DeleteShader(shader);
        return Err(format!("{kind} shader compile error: {msg}"));
    }
    Ok(shader)
}
