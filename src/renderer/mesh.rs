use gl::types::*;
use glam::Vec3;
use std::mem;
use std::ptr;

use crate::quad::QuadMesh;

/// Floats per vertex: position (3) followed by normal (3).
const FLOATS_PER_VERTEX: usize = 6;

pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    pub index_count: i32,
    vertex_count: usize,
}

impl Mesh {
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(gl::TRIANGLES, self.index_count, gl::UNSIGNED_INT, ptr::null());
            gl::BindVertexArray(0);
        }
    }

    /// Rewrites the vertex buffer in place. The vertex count is fixed at
    /// creation, so `positions` must match it.
    pub fn update_vertices(&self, positions: &[Vec3], normal: Vec3) -> Result<(), String> {
        if positions.len() != self.vertex_count {
            return Err(format!(
                "vertex count mismatch: mesh has {}, got {}",
                self.vertex_count,
                positions.len()
            ));
        }
        let vertices = interleave(positions, normal);
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                0,
                (vertices.len() * mem::size_of::<f32>()) as GLsizeiptr,
                vertices.as_ptr() as *const _,
            );
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
        Ok(())
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

/// Packs positions with a shared normal into the interleaved layout.
fn interleave(positions: &[Vec3], normal: Vec3) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(positions.len() * FLOATS_PER_VERTEX);
    for p in positions {
        vertices.extend_from_slice(&[p.x, p.y, p.z, normal.x, normal.y, normal.z]);
    }
    vertices
}

fn upload_mesh(vertices: &[f32], indices: &[u32], usage: GLenum) -> Mesh {
    let mut vao = 0;
    let mut vbo = 0;
    let mut ebo = 0;

    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::GenBuffers(1, &mut vbo);
        gl::GenBuffers(1, &mut ebo);

        gl::BindVertexArray(vao);

        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (vertices.len() * mem::size_of::<f32>()) as GLsizeiptr,
            vertices.as_ptr() as *const _,
            usage,
        );

        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (indices.len() * mem::size_of::<u32>()) as GLsizeiptr,
            indices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        let stride = (FLOATS_PER_VERTEX * mem::size_of::<f32>()) as GLsizei;

        // position attribute (location 0)
        gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
        gl::EnableVertexAttribArray(0);

        // normal attribute (location 1)
        gl::VertexAttribPointer(
            1,
            3,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (3 * mem::size_of::<f32>()) as *const _,
        );
        gl::EnableVertexAttribArray(1);

        gl::BindVertexArray(0);
    }

    Mesh {
        vao,
        vbo,
        ebo,
        index_count: indices.len() as i32,
        vertex_count: vertices.len() / FLOATS_PER_VERTEX,
    }
}

/// Uploads a quad with a dynamic vertex buffer so it can be rewritten per frame.
pub fn create_quad(quad: &QuadMesh) -> Mesh {
    let vertices = interleave(&quad.vertices, quad.normal());
    upload_mesh(&vertices, &quad.indices, gl::DYNAMIC_DRAW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleave_layout() {
        let quad = QuadMesh::new(2.0, 2.0);
        let v = interleave(&quad.vertices, quad.normal());
        assert_eq!(v.len(), 4 * FLOATS_PER_VERTEX);
        // second vertex: (2,0,0) followed by the -Z normal
        assert_eq!(&v[6..12], &[2.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn interleave_empty() {
        assert!(interleave(&[], Vec3::Z).is_empty());
    }
}
