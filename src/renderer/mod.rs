pub mod mesh;
pub mod shader;

use glam::{Mat4, Vec3};
use hecs::World;
use mesh::Mesh;
use shader::ShaderProgram;

use crate::components::{Color, MeshHandle, Transform};

const VERT_SRC: &str = include_str!("../../shaders/quad.vert");
const FRAG_SRC: &str = include_str!("../../shaders/quad.frag");

const CLEAR_COLOR: Vec3 = Vec3::new(0.1, 0.1, 0.15);
const LIGHT_DIR: Vec3 = Vec3::new(-0.3, -0.5, 1.0);
const AMBIENT: f32 = 0.25;

/// Holds all loaded meshes. Entities reference meshes by MeshHandle index.
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }
}

pub struct Renderer {
    shader: ShaderProgram,
}

impl Renderer {
    pub fn init() -> Result<Self, String> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            // The quad is viewed from whichever side it drifts to.
            gl::Disable(gl::CULL_FACE);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        let shader = ShaderProgram::from_sources(VERT_SRC, FRAG_SRC)?;

        Ok(Self { shader })
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn draw_scene(&mut self, world: &World, meshes: &MeshStore, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_mat4("u_view", view);
        self.shader.set_mat4("u_projection", proj);
        self.shader.set_vec3("u_light_dir", LIGHT_DIR);
        self.shader.set_float("u_ambient", AMBIENT);

        for (_entity, (transform, mesh_handle, color)) in
            world.query::<(&Transform, &MeshHandle, &Color)>().iter()
        {
            let Some(mesh) = meshes.get(*mesh_handle) else {
                continue;
            };
            self.shader.set_mat4("u_model", &transform.matrix());
            self.shader.set_vec3("u_object_color", color.0);
            mesh.draw();
        }
    }
}
