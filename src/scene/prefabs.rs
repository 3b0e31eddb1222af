use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{Color, QuadJitter, Transform};
use crate::config::QuadConfig;
use crate::renderer::mesh::create_quad;
use crate::renderer::MeshStore;

const QUAD_COLOR: Vec3 = Vec3::new(0.85, 0.45, 0.2);

/// Builds the quad, commits its vertex and index buffers to a GPU mesh once,
/// and spawns the entity that owns both.
pub fn spawn_jitter_quad(world: &mut World, meshes: &mut MeshStore, config: &QuadConfig) -> Entity {
    let quad = QuadJitter::start(config.width, config.height, config.amplitude);
    let handle = meshes.add(create_quad(quad.mesh()));

    log::info!(
        "spawned {}x{} quad, jitter amplitude {}",
        config.width,
        config.height,
        quad.amplitude()
    );

    world.spawn((quad, handle, Transform::new(Vec3::ZERO), Color(QUAD_COLOR)))
}
