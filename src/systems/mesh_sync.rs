use anyhow::{anyhow, Result};
use hecs::{Entity, World};

use crate::components::{MeshDirty, MeshHandle, QuadJitter};
use crate::renderer::MeshStore;

/// Recommits the vertices of every dirty quad to its GPU mesh and clears the
/// dirty marker. Returns how many meshes were uploaded.
pub fn mesh_sync_system(world: &mut World, meshes: &MeshStore) -> Result<usize> {
    let mut synced: Vec<Entity> = Vec::new();

    for (entity, (quad, handle)) in world
        .query::<(&QuadJitter, &MeshHandle)>()
        .with::<&MeshDirty>()
        .iter()
    {
        let mesh = meshes
            .get(*handle)
            .ok_or_else(|| anyhow!("entity {entity:?} references missing mesh {}", handle.0))?;
        let quad = quad.mesh();
        mesh.update_vertices(&quad.vertices, quad.normal())
            .map_err(|e| anyhow!("uploading quad {entity:?}: {e}"))?;
        synced.push(entity);
    }

    for entity in &synced {
        let _ = world.remove_one::<MeshDirty>(*entity);
    }

    Ok(synced.len())
}
