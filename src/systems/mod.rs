mod jitter;
mod mesh_sync;

pub use jitter::jitter_system;
pub use mesh_sync::mesh_sync_system;
