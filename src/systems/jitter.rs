use hecs::{Entity, World};
use rand::Rng;

use crate::components::{MeshDirty, QuadJitter};

/// Runs one update on every jittering quad and flags the ones that changed
/// for re-upload. Returns how many quads were updated.
pub fn jitter_system<R: Rng + ?Sized>(world: &mut World, trigger: bool, rng: &mut R) -> usize {
    let changed: Vec<Entity> = world
        .query_mut::<&mut QuadJitter>()
        .into_iter()
        .filter_map(|(entity, quad)| quad.update(trigger, &mut *rng).then_some(entity))
        .collect();

    for &entity in &changed {
        let _ = world.insert_one(entity, MeshDirty);
    }

    changed.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::QuadMesh;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dirty_count(world: &World) -> usize {
        world.query::<&MeshDirty>().iter().count()
    }

    #[test]
    fn active_trigger_updates_and_flags_every_quad() {
        let mut world = World::new();
        let a = world.spawn((QuadJitter::start(2.0, 2.0, 0.05),));
        let b = world.spawn((QuadJitter::start(1.0, 3.0, 0.05),));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(jitter_system(&mut world, true, &mut rng), 2);
        assert!(world.get::<&MeshDirty>(a).is_ok());
        assert!(world.get::<&MeshDirty>(b).is_ok());
        assert_ne!(
            world.get::<&QuadJitter>(a).unwrap().mesh().vertices,
            QuadMesh::new(2.0, 2.0).vertices
        );
    }

    #[test]
    fn inactive_trigger_touches_nothing() {
        let mut world = World::new();
        let e = world.spawn((QuadJitter::start(2.0, 2.0, 0.05),));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(jitter_system(&mut world, false, &mut rng), 0);
        assert_eq!(dirty_count(&world), 0);
        assert_eq!(
            world.get::<&QuadJitter>(e).unwrap().mesh(),
            &QuadMesh::new(2.0, 2.0)
        );
    }

    #[test]
    fn entities_without_quads_are_ignored() {
        let mut world = World::new();
        world.spawn((42u32,));
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(jitter_system(&mut world, true, &mut rng), 0);
        assert_eq!(dirty_count(&world), 0);
    }
}
