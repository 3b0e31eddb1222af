use rand::Rng;

use crate::quad::{sanitize_amplitude, QuadMesh};

/// Owns a quad's vertex/index buffers and perturbs the vertices while the
/// trigger is held. `start` builds the geometry, `update` runs once per frame.
pub struct QuadJitter {
    mesh: QuadMesh,
    amplitude: f32,
}

impl QuadJitter {
    pub fn start(width: f32, height: f32, amplitude: f32) -> Self {
        Self {
            mesh: QuadMesh::new(width, height),
            amplitude: sanitize_amplitude(amplitude),
        }
    }

    /// Returns true when the vertices were modified and need recommitting.
    pub fn update<R: Rng + ?Sized>(&mut self, trigger: bool, rng: &mut R) -> bool {
        if !trigger {
            return false;
        }
        self.mesh.jitter(rng, self.amplitude);
        true
    }

    pub fn mesh(&self) -> &QuadMesh {
        &self.mesh
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn start_builds_quad() {
        let quad = QuadJitter::start(2.0, 2.0, 0.05);
        assert_eq!(quad.mesh(), &QuadMesh::new(2.0, 2.0));
        assert_eq!(quad.mesh().indices, [0, 2, 1, 2, 3, 1]);
    }

    #[test]
    fn active_update_moves_xy_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut quad = QuadJitter::start(2.0, 2.0, 0.05);
        let before = quad.mesh().vertices;

        assert!(quad.update(true, &mut rng));

        for (old, new) in before.iter().zip(quad.mesh().vertices.iter()) {
            let delta = *new - *old;
            assert!(delta.x.abs() <= 0.05 + 1e-5, "x moved by {}", delta.x);
            assert!(delta.y.abs() <= 0.05 + 1e-5, "y moved by {}", delta.y);
            assert_eq!(delta.z, 0.0);
        }
    }

    #[test]
    fn consecutive_active_updates_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut quad = QuadJitter::start(2.0, 2.0, 0.05);

        quad.update(true, &mut rng);
        let first = quad.mesh().vertices;
        quad.update(true, &mut rng);
        let second = quad.mesh().vertices;

        assert_ne!(first, second);
        assert_ne!(first, QuadMesh::new(2.0, 2.0).vertices);
    }

    #[test]
    fn inactive_update_leaves_vertices_alone() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut quad = QuadJitter::start(2.0, 2.0, 0.05);
        quad.update(true, &mut rng);
        let before = quad.mesh().vertices;

        assert!(!quad.update(false, &mut rng));
        assert_eq!(quad.mesh().vertices, before);
    }

    #[test]
    fn same_seed_same_drift() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut quad = QuadJitter::start(2.0, 2.0, 0.05);
            for _ in 0..10 {
                quad.update(true, &mut rng);
            }
            quad.mesh().vertices
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }

    #[test]
    fn drift_is_not_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut quad = QuadJitter::start(2.0, 2.0, 0.05);
        for _ in 0..1000 {
            quad.update(true, &mut rng);
        }
        let max_drift = quad
            .mesh()
            .vertices
            .iter()
            .zip(QuadMesh::new(2.0, 2.0).vertices.iter())
            .map(|(a, b)| (*a - *b).truncate().length())
            .fold(0.0_f32, f32::max);
        assert!(max_drift > 0.05);
        assert!(quad.mesh().vertices.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn negative_amplitude_is_treated_as_magnitude() {
        assert_eq!(QuadJitter::start(1.0, 1.0, -0.2).amplitude(), 0.2);
    }

    #[test]
    fn non_finite_amplitude_updates_without_panicking() {
        let mut rng = StdRng::seed_from_u64(2);
        for amplitude in [f32::NAN, f32::INFINITY, f32::MAX] {
            let mut quad = QuadJitter::start(2.0, 2.0, amplitude);
            assert!(quad.update(true, &mut rng));
            assert!(quad.mesh().vertices.iter().all(|v| v.is_finite()));
        }
    }
}
