use glam::Vec3;
use rand::Rng;

pub const QUAD_VERTEX_COUNT: usize = 4;

/// Largest accepted per-frame jitter offset. Keeps `gen_range` well inside
/// the f32 range it can sample from.
pub const MAX_AMPLITUDE: f32 = 1.0e3;

/// Two triangles, (0,2,1) and (2,3,1). Wound so the face points down -Z.
pub const QUAD_INDICES: [u32; 6] = [0, 2, 1, 2, 3, 1];

/// CPU-side quad geometry: four corners plus a fixed index list.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadMesh {
    pub vertices: [Vec3; QUAD_VERTEX_COUNT],
    pub indices: [u32; 6],
}

impl QuadMesh {
    /// Rectangle in the XY plane with one corner at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            vertices: [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(width, 0.0, 0.0),
                Vec3::new(0.0, height, 0.0),
                Vec3::new(width, height, 0.0),
            ],
            indices: QUAD_INDICES,
        }
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Face normal of the first non-degenerate triangle, or -Z when every
    /// triangle has collapsed.
    pub fn normal(&self) -> Vec3 {
        self.triangles()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                (b - a).cross(c - a).normalize_or_zero()
            })
            .find(|n| *n != Vec3::ZERO)
            .unwrap_or(Vec3::NEG_Z)
    }

    pub fn center(&self) -> Vec3 {
        self.vertices.iter().copied().sum::<Vec3>() / QUAD_VERTEX_COUNT as f32
    }

    /// Largest side of the axis-aligned bounds, used for camera framing.
    pub fn extent(&self) -> f32 {
        let min = self.vertices.iter().copied().reduce(Vec3::min).unwrap_or(Vec3::ZERO);
        let max = self.vertices.iter().copied().reduce(Vec3::max).unwrap_or(Vec3::ZERO);
        (max - min).max_element()
    }

    /// Offsets x and y of every vertex by an independent uniform sample in
    /// `[-amplitude, amplitude]`. z is left alone. Offsets accumulate.
    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R, amplitude: f32) {
        let amplitude = sanitize_amplitude(amplitude);
        for v in self.vertices.iter_mut() {
            v.x += rng.gen_range(-amplitude..=amplitude);
            v.y += rng.gen_range(-amplitude..=amplitude);
        }
    }
}

/// Magnitude clamped to `MAX_AMPLITUDE`; non-finite values become 0.
pub fn sanitize_amplitude(amplitude: f32) -> f32 {
    if amplitude.is_finite() {
        amplitude.abs().min(MAX_AMPLITUDE)
    } else {
        0.0
    }
}
