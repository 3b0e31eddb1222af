use glam::{Mat4, Vec3};

/// Headroom around the framed object so jitter drift stays on screen a while.
const FRAME_MARGIN: f32 = 1.5;

/// Fixed perspective camera on the -Z side of the scene, looking along +Z.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
}

impl Camera {
    /// Places the camera so an object of `extent` centred on `center` fits the view.
    pub fn framing(center: Vec3, extent: f32) -> Self {
        let fov = 45.0_f32;
        let half_fov = (fov * 0.5).to_radians();
        let distance = (extent * 0.5 * FRAME_MARGIN / half_fov.tan()).max(1.0);
        Self {
            position: center - Vec3::Z * distance,
            target: center,
            fov,
        }
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let far = (self.distance() * 4.0).max(100.0);
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect, 0.1, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sits_in_front_of_negative_z_face() {
        let center = Vec3::new(1.0, 1.0, 0.0);
        let camera = Camera::framing(center, 2.0);
        assert!(camera.position.z < 0.0);
        assert_eq!(camera.position.truncate(), center.truncate());
    }

    #[test]
    fn target_lands_straight_ahead() {
        let camera = Camera::framing(Vec3::new(1.0, 1.0, 0.0), 2.0);
        let in_view = camera.view_matrix().transform_point3(camera.target);
        assert!(in_view.x.abs() < 1e-5 && in_view.y.abs() < 1e-5);
        assert!((in_view.z + camera.distance()).abs() < 1e-4);
    }

    #[test]
    fn larger_objects_push_camera_back() {
        let near = Camera::framing(Vec3::ZERO, 2.0);
        let far = Camera::framing(Vec3::ZERO, 20.0);
        assert!(far.distance() > near.distance());
    }
}
