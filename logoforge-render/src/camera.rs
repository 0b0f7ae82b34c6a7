//! Camera and model transforms for the hero logo
//!
//! The camera is fixed; all motion comes from the logo's model matrix, which
//! composes a static presentation pose with the animated orientation.

use nalgebra::{Matrix4, Perspective3, Point3, Rotation3, Translation3, Vector3};

use crate::orientation::Orientation;

/// Static root pose: a slight off-axis lean so the logo never reads as a
/// flat billboard even at rest.
const ROOT_PITCH: f32 = -0.04;
const ROOT_YAW: f32 = -0.05;
const ROOT_ROLL: f32 = -0.01;
const ROOT_SCALE: f32 = 0.78;
/// Offset of the mesh inside the root, nudging it off optical center
const MESH_OFFSET: [f32; 3] = [0.16, -0.03, 0.0];

/// Fixed perspective camera looking at the logo
#[derive(Debug, Clone)]
pub struct HeroCamera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl HeroCamera {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Point3::new(0.05, 0.03, 7.1),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: 24.0_f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 80.0,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far).into_inner()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for HeroCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

/// Model matrix for the logo mesh at a given animated orientation
pub fn logo_model_matrix(orientation: &Orientation) -> Matrix4<f32> {
    let root = Rotation3::from_euler_angles(ROOT_PITCH, ROOT_YAW, ROOT_ROLL);
    let animated =
        Rotation3::from_euler_angles(orientation.pitch, orientation.yaw, orientation.roll);
    let offset = Translation3::new(MESH_OFFSET[0], MESH_OFFSET[1], MESH_OFFSET[2]);

    root.to_homogeneous()
        * Matrix4::new_scaling(ROOT_SCALE)
        * animated.to_homogeneous()
        * offset.to_homogeneous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn camera_looks_down_negative_z() {
        let camera = HeroCamera::new(1.0);
        let view = camera.view_matrix();
        let eye = view.transform_point(&camera.position);
        assert_relative_eq!(eye.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye.z, 0.0, epsilon = 1e-5);

        let target = view.transform_point(&camera.target);
        assert!(target.z < 0.0);
    }

    #[test]
    fn rest_pose_is_not_identity() {
        let model = logo_model_matrix(&Orientation::default());
        assert!((model - Matrix4::identity()).norm() > 1e-3);
    }

    #[test]
    fn model_matrix_scales_by_root_scale() {
        let model = logo_model_matrix(&Orientation::default());
        let origin = model.transform_point(&Point3::origin());
        let unit_x = model.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!((unit_x - origin).norm(), ROOT_SCALE, epsilon = 1e-5);
    }
}
