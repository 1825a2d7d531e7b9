use glam::Mat4;
use gridmaze_render::SceneView;

/// Perspective camera over a fixed scene view.
///
/// Only the aspect ratio changes at runtime (on window resize); the eye is
/// picked per frame from the session's camera flag via `SceneView`.
#[derive(Debug, Clone, Copy)]
pub struct BoardCamera {
    pub view: SceneView,
    pub aspect: f32,
}

impl BoardCamera {
    pub fn new(view: SceneView, aspect: f32) -> Self {
        Self { view, aspect }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.view.eye, self.view.target, self.view.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.view.fov_degrees.to_radians(),
            self.aspect,
            self.view.near,
            self.view.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for BoardCamera {
    fn default() -> Self {
        Self::new(SceneView::default(), 16.0 / 9.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_camera_produces_valid_matrix() {
        let cam = BoardCamera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
        assert_ne!(vp, Mat4::IDENTITY);
    }

    #[test]
    fn alternate_eye_changes_view() {
        let a = BoardCamera::new(SceneView::for_camera(false), 16.0 / 9.0);
        let b = BoardCamera::new(SceneView::for_camera(true), 16.0 / 9.0);
        assert_ne!(a.view_matrix(), b.view_matrix());
        assert_eq!(a.projection_matrix(), b.projection_matrix());
    }

    #[test]
    fn target_projects_near_screen_center() {
        let cam = BoardCamera::default();
        let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        assert!(ndc_x.abs() < 1e-5);
    }
}
