use glam::Vec3;

/// Camera/view configuration for rendering.
///
/// Two fixed eye positions only; there is no free camera in this demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector defining camera tilt.
    pub up: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl SceneView {
    /// Oblique view from behind the board.
    pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, -7.0, 3.0);
    /// Top-down-ish alternate view.
    pub const ALTERNATE_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    /// View for the session's current camera flag.
    pub fn for_camera(alternate: bool) -> Self {
        Self {
            eye: if alternate {
                Self::ALTERNATE_EYE
            } else {
                Self::DEFAULT_EYE
            },
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 90.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::for_camera(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_uses_primary_eye() {
        let view = SceneView::default();
        assert_eq!(view.eye, SceneView::DEFAULT_EYE);
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 90.0);
    }

    #[test]
    fn toggle_switches_eyes_only() {
        let a = SceneView::for_camera(false);
        let b = SceneView::for_camera(true);
        assert_ne!(a.eye, b.eye);
        assert_eq!(b.eye, SceneView::ALTERNATE_EYE);
        assert_eq!(a.target, b.target);
        assert_eq!(a.fov_degrees, b.fov_degrees);
    }
}
