//! CameraRig - camera pose for the render surface.
//!
//! The rig stores eye position and look-at target. In orbit mode the render
//! surface's orbit controls own the pose; in chase mode the director drives
//! `follow()` every frame. `view_matrix()` is what the render surface
//! actually consumes.

use glam::{Mat4, Vec3};

/// Canonical startup pose (matches the scene's initial framing)
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 2.0, 4.0);

/// Canonical reset pose, looking at the globe center
pub const RESET_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Distance the chase camera trails behind the active rocket
const CHASE_OFFSET: f32 = 1.5;

/// Camera pose: eye position plus look-at target, Y-up.
#[derive(Clone, Debug)]
pub struct CameraRig {
    position: Vec3,
    target: Vec3,
    pub fov: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
            target: Vec3::ZERO,
            fov: 45.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Set pose directly (orbit controls path)
    pub fn set_pose(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// Trail the chase camera behind a rocket, looking at it.
    ///
    /// The camera sits on the rocket's radial line, below it (earth side),
    /// so ascent reads as the rocket pulling away from the globe.
    pub fn follow(&mut self, rocket_position: Vec3) {
        let radial = rocket_position.normalize_or_zero();
        self.position = rocket_position - radial * CHASE_OFFSET;
        self.target = rocket_position;
    }

    /// Snap to the canonical reset pose, looking at the globe center
    pub fn reset_to_earth(&mut self) {
        self.position = RESET_POSITION;
        self.target = Vec3::ZERO;
    }

    /// Euclidean distance from the camera to the globe center
    pub fn distance_from_origin(&self) -> f32 {
        self.position.length()
    }

    /// View matrix (world -> camera space) for the render surface
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
