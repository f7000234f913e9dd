use glam::{EulerRot, Mat4, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// How the camera follows the avatar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// No mode selected yet.
    #[default]
    Null,
    /// Eye at the avatar's head.
    FirstPerson,
    /// Behind and above the avatar.
    ThirdPerson,
    /// Facing the avatar, as in a mirror.
    MyOwnFace,
}

/// Perspective camera state consumed by the render loop.
///
/// Angles are in degrees. [`update`](Self::update) derives orientation and
/// eye position from the orbit parameters; callers that drive the position
/// directly can skip it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    mode: CameraMode,
    position: Vec3,
    target_position: Vec3,
    field_of_view: f32,
    yaw: f32,
    pitch: f32,
    roll: f32,
    up: f32,
    distance: f32,
    orientation: Quat,
    znear: f32,
    zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin looking down -Z with no mode selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: CameraMode::Null,
            position: Vec3::ZERO,
            target_position: Vec3::ZERO,
            field_of_view: 60.0,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            up: 0.0,
            distance: 0.0,
            orientation: Quat::IDENTITY,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Camera configured from the persisted camera options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new();
        camera.apply_options(options);
        camera
    }

    /// Push option values (mode, projection, orbit) onto the camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.mode = options.mode;
        self.field_of_view = options.field_of_view;
        self.znear = options.znear;
        self.zfar = options.zfar;
        self.up = options.up;
        self.distance = options.distance;
    }

    /// Frame hook: rebuild orientation from yaw, pitch and roll, then orbit
    /// the eye around the target at `(0, up, distance)` in camera space.
    pub fn update(&mut self) {
        self.orientation = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        );
        let offset = Vec3::new(0.0, self.up, self.distance);
        self.position = self.target_position + self.orientation * offset;
    }

    /// Right-handed view matrix from the eye along the orientation's
    /// forward axis. Stays finite when the eye sits on the target.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(
            self.position,
            self.orientation * Vec3::NEG_Z,
            self.orientation * Vec3::Y,
        )
    }

    /// Perspective projection with `[0,1]` depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.field_of_view.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl Camera {
    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Set the view mode.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the eye position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Look-at target in world space.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Set the look-at target.
    pub fn set_target_position(&mut self, target: Vec3) {
        self.target_position = target;
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    /// Set the vertical field of view in degrees.
    pub fn set_field_of_view(&mut self, degrees: f32) {
        self.field_of_view = degrees;
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set yaw in degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch in degrees.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    /// Roll in degrees.
    #[must_use]
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Set roll in degrees.
    pub fn set_roll(&mut self, roll: f32) {
        self.roll = roll;
    }

    /// Height offset above the target.
    #[must_use]
    pub fn up(&self) -> f32 {
        self.up
    }

    /// Set the height offset above the target.
    pub fn set_up(&mut self, up: f32) {
        self.up = up;
    }

    /// Orbit distance from the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the orbit distance from the target.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Camera orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Set the orientation directly. Overwritten by the next
    /// [`update`](Self::update).
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn setters_round_trip() {
        let mut camera = Camera::new();
        camera.set_mode(CameraMode::ThirdPerson);
        camera.set_yaw(10.0);
        camera.set_pitch(-5.0);
        camera.set_roll(2.0);
        camera.set_up(1.5);
        camera.set_distance(4.0);
        camera.set_target_position(Vec3::new(1.0, 2.0, 3.0));
        camera.set_position(Vec3::X);
        camera.set_field_of_view(75.0);

        assert_eq!(camera.mode(), CameraMode::ThirdPerson);
        assert_eq!(camera.yaw(), 10.0);
        assert_eq!(camera.pitch(), -5.0);
        assert_eq!(camera.roll(), 2.0);
        assert_eq!(camera.up(), 1.5);
        assert_eq!(camera.distance(), 4.0);
        assert_eq!(camera.target_position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.position(), Vec3::X);
        assert_eq!(camera.field_of_view(), 75.0);
    }

    #[test]
    fn update_without_rotation_offsets_along_up_and_distance() {
        let mut camera = Camera::new();
        camera.set_target_position(Vec3::new(10.0, 0.0, -2.0));
        camera.set_up(1.5);
        camera.set_distance(3.0);
        camera.update();

        assert!(close(camera.position(), Vec3::new(10.0, 1.5, 1.0)));
        assert!(camera.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn yaw_orbits_around_the_target() {
        let mut camera = Camera::new();
        camera.set_distance(2.0);
        camera.set_yaw(90.0);
        camera.update();

        assert!(close(camera.position(), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn view_matrix_maps_target_in_front_of_eye() {
        let mut camera = Camera::new();
        camera.set_distance(5.0);
        camera.update();

        let target_in_view =
            camera.view_matrix().transform_point3(camera.target_position());
        assert!(close(target_in_view, Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn default_camera_has_a_finite_view() {
        let mut camera = Camera::new();
        camera.update();

        assert_eq!(camera.position(), camera.target_position());
        let view = camera.view_matrix();
        assert!(view.is_finite());
        assert!(view.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn options_configure_mode_and_projection() {
        let options = CameraOptions {
            mode: CameraMode::FirstPerson,
            field_of_view: 90.0,
            ..CameraOptions::default()
        };
        let camera = Camera::from_options(&options);

        assert_eq!(camera.mode(), CameraMode::FirstPerson);
        assert_eq!(camera.field_of_view(), 90.0);
        assert_eq!(camera.znear(), options.znear);
        assert!(camera.projection_matrix(1.0).is_finite());
    }
}
