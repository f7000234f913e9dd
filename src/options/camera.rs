use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera mode, projection and orbit parameters.
pub struct CameraOptions {
    /// How the camera follows the avatar.
    #[schemars(title = "Camera Mode")]
    pub mode: CameraMode,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 180.0), extend("step" = 1.0))]
    pub field_of_view: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Third-person height offset above the avatar.
    #[schemars(title = "Height", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub up: f32,
    /// Third-person distance behind the avatar.
    #[schemars(title = "Distance", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: CameraMode::ThirdPerson,
            field_of_view: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            up: 0.2,
            distance: 1.5,
        }
    }
}
