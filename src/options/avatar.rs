use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Avatar", inline)]
#[serde(default)]
/// Avatar identity and tuning.
pub struct AvatarOptions {
    /// Name shown above the avatar to other users.
    #[schemars(title = "Display Name")]
    pub display_name: String,
    /// Model URL; empty uses the default body.
    #[schemars(title = "Appearance")]
    pub model_url: String,
    /// How far the body follows head lean.
    #[schemars(title = "Lean Scale", range(min = 0.0, max = 99.9), extend("step" = 1.0))]
    pub lean_scale: f32,
    /// Uniform avatar scale.
    #[schemars(title = "Avatar Scale", range(min = 0.01, max = 99.9), extend("step" = 1.0))]
    pub scale: f32,
    /// Pupil dilation, 0 (closed) to 1 (wide).
    #[schemars(title = "Pupil Dilation", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub pupil_dilation: f32,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            model_url: String::new(),
            lean_scale: 0.05,
            scale: 1.0,
            pupil_dilation: 0.25,
        }
    }
}
