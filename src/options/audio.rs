use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Audio", inline)]
#[serde(default)]
/// Audio jitter buffer tuning.
pub struct AudioOptions {
    /// Let the client size the jitter buffer from measured network jitter.
    #[schemars(title = "Dynamic Jitter Buffers")]
    pub dynamic_jitter_buffers: bool,
    /// Fixed jitter buffer size, used when dynamic sizing is off.
    #[schemars(title = "Static Jitter Frames", range(min = 0.0, max = 10000.0), extend("step" = 1.0))]
    pub static_jitter_frames: f32,
    /// Frames the buffer may run ahead of the desired size.
    #[schemars(title = "Max Frames Over Desired", range(min = 0.0, max = 10000.0), extend("step" = 1.0))]
    pub max_frames_over_desired: f32,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            dynamic_jitter_buffers: true,
            static_jitter_frames: 1.0,
            max_frames_over_desired: 10.0,
        }
    }
}
