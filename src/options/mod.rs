//! Reference settings model with TOML persistence.
//!
//! [`Options`] is the model the default preference set binds to. It
//! serializes to/from TOML so a user profile can be stored on disk, and
//! exposes a JSON Schema for UI tooling. The preference registry itself
//! never depends on this module.

mod audio;
mod avatar;
mod bindings;
mod camera;
mod general;

use std::path::Path;

pub use audio::AudioOptions;
pub use avatar::AvatarOptions;
pub use bindings::{categories, register_preferences};
pub use camera::CameraOptions;
pub use general::GeneralOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[audio]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Avatar identity and tuning.
    pub avatar: AvatarOptions,
    /// Camera mode and projection.
    pub camera: CameraOptions,
    /// Audio jitter buffers.
    pub audio: AudioOptions,
    /// Folders and privacy.
    pub general: GeneralOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[avatar]
display_name = "Wanderer"

[camera]
mode = "first_person"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.avatar.display_name, "Wanderer");
        assert_eq!(opts.camera.mode, CameraMode::FirstPerson);
        // Everything else should be default
        assert_eq!(opts.avatar.scale, 1.0);
        assert_eq!(opts.audio, AudioOptions::default());
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-options-{}", std::process::id()));
        let path = dir.join("profile.toml");

        let mut opts = Options::default();
        opts.general.send_data = false;
        opts.audio.static_jitter_frames = 4.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[avatar\nscale = ").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(VantageError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(VantageError::Io(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("avatar"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("audio"));
        assert!(props.contains_key("general"));

        // Clipping planes are not exposed to the UI
        let camera = &props["camera"]["properties"];
        assert!(camera.get("field_of_view").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("zfar").is_none());
    }
}
