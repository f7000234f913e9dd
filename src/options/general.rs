use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "General", inline)]
#[serde(default)]
/// Folders and privacy switches.
pub struct GeneralOptions {
    /// Where snapshots are written.
    #[schemars(title = "Snapshots Folder")]
    pub snapshots_dir: String,
    /// Where scripts are loaded from.
    #[schemars(title = "Scripts Folder")]
    pub scripts_dir: String,
    /// Share anonymous usage data.
    #[schemars(title = "Send Data")]
    pub send_data: bool,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            snapshots_dir: String::new(),
            scripts_dir: String::new(),
            send_data: true,
        }
    }
}
