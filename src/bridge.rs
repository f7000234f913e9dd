//! JSON boundary between the preference registry and a UI.
//!
//! **Outbound**: [`snapshot`] renders the registry as ordered categories,
//! each preference carrying its identity, kind, enabled flag, cached value
//! and kind metadata. Re-send it after change notifications.
//!
//! **Inbound**: [`parse_action`] turns a UI message into a [`UiAction`] and
//! [`apply_action`] drives the registry with it.

use serde::Serialize;
use serde_json::Value;

use crate::error::VantageError;
use crate::preferences::{
    Preference, PreferenceKind, PreferenceValue, Preferences, Range,
};

/// Actions sent from a UI to the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Write one preference's cached value.
    SetValue {
        /// Category of the target preference.
        category: String,
        /// Name of the target preference.
        name: String,
        /// New JSON value (bool, number or string).
        value: Value,
    },
    /// Enable or disable one preference.
    SetEnabled {
        /// Category of the target preference.
        category: String,
        /// Name of the target preference.
        name: String,
        /// New enabled state.
        enabled: bool,
    },
    /// Commit every cache to the model ("OK"/"Apply").
    Save,
    /// Refresh every cache from the model ("Revert").
    Load,
}

/// Serializable view of the whole registry.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Categories in first-seen order.
    pub categories: Vec<CategoryView<'a>>,
}

/// One category and its preferences, in insertion order.
#[derive(Debug, Serialize)]
pub struct CategoryView<'a> {
    /// Category name.
    pub name: &'a str,
    /// Preferences in this category.
    pub preferences: Vec<PreferenceView<'a>>,
}

/// Presentation view of a single preference.
#[derive(Debug, Serialize)]
pub struct PreferenceView<'a> {
    /// Grouping key.
    pub category: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Control kind.
    pub kind: PreferenceKind,
    /// Whether the control is editable.
    pub enabled: bool,
    /// Cached value; absent for buttons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PreferenceValue>,
    /// Slider/spinner hints.
    #[serde(flatten)]
    pub range: Option<Range>,
    /// Empty-field hint for text entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<&'a str>,
    /// Picker label for browsable entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_label: Option<&'a str>,
}

impl<'a> From<&'a Preference> for PreferenceView<'a> {
    fn from(pref: &'a Preference) -> Self {
        Self {
            category: pref.category(),
            name: pref.name(),
            kind: pref.kind(),
            enabled: pref.is_enabled(),
            value: pref.current(),
            range: pref.range().copied(),
            placeholder_text: pref.placeholder_text(),
            browse_label: pref.browse_label(),
        }
    }
}

/// Build the presentation view of `prefs`.
#[must_use]
pub fn snapshot(prefs: &Preferences) -> Snapshot<'_> {
    let categories = prefs
        .categories()
        .iter()
        .map(|category| CategoryView {
            name: category,
            preferences: prefs
                .preferences_in(category)
                .map(PreferenceView::from)
                .collect(),
        })
        .collect();
    Snapshot { categories }
}

/// [`snapshot`] encoded as a JSON string.
pub fn snapshot_json(prefs: &Preferences) -> Result<String, VantageError> {
    Ok(serde_json::to_string(&snapshot(prefs))?)
}

/// Parse an IPC message from the UI into a [`UiAction`].
#[must_use]
pub fn parse_action(msg: &Value) -> Option<UiAction> {
    let action = msg.get("action")?.as_str()?;
    match action {
        "set_value" => {
            let (category, name) = target(msg)?;
            let value = msg.get("value")?.clone();
            Some(UiAction::SetValue {
                category,
                name,
                value,
            })
        }
        "set_enabled" => {
            let (category, name) = target(msg)?;
            let enabled = msg.get("enabled")?.as_bool()?;
            Some(UiAction::SetEnabled {
                category,
                name,
                enabled,
            })
        }
        "save" => Some(UiAction::Save),
        "load" => Some(UiAction::Load),
        _ => {
            log::warn!("ignoring unknown UI action '{action}'");
            None
        }
    }
}

fn target(msg: &Value) -> Option<(String, String)> {
    let category = msg.get("category")?.as_str()?.to_owned();
    let name = msg.get("name")?.as_str()?.to_owned();
    Some((category, name))
}

/// Apply a parsed action to the registry.
pub fn apply_action(
    prefs: &mut Preferences,
    action: UiAction,
) -> Result<(), VantageError> {
    match action {
        UiAction::SetValue {
            category,
            name,
            value,
        } => {
            let pref = lookup(prefs, &category, &name)?;
            let value = decode_value(pref, value)?;
            let _ = pref.set_dynamic(value)?;
        }
        UiAction::SetEnabled {
            category,
            name,
            enabled,
        } => {
            let _ = lookup(prefs, &category, &name)?.set_enabled(enabled);
        }
        UiAction::Save => {
            let _ = prefs.save_all();
        }
        UiAction::Load => prefs.load_all(),
    }
    Ok(())
}

fn lookup<'a>(
    prefs: &'a mut Preferences,
    category: &str,
    name: &str,
) -> Result<&'a mut Preference, VantageError> {
    prefs.find_mut(category, name).ok_or_else(|| {
        VantageError::UnknownPreference {
            category: category.to_owned(),
            name: name.to_owned(),
        }
    })
}

fn decode_value(
    pref: &Preference,
    value: Value,
) -> Result<PreferenceValue, VantageError> {
    let Some(expected) = pref.control().value_type_name() else {
        return Err(VantageError::NotValued(pref.kind()));
    };
    let found = json_type_name(&value);
    let decoded: PreferenceValue = serde_json::from_value(value)
        .map_err(|_| VantageError::TypeMismatch { expected, found })?;
    if decoded.type_name() != expected {
        return Err(VantageError::TypeMismatch {
            expected,
            found: decoded.type_name(),
        });
    }
    Ok(decoded)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
