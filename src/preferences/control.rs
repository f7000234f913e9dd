//! Per-kind payloads: the bound value plus kind-specific metadata.

use serde::Serialize;

use super::{Binding, PreferenceKind, PreferenceValue};

/// Numeric presentation hints for sliders and spinners. Never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    /// Lower bound shown by the control.
    pub min: f32,
    /// Upper bound shown by the control.
    pub max: f32,
    /// Increment per tick.
    pub step: f32,
    /// Number of decimals to display.
    pub decimals: f32,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.1,
            decimals: 0.0,
        }
    }
}

/// Text-entry metadata for editable and browsable preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TextEntry {
    /// Hint shown in an empty field.
    pub placeholder_text: String,
    /// Label of the picker button; `None` for plain text fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_label: Option<String>,
}

impl TextEntry {
    /// Label used for picker buttons unless overridden.
    pub const DEFAULT_BROWSE_LABEL: &'static str = "Browse";

    fn browsable() -> Self {
        Self {
            placeholder_text: String::new(),
            browse_label: Some(Self::DEFAULT_BROWSE_LABEL.to_owned()),
        }
    }
}

/// The control a preference renders as, with its bound value.
#[derive(Debug)]
pub enum Control {
    /// No control and no value.
    None,
    /// Action button; no value.
    Button,
    /// Boolean checkbox.
    Check(Binding<bool>),
    /// Float slider.
    Slider(Binding<f32>, Range),
    /// Float spin box.
    Spinner(Binding<f32>, Range),
    /// Text field.
    Edit(Binding<String>, TextEntry),
    /// Text field with a picker.
    Browse(Binding<String>, TextEntry),
}

impl Control {
    pub(crate) fn browse(binding: Binding<String>) -> Self {
        Self::Browse(binding, TextEntry::browsable())
    }

    /// The kind tag matching this control.
    #[must_use]
    pub fn kind(&self) -> PreferenceKind {
        match self {
            Self::None => PreferenceKind::Invalid,
            Self::Button => PreferenceKind::Button,
            Self::Check(_) => PreferenceKind::Checkbox,
            Self::Slider(..) => PreferenceKind::Slider,
            Self::Spinner(..) => PreferenceKind::Spinner,
            Self::Edit(..) => PreferenceKind::Editable,
            Self::Browse(..) => PreferenceKind::Browsable,
        }
    }

    /// Name of the bound value type, or `None` for valueless controls.
    #[must_use]
    pub fn value_type_name(&self) -> Option<&'static str> {
        match self {
            Self::None | Self::Button => None,
            Self::Check(_) => Some(bool::TYPE_NAME),
            Self::Slider(..) | Self::Spinner(..) => Some(f32::TYPE_NAME),
            Self::Edit(..) | Self::Browse(..) => Some(String::TYPE_NAME),
        }
    }

    /// Snapshot of the cached value.
    #[must_use]
    pub fn current(&self) -> Option<PreferenceValue> {
        match self {
            Self::None | Self::Button => None,
            Self::Check(b) => Some(PreferenceValue::Bool(*b.value())),
            Self::Slider(b, _) | Self::Spinner(b, _) => {
                Some(PreferenceValue::Float(*b.value()))
            }
            Self::Edit(b, _) | Self::Browse(b, _) => {
                Some(PreferenceValue::Text(b.value().clone()))
            }
        }
    }

    /// Range metadata, for sliders and spinners.
    #[must_use]
    pub fn range(&self) -> Option<&Range> {
        match self {
            Self::Slider(_, range) | Self::Spinner(_, range) => Some(range),
            _ => None,
        }
    }

    pub(crate) fn range_mut(&mut self) -> Option<&mut Range> {
        match self {
            Self::Slider(_, range) | Self::Spinner(_, range) => Some(range),
            _ => None,
        }
    }

    /// Text-entry metadata, for editable and browsable preferences.
    #[must_use]
    pub fn text_entry(&self) -> Option<&TextEntry> {
        match self {
            Self::Edit(_, entry) | Self::Browse(_, entry) => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn text_entry_mut(&mut self) -> Option<&mut TextEntry> {
        match self {
            Self::Edit(_, entry) | Self::Browse(_, entry) => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn load(&mut self) {
        match self {
            Self::None | Self::Button => {}
            Self::Check(b) => b.load(),
            Self::Slider(b, _) | Self::Spinner(b, _) => b.load(),
            Self::Edit(b, _) | Self::Browse(b, _) => b.load(),
        }
    }

    pub(crate) fn save(&self) -> bool {
        match self {
            Self::None | Self::Button => false,
            Self::Check(b) => b.save(),
            Self::Slider(b, _) | Self::Spinner(b, _) => b.save(),
            Self::Edit(b, _) | Self::Browse(b, _) => b.save(),
        }
    }
}

/// A value type a preference can hold: `bool`, `f32` or `String`.
pub trait ValueType: Clone + PartialEq + Default + Into<PreferenceValue> {
    /// Short name used in error messages.
    const TYPE_NAME: &'static str;

    /// The binding inside `control`, if it holds this type.
    fn binding(control: &Control) -> Option<&Binding<Self>>;

    /// Mutable access to the binding inside `control`.
    fn binding_mut(control: &mut Control) -> Option<&mut Binding<Self>>;
}

impl ValueType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn binding(control: &Control) -> Option<&Binding<Self>> {
        match control {
            Control::Check(b) => Some(b),
            _ => None,
        }
    }

    fn binding_mut(control: &mut Control) -> Option<&mut Binding<Self>> {
        match control {
            Control::Check(b) => Some(b),
            _ => None,
        }
    }
}

impl ValueType for f32 {
    const TYPE_NAME: &'static str = "float";

    fn binding(control: &Control) -> Option<&Binding<Self>> {
        match control {
            Control::Slider(b, _) | Control::Spinner(b, _) => Some(b),
            _ => None,
        }
    }

    fn binding_mut(control: &mut Control) -> Option<&mut Binding<Self>> {
        match control {
            Control::Slider(b, _) | Control::Spinner(b, _) => Some(b),
            _ => None,
        }
    }
}

impl ValueType for String {
    const TYPE_NAME: &'static str = "text";

    fn binding(control: &Control) -> Option<&Binding<Self>> {
        match control {
            Control::Edit(b, _) | Control::Browse(b, _) => Some(b),
            _ => None,
        }
    }

    fn binding_mut(control: &mut Control) -> Option<&mut Binding<Self>> {
        match control {
            Control::Edit(b, _) | Control::Browse(b, _) => Some(b),
            _ => None,
        }
    }
}
