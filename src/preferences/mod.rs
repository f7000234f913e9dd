//! Typed, observable user preferences grouped by category.
//!
//! A [`Preference`] mirrors one field of an externally owned settings model
//! through an injected getter/setter pair. The cached value is what a
//! presentation layer shows and edits; [`Preference::load`] pulls from the
//! model and [`Preference::save`] pushes back only when the cache differs
//! from the model's live value.
//!
//! The [`Preferences`] registry owns every preference in an arena and keeps
//! a category index in first-seen order for building menus and dialogs.
//!
//! # Invariants
//!
//! 1. Writing a value equal to the cached one is a no-op: no notification.
//! 2. Equality is exact (`==`), so floats have no epsilon tolerance.
//! 3. `load` never notifies.
//! 4. `save` calls the setter only if the cache differs from `getter()`.
//! 5. Range and text metadata are advisory; nothing is clamped.
//! 6. The registry is append-only and does not deduplicate on `add`.

mod control;
mod preference;
mod registry;
mod signal;
mod value;

pub use control::{Control, Range, TextEntry, ValueType};
pub use preference::Preference;
pub use registry::{PreferenceId, Preferences};
use serde::{Deserialize, Serialize};
pub use signal::{Change, ChangeEvent, Signal, SubscriptionId};
pub use value::{Binding, PreferenceValue};

/// Which control renders a preference, and which metadata applies to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKind {
    /// Untyped entry with no control.
    #[default]
    Invalid,
    /// Single-line text field.
    Editable,
    /// Text field with a file/folder picker.
    Browsable,
    /// Continuous numeric slider.
    Slider,
    /// Numeric spin box.
    Spinner,
    /// Boolean checkbox.
    Checkbox,
    /// Fire-once action without a value.
    Button,
}

impl PreferenceKind {
    /// Whether preferences of this kind hold a cached value.
    #[must_use]
    pub fn has_value(self) -> bool {
        !matches!(self, Self::Invalid | Self::Button)
    }
}
