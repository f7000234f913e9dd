use super::control::{Control, Range, TextEntry, ValueType};
use super::signal::{Change, ChangeEvent, Signal, SubscriptionId};
use super::value::{Binding, PreferenceValue};
use super::PreferenceKind;
use crate::error::VantageError;

/// One user-configurable setting.
///
/// Identity (`category`, `name`) and kind are fixed at construction. The
/// cached value lives in the [`Control`] payload; the model is only touched
/// through the bound getter and setter.
#[derive(Debug)]
pub struct Preference {
    category: String,
    name: String,
    enabled: bool,
    control: Control,
    enabled_changed: Signal,
    value_changed: Signal,
}

// ── Construction ─────────────────────────────────────────────────────────

impl Preference {
    fn with_control(
        category: impl Into<String>,
        name: impl Into<String>,
        control: Control,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            enabled: true,
            control,
            enabled_changed: Signal::default(),
            value_changed: Signal::default(),
        }
    }

    /// An untyped entry ([`PreferenceKind::Invalid`]); load and save do
    /// nothing.
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_control(category, name, Control::None)
    }

    /// A fire-once action. Buttons have no value and no value signal.
    pub fn button(
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::with_control(category, name, Control::Button)
    }

    /// A checkbox bound to a boolean model field.
    pub fn check<G, S>(
        category: impl Into<String>,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> Self
    where
        G: Fn() -> bool + 'static,
        S: Fn(&bool) + 'static,
    {
        let binding = Binding::new(getter, setter);
        Self::with_control(category, name, Control::Check(binding))
    }

    /// A slider bound to a float model field, with the default [`Range`].
    pub fn slider<G, S>(
        category: impl Into<String>,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> Self
    where
        G: Fn() -> f32 + 'static,
        S: Fn(&f32) + 'static,
    {
        let binding = Binding::new(getter, setter);
        Self::with_control(
            category,
            name,
            Control::Slider(binding, Range::default()),
        )
    }

    /// A spin box bound to a float model field, with the default [`Range`].
    pub fn spinner<G, S>(
        category: impl Into<String>,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> Self
    where
        G: Fn() -> f32 + 'static,
        S: Fn(&f32) + 'static,
    {
        let binding = Binding::new(getter, setter);
        Self::with_control(
            category,
            name,
            Control::Spinner(binding, Range::default()),
        )
    }

    /// A text field bound to a string model field.
    pub fn edit<G, S>(
        category: impl Into<String>,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> Self
    where
        G: Fn() -> String + 'static,
        S: Fn(&String) + 'static,
    {
        let binding = Binding::new(getter, setter);
        Self::with_control(
            category,
            name,
            Control::Edit(binding, TextEntry::default()),
        )
    }

    /// A text field with a file/folder picker labelled "Browse".
    pub fn browse<G, S>(
        category: impl Into<String>,
        name: impl Into<String>,
        getter: G,
        setter: S,
    ) -> Self
    where
        G: Fn() -> String + 'static,
        S: Fn(&String) + 'static,
    {
        let binding = Binding::new(getter, setter);
        Self::with_control(category, name, Control::browse(binding))
    }
}

// ── Metadata builders ────────────────────────────────────────────────────

impl Preference {
    /// Replace the whole range. Ignored for kinds without a range.
    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.update_range(|r| *r = range);
        self
    }

    /// Set the lower bound hint.
    #[must_use]
    pub fn with_min(mut self, min: f32) -> Self {
        self.update_range(|r| r.min = min);
        self
    }

    /// Set the upper bound hint.
    #[must_use]
    pub fn with_max(mut self, max: f32) -> Self {
        self.update_range(|r| r.max = max);
        self
    }

    /// Set the step hint.
    #[must_use]
    pub fn with_step(mut self, step: f32) -> Self {
        self.update_range(|r| r.step = step);
        self
    }

    /// Set the displayed decimals hint.
    #[must_use]
    pub fn with_decimals(mut self, decimals: f32) -> Self {
        self.update_range(|r| r.decimals = decimals);
        self
    }

    /// Set the placeholder shown in an empty text field.
    #[must_use]
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        match self.control.text_entry_mut() {
            Some(entry) => entry.placeholder_text = text,
            None => self.ignored_metadata("placeholder text"),
        }
        self
    }

    /// Set the picker button label. Only browsable preferences carry one.
    #[must_use]
    pub fn with_browse_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        match self.control.text_entry_mut() {
            Some(TextEntry {
                browse_label: Some(current),
                ..
            }) => *current = label,
            _ => self.ignored_metadata("browse label"),
        }
        self
    }

    fn update_range(&mut self, apply: impl FnOnce(&mut Range)) {
        match self.control.range_mut() {
            Some(range) => apply(range),
            None => self.ignored_metadata("range"),
        }
    }

    fn ignored_metadata(&self, what: &str) {
        log::debug!(
            "ignoring {what} on {:?} preference '{}/{}'",
            self.kind(),
            self.category,
            self.name
        );
    }
}

// ── Accessors ────────────────────────────────────────────────────────────

impl Preference {
    /// Grouping key for presentation.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Display name, unique within a category by convention.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind tag selecting the control.
    #[must_use]
    pub fn kind(&self) -> PreferenceKind {
        self.control.kind()
    }

    /// The kind payload: bound value and metadata.
    #[must_use]
    pub fn control(&self) -> &Control {
        &self.control
    }

    /// Whether the control is shown as editable.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Range hints, for sliders and spinners.
    #[must_use]
    pub fn range(&self) -> Option<&Range> {
        self.control.range()
    }

    /// Placeholder text, for editable and browsable preferences.
    #[must_use]
    pub fn placeholder_text(&self) -> Option<&str> {
        self.control
            .text_entry()
            .map(|entry| entry.placeholder_text.as_str())
    }

    /// Picker button label, for browsable preferences.
    #[must_use]
    pub fn browse_label(&self) -> Option<&str> {
        self.control
            .text_entry()
            .and_then(|entry| entry.browse_label.as_deref())
    }

    /// Typed view of the cached value. `None` if `T` is not this
    /// preference's value type.
    #[must_use]
    pub fn value<T: ValueType>(&self) -> Option<&T> {
        T::binding(&self.control).map(Binding::value)
    }

    /// Untyped copy of the cached value; `None` for valueless kinds.
    #[must_use]
    pub fn current(&self) -> Option<PreferenceValue> {
        self.control.current()
    }
}

// ── Mutation ─────────────────────────────────────────────────────────────

impl Preference {
    /// Flip the enabled flag. Notifies only on an actual change and returns
    /// whether one happened.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        let event = ChangeEvent {
            category: &self.category,
            name: &self.name,
            kind: self.control.kind(),
            change: Change::Enabled(enabled),
        };
        self.enabled_changed.emit(&event);
        true
    }

    /// Write the cached value. Returns `Ok(true)` and notifies once if the
    /// value changed; `Ok(false)` without notifying if it was equal.
    ///
    /// No clamping: range metadata is a presentation hint only.
    pub fn set_value<T: ValueType>(
        &mut self,
        value: T,
    ) -> Result<bool, VantageError> {
        let kind = self.control.kind();
        let Some(binding) = T::binding_mut(&mut self.control) else {
            return Err(self.type_error(T::TYPE_NAME));
        };
        if !binding.set(value) {
            return Ok(false);
        }
        let event = ChangeEvent {
            category: &self.category,
            name: &self.name,
            kind,
            change: Change::Value(binding.value().clone().into()),
        };
        self.value_changed.emit(&event);
        Ok(true)
    }

    /// Untyped [`set_value`](Self::set_value) for the presentation
    /// boundary.
    pub fn set_dynamic(
        &mut self,
        value: PreferenceValue,
    ) -> Result<bool, VantageError> {
        match value {
            PreferenceValue::Bool(v) => self.set_value(v),
            PreferenceValue::Float(v) => self.set_value(v),
            PreferenceValue::Text(v) => self.set_value(v),
        }
    }

    /// Refresh the cache from the model. Never notifies.
    pub fn load(&mut self) {
        self.control.load();
    }

    /// Push the cache to the model if it differs from the model's live
    /// value. Returns whether the setter ran.
    pub fn save(&self) -> bool {
        let written = self.control.save();
        if written {
            log::debug!("saved preference '{}/{}'", self.category, self.name);
        }
        written
    }

    fn type_error(&self, found: &'static str) -> VantageError {
        match self.control.value_type_name() {
            Some(expected) => VantageError::TypeMismatch { expected, found },
            None => VantageError::NotValued(self.control.kind()),
        }
    }
}

// ── Subscriptions ────────────────────────────────────────────────────────

impl Preference {
    /// Observe enabled-flag flips.
    pub fn on_enabled_changed<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.enabled_changed.subscribe(callback)
    }

    /// Observe value changes. Fails with [`VantageError::NotValued`] on
    /// buttons and untyped entries.
    pub fn on_value_changed<F>(
        &mut self,
        callback: F,
    ) -> Result<SubscriptionId, VantageError>
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        let kind = self.control.kind();
        if !kind.has_value() {
            return Err(VantageError::NotValued(kind));
        }
        Ok(self.value_changed.subscribe(callback))
    }

    /// Drop a subscription made on either signal.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.enabled_changed.unsubscribe(id)
            || self.value_changed.unsubscribe(id)
    }
}
