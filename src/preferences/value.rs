use std::fmt;

use serde::{Deserialize, Serialize};

/// A cached preference value without its static type.
///
/// Used at the presentation boundary, in change events and snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    /// Checkbox state.
    Bool(bool),
    /// Slider or spinner position.
    Float(f32),
    /// Text field contents.
    Text(String),
}

impl PreferenceValue {
    /// Short name of the contained type, as used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for PreferenceValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Cached value plus the model accessors it mirrors.
pub struct Binding<T> {
    value: T,
    getter: Box<dyn Fn() -> T>,
    setter: Box<dyn Fn(&T)>,
}

impl<T: Clone + PartialEq + Default> Binding<T> {
    /// Bind to a model field. The cache starts at `T::default()` until the
    /// first [`load`](Self::load).
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn() -> T + 'static,
        S: Fn(&T) + 'static,
    {
        Self {
            value: T::default(),
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }

    /// The cached value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replace the cache. Returns `true` if the value actually changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Overwrite the cache with the model's current value.
    pub fn load(&mut self) {
        self.value = (self.getter)();
    }

    /// Write the cache to the model if it differs from the live model value.
    /// Returns `true` if the setter was called.
    pub fn save(&self) -> bool {
        let live = (self.getter)();
        if self.value == live {
            return false;
        }
        (self.setter)(&self.value);
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    fn bound_to(model: &Rc<Cell<f32>>, writes: &Rc<Cell<u32>>) -> Binding<f32> {
        let read = Rc::clone(model);
        let write = Rc::clone(model);
        let count = Rc::clone(writes);
        Binding::new(
            move || read.get(),
            move |v: &f32| {
                count.set(count.get() + 1);
                write.set(*v);
            },
        )
    }

    #[test]
    fn cache_starts_at_default_until_load() {
        let model = Rc::new(Cell::new(0.75));
        let writes = Rc::new(Cell::new(0));
        let mut binding = bound_to(&model, &writes);

        assert_eq!(*binding.value(), 0.0);
        binding.load();
        assert_eq!(*binding.value(), 0.75);
    }

    #[test]
    fn set_reports_real_changes_only() {
        let model = Rc::new(Cell::new(1.0));
        let writes = Rc::new(Cell::new(0));
        let mut binding = bound_to(&model, &writes);
        binding.load();

        assert!(!binding.set(1.0));
        assert!(binding.set(1.000_000_1));
        assert_eq!(*binding.value(), 1.000_000_1);
    }

    #[test]
    fn save_compares_against_live_model() {
        let model = Rc::new(Cell::new(2.0));
        let writes = Rc::new(Cell::new(0));
        let mut binding = bound_to(&model, &writes);
        binding.load();

        // Untouched cache: no write.
        assert!(!binding.save());
        assert_eq!(writes.get(), 0);

        // Model moved underneath the cache: cache is written back.
        model.set(3.0);
        assert!(binding.save());
        assert_eq!(model.get(), 2.0);
        assert_eq!(writes.get(), 1);

        // Model moved to exactly the cached value: nothing to write.
        let _ = binding.set(5.0);
        model.set(5.0);
        assert!(!binding.save());
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn load_overwrites_unsaved_edits() {
        let model = Rc::new(RefCell::new(String::from("alice")));
        let read = Rc::clone(&model);
        let mut binding: Binding<String> =
            Binding::new(move || read.borrow().clone(), |_: &String| {});
        binding.load();
        let _ = binding.set("bob".into());
        binding.load();
        assert_eq!(binding.value(), "alice");
    }

    #[test]
    fn untyped_values_name_their_type() {
        assert_eq!(PreferenceValue::from(true).type_name(), "bool");
        assert_eq!(PreferenceValue::from(0.5).type_name(), "float");
        assert_eq!(PreferenceValue::from("x").type_name(), "text");
    }
}
