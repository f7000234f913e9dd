//! Category-indexed arena of preferences.

use rustc_hash::FxHashMap;

use super::Preference;
use crate::error::VantageError;

/// Stable handle to a registered preference (its insertion index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PreferenceId(usize);

impl PreferenceId {
    /// Position in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Registry of preferences, grouped by category in first-seen order.
///
/// Append-only. [`add`](Self::add) does not deduplicate; use
/// [`try_add`](Self::try_add) to reject a repeated `(category, name)`.
#[derive(Debug, Default)]
pub struct Preferences {
    entries: Vec<Preference>,
    categories: Vec<String>,
    by_category: FxHashMap<String, Vec<PreferenceId>>,
}

impl Preferences {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a preference at the end of its category bucket.
    pub fn add(&mut self, preference: Preference) -> PreferenceId {
        let id = PreferenceId(self.entries.len());
        let category = preference.category();
        if let Some(bucket) = self.by_category.get_mut(category) {
            bucket.push(id);
        } else {
            self.categories.push(category.to_owned());
            let _ = self.by_category.insert(category.to_owned(), vec![id]);
        }
        log::debug!(
            "registered {:?} preference '{}/{}'",
            preference.kind(),
            preference.category(),
            preference.name()
        );
        self.entries.push(preference);
        id
    }

    /// Like [`add`](Self::add), but rejects a preference whose category and
    /// name are already registered. The registry is unchanged on error.
    pub fn try_add(
        &mut self,
        preference: Preference,
    ) -> Result<PreferenceId, VantageError> {
        if self
            .find_id(preference.category(), preference.name())
            .is_some()
        {
            log::warn!(
                "rejected duplicate preference '{}/{}'",
                preference.category(),
                preference.name()
            );
            return Err(VantageError::DuplicatePreference {
                category: preference.category().to_owned(),
                name: preference.name().to_owned(),
            });
        }
        Ok(self.add(preference))
    }

    /// Distinct category names in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Ids registered under `category`, in insertion order.
    #[must_use]
    pub fn ids_in(&self, category: &str) -> &[PreferenceId] {
        self.by_category
            .get(category)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Preferences registered under `category`, in insertion order.
    pub fn preferences_in<'a>(
        &'a self,
        category: &str,
    ) -> impl Iterator<Item = &'a Preference> + 'a {
        let ids = self.ids_in(category);
        ids.iter().filter_map(move |id| self.get(*id))
    }

    /// Every category with its ids, categories in first-seen order.
    pub fn by_category(
        &self,
    ) -> impl Iterator<Item = (&str, &[PreferenceId])> + '_ {
        self.categories
            .iter()
            .map(|category| (category.as_str(), self.ids_in(category)))
    }

    /// Look up a preference by id.
    #[must_use]
    pub fn get(&self, id: PreferenceId) -> Option<&Preference> {
        self.entries.get(id.0)
    }

    /// Mutable access for driving edits from a presentation layer.
    pub fn get_mut(&mut self, id: PreferenceId) -> Option<&mut Preference> {
        self.entries.get_mut(id.0)
    }

    /// First preference registered under `category` with `name`.
    #[must_use]
    pub fn find(&self, category: &str, name: &str) -> Option<&Preference> {
        self.find_id(category, name).and_then(|id| self.get(id))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(
        &mut self,
        category: &str,
        name: &str,
    ) -> Option<&mut Preference> {
        let id = self.find_id(category, name)?;
        self.get_mut(id)
    }

    /// Id of the first preference registered under `category` with `name`.
    #[must_use]
    pub fn find_id(&self, category: &str, name: &str) -> Option<PreferenceId> {
        self.ids_in(category).iter().copied().find(|id| {
            self.get(*id).is_some_and(|pref| pref.name() == name)
        })
    }

    /// All preferences in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Preference> + '_ {
        self.entries.iter()
    }

    /// Number of registered preferences, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Refresh every cache from the model (dialog open, "Revert").
    pub fn load_all(&mut self) {
        for preference in &mut self.entries {
            preference.load();
        }
    }

    /// Commit every cache to the model (dialog "OK"/"Apply"). Returns how
    /// many setters ran.
    pub fn save_all(&self) -> usize {
        let mut written = 0;
        for preference in &self.entries {
            if preference.save() {
                written += 1;
            }
        }
        log::debug!("saved {written} of {} preferences", self.entries.len());
        written
    }
}
