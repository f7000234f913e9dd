//! Default preference set bound to an [`Options`] model.

use std::cell::RefCell;
use std::rc::Rc;

use super::Options;
use crate::preferences::{Preference, Preferences};

/// Category names used by the default preference set.
pub mod categories {
    /// Avatar identity.
    pub const AVATAR_BASICS: &str = "Avatar Basics";
    /// Avatar body and face tuning.
    pub const AVATAR_TUNING: &str = "Avatar Tuning";
    /// Camera projection and orbit.
    pub const CAMERA: &str = "Camera";
    /// Audio jitter buffers.
    pub const AUDIO: &str = "Audio";
    /// Snapshot output.
    pub const SNAPSHOTS: &str = "Snapshots";
    /// Script loading.
    pub const SCRIPTS: &str = "Scripts";
    /// Data sharing.
    pub const PRIVACY: &str = "Privacy";
}

/// Getter/setter pair over one field of a shared model.
fn accessors<T: 'static>(
    model: &Rc<RefCell<Options>>,
    get: fn(&Options) -> T,
    set: fn(&mut Options, &T),
) -> (impl Fn() -> T, impl Fn(&T)) {
    let read = Rc::clone(model);
    let write = Rc::clone(model);
    (
        move || get(&read.borrow()),
        move |value: &T| set(&mut write.borrow_mut(), value),
    )
}

/// Register the client's standard preferences, bound to `model`.
///
/// Caches are left at their defaults; call
/// [`Preferences::load_all`] before showing them.
pub fn register_preferences(
    model: &Rc<RefCell<Options>>,
    prefs: &mut Preferences,
) {
    register_avatar(model, prefs);
    register_camera(model, prefs);
    register_audio(model, prefs);
    register_general(model, prefs);
}

fn register_avatar(model: &Rc<RefCell<Options>>, prefs: &mut Preferences) {
    use categories::{AVATAR_BASICS, AVATAR_TUNING};

    let (get, set) = accessors(
        model,
        |o| o.avatar.display_name.clone(),
        |o, v| o.avatar.display_name.clone_from(v),
    );
    let _ = prefs.add(
        Preference::edit(AVATAR_BASICS, "Avatar display name", get, set)
            .with_placeholder_text("Not showing a name"),
    );

    let (get, set) = accessors(
        model,
        |o| o.avatar.model_url.clone(),
        |o, v| o.avatar.model_url.clone_from(v),
    );
    let _ = prefs.add(
        Preference::browse(AVATAR_BASICS, "Appearance", get, set)
            .with_placeholder_text("Default body")
            .with_browse_label("Change"),
    );

    let (get, set) = accessors(
        model,
        |o| o.avatar.lean_scale,
        |o, v| o.avatar.lean_scale = *v,
    );
    let _ = prefs.add(
        Preference::spinner(AVATAR_TUNING, "Lean scale", get, set)
            .with_max(99.9)
            .with_step(1.0)
            .with_decimals(2.0),
    );

    let (get, set) =
        accessors(model, |o| o.avatar.scale, |o, v| o.avatar.scale = *v);
    let _ = prefs.add(
        Preference::spinner(AVATAR_TUNING, "Avatar scale", get, set)
            .with_min(0.01)
            .with_max(99.9)
            .with_step(1.0)
            .with_decimals(2.0),
    );

    let (get, set) = accessors(
        model,
        |o| o.avatar.pupil_dilation,
        |o, v| o.avatar.pupil_dilation = *v,
    );
    let _ = prefs.add(
        Preference::slider(AVATAR_TUNING, "Pupil dilation", get, set)
            .with_step(0.05)
            .with_decimals(2.0),
    );
}

fn register_camera(model: &Rc<RefCell<Options>>, prefs: &mut Preferences) {
    use categories::CAMERA;

    let (get, set) = accessors(
        model,
        |o| o.camera.field_of_view,
        |o, v| o.camera.field_of_view = *v,
    );
    let _ = prefs.add(
        Preference::spinner(CAMERA, "Vertical field of view", get, set)
            .with_min(1.0)
            .with_max(180.0)
            .with_step(1.0),
    );

    let (get, set) =
        accessors(model, |o| o.camera.up, |o, v| o.camera.up = *v);
    let _ = prefs.add(
        Preference::slider(CAMERA, "Third person height", get, set)
            .with_max(5.0)
            .with_step(0.05)
            .with_decimals(2.0),
    );

    let (get, set) = accessors(
        model,
        |o| o.camera.distance,
        |o, v| o.camera.distance = *v,
    );
    let _ = prefs.add(
        Preference::slider(CAMERA, "Third person distance", get, set)
            .with_max(20.0)
            .with_decimals(1.0),
    );
}

fn register_audio(model: &Rc<RefCell<Options>>, prefs: &mut Preferences) {
    use categories::AUDIO;

    let (get, set) = accessors(
        model,
        |o| o.audio.dynamic_jitter_buffers,
        |o, v| o.audio.dynamic_jitter_buffers = *v,
    );
    let _ = prefs.add(Preference::check(
        AUDIO,
        "Enable dynamic jitter buffers",
        get,
        set,
    ));

    let (get, set) = accessors(
        model,
        |o| o.audio.static_jitter_frames,
        |o, v| o.audio.static_jitter_frames = *v,
    );
    let _ = prefs.add(
        Preference::spinner(AUDIO, "Static jitter buffer frames", get, set)
            .with_max(10000.0)
            .with_step(1.0),
    );

    let (get, set) = accessors(
        model,
        |o| o.audio.max_frames_over_desired,
        |o, v| o.audio.max_frames_over_desired = *v,
    );
    let _ = prefs.add(
        Preference::spinner(AUDIO, "Max frames over desired", get, set)
            .with_max(10000.0)
            .with_step(1.0),
    );
}

fn register_general(model: &Rc<RefCell<Options>>, prefs: &mut Preferences) {
    use categories::{PRIVACY, SCRIPTS, SNAPSHOTS};

    let (get, set) = accessors(
        model,
        |o| o.general.snapshots_dir.clone(),
        |o, v| o.general.snapshots_dir.clone_from(v),
    );
    let _ = prefs.add(Preference::browse(
        SNAPSHOTS,
        "Put my snapshots here",
        get,
        set,
    ));

    let (get, set) = accessors(
        model,
        |o| o.general.scripts_dir.clone(),
        |o, v| o.general.scripts_dir.clone_from(v),
    );
    let _ = prefs.add(
        Preference::browse(
            SCRIPTS,
            "Load scripts from this directory",
            get,
            set,
        )
        .with_placeholder_text("Bundled scripts"),
    );
    let _ = prefs.add(Preference::button(SCRIPTS, "Reload all scripts"));

    let (get, set) = accessors(
        model,
        |o| o.general.send_data,
        |o, v| o.general.send_data = *v,
    );
    let _ = prefs.add(Preference::check(
        PRIVACY,
        "Send data about your usage",
        get,
        set,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::AvatarOptions;
    use crate::preferences::PreferenceKind;

    fn setup() -> (Rc<RefCell<Options>>, Preferences) {
        let model = Rc::new(RefCell::new(Options::default()));
        let mut prefs = Preferences::new();
        register_preferences(&model, &mut prefs);
        (model, prefs)
    }

    #[test]
    fn categories_follow_registration_order() {
        let (_, prefs) = setup();
        assert_eq!(
            prefs.categories(),
            [
                categories::AVATAR_BASICS,
                categories::AVATAR_TUNING,
                categories::CAMERA,
                categories::AUDIO,
                categories::SNAPSHOTS,
                categories::SCRIPTS,
                categories::PRIVACY,
            ]
        );
    }

    #[test]
    fn load_all_mirrors_the_model() {
        let (model, mut prefs) = setup();
        model.borrow_mut().avatar.display_name = "Wanderer".into();
        prefs.load_all();

        let name = prefs
            .find(categories::AVATAR_BASICS, "Avatar display name")
            .unwrap();
        assert_eq!(
            name.value::<String>().map(String::as_str),
            Some("Wanderer")
        );

        let fov = prefs
            .find(categories::CAMERA, "Vertical field of view")
            .unwrap();
        assert_eq!(fov.kind(), PreferenceKind::Spinner);
        assert_eq!(fov.value::<f32>(), Some(&60.0));
    }

    #[test]
    fn apply_writes_only_edited_fields() {
        let (model, mut prefs) = setup();
        prefs.load_all();
        assert_eq!(prefs.save_all(), 0);

        let _ = prefs
            .find_mut(categories::PRIVACY, "Send data about your usage")
            .unwrap()
            .set_value(false)
            .unwrap();
        assert_eq!(prefs.save_all(), 1);
        assert!(!model.borrow().general.send_data);
        assert_eq!(model.borrow().avatar, AvatarOptions::default());
    }

    #[test]
    fn browse_preferences_carry_labels() {
        let (_, prefs) = setup();
        let appearance =
            prefs.find(categories::AVATAR_BASICS, "Appearance").unwrap();
        assert_eq!(appearance.browse_label(), Some("Change"));

        let snapshots = prefs
            .find(categories::SNAPSHOTS, "Put my snapshots here")
            .unwrap();
        assert_eq!(snapshots.browse_label(), Some("Browse"));

        let reload = prefs
            .find(categories::SCRIPTS, "Reload all scripts")
            .unwrap();
        assert_eq!(reload.kind(), PreferenceKind::Button);
    }
}
