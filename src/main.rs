//! Command-line entry point: loads an options profile, registers the
//! default preferences and writes their presentation snapshot as JSON.

use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use vantage::bridge;
use vantage::camera::Camera;
use vantage::options::{register_preferences, Options};
use vantage::preferences::Preferences;

fn load_options(arg: Option<String>) -> Options {
    let Some(path) = arg else {
        log::info!("No options file given, using defaults");
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("Failed to load options from {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options(std::env::args().nth(1));

    let mut camera = Camera::from_options(&options.camera);
    camera.update();
    log::info!(
        "Camera {:?} at {} looking at {}",
        camera.mode(),
        camera.position(),
        camera.target_position()
    );

    let model = Rc::new(RefCell::new(options));
    let mut prefs = Preferences::new();
    register_preferences(&model, &mut prefs);
    prefs.load_all();

    for (category, ids) in prefs.by_category() {
        log::info!("{category}: {} preferences", ids.len());
    }

    let json = match bridge::snapshot_json(&prefs) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to encode preferences: {e}");
            std::process::exit(1);
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{json}") {
        log::error!("Failed to write preferences: {e}");
        std::process::exit(1);
    }
}
