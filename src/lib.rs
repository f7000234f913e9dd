// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Camera state and typed, observable user preferences for a 3D
//! virtual-world client.
//!
//! # Key entry points
//!
//! - [`preferences::Preferences`] - category-indexed registry of
//!   preferences
//! - [`preferences::Preference`] - one setting bound to a model field via a
//!   getter/setter pair, with change notification
//! - [`camera::Camera`] - view parameters for the render loop
//! - [`options::Options`] - reference settings model with TOML profiles
//! - [`bridge`] - JSON snapshot and actions for a presentation layer
//!
//! # Architecture
//!
//! Settings-definition code builds preferences bound to an external model
//! and registers them. A presentation layer reads the category index,
//! subscribes to change notifications and drives `set_value` on user
//! edits. "Apply" calls [`preferences::Preferences::save_all`], which only
//! writes fields whose cache differs from the live model value; "Revert"
//! calls [`preferences::Preferences::load_all`].
//!
//! Everything is single-threaded and synchronous. Models are usually
//! shared with the bindings as `Rc<RefCell<_>>`.

pub mod bridge;
pub mod camera;
pub mod error;
pub mod options;
pub mod preferences;

pub use error::VantageError;
