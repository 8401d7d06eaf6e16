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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
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

//! Orbit camera, pointer picking, and a grid-snapped placement lattice for
//! an interactive block builder.
//!
//! The builder shows a square ground plane with a helper grid. Primary
//! clicks place blocks of the active material, shift-clicks remove them,
//! and secondary (or alt-primary) drags orbit the camera around the origin.
//!
//! # Key entry points
//!
//! - [`engine::BuilderEngine`] - owns the camera, grid, and input state
//! - [`camera::CameraController`] - spherical orbit with clamped radius and
//!   polar angle
//! - [`picking::resolve_pointer`] - nearest surface under a pointer
//! - [`scene::PlacementGrid`] - one block per snapped cell
//! - [`options::Options`] - runtime configuration (camera, grid, colors,
//!   lighting, key bindings)
//!
//! # Architecture
//!
//! Platform input is translated into [`input::InputEvent`]s, which the
//! [`input::InputProcessor`] turns into [`engine::BuilderCommand`]s. The
//! engine executes each command against the camera controller or the
//! placement grid and reports an [`engine::InputResponse`]. Rendering is
//! left to the host: each frame it pulls an [`engine::Frame`] snapshot
//! with the camera uniform and per-block instance data.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;

pub use engine::{BuilderCommand, BuilderEngine, Frame, InputResponse};
pub use error::BuilderError;
