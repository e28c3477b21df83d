//! Library exports for reusing sketchpad subsystems.
//!
//! Exposes the drawing model, editor and configuration alongside the UI layout
//! and rendering code so that the binary, tools such as the schema dumper and
//! integration tests share one implementation.

pub mod backend;
pub mod config;
pub mod draw;
pub mod editor;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
