//! Adapter layer between input events and the accumulator.
//!
//! This module is the "imperative shell" around the pure core:
//!
//! - **Input**: maps keyboard key names and button actions onto the six
//!   accumulator operations
//! - **Keypad**: dispatches inputs, latches the error banner and expires
//!   press feedback against caller-supplied time
//! - **Rendering**: shows frames on a [`Surface`] through Stillwater effects
//!
//! Nothing here is needed to use [`crate::machine::Accumulator`]
//! directly; the keypad exists so surfaces stay free of calculator logic.

mod config;
mod error;
mod input;
mod keypad;
mod render;

pub use config::KeypadConfig;
pub use error::{ConfigError, SurfaceError};
pub use input::Input;
pub use keypad::{Frame, Keypad};
pub use render::{render, render_if_changed, RecordingSurface, Surface};
