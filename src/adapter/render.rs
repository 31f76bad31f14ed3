//! Rendering frames into a display surface.
//!
//! The keypad computes frames; showing them is an effect run against an
//! environment that implements [`Surface`]. Keeping the write behind an
//! effect lets the keypad stay synchronous and testable while the
//! embedding application decides where and when frames land.

use super::error::SurfaceError;
use super::keypad::Frame;
use std::sync::{Arc, Mutex};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Something that can show a frame.
pub trait Surface {
    fn show(&self, frame: &Frame) -> Result<(), SurfaceError>;
}

/// Effect that shows `frame` on the environment's surface.
pub fn render<Env>(frame: Frame) -> BoxedEffect<(), SurfaceError, Env>
where
    Env: Surface + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| env.show(&frame)).boxed()
}

/// Effect that shows `frame` only when there is one, e.g. the result of
/// [`super::Keypad::tick`].
pub fn render_if_changed<Env>(frame: Option<Frame>) -> BoxedEffect<(), SurfaceError, Env>
where
    Env: Surface + Clone + Send + Sync + 'static,
{
    match frame {
        Some(frame) => render(frame),
        None => pure(()).boxed(),
    }
}

/// In-memory surface that records every frame it is shown.
///
/// Cloning shares the underlying record, so a clone can be handed to an
/// effect runner while the original is inspected.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames shown so far, oldest first.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    /// Text of the most recent frame.
    pub fn current_text(&self) -> Option<String> {
        self.frames().last().map(|frame| frame.text.clone())
    }
}

impl Surface for RecordingSurface {
    fn show(&self, frame: &Frame) -> Result<(), SurfaceError> {
        let mut frames = self
            .frames
            .lock()
            .map_err(|_| SurfaceError::Unavailable("frame log poisoned".to_string()))?;
        frames.push(frame.clone());
        Ok(())
    }
}
