//! Keypad that drives an accumulator from discrete inputs.

use super::config::KeypadConfig;
use super::input::Input;
use crate::core::CalcError;
use crate::machine::Accumulator;
use crate::snapshot::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a surface should show after an input or a tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Display text
    pub text: String,
    /// Input to highlight, if its press feedback is still running
    pub pressed: Option<Input>,
    /// Whether the text is the error banner
    pub error: bool,
}

/// Thin adapter between raw events and an [`Accumulator`].
///
/// The keypad owns the presentation policy: it latches an error banner when
/// an evaluation fails and clears the accumulator once the banner has been
/// up long enough, and it highlights pressed inputs for a short while. It
/// never sleeps; time is passed in by the caller and [`Keypad::tick`] applies
/// whatever has expired.
///
/// # Example
///
/// ```rust
/// use abacus::adapter::{Keypad, KeypadConfig};
/// use chrono::{Duration, Utc};
///
/// let mut keypad = Keypad::new(KeypadConfig::default());
/// let start = Utc::now();
///
/// for key in ["5", "/", "0", "Enter"] {
///     keypad.key(key, start);
/// }
/// assert_eq!(keypad.frame().text, "Error");
///
/// let frame = keypad.tick(start + Duration::milliseconds(1500)).unwrap();
/// assert_eq!(frame.text, "0");
/// ```
#[derive(Debug)]
pub struct Keypad {
    accumulator: Accumulator,
    config: KeypadConfig,
    error_since: Option<DateTime<Utc>>,
    pressed: Option<(Input, DateTime<Utc>)>,
}

impl Keypad {
    pub fn new(config: KeypadConfig) -> Self {
        Self::with_accumulator(Accumulator::new(), config)
    }

    /// Wrap an existing accumulator, e.g. one restored from a snapshot.
    pub fn with_accumulator(accumulator: Accumulator, config: KeypadConfig) -> Self {
        Self {
            accumulator,
            config,
            error_since: None,
            pressed: None,
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    pub fn into_accumulator(self) -> Accumulator {
        self.accumulator
    }

    /// Capture the accumulator for a later [`Snapshot::restore`].
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.accumulator)
    }

    pub fn is_showing_error(&self) -> bool {
        self.error_since.is_some()
    }

    /// The frame for the current state.
    pub fn frame(&self) -> Frame {
        let (text, error) = if self.is_showing_error() {
            (self.config.error_text.clone(), true)
        } else {
            (self.accumulator.display_text(), false)
        };
        Frame {
            text,
            pressed: self.pressed.map(|(input, _)| input),
            error,
        }
    }

    /// Handle a keyboard key name. Unmapped keys return `None`.
    pub fn key(&mut self, key: &str, now: DateTime<Utc>) -> Option<Frame> {
        Input::from_key(key).map(|input| self.press(input, now))
    }

    /// Handle a button action name. Unmapped actions return `None`.
    pub fn action(&mut self, action: &str, now: DateTime<Utc>) -> Option<Frame> {
        Input::from_action(action).map(|input| self.press(input, now))
    }

    /// Dispatch one input to the accumulator and return the new frame.
    ///
    /// While the error banner is up only [`Input::Clear`] is accepted; it
    /// dismisses the banner immediately.
    pub fn press(&mut self, input: Input, now: DateTime<Utc>) -> Frame {
        if self.is_showing_error() && input != Input::Clear {
            tracing::trace!(input = %input, "Input ignored while error is shown");
            return self.frame();
        }

        self.pressed = Some((input, now));
        if let Err(err) = self.dispatch(input) {
            self.error_since = Some(now);
            tracing::info!(
                error = %err,
                dismiss_ms = self.config.error_dismiss_ms,
                "Showing error"
            );
        }
        self.frame()
    }

    /// Apply expired timers. Returns a frame only if something changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Frame> {
        let mut changed = false;

        if let Some(since) = self.error_since {
            if elapsed(since, now) >= self.config.error_dismiss() {
                self.accumulator.clear();
                self.error_since = None;
                changed = true;
                tracing::info!("Error dismissed");
            }
        }

        if let Some((_, since)) = self.pressed {
            if elapsed(since, now) >= self.config.press_feedback() {
                self.pressed = None;
                changed = true;
            }
        }

        changed.then(|| self.frame())
    }

    fn dispatch(&mut self, input: Input) -> Result<(), CalcError> {
        match input {
            Input::Digit(digit) => self.accumulator.enter_digit(digit),
            Input::DecimalPoint => self.accumulator.enter_decimal_point(),
            Input::Operator(operator) => self.accumulator.set_operator(operator)?,
            Input::Equals => {
                self.accumulator.evaluate()?;
            }
            Input::Backspace => self.accumulator.backspace(),
            Input::Clear => {
                self.accumulator.clear();
                self.error_since = None;
            }
        }
        Ok(())
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(KeypadConfig::default())
    }
}

/// Calculate elapsed time between two instants (pure)
fn elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(since)
        .to_std()
        .unwrap_or(Duration::ZERO)
}
