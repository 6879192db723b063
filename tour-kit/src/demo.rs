//! Core demo trait

use crate::error::DemoError;
use crate::transcript::Transcript;

/// Core trait that every demo implements.
///
/// A demo is a stateless routine with hard-coded inputs. It writes what it
/// wants shown to the [`Transcript`] and reports failure through
/// [`DemoError`]. Lines written before an error are kept.
///
/// # Example
///
/// ```
/// use tour_kit::{Demo, DemoError, Transcript};
///
/// struct Countdown;
///
/// impl Demo for Countdown {
///     fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
///         for i in (1..=3).rev() {
///             transcript.line(i);
///         }
///         Ok(())
///     }
/// }
///
/// let mut transcript = Transcript::new();
/// Countdown::run(&mut transcript).unwrap();
/// assert_eq!(transcript.lines(), ["3", "2", "1"]);
/// ```
pub trait Demo {
    /// Run the demo, writing its output lines to `transcript`.
    fn run(transcript: &mut Transcript) -> Result<(), DemoError>;
}
