//! A single timed demo run

use crate::error::DemoError;
use crate::transcript::Transcript;
use chrono::{DateTime, TimeDelta, Utc};

/// Function type every registered demo is stored as
pub type DemoFn = fn(&mut Transcript) -> Result<(), DemoError>;

/// Outcome of running one demo, including timing information
#[derive(Debug)]
pub struct DemoRun {
    /// Registered demo name
    pub name: &'static str,
    /// Lines the demo produced, also when it failed part way
    pub transcript: Transcript,
    /// What the demo returned
    pub result: Result<(), DemoError>,
    /// When the run started (UTC)
    pub start: DateTime<Utc>,
    /// When the run completed (UTC)
    pub end: DateTime<Utc>,
}

impl DemoRun {
    /// Run `demo`, recording its transcript and timing
    pub fn execute(name: &'static str, demo: DemoFn) -> Self {
        let mut transcript = Transcript::new();
        let start = Utc::now();
        let result = demo(&mut transcript);
        let end = Utc::now();

        Self {
            name,
            transcript,
            result,
            start,
            end,
        }
    }

    /// Get the run duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
