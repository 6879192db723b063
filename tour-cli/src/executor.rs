//! Sequential executor for running the selected demos

use crate::config::Config;
use crate::error::CliError;
use chrono::TimeDelta;
use tour_kit::{DemoError, DemoInfo, DemoRegistry, DemoRun};

/// Timing of one successful demo run
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    pub name: &'static str,
    pub duration: TimeDelta,
}

/// Runs the selected demos one after another
pub struct Executor {
    registry: DemoRegistry,
    selected: Vec<DemoInfo>,
}

impl Executor {
    /// Select demos from the registry according to the config
    ///
    /// Named demos run in registry order, not in the order they were given.
    /// Names are checked against the whole registry, so an unknown name is an
    /// error while a known demo lacking a requested tag is only left out.
    pub fn new(registry: DemoRegistry, config: &Config) -> Result<Self, CliError> {
        if let Some(missing) = config
            .demos
            .iter()
            .find(|name| registry.info(name).is_none())
        {
            return Err(DemoError::NotFound(missing.clone()).into());
        }

        let selected = registry
            .demos()
            .filter(|info| config.demos.is_empty() || config.demos.iter().any(|n| n == info.name))
            .filter(|info| has_all_tags(info, &config.tags))
            .collect();

        Ok(Self { registry, selected })
    }

    /// Demos that `execute` will run, in order
    pub fn selected(&self) -> &[DemoInfo] {
        &self.selected
    }

    /// Run every selected demo, handing each finished run to `on_run`
    ///
    /// Stops at the first failing demo. Its run is still passed to `on_run`
    /// so partial output is not lost.
    pub fn execute<F>(&self, mut on_run: F) -> Result<Vec<RunStats>, CliError>
    where
        F: FnMut(&DemoRun),
    {
        let mut stats = Vec::with_capacity(self.selected.len());

        for info in &self.selected {
            let run = self.registry.run(info.name)?;
            on_run(&run);

            let duration = run.duration();
            if let Err(source) = run.result {
                tracing::debug!(name = run.name, "demo failed");
                return Err(CliError::DemoFailed {
                    name: run.name,
                    source,
                });
            }
            stats.push(RunStats {
                name: run.name,
                duration,
            });
        }

        Ok(stats)
    }
}

fn has_all_tags(info: &DemoInfo, tags: &[String]) -> bool {
    tags.iter().all(|tag| info.tags.contains(&tag.as_str()))
}
