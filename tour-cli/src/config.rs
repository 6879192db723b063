//! Configuration resolution from CLI args

use crate::cli::Args;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Demo names to run (empty = all)
    pub demos: Vec<String>,
    /// Tags every selected demo must carry
    pub tags: Vec<String>,
    /// List demos instead of running them
    pub list: bool,
    /// Headers, timings and summary
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args
    ///
    /// Names and tags are trimmed, blank entries dropped and duplicates
    /// removed while keeping the first occurrence.
    pub fn from_args(args: Args) -> Self {
        Config {
            demos: normalize(args.demo),
            tags: normalize(args.tags),
            list: args.list,
            verbose: args.verbose,
        }
    }
}

fn normalize(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Args::parse_from(["lang-tour"]));
        assert_eq!(
            config,
            Config {
                demos: vec![],
                tags: vec![],
                list: false,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_filters_are_normalized() {
        let args = Args::parse_from(["lang-tour", "-d", " args,,closures,args ", "-t", "functions"]);
        let config = Config::from_args(args);
        assert_eq!(config.demos, ["args", "closures"]);
        assert_eq!(config.tags, ["functions"]);
    }

    mod properties {
        use super::super::normalize;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_normalize_is_trimmed_unique_and_idempotent(
                values in prop::collection::vec("[ a-c]{0,4}", 0..12)
            ) {
                let once = normalize(values.clone());

                for (i, value) in once.iter().enumerate() {
                    prop_assert!(!value.is_empty());
                    prop_assert_eq!(value.trim(), value.as_str());
                    prop_assert!(!once[..i].contains(value));
                }
                for value in &values {
                    let value = value.trim();
                    prop_assert!(value.is_empty() || once.iter().any(|v| v == value));
                }
                prop_assert_eq!(normalize(once.clone()), once);
            }
        }
    }
}
