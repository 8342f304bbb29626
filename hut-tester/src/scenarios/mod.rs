//! Scripted logic scenarios run against `hut-core`.
//!
//! Every scenario is a plain function over the loaded feed and a seed. The
//! runner repeats it for each seed and iteration and collects failures.
mod feed_shape;
mod mission_walkthrough;
mod scroll_reconcile;
mod spinner_coverage;

use crate::fixture::FeedFixture;
use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub type ScenarioFn = fn(&FeedFixture, u64) -> Result<()>;

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "feed-shape",
        description: "Feed grouping, anchors, bilingual names and price rules",
        run: feed_shape::run,
    },
    Scenario {
        key: "spinner-coverage",
        description: "Spinner options resolve and draws stay in their list",
        run: spinner_coverage::run,
    },
    Scenario {
        key: "mission-walkthrough",
        description: "Mission steps 0 to 3 and reset on a simulated clock",
        run: mission_walkthrough::run,
    },
    Scenario {
        key: "scroll-reconcile",
        description: "Scroll spy never fights a programmatic scroll",
        run: scroll_reconcile::run,
    },
];

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

/// Expand `all` and drop duplicates, keeping the requested order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in requested {
        let expanded: Vec<String> = if key == "all" {
            SCENARIOS.iter().map(|s| s.key.to_string()).collect()
        } else {
            vec![key.clone()]
        };
        for key in expanded {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct ScenarioRunner<'a> {
    fixture: &'a FeedFixture,
    verbose: bool,
}

impl<'a> ScenarioRunner<'a> {
    pub const fn new(fixture: &'a FeedFixture, verbose: bool) -> Self {
        Self { fixture, verbose }
    }

    pub fn run(&self, scenario: &Scenario, seeds: &[u64], iterations: usize) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| self.run_seed(scenario, seed, iterations))
            .collect()
    }

    fn run_seed(&self, scenario: &Scenario, seed: u64, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} (seed: {seed})",
                scenario.key.bright_white()
            );
        }
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start = Instant::now();
            let outcome = (scenario.run)(self.fixture, iteration_seed);
            timings.push(start.elapsed());
            if let Err(err) = outcome {
                if self.verbose {
                    println!("  ❌ Iteration {}/{iterations} failed: {}", i + 1, format!("{err:#}").red());
                }
                failures.push(format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1));
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_scenario_once() {
        let keys = expand_scenarios(&["feed-shape".to_string(), "all".to_string()]);
        assert_eq!(keys.len(), SCENARIOS.len());
        assert_eq!(keys[0], "feed-shape");
    }

    #[test]
    fn every_scenario_passes_on_the_built_in_feed() {
        let fixture = FeedFixture::built_in().unwrap();
        let runner = ScenarioRunner::new(&fixture, false);
        for scenario in SCENARIOS {
            let results = runner.run(scenario, &[1, 1337], 3);
            for result in results {
                assert!(result.passed, "{}: {:?}", result.scenario_name, result.failures);
                assert_eq!(result.successful_iterations, 3);
            }
        }
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "feed-shape".into(),
            seed: 7,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(1500),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 1500);
    }
}
