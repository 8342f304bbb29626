mod fixture;
mod report;
mod scenarios;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use fixture::FeedFixture;
use report::{ReportFormat, ReportHeader, write_report};
use scenarios::{ScenarioResult, ScenarioRunner, expand_scenarios, get_scenario, list_scenarios};

#[derive(Debug, Parser)]
#[command(name = "hut-tester", version)]
#[command(about = "Offline QA for the Coffee Hut menu feed and site logic")]
struct Args {
    /// CSV export of the menu sheet (defaults to the built-in fixture)
    #[arg(long)]
    feed: Option<PathBuf>,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        let mut output_target = OutputTarget::new(args.output.clone())?;
        writeln!(output_target, "Available scenarios:")?;
        for (key, description) in list_scenarios() {
            writeln!(output_target, "  {key:20} - {description}")?;
        }
        output_target.flush_inner()?;
        return Ok(());
    }

    announce_banner();
    let start_time = Instant::now();
    let fixture = FeedFixture::load(args.feed.as_deref())?;
    let seeds = parse_seeds(&args.seeds)?;
    let results = run_scenarios(&args, &fixture, &seeds);

    let header = ReportHeader {
        feed_source: fixture.source.clone(),
        feed_sha256: fixture.digest.clone(),
        generated_at: Utc::now(),
    };
    let mut output_target = OutputTarget::new(args.output.clone())?;
    write_report(
        &mut output_target,
        args.report,
        &header,
        &results,
        start_time.elapsed(),
    )?;
    output_target.flush_inner()?;

    if results.is_empty() || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "☕ Coffee Hut Tester".bright_cyan().bold());
    println!("{}", "====================".cyan());
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    let seeds = split_csv(raw)
        .iter()
        .map(|s| s.parse::<u64>().with_context(|| format!("invalid seed `{s}`")))
        .collect::<Result<Vec<_>>>()?;
    if seeds.is_empty() {
        bail!("no seeds given");
    }
    Ok(seeds)
}

fn run_scenarios(args: &Args, fixture: &FeedFixture, seeds: &[u64]) -> Vec<ScenarioResult> {
    let runner = ScenarioRunner::new(fixture, args.verbose);
    let mut results = Vec::new();
    for key in expand_scenarios(&split_csv(&args.scenarios)) {
        match get_scenario(&key) {
            Some(scenario) => results.extend(runner.run(scenario, seeds, args.iterations)),
            None => eprintln!("⚠️  Unknown scenario: {}", key.yellow()),
        }
    }
    results
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            feed: None,
            scenarios: "all".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: ReportFormat::Json,
            output: None,
            verbose: false,
        }
    }

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(split_csv(" alpha, ,beta,  gamma "), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_must_be_numbers() {
        assert_eq!(parse_seeds("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert!(parse_seeds("1,x").is_err());
        assert!(parse_seeds(" , ").is_err());
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let fixture = FeedFixture::built_in().unwrap();
        let mut args = base_args();
        args.scenarios = "feed-shape,nope".to_string();
        let results = run_scenarios(&args, &fixture, &[1]);
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn all_scenarios_run_for_every_seed() {
        let fixture = FeedFixture::built_in().unwrap();
        let results = run_scenarios(&base_args(), &fixture, &[1, 2]);
        assert_eq!(results.len(), scenarios::SCENARIOS.len() * 2);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn output_target_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "hut-tester-output-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        writeln!(target, "hello").unwrap();
        target.flush_inner().unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }
}
