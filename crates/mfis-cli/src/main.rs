//! MFIS CLI
//!
//! Mamdani fuzzy inference over the text data files:
//! - `run`: infer every application and write the results file
//! - `trace`: dump every intermediate structure for one application as JSON
//! - `inspect`: list the loaded fuzzy sets and rules

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use mfis_core::config::defaults::LOG_ENV_VAR;
use mfis_core::models::{BatchReport, OutcomeSummary};
use mfis_core::traits::IInferenceEngine;
use mfis_core::{ConsequentMethod, DefuzzMethod, GridPolicy, MfisConfig, RuleList};
use mfis_inference::InferenceEngine;
use mfis_loader::LoadedInputs;
use mfis_observability::tracing_setup::{events, level_filter};
use mfis_observability::{init_json_tracing, init_tracing, init_tracing_with_filter};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "mfis")]
#[command(author, version, about = "Mamdani fuzzy inference for credit risk")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct CommonArgs {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Directory the data file paths are relative to (default: the config file's directory)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Args, Debug, Clone, Default)]
struct MethodArgs {
    /// Truth-qualification method: clip | scale
    #[arg(long)]
    consequent: Option<ConsequentMethod>,
    /// Defuzzification method: COA | BOA | MOM | SOM | LOM (full names accepted)
    #[arg(long)]
    defuzz: Option<DefuzzMethod>,
    /// Risk grid policy: strict | interpolate
    #[arg(long)]
    grid_policy: Option<GridPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer every application and write the results file
    Run {
        #[command(flatten)]
        methods: MethodArgs,
        /// Results file (overrides loader.results_path)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Evaluate applications on one thread
        #[arg(long)]
        serial: bool,
        /// Report rules fired by more than this many applications
        #[arg(long)]
        usage_threshold: Option<u64>,
        /// Print outcomes and rule usage as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Dump similarities, qualified sets, aggregate and crisp value for one application
    Trace {
        /// Application id
        id: String,
        #[command(flatten)]
        methods: MethodArgs,
    },

    /// List the loaded fuzzy sets and rules
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.common)?;
    init_logging(&cli.common, &config);

    match cli.command {
        Commands::Run {
            methods,
            out,
            serial,
            usage_threshold,
            json,
        } => cmd_run(config, &methods, out, serial, usage_threshold, json),
        Commands::Trace { id, methods } => cmd_trace(config, &methods, &id),
        Commands::Inspect => cmd_inspect(&config),
    }
}

/// Read the config file if given, then resolve data paths.
fn load_config(common: &CommonArgs) -> Result<MfisConfig> {
    let mut config = match &common.config {
        Some(path) => MfisConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => MfisConfig::default(),
    };
    let base = common.data_dir.clone().or_else(|| {
        common
            .config
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    });
    if let Some(base) = base {
        config.loader = config.loader.relative_to(base);
    }
    Ok(config)
}

fn init_logging(common: &CommonArgs, config: &MfisConfig) {
    let env = std::env::var(LOG_ENV_VAR).ok();
    if common.log_json {
        init_json_tracing(&log_filter(env, config));
    } else if env.as_deref().is_some_and(|f| !f.trim().is_empty()) {
        init_tracing();
    } else {
        init_tracing_with_filter(&log_filter(None, config));
    }
}

/// `MFIS_LOG` when set and non-empty, else `mfis=<observability.log_level>`.
fn log_filter(env: Option<String>, config: &MfisConfig) -> String {
    env.filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| level_filter(&config.observability.log_level))
}

fn apply_methods(config: &mut MfisConfig, methods: &MethodArgs) {
    if let Some(m) = methods.consequent {
        config.inference.consequent_method = m;
    }
    if let Some(m) = methods.defuzz {
        config.inference.defuzzification = m;
    }
    if let Some(p) = methods.grid_policy {
        config.inference.grid_policy = p;
    }
}

fn build(config: &MfisConfig) -> Result<(InferenceEngine, Vec<mfis_core::Application>)> {
    let LoadedInputs {
        catalogue,
        rules,
        applications,
    } = mfis_loader::load_all(&config.loader)?;
    let engine = InferenceEngine::new(catalogue, rules, config.inference.clone())?;
    Ok((engine, applications))
}

#[derive(Serialize)]
struct RunSummary<'a> {
    consequent_method: ConsequentMethod,
    defuzzification: DefuzzMethod,
    outcomes: Vec<OutcomeSummary<'a>>,
    rule_usage: Vec<RuleUsageEntry<'a>>,
    never_used: Vec<String>,
    used_more_than: Vec<(String, u64)>,
}

#[derive(Serialize)]
struct RuleUsageEntry<'a> {
    rule: &'a str,
    applications: u64,
}

fn run_summary<'a>(
    config: &MfisConfig,
    report: &'a BatchReport,
    rules: &'a RuleList,
    threshold: u64,
) -> RunSummary<'a> {
    RunSummary {
        consequent_method: config.inference.consequent_method,
        defuzzification: config.inference.defuzzification,
        outcomes: report.outcomes.iter().map(OutcomeSummary::from).collect(),
        rule_usage: rules
            .iter()
            .enumerate()
            .map(|(i, rule)| RuleUsageEntry {
                rule: rule.name(),
                applications: report.usage.count(i),
            })
            .collect(),
        never_used: events::never_used(&report.usage, rules),
        used_more_than: events::heavily_used(&report.usage, rules, threshold),
    }
}

fn cmd_run(
    mut config: MfisConfig,
    methods: &MethodArgs,
    out: Option<PathBuf>,
    serial: bool,
    usage_threshold: Option<u64>,
    json: bool,
) -> Result<()> {
    apply_methods(&mut config, methods);
    if serial {
        config.batch.parallel = false;
    }
    if let Some(k) = usage_threshold {
        config.batch.usage_threshold = k;
    }

    let (engine, applications) = build(&config)?;
    let report = engine.process_batch(&applications, &config.batch);
    let threshold = config.batch.usage_threshold;
    events::rule_usage_reported(&report.usage, engine.rules(), threshold);

    let results_path = out.unwrap_or_else(|| PathBuf::from(&config.loader.results_path));
    mfis_loader::write_results(&results_path, &report.outcomes)?;

    if json {
        let summary = run_summary(&config, &report, engine.rules(), threshold);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} applications: {} scored, {} failed ({} / {})",
            report.outcomes.len(),
            report.succeeded(),
            report.failed(),
            config.inference.consequent_method,
            config.inference.defuzzification.full_name(),
        );
        for (id, error) in report.failures() {
            println!("  {id}: {error}");
        }
        let unused = events::never_used(&report.usage, engine.rules());
        if !unused.is_empty() {
            println!("rules never fired: {}", unused.join(", "));
        }
        let heavy = events::heavily_used(&report.usage, engine.rules(), threshold);
        if !heavy.is_empty() {
            let listed: Vec<String> = heavy.iter().map(|(n, c)| format!("{n} ({c})")).collect();
            println!("rules fired by more than {threshold} applications: {}", listed.join(", "));
        }
        println!("results written to {}", results_path.display());
    }
    Ok(())
}

fn cmd_trace(mut config: MfisConfig, methods: &MethodArgs, id: &str) -> Result<()> {
    apply_methods(&mut config, methods);
    let (engine, applications) = build(&config)?;
    let application = applications
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| anyhow!("no application with id {id}"))?;
    let trace = engine.infer_traced(application)?;
    println!("{}", trace.to_json()?);
    Ok(())
}

fn cmd_inspect(config: &MfisConfig) -> Result<()> {
    let catalogue = mfis_loader::load_catalogue(
        &config.loader.risk_sets_path,
        &config.loader.input_sets_path,
    )?;
    let rules = mfis_loader::load_rules(&config.loader.rules_path)?;

    println!("risk sets ({}):", catalogue.risk_len());
    for set in catalogue.risk_sets() {
        println!("  {set}");
    }
    println!("input sets ({}):", catalogue.input_len());
    for set in catalogue.input_sets() {
        println!("  {set}");
    }
    println!("rules ({}):", rules.len());
    for rule in &rules {
        println!("  {rule}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfis_core::config::BatchConfig;
    use test_fixtures::fixture_path;

    #[test]
    fn method_flags_accept_synonyms() {
        let cli = Cli::try_parse_from([
            "mfis",
            "run",
            "--consequent",
            "product",
            "--defuzz",
            "largest of maximum",
            "--grid-policy",
            "interp",
        ])
        .unwrap();
        let Commands::Run { methods, .. } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(methods.consequent, Some(ConsequentMethod::Scale));
        assert_eq!(methods.defuzz, Some(DefuzzMethod::LargestOfMaximum));
        assert_eq!(methods.grid_policy, Some(GridPolicy::Interpolate));
    }

    #[test]
    fn unknown_method_is_a_usage_error() {
        assert!(Cli::try_parse_from(["mfis", "run", "--defuzz", "median"]).is_err());
    }

    #[test]
    fn log_env_var_overrides_configured_level() {
        let mut config = MfisConfig::default();
        config.observability.log_level = "warn".to_string();
        assert_eq!(
            log_filter(Some("mfis_inference=trace".to_string()), &config),
            "mfis_inference=trace"
        );
        assert_eq!(log_filter(Some("  ".to_string()), &config), "mfis=warn");
        assert_eq!(log_filter(None, &config), "mfis=warn");
    }

    #[test]
    fn data_paths_resolve_against_config_directory() {
        let common = CommonArgs {
            config: Some(fixture_path("mfis/mfis.toml")),
            ..CommonArgs::default()
        };
        let config = load_config(&common).unwrap();
        assert_eq!(
            PathBuf::from(&config.loader.rules_path),
            fixture_path("mfis/Rules.txt")
        );
        assert_eq!(config.batch.usage_threshold, 1);
    }

    #[test]
    fn run_summary_lists_usage_by_rule_name() {
        let common = CommonArgs {
            data_dir: Some(fixture_path("mfis")),
            ..CommonArgs::default()
        };
        let config = load_config(&common).unwrap();
        let (engine, applications) = build(&config).unwrap();
        let report = engine.process_batch(&applications, &BatchConfig::default());
        let summary = run_summary(&config, &report, engine.rules(), 1);

        assert_eq!(summary.outcomes.len(), 6);
        assert_eq!(summary.never_used, vec!["R9".to_string(), "R12".to_string()]);
        assert_eq!(summary.rule_usage[1].rule, "R2");
        assert_eq!(summary.rule_usage[1].applications, 2);
        assert_eq!(summary.used_more_than.len(), 5);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["defuzzification"], "COA");
        assert_eq!(json["outcomes"][5]["application_id"], "0006");
        assert!(json["outcomes"][5]["risk"].is_null());
    }

    #[test]
    fn run_writes_results_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Results.txt");
        let common = CommonArgs {
            data_dir: Some(fixture_path("mfis")),
            ..CommonArgs::default()
        };
        let config = load_config(&common).unwrap();
        cmd_run(
            config,
            &MethodArgs::default(),
            Some(out.clone()),
            true,
            None,
            false,
        )
        .unwrap();
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.starts_with("0001, 15.30\n0002, 68.98\n"));
    }
}
