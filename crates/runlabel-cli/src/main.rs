//! Print the labels that identify resources created by this run.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use runlabel_core::{BuildVersion, DefaultLabeller, Labeller, VersionProvider};
use runlabel_observe::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset, init_logger};

mod config;
mod error;

use crate::config::CliConfig;
use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "runlabel")]
#[command(about = "Print the labels identifying resources created by this run")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Version to report in the managed-by label instead of the build version.
    #[arg(long, global = true)]
    version_override: Option<String>,

    /// Log filter expression, e.g. `debug` or `runlabel_core=debug,info`.
    #[arg(long, global = true)]
    log_level: Option<LoggerLevel>,

    /// Log output format: text, json or journald.
    #[arg(long, global = true)]
    log_format: Option<LoggerFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full label set.
    #[command(visible_alias = "ls")]
    Labels {
        #[arg(long, short = 'o', value_enum, default_value = "json")]
        output: Output,
    },

    /// Print the run id label as `key=value`.
    RunId,

    /// Print the managed-by label as `key=value`.
    ManagedBy,

    /// Print build information, with the resolved version.
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Pretty-printed JSON object.
    Json,
    /// One `key=value` per line.
    Kv,
    /// Comma-joined label selector.
    Selector,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level.clone() {
        config.logger.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logger.format = format;
    }
    if config.logger.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&config.logger)?;
    debug!(?config, "configuration resolved");

    let version_override = resolve_version_override(&cli, &config);
    let labeller = DefaultLabeller::new(version_override);
    info!(
        run_id = %labeller.run_id(),
        version = labeller.version(),
        "labeller ready"
    );

    println!("{}", render(&cli.command, &labeller)?);
    Ok(())
}

/// Version override from the flag, else the config file; empty means "none".
fn resolve_version_override<'a>(cli: &'a Cli, config: &'a CliConfig) -> &'a str {
    [cli.version_override.as_deref(), config.version_override.as_deref()]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

/// Render the output of `command` for `labeller`.
fn render(command: &Commands, labeller: &DefaultLabeller) -> CliResult<String> {
    let out = match command {
        Commands::Labels { output } => {
            let labels = labeller.labels();
            match output {
                Output::Json => serde_json::to_string_pretty(&labels)?,
                Output::Kv => labels
                    .to_key_values()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
                Output::Selector => labels.selector(),
            }
        }
        Commands::RunId => labeller.run_id_key_value_string(),
        Commands::ManagedBy => labeller.k8s_managed_by_label_key_value_string(),
        Commands::Version => {
            let mut info = BuildVersion.get();
            info.version = labeller.version().to_string();
            serde_json::to_string_pretty(&info)?
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use clap::CommandFactory;
    use runlabel_core::{FixedRunId, StaticVersion};
    use runlabel_model::{Labels, RunId, VersionInfo};

    use super::*;

    const ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    fn labeller() -> DefaultLabeller {
        DefaultLabeller::with_sources(
            "1.2.3",
            &StaticVersion::default(),
            &FixedRunId(RunId::from_str(ID).unwrap()),
        )
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "runlabel",
            "labels",
            "-o",
            "kv",
            "--version-override",
            "2.0.0",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Labels { output: Output::Kv }));
        assert_eq!(cli.version_override.as_deref(), Some("2.0.0"));
        assert_eq!(cli.log_level.unwrap().as_str(), "debug");
    }

    #[test]
    fn empty_flag_falls_back_to_config_override() {
        let config = CliConfig {
            version_override: Some("9.9.9".to_string()),
            ..Default::default()
        };

        let cli = Cli::try_parse_from(["runlabel", "run-id", "--version-override", ""]).unwrap();
        assert_eq!(resolve_version_override(&cli, &config), "9.9.9");

        let cli = Cli::try_parse_from(["runlabel", "run-id", "--version-override", "1.0.0"]).unwrap();
        assert_eq!(resolve_version_override(&cli, &config), "1.0.0");

        let cli = Cli::try_parse_from(["runlabel", "run-id"]).unwrap();
        assert_eq!(resolve_version_override(&cli, &CliConfig::default()), "");
    }

    #[test]
    fn rejects_invalid_log_level() {
        let res = Cli::try_parse_from(["runlabel", "run-id", "--log-level", "x=loud"]);
        assert!(res.is_err());
    }

    #[test]
    fn labels_as_json() {
        let out = render(&Commands::Labels { output: Output::Json }, &labeller()).unwrap();
        let labels: Labels = serde_json::from_str(&out).unwrap();
        assert_eq!(labels, labeller().labels());
    }

    #[test]
    fn labels_as_kv_lines() {
        let out = render(&Commands::Labels { output: Output::Kv }, &labeller()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "app.kubernetes.io/managed-by=skaffold-1.2.3".to_string(),
                format!("skaffold.dev/run-id={ID}"),
            ]
        );
    }

    #[test]
    fn labels_as_selector() {
        let out = render(
            &Commands::Labels {
                output: Output::Selector,
            },
            &labeller(),
        )
        .unwrap();
        assert_eq!(
            out,
            format!("app.kubernetes.io/managed-by=skaffold-1.2.3,skaffold.dev/run-id={ID}")
        );
    }

    #[test]
    fn single_label_commands() {
        let l = labeller();
        assert_eq!(
            render(&Commands::RunId, &l).unwrap(),
            format!("skaffold.dev/run-id={ID}")
        );
        assert_eq!(
            render(&Commands::ManagedBy, &l).unwrap(),
            "app.kubernetes.io/managed-by=skaffold-1.2.3"
        );
    }

    #[test]
    fn version_reports_resolved_version() {
        let out = render(&Commands::Version, &labeller()).unwrap();
        let info: VersionInfo = serde_json::from_str(&out).unwrap();
        assert_eq!(info.version, "1.2.3");
        assert!(info.platform.is_some());
    }
}
