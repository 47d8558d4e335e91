use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use spm_merge::{
    summarize_file, EndpointOutcome, EndpointReport, MergeConfig, MergePipeline, Summary,
    WriteMode,
};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, cli.format),
        Command::Summary(args) => cmd_summary(args, cli.format),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    match path {
        Some(path) => MergeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(MergeConfig::default()),
    }
}

/// Flags win over the config file.
fn apply_overrides(config: &mut MergeConfig, args: &MergeArgs) {
    if let Some(primary) = &args.primary {
        config.primary = primary.clone();
    }
    if let Some(secondary) = &args.secondary {
        config.secondary = secondary.clone();
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if !args.endpoints.is_empty() {
        config.merge.endpoints = args.endpoints.clone();
    }
    if let Some(title) = &args.title {
        config.merge.info.title = title.clone();
    }
    if let Some(description) = &args.description {
        config.merge.info.description = description.clone();
    }
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    let mode = if args.dry_run { WriteMode::DryRun } else { WriteMode::Write };
    debug!(
        primary = %config.primary.display(),
        secondary = %config.secondary.display(),
        target = %config.target().display(),
        endpoints = config.merge.endpoints.len(),
        "effective merge config"
    );

    let report = MergePipeline::new(config)
        .run(mode)
        .context("merge failed")?;

    match format {
        OutputFormat::Text => {
            for endpoint in &report.outcome.reports {
                println!("{}", render_endpoint(endpoint));
            }
            println!();
            println!("{}", render_headline(report.outcome.summary.total, report.written.is_some()));
            for line in render_conventions(&report.outcome.summary) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "written": report.written.as_ref().map(|p| p.display().to_string()),
                "endpoints": report.outcome.reports,
                "summary": report.outcome.summary,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn cmd_summary(args: SummaryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let summary = summarize_file(&args.file, &config.merge.conventions)
        .with_context(|| format!("summarizing {}", args.file.display()))?;

    match format {
        OutputFormat::Text => {
            println!("{} has {} endpoints", args.file.display().to_string().bold(), summary.total);
            for line in render_conventions(&summary) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn render_endpoint(report: &EndpointReport) -> String {
    match report.outcome {
        EndpointOutcome::Added => format!("{} Adding {}", "✓".green(), report.endpoint),
        EndpointOutcome::Replaced => {
            format!("{} Replacing {}", "✓".yellow(), report.endpoint)
        }
        EndpointOutcome::NotFound => format!(
            "{} Endpoint {} not found in legacy spec",
            "✗".red(),
            report.endpoint
        ),
    }
}

fn render_headline(total: usize, written: bool) -> String {
    if written {
        format!("{} Merged spec saved with {} endpoints", "✅".green().bold(), total)
    } else {
        format!("Dry run: merged spec would have {} endpoints", total)
    }
}

fn render_conventions(summary: &Summary) -> Vec<String> {
    summary
        .conventions
        .iter()
        .map(|c| format!("   {} endpoints: {}", c.label, c.count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use spm_merge::ConventionCount;

    fn plain() {
        colored::control::set_override(false);
    }

    fn report(endpoint: &str, outcome: EndpointOutcome) -> EndpointReport {
        EndpointReport { endpoint: endpoint.into(), outcome }
    }

    #[test]
    fn endpoint_lines() {
        plain();
        assert_eq!(
            render_endpoint(&report("/api/printer/tool", EndpointOutcome::Added)),
            "✓ Adding /api/printer/tool"
        );
        assert_eq!(
            render_endpoint(&report("/api/printer/bed", EndpointOutcome::Replaced)),
            "✓ Replacing /api/printer/bed"
        );
        assert_eq!(
            render_endpoint(&report("/api/printer/printhead", EndpointOutcome::NotFound)),
            "✗ Endpoint /api/printer/printhead not found in legacy spec"
        );
    }

    #[test]
    fn summary_lines() {
        plain();
        let summary = Summary {
            total: 3,
            conventions: vec![
                ConventionCount { label: "v1".into(), pattern: "/api/v1/".into(), count: 1 },
                ConventionCount { label: "Legacy".into(), pattern: "/api/printer/".into(), count: 2 },
            ],
        };
        assert_eq!(render_headline(3, true), "✅ Merged spec saved with 3 endpoints");
        assert!(render_headline(3, false).starts_with("Dry run"));
        assert_eq!(
            render_conventions(&summary),
            vec!["   v1 endpoints: 1", "   Legacy endpoints: 2"]
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "spm", "merge", "--secondary", "legacy.yaml", "-e", "/api/printer/bed", "--title", "T",
        ])
        .unwrap();
        let Command::Merge(args) = cli.command else { panic!("wrong command") };

        let mut config = MergeConfig::default();
        config.output = Some("kept.yaml".into());
        apply_overrides(&mut config, &args);

        assert_eq!(config.primary, MergeConfig::default().primary);
        assert_eq!(config.secondary, Path::new("legacy.yaml"));
        assert_eq!(config.output.as_deref(), Some(Path::new("kept.yaml")));
        assert_eq!(config.merge.endpoints, vec!["/api/printer/bed"]);
        assert_eq!(config.merge.info.title, "T");
        assert_eq!(config.merge.info.description, MergeConfig::default().merge.info.description);
    }

    #[test]
    fn merge_command_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("openapi.yaml");
        let secondary = dir.path().join("legacy.yaml");
        let output = dir.path().join("merged.yaml");
        std::fs::write(&primary, "info:\n  title: v1\npaths:\n  /api/v1/job: {}\n").unwrap();
        std::fs::write(&secondary, "paths:\n  /api/printer/bed:\n    post: {}\n").unwrap();

        let cli = Cli::try_parse_from([
            "spm",
            "merge",
            "--primary",
            primary.to_str().unwrap(),
            "--secondary",
            secondary.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--format",
            "json",
        ])
        .unwrap();
        run_command(cli).unwrap();

        let merged = spm_doc::ApiDocument::load(&output).unwrap();
        assert_eq!(merged.path_keys().unwrap(), vec!["/api/v1/job", "/api/printer/bed"]);
    }

    #[test]
    fn missing_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }
}
