//! Supervisory dashboard command-line front end.
//!
//! Prints the region projection and the monitoring datasets without the
//! interactive terminal UI.
//!
//! Usage:
//!   cargo run -p supervisor-cli -- summary --region 遵义市
//!   cargo run -p supervisor-cli -- regions
//!   cargo run -p supervisor-cli -- panel finance --json
//!   cargo run -p supervisor-cli -- roles

mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use supervisor_config::DashboardConfig;
use supervisor_contracts::{
    error::{SupervisorError, SupervisorResult},
    view::ViewState,
};
use supervisor_mock::{panel_snapshot, roles::roles, StaticRegions};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Telemedicine supervisory platform, command-line edition.
#[derive(Parser, Debug)]
#[command(
    name = "supervisor",
    about = "Telemedicine supervisory dashboard (command line)",
    long_about = "Prints the region-scaled home summary, the region hierarchy,\n\
                  and the monitoring datasets behind each dashboard panel."
)]
struct Cli {
    /// Dashboard configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the home projection for a region.
    Summary {
        /// Region name; defaults to the configured region.
        #[arg(long)]
        region: Option<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the region hierarchy.
    Regions,
    /// Print the dataset behind one panel.
    Panel {
        /// home, institution, resource, service, operation, quality, finance or finance-detail.
        #[arg(value_parser = parse_view)]
        name: ViewState,
        /// Region used by the home panel.
        #[arg(long)]
        region: Option<String>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the supervisory roles.
    Roles,
}

fn parse_view(s: &str) -> Result<ViewState, String> {
    s.parse::<ViewState>().map_err(|e| e.to_string())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match DashboardConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("supervisor: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run(cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("supervisor: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn run(command: Command, config: &DashboardConfig) -> SupervisorResult<String> {
    debug!(?command, "dispatch");
    let region_or_default =
        |region: Option<String>| region.unwrap_or_else(|| config.resolved_region(&StaticRegions));

    match command {
        Command::Summary { region, json } => {
            let data = supervisor_mock::get_dashboard_data(&region_or_default(region));
            if json {
                to_json(&data)
            } else {
                Ok(report::summary(&data))
            }
        }
        Command::Regions => Ok(report::regions(&StaticRegions)),
        Command::Panel { name, region, json } => {
            let region = region_or_default(region);
            if json {
                to_json(&panel_snapshot(name, &region))
            } else {
                Ok(report::panel(name, &region))
            }
        }
        Command::Roles => Ok(report::roles(&roles(), &config.role()?)),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> SupervisorResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| SupervisorError::ConfigError {
        reason: format!("failed to encode JSON: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("supervisor").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn panel_name_is_parsed_to_view() {
        match parse(&["panel", "finance-detail", "--json"]).command {
            Command::Panel { name, json, .. } => {
                assert_eq!(name, ViewState::FinanceDetail);
                assert!(json);
            }
            other => panic!("expected Panel, got {:?}", other),
        }
    }

    #[test]
    fn unknown_panel_is_rejected() {
        let err = Cli::try_parse_from(["supervisor", "panel", "billing"]).unwrap_err();
        assert!(err.to_string().contains("unknown view 'billing'"), "got: {err}");
    }

    #[test]
    fn config_flag_is_global() {
        let cli = parse(&["roles", "--config", "config/dashboard.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("config/dashboard.toml")));
    }

    #[test]
    fn summary_json_for_city() {
        let out = run(
            Command::Summary {
                region: Some("遵义市".to_string()),
                json: true,
            },
            &DashboardConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kpi"]["total_volume"], 1_247_469);
        assert_eq!(value["ranking_category"], "County");
    }

    #[test]
    fn summary_defaults_to_configured_region() {
        let config = DashboardConfig::from_toml_str("[dashboard]\ndefault_region = \"南明区\"\n").unwrap();
        let out = run(Command::Summary { region: None, json: false }, &config).unwrap();
        assert!(out.contains("南明区"), "got: {out}");
        assert!(out.contains("0.53千万"), "got: {out}");
    }

    #[test]
    fn roles_mark_the_configured_role() {
        let config = DashboardConfig::from_toml_str("[dashboard]\nrole = \"PROV\"\n").unwrap();
        let out = run(Command::Roles, &config).unwrap();
        assert!(out.contains("* PROV"), "got: {out}");
        assert!(out.contains("  SUPER"), "got: {out}");
    }
}
