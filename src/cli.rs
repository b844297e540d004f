use crate::models::{AppConfig, HostSnapshot};
use crate::services::Console;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use machines_core::ListingState;
use std::io::Write;
use std::path::PathBuf;

/// Render a host's virtual machines and drive their actions
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(short, long, env = "MACHINES_CONSOLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host snapshot (.json or .toml); overrides the configured one.
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the VM list as HTML.
    Render {
        /// Expand a row, optionally on a tab index (repeatable).
        #[arg(long, value_name = "NAME[:TAB]", value_parser = parse_expand)]
        expand: Vec<Expand>,
    },

    /// Click an element by id and print the dispatched actions as JSON lines.
    Click {
        /// Element id, e.g. vm-fedora-run.
        element_id: String,
        /// Rows to expand; every row is expanded when omitted.
        #[arg(long, value_name = "NAME[:TAB]", value_parser = parse_expand)]
        expand: Vec<Expand>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expand {
    pub name: String,
    pub tab: Option<usize>,
}

/// `web` or `web:1`. A suffix that is not a number stays part of the name.
pub fn parse_expand(value: &str) -> Result<Expand, String> {
    if value.is_empty() {
        return Err("VM name must not be empty".to_string());
    }
    let parsed = value
        .rsplit_once(':')
        .and_then(|(name, tab)| tab.parse().ok().map(|tab| (name, tab)));
    Ok(match parsed {
        Some((name, tab)) => Expand {
            name: name.to_string(),
            tab: Some(tab),
        },
        None => Expand {
            name: value.to_string(),
            tab: None,
        },
    })
}

fn listing_state(expand: &[Expand], default_tab: usize) -> ListingState {
    let mut state = ListingState::new();
    for entry in expand {
        state.expand(entry.name.clone(), entry.tab.unwrap_or(default_tab));
    }
    state
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let snapshot_path = cli
        .snapshot
        .or_else(|| app_config.snapshot_path.clone())
        .ok_or_else(|| anyhow!("No snapshot given and none configured"))?;
    let snapshot = HostSnapshot::load(&snapshot_path)?;
    tracing::info!(
        "Rendering {} VMs from {}",
        snapshot.vms.len(),
        snapshot_path.display()
    );

    let mut console = Console::from_app_config(&app_config, snapshot.provider_state.clone());

    match cli.command {
        Command::Render { expand } => {
            let state = listing_state(&expand, app_config.default_tab);
            let node = console.render(&snapshot.vms, &state);
            writeln!(out, "{}", node.to_html())?;
        }
        Command::Click { element_id, expand } => {
            let state = if expand.is_empty() {
                let all: Vec<Expand> = snapshot
                    .vms
                    .iter()
                    .map(|vm| Expand {
                        name: vm.name.clone(),
                        tab: None,
                    })
                    .collect();
                listing_state(&all, app_config.default_tab)
            } else {
                listing_state(&expand, app_config.default_tab)
            };

            console.click(&snapshot.vms, &state, &element_id)?;
            for action in console.drain_actions() {
                writeln!(out, "{}", serde_json::to_string(&action)?)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expand() {
        assert_eq!(
            parse_expand("web"),
            Ok(Expand { name: "web".to_string(), tab: None })
        );
        assert_eq!(
            parse_expand("web:2"),
            Ok(Expand { name: "web".to_string(), tab: Some(2) })
        );
        assert_eq!(
            parse_expand("ns:web"),
            Ok(Expand { name: "ns:web".to_string(), tab: None })
        );
        assert!(parse_expand("").is_err());
    }

    #[test]
    fn test_listing_state_uses_default_tab() {
        let state = listing_state(
            &[
                Expand { name: "a".to_string(), tab: None },
                Expand { name: "b".to_string(), tab: Some(2) },
            ],
            1,
        );

        assert_eq!(state.active_tab("a"), Some(1));
        assert_eq!(state.active_tab("b"), Some(2));
        assert_eq!(state.active_tab("c"), None);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "machines-console",
            "--snapshot",
            "host.json",
            "render",
            "--expand",
            "web:1",
            "--expand",
            "db",
        ])
        .unwrap();

        assert_eq!(cli.snapshot, Some(PathBuf::from("host.json")));
        match cli.command {
            Command::Render { expand } => assert_eq!(expand.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
