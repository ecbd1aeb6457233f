use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use stepmodal::config::Config;
use stepmodal::logging::init_tracing;

/// Multi-part modal demo for the terminal.
#[derive(Debug, Parser)]
#[command(name = "stepmodal", version, about)]
struct Cli {
    /// Config file (default: ~/.config/stepmodal/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of panels in the wizard
    #[arg(short, long)]
    panels: Option<u32>,

    /// Key of the panel shown when the modal opens
    #[arg(short, long)]
    initial: Option<u32>,

    /// Start with the modal open
    #[arg(long)]
    open: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(panels) = self.panels {
            config.demo.panels = panels;
        }
        if let Some(initial) = self.initial {
            config.demo.initial_panel = initial;
        }
        if self.open {
            config.demo.start_open = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid settings")?;

    stepmodal::ui::run(config)
}
