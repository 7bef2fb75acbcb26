//! rust-clue console game.

mod cli;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, LayoutArg};
use rust_clue::cards::{Catalogue, Category};
use rust_clue::collab::{parse_name_list, render_catalogue, FixedCatalogue, LogRenderer};
use rust_clue::console::{describe_result, ConsoleInput};
use rust_clue::core::{GameConfig, Layout};
use rust_clue::session::GameSession;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "could not start the game");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let catalogue = load_catalogue(&cli);

    if cli.render_cards {
        let mut renderer = LogRenderer::new();
        let rendered = render_catalogue(
            &catalogue,
            &mut FixedCatalogue::new(catalogue.clone()),
            &mut renderer,
        );
        info!(rendered, "card artwork requested");
    }

    let mut session = GameSession::initialize(catalogue, &config).context("setting up the game")?;
    println!("Replay this game with --seed {}", session.seed());

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let result = session.run(&mut input);

    println!("\n{}", describe_result(&result, session.players()));
    println!("The solution was {}.", session.solution().as_guess());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            GameConfig::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(players) = cli.players {
        config.player_count = players;
    }
    if !cli.names.is_empty() {
        config = config.with_names(cli.names.iter().map(|n| n.trim()));
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    match (cli.layout, config.layout) {
        (Some(LayoutArg::Graph), _) => config.layout = Layout::Graph,
        // Keep block sizes from the config file if it already chose a grid.
        (Some(LayoutArg::Grid), Layout::Graph) => config.layout = Layout::default_grid(),
        _ => {}
    }
    Ok(config)
}

fn load_catalogue(cli: &Cli) -> Catalogue {
    let mut catalogue = Catalogue::default();
    for (category, list) in [
        (Category::Character, &cli.characters),
        (Category::Weapon, &cli.weapons),
        (Category::Room, &cli.rooms),
    ] {
        if let Some(list) = list {
            catalogue.set_names(category, parse_name_list(list));
        }
    }
    catalogue
}
