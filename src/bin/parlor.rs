use std::io::IsTerminal;
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use parlor::console::{Console, IoPrompter, LinePrompter, Messages, TerminalClearer, TerminalPrompter};
use parlor::games::rpsls::{Rpsls, RpslsConfig};
use parlor::games::tic_tac_toe::{TicTacToe, TicTacToeConfig};
use parlor::games::twenty_one::{TwentyOne, TwentyOneConfig};
use parlor::games::mortgage;
use parlor::rules::{run_session, RoundGame};
use parlor::GameRng;

#[derive(Parser)]
#[command(name = "parlor", about = "Terminal parlor games")]
struct Cli {
    /// Seed for the computer's choices and the deck (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file whose keys replace the built-in messages
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Round wins that end a match (each game has its own default)
    #[arg(long)]
    rounds: Option<NonZeroU32>,

    /// Do not clear the screen between phases
    #[arg(long)]
    no_clear: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly payment calculator
    Mortgage,
    /// Rock Paper Scissors Lizard Spock, first to 3 by default
    Rpsls,
    /// Twenty-One against the dealer, first to 5 by default
    TwentyOne,
    /// Tic-Tac-Toe against the computer, first to 3 by default
    TicTacToe,
}

fn console<P: LinePrompter>(cli: &Cli, prompter: P, defaults: Messages) -> Result<Console<P>> {
    let messages = match &cli.messages {
        Some(path) => {
            let overlay = Messages::from_file(path)
                .with_context(|| format!("Failed to load messages from {}", path.display()))?;
            if overlay.is_empty() {
                log::warn!("{} has no message overrides", path.display());
            } else {
                log::info!("loaded {} message overrides from {}", overlay.len(), path.display());
            }
            defaults.merge(overlay)
        }
        None => defaults,
    };

    let console = Console::new(prompter, messages);
    Ok(if cli.no_clear { console } else { console.with_clearer(TerminalClearer) })
}

fn play<P: LinePrompter, G: RoundGame>(cli: &Cli, prompter: P, mut game: G, messages: Messages) -> Result<()> {
    let mut console = console(cli, prompter, messages)?;
    let summaries = run_session(&mut game, &mut console)?;
    log::info!("session over after {} matches", summaries.len());
    Ok(())
}

fn run<P: LinePrompter>(cli: &Cli, prompter: P, rng: GameRng) -> Result<()> {
    match &cli.command {
        Command::Mortgage => {
            if cli.rounds.is_some() {
                log::warn!("--rounds has no effect on the mortgage calculator");
            }
            let mut console = console(cli, prompter, mortgage::messages()?)?;
            mortgage::run(&mut console)?;
        }
        Command::Rpsls => {
            let mut config = RpslsConfig::default();
            if let Some(rounds) = cli.rounds {
                config = config.with_grand_winner(rounds);
            }
            play(cli, prompter, Rpsls::new(config, rng), Rpsls::messages()?)?;
        }
        Command::TwentyOne => {
            let mut config = TwentyOneConfig::default();
            if let Some(rounds) = cli.rounds {
                config = config.with_grand_winner(rounds);
            }
            play(cli, prompter, TwentyOne::new(config, rng), TwentyOne::messages()?)?;
        }
        Command::TicTacToe => {
            let mut config = TicTacToeConfig::default();
            if let Some(rounds) = cli.rounds {
                config = config.with_grand_winner(rounds);
            }
            play(cli, prompter, TicTacToe::new(config, rng), TicTacToe::messages()?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    log::debug!("rng seed {}", rng.seed());

    if std::io::stdin().is_terminal() {
        run(&cli, TerminalPrompter::new(), rng)
    } else {
        run(&cli, IoPrompter::stdio(), rng)
    }
}
