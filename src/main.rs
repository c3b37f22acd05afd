//! Domino CLI - auto-plays one four-player game and prints it.

use clap::{Parser, ValueEnum};
use domino_engine::{
    EndReason, GameConfig, GameDriver, GameEvent, GameObserver, GameState, GameStatus, PlayerId,
    StrategyKind,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domino")]
#[command(about = "Four-player domino game simulator")]
struct Args {
    /// Number of players (only 4 is supported)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Deal seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns even if nobody has won
    #[arg(long)]
    max_turns: Option<u32>,

    /// Tile selection strategy for every seat
    #[arg(long, default_value = "first")]
    strategy: StrategyArg,

    /// Show every hand and each engine decision
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print the result
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    First,
    Random,
    Heaviest,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::First => StrategyKind::First,
            StrategyArg::Random => StrategyKind::Random,
            StrategyArg::Heaviest => StrategyKind::Heaviest,
        }
    }
}

const WIDTH: usize = 100;

/// Prints the table the way a spectator would see it.
struct ConsoleDisplay {
    show_hands: bool,
    quiet: bool,
}

impl ConsoleDisplay {
    fn print_board(&self, state: &GameState) {
        println!("\n{}", "=".repeat(WIDTH));
        if state.board().is_empty() {
            println!("{:^WIDTH$}", "Board is empty");
        } else {
            println!("{:^WIDTH$}", state.board().to_string());
        }
        println!("{}", "=".repeat(WIDTH));
    }

    fn print_hand(&self, state: &GameState, player: PlayerId) {
        println!("\nTiles for {}:", state.player(player).name);
        for (id, tile) in state.hand(player) {
            println!("  {id}: {tile}  [{}]", tile.asset());
        }
    }
}

impl GameObserver for ConsoleDisplay {
    fn on_event(&mut self, event: &GameEvent, state: &GameState) {
        if self.quiet {
            return;
        }
        match *event {
            GameEvent::Dealt => {
                println!("DOMINO GAME SETUP COMPLETE!");
                println!("Generated {} tiles", state.tiles().len());
                println!("Players:");
                for (id, player) in state.players().iter() {
                    println!("  {}. {}", id.number(), player);
                }
            }
            GameEvent::Started { starter, .. } => {
                println!("\n{} starts with the double-six!", state.player(starter).name);
                self.print_board(state);
                if self.show_hands {
                    self.print_hand(state, state.current_player());
                }
            }
            GameEvent::Played { player, tile, .. } => {
                let name = &state.player(player).name;
                if let Some(t) = state.tile(tile) {
                    println!("\n--- {name}'s Turn ---");
                    println!("{name} played tile {tile}: {t}");
                }
                self.print_board(state);
                if self.show_hands && !state.is_terminal() {
                    self.print_hand(state, state.current_player());
                }
            }
            GameEvent::Passed { player } => {
                let name = &state.player(player).name;
                println!("\n--- {name}'s Turn ---");
                println!("{name} has no valid moves and must pass.");
            }
            GameEvent::Won { player } => {
                println!("\n*** {} WINS! ***", state.player(player).name);
            }
            GameEvent::Drawn => {
                println!("\nNobody can play. The game is blocked.");
            }
            GameEvent::TurnLimitReached { turns } => {
                println!("\nGame ended due to turn limit ({turns} turns).");
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = GameConfig::default().with_player_count(args.players);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_turns) = args.max_turns {
        config = config.with_max_turns(max_turns);
    }
    config.validate()?;

    let mut driver = GameDriver::new(config).with_strategy_kind(args.strategy.into());
    info!(seed = driver.seed(), strategy = ?args.strategy, "starting game");

    let mut display = ConsoleDisplay {
        show_hands: args.verbose,
        quiet: args.quiet,
    };
    let report = driver.run(&mut display)?;

    println!("\n*** GAME OVER ***");
    let summary = match (report.end_reason, report.status) {
        (EndReason::Win, GameStatus::Won(player)) => {
            format!("{} won", report.final_state.player(player).name)
        }
        (EndReason::TurnLimit, _) => "stopped at the turn limit".to_string(),
        _ => "drawn".to_string(),
    };
    println!(
        "Result: {summary} after {} turns ({} tiles on the board, seed {})",
        report.turns_taken,
        report.board_len(),
        report.seed
    );

    Ok(())
}
