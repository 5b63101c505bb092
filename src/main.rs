#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, ui::print_grid, AiPlayer, Board, BoardError, CliPlayer, GameEngine,
    GuessResult, Player, PlayerKind, PlayerNames, Seat, TurnReport, DEFAULT_MAX_TURNS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer from the keyboard.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Hunt)]
        opponent: PlayerKind,
        /// Your name; defaults to player_1.
        #[arg(long)]
        name: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
    /// Watch two players play each other.
    Watch {
        #[arg(long, value_enum, default_value_t = PlayerKind::Hunt)]
        first: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
        second: PlayerKind,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerKind, name: String) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(CliPlayer::stdio(name)),
        PlayerKind::Hunt => Box::new(AiPlayer::hunt(name)),
        PlayerKind::Random => Box::new(AiPlayer::avoidance(name)),
    }
}

#[cfg(feature = "std")]
fn narrate(engine: &GameEngine, report: &TurnReport) {
    let attacker = engine.player(report.attacker).name();
    let defender = engine.player(1 - report.attacker).name();
    println!("{} attacks {} at position {}", attacker, defender, report.target);
    match report.result {
        GuessResult::Sink => {
            println!("\nA ship of {} HAS SUNK. {} can play another time.", defender, attacker)
        }
        GuessResult::Hit => println!(
            "\nA ship of {} HAS BEEN HIT. {} can play another time.",
            defender, attacker
        ),
        GuessResult::Miss => println!("\nMISSED"),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut names = PlayerNames::new();

    let (mut engine, mut rng, reveal_seat) = match cli.command {
        Commands::Play {
            opponent,
            name,
            seed,
            max_turns,
        } => {
            let mut rng = make_rng(seed);
            let human = make_player(PlayerKind::Human, names.assign(name.as_deref()));
            let computer = make_player(opponent, names.assign(None));
            let engine = GameEngine::new(
                Seat::new(human, Board::random(&mut rng)?),
                Seat::new(computer, Board::random(&mut rng)?),
            )
            .with_max_turns(max_turns);
            (engine, rng, Some(0))
        }
        Commands::Watch {
            first,
            second,
            seed,
            max_turns,
        } => {
            let mut rng = make_rng(seed);
            let p1 = make_player(first, names.assign(None));
            let p2 = make_player(second, names.assign(None));
            let engine = GameEngine::new(
                Seat::new(p1, Board::random(&mut rng)?),
                Seat::new(p2, Board::random(&mut rng)?),
            )
            .with_max_turns(max_turns);
            (engine, rng, None)
        }
    };

    if let Some(seat) = reveal_seat {
        println!("Your fleet:\n");
        print_grid(&engine.board(seat).visible_grid_with_ships());
    }

    let winner = match engine.run(&mut rng, narrate) {
        Ok(winner) => winner,
        Err(BoardError::InputClosed) => {
            println!("\nInput closed, leaving the game.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("\nFinal boards:");
    for seat in 0..2 {
        println!("\n{}:", engine.player(seat).name());
        print_grid(&engine.board(seat).visible_grid_with_ships());
    }
    println!(
        "\n{} wins after {} turns.",
        engine.player(winner).name(),
        engine.turns()
    );
    Ok(())
}
