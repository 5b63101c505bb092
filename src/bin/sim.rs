use std::cmp::Ordering;

use broadside::{AiPlayer, Board, GameEngine, Player, PlayerKind, PlayerNames, Seat};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play computer-vs-computer games and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, value_enum, default_value_t = PlayerKind::Hunt)]
    first: PlayerKind,
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    second: PlayerKind,
}

fn computer(kind: PlayerKind, name: String) -> anyhow::Result<Box<dyn Player>> {
    match kind {
        PlayerKind::Hunt => Ok(Box::new(AiPlayer::hunt(name))),
        PlayerKind::Random => Ok(Box::new(AiPlayer::avoidance(name))),
        PlayerKind::Human => Err(anyhow::anyhow!("sim only runs computer players")),
    }
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut wins = [0usize; 2];
    let mut names = PlayerNames::new();
    let seat_names = [names.assign(None), names.assign(None)];
    let mut games = Vec::with_capacity(args.games);
    for _ in 0..args.games {
        let p1 = computer(args.first, seat_names[0].clone())?;
        let p2 = computer(args.second, seat_names[1].clone())?;
        let mut engine = GameEngine::new(
            Seat::new(p1, Board::random(&mut rng)?),
            Seat::new(p2, Board::random(&mut rng)?),
        );
        let winner = engine.run(&mut rng, |_, _| {})?;
        wins[winner] += 1;
        games.push(json!({
            "winner": engine.player(winner).name(),
            "turns": engine.turns(),
            "shots": [
                engine.board(1).shot_history().len(),
                engine.board(0).shot_history().len(),
            ],
        }));
    }

    // null on a tie
    let overall = match wins[0].cmp(&wins[1]) {
        Ordering::Greater => Some(&seat_names[0]),
        Ordering::Less => Some(&seat_names[1]),
        Ordering::Equal => None,
    };
    let result = json!({
        "players": [args.first, args.second],
        "wins": wins,
        "winner": overall,
        "games": games,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
