use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{random_board, AiPlayer, Game, GameConfig, Seat};

/// Computer against computer; prints a one-line JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let first = random_board(&mut rng);
    let second = random_board(&mut rng);
    let mut game = Game::new(
        Seat::new(Box::new(AiPlayer::new()), first),
        Seat::new(Box::new(AiPlayer::new()), second),
        GameConfig::default(),
    );
    let outcome = game.run(&mut rng)?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
