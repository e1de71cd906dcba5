use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::ui::{self, Labels};
use seabattle::{
    init_logging, AiPlayer, CliPlayer, FleetGenerator, Game, GameConfig, GameStatus, Seat,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Sinking a ship grants another shot, like a hit does")]
    extra_turn_on_sink: bool,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            extra_turn_on_sink: self.extra_turn_on_sink,
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                info!("using fixed seed {s}");
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play(GameArgs),
    /// Watch two computer players fight it out.
    Watch(GameArgs),
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let mut rng = args.rng();
            let generator = FleetGenerator::default();
            let own = generator.random_board(&mut rng);
            let mut enemy = generator.random_board(&mut rng);
            enemy.set_hidden(true);

            let mut game = Game::new(
                Seat::new(Box::new(CliPlayer::stdio()), own),
                Seat::new(Box::new(AiPlayer::new()), enemy),
                args.config(),
            );
            ui::greet();
            run_rendered(&mut game, &mut rng, &["User", "Computer"])
        }
        Commands::Watch(args) => {
            let mut rng = args.rng();
            let generator = FleetGenerator::default();
            let first = generator.random_board(&mut rng);
            let second = generator.random_board(&mut rng);

            let mut game = Game::new(
                Seat::new(Box::new(AiPlayer::new()), first),
                Seat::new(Box::new(AiPlayer::new()), second),
                args.config(),
            );
            run_rendered(&mut game, &mut rng, &["Computer 1", "Computer 2"])
        }
    }
}

/// Redraw both boards before every move and announce each shot.
fn run_rendered(game: &mut Game, rng: &mut SmallRng, labels: &Labels) -> anyhow::Result<()> {
    loop {
        ui::print_boards(game, labels);
        let side = game.to_move();
        println!("{} moves!", ui::label(labels, side));

        let turn = game.step(rng)?;
        println!(
            "{} fires at {}: {}",
            ui::label(labels, side),
            turn.target,
            ui::describe(turn.result)
        );

        if let GameStatus::Won(winner) = game.status() {
            ui::print_boards(game, labels);
            ui::announce_winner(labels, winner);
            return Ok(());
        }
    }
}
