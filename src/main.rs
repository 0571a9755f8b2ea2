use clap::{Parser, ValueEnum};
use othello_engine::agent::ai::{EngineConfig, NegamaxPlayer, NoMovePolicy};
use othello_engine::agent::{GameResult, Player, RandomPlayer};
use othello_engine::game_repr::Side;
use othello_engine::orchestrator::Orchestrator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// A second negamax engine
    Engine,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "othello_engine",
    about = "Play Othello games between the negamax engine and an opponent"
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Search depth (plies) for the engine seated as Black
    #[arg(long, default_value_t = 6)]
    black_depth: u8,

    /// Search depth (plies) for White when it is an engine
    #[arg(long, default_value_t = 4)]
    white_depth: u8,

    /// Who plays White
    #[arg(long, value_enum, default_value_t = Opponent::Engine)]
    opponent: Opponent,

    /// Hand the turn over instead of scoring statically when a side is blocked mid-search
    #[arg(long, default_value_t = false)]
    pass_turn: bool,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Print the final board of every game
    #[arg(long, default_value_t = false)]
    show_boards: bool,
}

fn engine_config(depth: u8, pass_turn: bool) -> EngineConfig {
    let policy = if pass_turn {
        NoMovePolicy::PassTurn
    } else {
        NoMovePolicy::StaticEval
    };
    EngineConfig::new(depth).with_no_move_policy(policy)
}

/// Per-game seed for the random opponent, wrapping at `u64::MAX`
fn game_seed(base: u64, game: usize) -> u64 {
    base.wrapping_add(game as u64)
}

fn main() -> othello_engine::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut black_wins, mut white_wins, mut draws) = (0usize, 0usize, 0usize);

    for game in 0..args.games {
        let black: Box<dyn Player> = Box::new(NegamaxPlayer::with_config(
            Side::Black,
            engine_config(args.black_depth, args.pass_turn),
        ));
        let white: Box<dyn Player> = match args.opponent {
            Opponent::Engine => Box::new(NegamaxPlayer::with_config(
                Side::White,
                engine_config(args.white_depth, args.pass_turn),
            )),
            Opponent::Random => Box::new(RandomPlayer::new(Side::White, game_seed(args.seed, game))),
        };
        let names = format!("{} vs {}", black.name(), white.name());

        let record = Orchestrator::new(black, white).run()?;

        match record.result {
            GameResult::BlackWins => black_wins += 1,
            GameResult::WhiteWins => white_wins += 1,
            GameResult::Draw => draws += 1,
        }

        println!(
            "game {}: {} -> {:?} ({} - {})",
            game + 1,
            names,
            record.result,
            record.final_board.piece_count(Side::Black),
            record.final_board.piece_count(Side::White)
        );
        println!("  {}", record.transcript());
        if args.show_boards {
            println!("{}", record.final_board);
        }
    }

    println!(
        "Black {} / White {} / Draw {} over {} games",
        black_wins, white_wins, draws, args.games
    );

    Ok(())
}
