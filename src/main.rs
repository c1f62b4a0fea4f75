use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::net::TcpListener;

use seabattle::transport::in_memory::InMemoryTransport;
use seabattle::{
    init_logging, ui, Board, CliPlayer, Outcome, Player, RandomPlayer, Session, TcpTransport,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum PlayerType {
    Human,
    Random,
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerType::Human => write!(f, "human"),
            PlayerType::Random => write!(f, "random"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Host a game and wait for the opposing peer to connect.
    Server {
        #[arg(long, default_value = "0.0.0.0:3030")]
        bind: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Connect to a hosted game.
    Client {
        #[arg(long, default_value = "127.0.0.1:3030")]
        connect: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play two random players against each other in one process.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn make_player(kind: &PlayerType) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Random => Box::new(RandomPlayer::new()),
    }
}

fn report(session: &Session, outcome: Outcome) {
    ui::print_board_pair(session.my_board(), session.tracking_board());
    match outcome {
        Outcome::Won => println!("\nVictory! You have sunk the enemy fleet."),
        Outcome::Lost => println!("\nDefeat. All your ships have been destroyed."),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Server { bind, player, seed } => {
            let mut rng = make_rng(seed);
            let board = Board::generate_random(&mut rng);
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for connection on {}...", bind);
            let (stream, addr) = listener.accept().await?;
            println!("Peer connected from {}", addr);
            let transport = Box::new(TcpTransport::new(stream));
            let mut session = Session::new(board, make_player(&player), transport);
            let outcome = session.run(&mut rng, false).await?;
            report(&session, outcome);
        }
        Commands::Client {
            connect,
            player,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let board = Board::generate_random(&mut rng);
            println!("Connecting to {}...", connect);
            let transport = Box::new(TcpTransport::connect(&connect).await?);
            println!("Connected successfully!");
            let mut session = Session::new(board, make_player(&player), transport);
            let outcome = session.run(&mut rng, true).await?;
            report(&session, outcome);
        }
        Commands::Local { seed } => {
            println!("Starting local random vs random game...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng1 = make_rng(seed);
            let mut rng2 = make_rng(seed.map(|s| s.wrapping_add(1)));
            let (t1, t2) = InMemoryTransport::pair();

            let side1 = async move {
                let board = Board::generate_random(&mut rng1);
                let mut session =
                    Session::new(board, Box::new(RandomPlayer::new()), Box::new(t1));
                let outcome = session.run(&mut rng1, true).await?;
                anyhow::Ok((outcome, session))
            };
            let side2 = async move {
                let board = Board::generate_random(&mut rng2);
                let mut session =
                    Session::new(board, Box::new(RandomPlayer::new()), Box::new(t2));
                let outcome = session.run(&mut rng2, false).await?;
                anyhow::Ok((outcome, session))
            };

            let ((outcome1, session1), (outcome2, _)) = tokio::try_join!(side1, side2)?;
            println!("Player 1: {:?}, Player 2: {:?}", outcome1, outcome2);
            report(&session1, outcome1);
        }
    }
    Ok(())
}
