//! Onigiri command-line front-end.
//!
//! ## Usage
//!
//! - `onigiri` / `onigiri demo` - Show the opening position and both agents' choices
//! - `onigiri choose --stone 1` - Read a board from stdin and print the chosen move
//! - `onigiri moves --stone 2 --board pos.txt` - List legal moves with their scores
//!
//! Boards are six lines of six cells: `.`/`0` empty, `X`/`1` black, `O`/`2` white.
//! Set `RUST_LOG=debug` (or pass `-v`) to see every candidate's score.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};

use onigiri::agent::{Agent, OnigiriAgent, RandomAgent};
use onigiri::board::{Board, Stone};
use onigiri::rules::legal_moves;
use onigiri::select::score_move;

/// Onigiri: one-ply lookahead move selection for 6x6 Reversi
#[derive(Parser)]
#[command(name = "onigiri")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the opening position, legal moves and each agent's choice
    Demo,
    /// Print the chosen move for a board as `x y`, or `pass`
    Choose {
        /// Side to move (1 = black, 2 = white)
        #[arg(short, long)]
        stone: u8,
        /// Board file; reads stdin when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,
        /// Strategy to use
        #[arg(short, long, value_enum, default_value_t = AgentKind::Onigiri)]
        agent: AgentKind,
        /// Seed for the random agent
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// List every legal move with its score breakdown
    Moves {
        /// Side to move (1 = black, 2 = white)
        #[arg(short, long)]
        stone: u8,
        /// Board file; reads stdin when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Onigiri,
    Random,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Choose {
            stone,
            board,
            agent,
            seed,
        }) => {
            let stone = Stone::try_from(stone)?;
            let board = read_board(board)?;
            let agent: Box<dyn Agent> = match agent {
                AgentKind::Onigiri => Box::new(OnigiriAgent),
                AgentKind::Random => Box::new(RandomAgent::with_seed(seed)),
            };
            info!("{} choosing for {:?}", agent.face(), stone);
            match agent.choose_move(&board, stone) {
                Some((x, y)) => println!("{x} {y}"),
                None => println!("pass"),
            }
        }
        Some(Commands::Moves { stone, board }) => {
            let stone = Stone::try_from(stone)?;
            let board = read_board(board)?;
            for coord in legal_moves(&board, stone) {
                let score = score_move(&board, stone, coord);
                let reply = score
                    .reply
                    .map_or_else(|| "none".to_string(), |r| r.to_string());
                println!(
                    "{} {}  own={} reply={} net={}",
                    coord.0, coord.1, score.own, reply, score.net
                );
            }
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_board(path: Option<PathBuf>) -> Result<Board> {
    let text = match path {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read board from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read board from stdin")?;
            text
        }
    };
    text.parse::<Board>().context("invalid board")
}

fn run_demo() {
    println!("Onigiri: one-ply lookahead for 6x6 Reversi\n");

    let board = Board::new();
    println!("{board}");

    let random = RandomAgent::with_seed(0);
    let agents: [&dyn Agent; 2] = [&OnigiriAgent, &random];
    for stone in [Stone::Black, Stone::White] {
        println!("{stone} legal moves: {:?}", legal_moves(&board, stone));
        for agent in agents {
            match agent.choose_move(&board, stone) {
                Some(mv) => println!("  {} plays {:?}", agent.face(), mv),
                None => println!("  {} passes", agent.face()),
            }
        }
    }
}
