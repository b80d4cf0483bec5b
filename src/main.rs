//! Console host. Either side can be a person typing squares like `b2` or a
//! computer tier, so one binary covers two players on one board as well as
//! playing against the computer. Set `RUST_LOG=debug` to see every move.

mod players;

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use players::Player;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_core::{Board, Cell, GameEvent, GameResult, Position, Session};
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe", version)]
struct Cli {
    /// Who plays X: human, easy, medium or hard
    #[arg(short = 'x', long, default_value = "human")]
    x: Player,

    /// Who plays O: human, easy, medium or hard
    #[arg(short = 'o', long, default_value = "hard")]
    o: Player,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Seed for reproducible computer choices
    #[arg(long)]
    seed: Option<u64>,
}

fn render(board: &Board) -> String {
    let mut out = String::from("  a b c");
    for row in 0..3 {
        out.push_str(&format!("\n{}", row + 1));
        for col in 0..3 {
            if let Some(pos) = Position::new(row, col) {
                out.push_str(&format!(" {}", board.get(pos)));
            }
        }
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new();
    session.subscribe(|event: &GameEvent| match event {
        GameEvent::Ended(GameResult::Win { winner, .. }) => println!("{} wins!", winner),
        GameEvent::Ended(GameResult::Draw) => println!("Draw."),
        GameEvent::Ended(GameResult::Ongoing) => {}
    });

    info!("Playing {} game(s): X={} O={}", cli.games, cli.x, cli.o);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    for round in 1..=cli.games {
        println!("Game {}", round);
        session.reset();
        if cli.x.is_human() || cli.o.is_human() {
            println!("{}\n", render(session.game().board()));
        }

        while !session.game().is_game_over() {
            let side = session.game().current_player();
            let player = if side == Cell::X { cli.x } else { cli.o };
            let mv = player.next_move(session.game(), side, &mut input, &mut output, &mut rng)?;
            if !session.apply(mv) {
                bail!("{} chose illegal square {}", side, mv);
            }
            writeln!(output, "{} -> {}\n{}\n", side, mv, render(session.game().board()))?;
        }
    }

    let score = session.scoreboard();
    println!(
        "X wins: {}  O wins: {}  Draws: {}",
        score.x_wins, score.o_wins, score.draws
    );
    Ok(())
}
