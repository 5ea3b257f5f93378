//! Perft divide driver: prints each root move with its leaf count.
//!
//! Usage: `perft_divide [depth] [fen...]` — depth defaults to 5 from
//! the starting position.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use castellan::Board;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let depth: u32 = match args.first().map(|s| s.parse()) {
        Some(Ok(depth)) => depth,
        Some(Err(_)) => {
            eprintln!("usage: perft_divide [depth] [fen...]");
            return ExitCode::FAILURE;
        }
        None => 5,
    };

    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "startpos".to_string()
    };

    let board = match Board::from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad FEN '{fen}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let nodes = board.perft_divide(depth);
    let elapsed = start.elapsed();
    let nps = nodes as f64 / elapsed.as_secs_f64();
    println!("{nodes} nodes in {elapsed:?} ({nps:.0} nodes/s)");
    ExitCode::SUCCESS
}
