/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use arbiter::{Board, Move, Outcome, Square};

/// Apply a sequence of moves to a position, printing the board and outcome.
#[derive(Debug, Parser)]
struct Cli {
    /// The FEN string of the position to start from.
    #[arg(short, long)]
    fen: Option<String>,

    /// Moves to apply, in coordinate form like "e2e4".
    #[arg(required = false)]
    moves: Vec<String>,
}

/// Parses a coordinate-pair string like `"e2e4"` into a [`Move`] on `board`.
fn parse_move(board: &Board, mv_str: &str) -> Result<Move> {
    if mv_str.len() != 4 || !mv_str.is_ascii() {
        bail!("Expected a move like \"e2e4\", got {mv_str:?}");
    }

    let from = Square::from_uci(&mv_str[..2])?;
    let to = Square::from_uci(&mv_str[2..])?;

    Move::new(board, from, to).context(format!("No piece on {from} to move"))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut board = if let Some(fen) = &args.fen {
        Board::from_fen(fen)?
    } else {
        Board::default()
    };

    for mv_str in &args.moves {
        let mv = parse_move(&board, mv_str)?;

        if let Err(reason) = board.make_move(mv) {
            bail!("{} is illegal: {reason}", mv_str.bold());
        }
    }

    println!("{board}\n");

    match board.outcome() {
        Outcome::Ongoing => {
            let side = if board.side_to_move().is_white() {
                "White"
            } else {
                "Black"
            };
            println!("{side} to move, {} legal moves available", board.legal_moves().len());
        }
        outcome @ Outcome::Win(_) => println!("{}", outcome.to_string().green().bold()),
        outcome @ Outcome::Draw => println!("{}", outcome.to_string().yellow().bold()),
    }

    Ok(())
}
