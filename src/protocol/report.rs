use std::io::{self, Write};

use crate::board::{Position, SearchInfo};

pub fn print_ready<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "readyok")
}

pub fn print_info<W: Write>(out: &mut W, info: &SearchInfo) -> io::Result<()> {
    writeln!(out, "{info}")
}

pub fn print_bestmove<W: Write>(out: &mut W, best_move: Option<Position>) -> io::Result<()> {
    if let Some(best_move) = best_move {
        writeln!(out, "bestmove {best_move}")
    } else {
        writeln!(out, "bestmove (none)")
    }
}

pub fn print_error<W: Write>(out: &mut W, error: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "info string error {error}")
}
