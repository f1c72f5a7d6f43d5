use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use four_ai::{BoardState, Mark};

/// Draws the board to stdout, one styled tile per cell
pub fn draw(board: &BoardState) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..board.cols()).map(|col| (col % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(format!("  {}\n", header))))?;

    for row in 0..board.rows() {
        stdout.queue(PrintStyledContent(style(format!("{} ", row % 10))))?;
        for col in 0..board.cols() {
            let cell = board.get(row, col)?;
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Mark::PlayerOne => Color::Red,
                        Mark::PlayerTwo => Color::Yellow,
                        Mark::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints the board as digits, for terminals without colour support
pub fn draw_plain(board: &BoardState) -> Result<()> {
    let mut stdout = stdout();
    write!(stdout, "{}", board)?;
    stdout.flush()?;
    Ok(())
}
