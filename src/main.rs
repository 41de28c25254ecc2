use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use connect_four_state::{Board, GameConfig, GameSession, Phase, SessionEvent};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Play Connect Four in the terminal", long_about = None)]
struct Cli {
    /// TOML config file; defaults are used when it does not exist
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override player 1's color
    #[arg(long)]
    p1_color: Option<String>,

    /// Override player 2's color
    #[arg(long)]
    p2_color: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(color) = cli.p1_color {
        config.player1_color = color;
    }
    if let Some(color) = cli.p2_color {
        config.player2_color = color;
    }
    config.validate()?;

    let mut session = GameSession::new(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_help(&session);
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "q" | "quit" => break,
            "" => continue,
            "h" | "help" => print_help(&session),
            "b" | "board" => print!("{}", render_board(session.board())),
            "s" | "start" | "restart" => {
                // One control: start the first game, restart afterwards
                if session.phase() == Phase::Inactive {
                    session.start(&config.player1_color, &config.player2_color)?;
                } else {
                    session.restart(&config.player1_color, &config.player2_color)?;
                }
                print!("{}", render_board(session.board()));
                print_turn(&session);
            }
            input => {
                let events = session.submit_input(input);
                if events.is_empty() {
                    continue;
                }
                for event in &events {
                    match event {
                        SessionEvent::PieceAdded { row, column, color } => {
                            println!("{color} piece lands at row {row}, column {column}");
                        }
                        SessionEvent::GameEnded { message, .. } => {
                            print!("{}", render_board(session.board()));
                            println!("*** {message} ***");
                            println!("Type 'restart' to play again.");
                        }
                    }
                }
                if session.phase().is_active() {
                    print!("{}", render_board(session.board()));
                    print_turn(&session);
                }
            }
        }
    }

    Ok(())
}

fn print_help(session: &GameSession) {
    println!(
        "Commands: start ({}), 0-{} drop a piece, board, help, quit",
        session.phase().control_label(),
        session.board().width() - 1
    );
}

fn print_turn(session: &GameSession) {
    if let Some(player) = session.active_player() {
        println!("{} ({}) to move", player, player.color);
    }
}

/// Text rendering: column numbers on top, `.` for empty cells, the player
/// index for occupied ones.
fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for column in 0..board.width() {
        out.push_str(&format!("{:>2}", column % 10));
    }
    out.push('\n');

    for row in 0..board.height() {
        for column in 0..board.width() {
            match board.get(row, column) {
                Some(index) => out.push_str(&format!("{:>2}", index)),
                None => out.push_str(" ."),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let mut board = Board::new(4, 4).unwrap();
        board.place(3, 1, 2);

        assert_eq!(
            render_board(&board),
            " 0 1 2 3\n . . . .\n . . . .\n . . . .\n . 2 . .\n"
        );
    }
}
