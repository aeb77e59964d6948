//! Line-oriented console front end.
//!
//! Drives a [`Session`] from text commands so the game can be played in a
//! terminal. Each command maps onto one pointer gesture.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Square};
use crate::session::{DropOutcome, IndicatorKind, PieceStyle, Selection, Session};

pub mod command;

pub use command::{parse_console_command, ConsoleCommand};

const HELP: &str = "\
commands:
  show                 print the board
  pick <sq>            pick up the piece on <sq>
  drop <sq>            drop the held piece on <sq>
  cancel               put the held piece back
  move <from> <to>     pick and drop in one step (also: e2e4)
  moves <sq>           list destinations of the piece on <sq>
  style <1|2|3>        switch piece artwork
  load <layout> <w|b>  set up a position
  placement            print the current position
  reset                start a new game
  quit                 leave";

/// Run the console on stdin/stdout until `quit` or end of input.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::default();
    writeln!(stdout, "The game is running...")?;
    writeln!(stdout, "type 'help' for commands, 'quit' to end the game")?;
    run_console(&mut session, stdin.lock(), &mut stdout)
}

/// Run the console over arbitrary input and output.
pub fn run_console<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_console_command(&line) else {
            continue;
        };
        if !handle_command(session, cmd, out)? {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

/// Execute one command. Returns `false` when the session should end.
pub fn handle_command<W: Write>(
    session: &mut Session,
    cmd: ConsoleCommand,
    out: &mut W,
) -> io::Result<bool> {
    match cmd {
        ConsoleCommand::Show => writeln!(out, "{}", session.board())?,
        ConsoleCommand::Help => writeln!(out, "{HELP}")?,
        ConsoleCommand::Pick(sq) => match session.pick_up(sq) {
            Selection::Started { .. } => {
                let marks: Vec<String> = session
                    .indicators()
                    .iter()
                    .map(|m| match m.kind {
                        IndicatorKind::Quiet => m.square.to_string(),
                        IndicatorKind::Capture => format!("x{}", m.square),
                    })
                    .collect();
                writeln!(out, "holding {sq}: {}", marks.join(" "))?;
            }
            Selection::Rejected(reason) => writeln!(out, "cannot pick: {reason}")?,
        },
        ConsoleCommand::Drop(sq) => {
            let outcome = session.drop_on(sq);
            report_drop(session, outcome, out)?;
        }
        ConsoleCommand::Cancel => {
            let outcome = session.cancel();
            report_drop(session, outcome, out)?;
        }
        ConsoleCommand::Move(from, to) => match session.try_move(from, to) {
            Ok(outcome) => report_drop(session, outcome, out)?,
            Err(reason) => writeln!(out, "cannot pick: {reason}")?,
        },
        ConsoleCommand::Moves(sq) => list_moves(session.board(), sq, out)?,
        ConsoleCommand::Style(key) => match PieceStyle::from_key(key) {
            Some(style) => {
                session.set_style(style);
                writeln!(out, "style {style} ({})", style.asset_dir())?;
            }
            None => writeln!(out, "unknown style {key}")?,
        },
        ConsoleCommand::Load(placement) => match Board::from_placement(&placement) {
            Ok(board) => {
                *session = Session::with_board(board, *session.config());
                writeln!(out, "{}", session.board())?;
            }
            Err(e) => writeln!(out, "cannot load: {e}")?,
        },
        ConsoleCommand::Placement => writeln!(out, "{}", session.board().to_placement())?,
        ConsoleCommand::Reset => {
            session.reset();
            writeln!(out, "new game")?;
        }
        ConsoleCommand::Quit => return Ok(false),
        ConsoleCommand::Invalid(msg) => writeln!(out, "error: {msg}")?,
        ConsoleCommand::Unknown(text) => writeln!(out, "unknown command '{text}'")?,
    }
    Ok(true)
}

fn report_drop<W: Write>(session: &Session, outcome: DropOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        DropOutcome::Moved {
            from, to, captured, ..
        } => {
            match captured {
                Some(c) => writeln!(out, "{from}x{to} captures {}", c.piece)?,
                None => writeln!(out, "{from}-{to}")?,
            }
            writeln!(out, "{} to move", session.board().side_to_move())
        }
        DropOutcome::Cancelled { from, .. } => writeln!(out, "illegal, back to {from}"),
        DropOutcome::NothingHeld => writeln!(out, "nothing held"),
    }
}

fn list_moves<W: Write>(board: &Board, sq: Square, out: &mut W) -> io::Result<()> {
    match board.piece_at(sq) {
        Some(piece) => {
            let moves: Vec<String> = board.moves_of(&piece).iter().map(Square::to_string).collect();
            writeln!(out, "{piece}: {}", moves.join(" "))
        }
        None => writeln!(out, "no piece on {sq}"),
    }
}
