use crate::board::Square;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Show,
    Help,
    Pick(Square),
    Drop(Square),
    Cancel,
    Move(Square, Square),
    Moves(Square),
    Style(u32),
    Load(String),
    Placement,
    Reset,
    Quit,
    Invalid(String),
    Unknown(String),
}

fn square_arg(parts: &[&str], idx: usize) -> Result<Square, String> {
    let text = parts
        .get(idx)
        .ok_or_else(|| format!("'{}' needs a square", parts[0]))?;
    text.parse::<Square>().map_err(|e| e.to_string())
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let parsed = match parts[0] {
        "show" | "board" => Ok(ConsoleCommand::Show),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "pick" => square_arg(&parts, 1).map(ConsoleCommand::Pick),
        "drop" => square_arg(&parts, 1).map(ConsoleCommand::Drop),
        "cancel" => Ok(ConsoleCommand::Cancel),
        "move" => square_arg(&parts, 1)
            .and_then(|from| square_arg(&parts, 2).map(|to| ConsoleCommand::Move(from, to))),
        "moves" => square_arg(&parts, 1).map(ConsoleCommand::Moves),
        "style" => parts
            .get(1)
            .and_then(|v| v.parse::<u32>().ok())
            .map(ConsoleCommand::Style)
            .ok_or_else(|| "'style' needs 1, 2 or 3".to_string()),
        "load" => {
            if parts.len() < 3 {
                Err("'load' needs a layout and a side to move".to_string())
            } else {
                Ok(ConsoleCommand::Load(parts[1..].join(" ")))
            }
        }
        "placement" => Ok(ConsoleCommand::Placement),
        "reset" | "new" => Ok(ConsoleCommand::Reset),
        "quit" | "exit" | "e" => Ok(ConsoleCommand::Quit),
        // Bare "e2e4" style moves
        word if word.len() == 4 && word.is_ascii() => match (word[..2].parse(), word[2..].parse()) {
            (Ok(from), Ok(to)) => Ok(ConsoleCommand::Move(from, to)),
            _ => Ok(ConsoleCommand::Unknown(trimmed.to_string())),
        },
        _ => Ok(ConsoleCommand::Unknown(trimmed.to_string())),
    };

    Some(parsed.unwrap_or_else(ConsoleCommand::Invalid))
}
