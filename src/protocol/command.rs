//! Command line tokenizer.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    IsReady,
    NewGame,
    Position(Vec<String>),
    Go(Vec<String>),
    SetOption(Vec<String>),
    Display,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "c4" => Command::Hello,
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "position" => Command::Position(owned_parts()),
        "go" => Command::Go(owned_parts()),
        "setoption" => Command::SetOption(owned_parts()),
        "d" => Command::Display,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_keeps_arguments() {
        assert_eq!(
            parse_command("go ply 3 piece o\n"),
            Some(Command::Go(vec![
                "go".to_string(),
                "ply".to_string(),
                "3".to_string(),
                "piece".to_string(),
                "o".to_string(),
            ]))
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_command(" uci "),
            Some(Command::Unknown("uci".to_string()))
        );
    }
}
