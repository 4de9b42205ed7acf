//! Line commands accepted on the serve loop's input

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeCommand {
    /// Re-emit marquee and carousel regardless of changes
    Refresh,
    Toggle,
    Blur,
    Candidates,
    Rescan,
    Open(String),
    OpenUrl(String),
    Quit,
}

impl FromStr for ServeCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |make: fn(String) -> ServeCommand| {
            if rest.is_empty() {
                Err(format!("'{word}' needs an argument"))
            } else {
                Ok(make(rest.to_string()))
            }
        };

        match word {
            "refresh" => Ok(ServeCommand::Refresh),
            "toggle" => Ok(ServeCommand::Toggle),
            "blur" => Ok(ServeCommand::Blur),
            "candidates" => Ok(ServeCommand::Candidates),
            "rescan" => Ok(ServeCommand::Rescan),
            "open" => needs_arg(ServeCommand::Open),
            "open-url" => needs_arg(ServeCommand::OpenUrl),
            "quit" | "exit" => Ok(ServeCommand::Quit),
            other => Err(format!("unknown command '{other}'")),
        }
    }
}
