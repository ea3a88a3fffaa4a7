//! Line command parsing.

use projboard_core::{ProjectStatus, StatusParseError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  add <title> | <description> | <people>   create an active project
  drag <id> <active|finished>               drag a project card onto a list
  list                                      render both project lists
  json                                      dump the latest snapshot as JSON
  help                                      show this help
  quit                                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw form fields; validated before reaching the store.
    Add {
        title: String,
        description: String,
        people: String,
    },
    /// `id` may be a unique prefix of a rendered project id.
    Drag { id: String, target: ProjectStatus },
    List,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Usage(&'static str),
    Status(StatusParseError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
            Self::Status(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {}

impl From<StatusParseError> for CommandError {
    fn from(value: StatusParseError) -> Self {
        Self::Status(value)
    }
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [title, description, people] = fields.as_slice() else {
                return Err(CommandError::Usage("add <title> | <description> | <people>"));
            };
            Ok(Command::Add {
                title: title.to_string(),
                description: description.to_string(),
                people: people.to_string(),
            })
        }
        "drag" => {
            let mut parts = rest.split_whitespace();
            let (Some(id), Some(target), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(CommandError::Usage("drag <id> <active|finished>"));
            };
            Ok(Command::Drag {
                id: id.to_string(),
                target: ProjectStatus::parse(target)?,
            })
        }
        "list" | "ls" => Ok(Command::List),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Command, CommandError};
    use projboard_core::ProjectStatus;

    #[test]
    fn parses_add_with_pipe_separated_fields() {
        let command = parse("add Build API | Backend service work | 3").expect("valid add");
        assert_eq!(
            command,
            Command::Add {
                title: "Build API".to_string(),
                description: "Backend service work".to_string(),
                people: "3".to_string(),
            }
        );
    }

    #[test]
    fn add_requires_three_fields() {
        let err = parse("add Build API | 3").expect_err("two fields must fail");
        assert!(matches!(err, CommandError::Usage(_)));
    }

    #[test]
    fn parses_drag_with_status() {
        let command = parse("drag 1a2b FINISHED").expect("valid drag");
        assert_eq!(
            command,
            Command::Drag {
                id: "1a2b".to_string(),
                target: ProjectStatus::Finished,
            }
        );
    }

    #[test]
    fn drag_rejects_unknown_status() {
        let err = parse("drag 1a2b archived").expect_err("unknown status must fail");
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn blank_and_unknown_commands_are_errors() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(
            parse("remove x"),
            Err(CommandError::Unknown("remove".to_string()))
        );
        assert_eq!(parse("quit"), Ok(Command::Quit));
    }
}
