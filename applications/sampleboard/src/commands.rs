/// Interactive command parsing
use sampleboard_core::UserId;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  sort          sort posts by title (asc, desc, reset)
  filter <id>   show only posts by user <id>; repeat to clear
  group         show or hide the user filter menu
  open <id>     expand or collapse post <id>
  play <n>      play or stop audio card <n>
  list          show the current view
  help          show this help
  quit          exit";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sort,
    Filter(UserId),
    Group,
    Open(u64),
    Play(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{command}' expects a number, got '{value}'")]
    InvalidArgument { command: &'static str, value: String },
}

fn number<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument(command))?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let arg = words.next();

        match name.as_str() {
            "sort" => Ok(Command::Sort),
            "filter" => Ok(Command::Filter(number("filter", arg)?)),
            "group" => Ok(Command::Group),
            "open" => Ok(Command::Open(number("open", arg)?)),
            "play" => Ok(Command::Play(number("play", arg)?)),
            "list" | "ls" => Ok(Command::List),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(name)),
        }
    }
}
