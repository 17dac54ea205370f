//! Maps typed command lines to app commands.

use bookey_core::Msg;

pub const HELP: &str = "\
Commands:
  search <text>   filter saved links (empty text clears the filter)
  url <text>      edit the link to add
  add [url]       add the link (optionally setting it first)
  list            show the current view again
  help            show this help
  quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    EditUrl(String),
    Add(Option<String>),
    List,
    Help,
    Quit,
}

impl Command {
    /// Messages the command feeds into the core, in order.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Search(text) => vec![Msg::SearchChanged(text)],
            Command::EditUrl(url) => vec![Msg::UrlInputChanged(url)],
            Command::Add(Some(url)) => vec![Msg::UrlInputChanged(url), Msg::UrlSubmitted],
            Command::Add(None) => vec![Msg::UrlSubmitted],
            Command::List | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

/// Returns `None` for blank or unknown input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line.trim(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "search" | "/" => Some(Command::Search(rest.to_string())),
        "url" => Some(Command::EditUrl(rest.to_string())),
        "add" => Some(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
        "list" | "ls" => Some(Command::List),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}
