use stories_core::{Msg, StoryId};

/// One line typed at the prompt, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP: &str = "\
Commands:
  search <text>   change the search term (bare `search` clears it)
  submit          fetch stories for the current search term
  remove <id>     dismiss the story with this id
  show            print the current list again
  help            print this help
  quit            exit";

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        // The search term keeps inner and trailing spaces, like a text input.
        "search" | "s" => Command::Dispatch(Msg::SearchInputChanged(rest.to_string())),
        "submit" => Command::Dispatch(Msg::SearchSubmitted),
        "remove" | "dismiss" | "rm" => match rest.trim() {
            "" => Command::Invalid("remove needs a story id".to_string()),
            id => Command::Dispatch(Msg::StoryDismissed(StoryId::from(id))),
        },
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command `{other}`, try `help`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_command("search hello world \n"),
            Command::Dispatch(Msg::SearchInputChanged("hello world ".to_string()))
        );
    }

    #[test]
    fn bare_search_clears_the_term() {
        assert_eq!(
            parse_command("search"),
            Command::Dispatch(Msg::SearchInputChanged(String::new()))
        );
    }

    #[test]
    fn remove_takes_an_id() {
        assert_eq!(
            parse_command("remove 42"),
            Command::Dispatch(Msg::StoryDismissed(StoryId::from(42)))
        );
        assert!(matches!(parse_command("remove"), Command::Invalid(_)));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_command("submit"), Command::Dispatch(Msg::SearchSubmitted));
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert!(matches!(parse_command("frobnicate"), Command::Invalid(_)));
    }
}
