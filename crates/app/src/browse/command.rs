use newsdesk_core::error::CoreError;
use newsdesk_core::types::date_range::DateRange;
use newsdesk_core::types::language::LanguageCode;
use newsdesk_core::types::source_filter::SourceFilter;
use thiserror::Error;

pub const HELP: &str = "\
Type keywords to search. Commands:
  /lang <code|all>       filter by language (e.g. en, de)
  /range <today|week|month>
  /source <id|all>       filter by source id (see /sources)
  /sources               list available sources
  /theme                 toggle dark mode
  /clear                 clear the search
  /help                  show this help
  /quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Language(LanguageCode),
    DateRange(DateRange),
    Source(SourceFilter),
    ListSources,
    ToggleTheme,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Invalid(#[from] CoreError),
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown command: /{0} (try /help)")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(Command::Search(trimmed.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "lang" | "language" => {
            let arg = required(arg, "lang")?;
            Ok(Command::Language(LanguageCode::try_from(arg)?))
        }
        "range" => Ok(Command::DateRange(DateRange::parse(required(arg, "range")?))),
        "source" => {
            let arg = required(arg, "source")?;
            Ok(Command::Source(SourceFilter::try_from(arg)?))
        }
        "sources" => Ok(Command::ListSources),
        "theme" => Ok(Command::ToggleTheme),
        "clear" => Ok(Command::Search(String::new())),
        "search" => Ok(Command::Search(arg.to_string())),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn required<'a>(arg: &'a str, name: &'static str) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_command("  theme parks ").unwrap(),
            Command::Search("theme parks".to_string())
        );
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn filter_commands_parse() {
        assert_eq!(
            parse_command("/lang DE").unwrap(),
            Command::Language(LanguageCode::try_from("de").unwrap())
        );
        assert_eq!(parse_command("/range month").unwrap(), Command::DateRange(DateRange::Month));
        assert_eq!(
            parse_command("/source bbc-news").unwrap(),
            Command::Source(SourceFilter::try_from("bbc-news").unwrap())
        );
    }

    #[test]
    fn unknown_range_argument_means_week() {
        assert_eq!(parse_command("/range forever").unwrap(), Command::DateRange(DateRange::Week));
    }

    #[test]
    fn clear_and_search_commands() {
        assert_eq!(parse_command("/clear").unwrap(), Command::Search(String::new()));
        assert_eq!(
            parse_command("/search /weird").unwrap(),
            Command::Search("/weird".to_string())
        );
    }

    #[test]
    fn invalid_arguments_are_reported() {
        assert!(matches!(parse_command("/lang"), Err(CommandError::MissingArgument("lang"))));
        assert!(matches!(parse_command("/lang english"), Err(CommandError::Invalid(_))));
        assert!(matches!(parse_command("/source BBC News"), Err(CommandError::Invalid(_))));
        assert!(matches!(parse_command("/reload"), Err(CommandError::Unknown(_))));
    }
}
