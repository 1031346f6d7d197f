//! Minimal CLI parsing for the inspection binary.

use std::env;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Normalize each filename given on the command line
    Normalize(Vec<String>),
    /// Extract the release group of each filename
    Group(Vec<String>),
    /// Rank a JSON array of hits read from stdin
    Rank { query: String },
    /// Select a season pack from a JSON array of candidates read from stdin
    Grab { season: Option<u32> },
}

#[derive(Debug, Default)]
pub struct CliOptions {
    pub command: Option<Command>,
    pub json_logs: bool,
}

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = CliOptions::default();
        let mut subcommand: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut query: Option<String> = None;
        let mut season: Option<u32> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json-logs" => options.json_logs = true,
                "--query" => query = args.next(),
                "--season" => season = args.next().and_then(|v| v.parse().ok()),
                _ if arg.starts_with("--query=") => {
                    query = arg.split_once('=').map(|(_, v)| v.to_string());
                }
                _ if arg.starts_with("--season=") => {
                    season = arg.split_once('=').and_then(|(_, v)| v.parse().ok());
                }
                _ if subcommand.is_none() => subcommand = Some(arg),
                _ => positional.push(arg),
            }
        }

        options.command = match subcommand.as_deref() {
            Some("normalize") if !positional.is_empty() => Some(Command::Normalize(positional)),
            Some("group") if !positional.is_empty() => Some(Command::Group(positional)),
            Some("rank") => query.map(|query| Command::Rank { query }),
            Some("grab") => Some(Command::Grab { season }),
            _ => None,
        };
        options
    }
}

pub const USAGE: &str = "\
usage: fshare-grab [--json-logs] <command>

commands:
  normalize <name>...       print the normalized record of each filename
  group <name>...           print the release group of each filename
  rank --query <query>      rank a JSON array of hits read from stdin
  grab [--season <n>]       select a season pack from a JSON array of candidates on stdin";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_normalize_names() {
        let options = parse(&["normalize", "a.S01E01.mkv", "b.S01E02.mkv"]);
        assert_eq!(
            options.command,
            Some(Command::Normalize(vec!["a.S01E01.mkv".into(), "b.S01E02.mkv".into()]))
        );
        assert!(!options.json_logs);
    }

    #[test]
    fn test_rank_requires_query() {
        assert_eq!(parse(&["rank"]).command, None);
        assert_eq!(
            parse(&["rank", "--query", "ling cage"]).command,
            Some(Command::Rank { query: "ling cage".into() })
        );
        assert_eq!(
            parse(&["--json-logs", "rank", "--query=x"]).command,
            Some(Command::Rank { query: "x".into() })
        );
    }

    #[test]
    fn test_grab_season() {
        assert_eq!(parse(&["grab"]).command, Some(Command::Grab { season: None }));
        assert_eq!(
            parse(&["grab", "--season=2"]).command,
            Some(Command::Grab { season: Some(2) })
        );
        assert_eq!(
            parse(&["grab", "--season", "x"]).command,
            Some(Command::Grab { season: None })
        );
    }

    #[test]
    fn test_unknown_or_empty() {
        assert_eq!(parse(&[]).command, None);
        assert_eq!(parse(&["normalize"]).command, None);
        assert_eq!(parse(&["serve"]).command, None);
    }
}
