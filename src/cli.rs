use lexopt::{Arg, Parser};
use std::path::PathBuf;

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    /// Play the game
    Run {
        /// Configuration file given with `--config`
        config: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    pub(crate) fn from_env() -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config })
    }
}

pub(crate) const USAGE: &str = "\
Usage: gridsnake [-c|--config <PATH>]

Play Snake on a 21x21 grid in the terminal.

Controls: w a s d to turn, space to start or reset, Ctrl-C to quit.

Options:
  -c, --config <PATH>   Read configuration from the given file
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], Cli::Run { config: None })]
    #[case(&["--config", "snake.toml"], Cli::Run { config: Some(PathBuf::from("snake.toml")) })]
    #[case(&["-c", "snake.toml"], Cli::Run { config: Some(PathBuf::from("snake.toml")) })]
    #[case(
        &["--config=a.toml", "-c", "b.toml"],
        Cli::Run { config: Some(PathBuf::from("b.toml")) }
    )]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-h", "--bogus"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    fn parse(#[case] args: &[&str], #[case] cli: Cli) {
        let parser = Parser::from_args(args.iter().copied());
        assert_eq!(Cli::from_parser(parser).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["--config"])]
    #[case(&["extra"])]
    fn parse_error(#[case] args: &[&str]) {
        let parser = Parser::from_args(args.iter().copied());
        assert!(Cli::from_parser(parser).is_err());
    }
}
