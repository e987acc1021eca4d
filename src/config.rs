use crate::consts;
use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Colors used for drawing
    pub(crate) theme: Theme,

    /// Where & how much to log
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// The colors the game is drawn with
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawTheme")]
pub(crate) struct Theme {
    /// Board cells whose row + column is even
    pub(crate) dark_square: Color,

    /// Board cells whose row + column is odd; also the menu background
    pub(crate) light_square: Color,

    pub(crate) snake: Color,
    pub(crate) food: Color,

    /// Title, score, and instruction text
    pub(crate) text: Color,

    pub(crate) game_over: Color,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            dark_square: consts::DARK_SQUARE_COLOR,
            light_square: consts::LIGHT_SQUARE_COLOR,
            snake: consts::SNAKE_COLOR,
            food: consts::FOOD_COLOR,
            text: consts::TEXT_COLOR,
            game_over: consts::GAME_OVER_COLOR,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawTheme {
    dark_square: Option<String>,
    light_square: Option<String>,
    snake: Option<String>,
    food: Option<String>,
    text: Option<String>,
    game_over: Option<String>,
}

impl TryFrom<RawTheme> for Theme {
    type Error = ThemeError;

    fn try_from(value: RawTheme) -> Result<Theme, ThemeError> {
        let defaults = Theme::default();
        Ok(Theme {
            dark_square: parse_color("dark-square", value.dark_square, defaults.dark_square)?,
            light_square: parse_color("light-square", value.light_square, defaults.light_square)?,
            snake: parse_color("snake", value.snake, defaults.snake)?,
            food: parse_color("food", value.food, defaults.food)?,
            text: parse_color("text", value.text, defaults.text)?,
            game_over: parse_color("game-over", value.game_over, defaults.game_over)?,
        })
    }
}

fn parse_color(
    key: &'static str,
    value: Option<String>,
    default: Color,
) -> Result<Color, ThemeError> {
    match value {
        Some(s) => Color::from_str(&s).map_err(|_| ThemeError { key, value: s }),
        None => Ok(default),
    }
}

/// Logging settings.  Logging is disabled unless `file` is set, as the
/// terminal itself is taken up by the game.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// File to append log messages to
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level to log at; overridden by `RUST_LOG`
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid color {value:?} for theme.{key}")]
pub(crate) struct ThemeError {
    key: &'static str,
    value: String,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
