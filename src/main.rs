mod app;
mod cli;
mod command;
mod config;
mod consts;
mod engine;
mod logo;
mod render;
mod util;
use crate::app::App;
use crate::cli::Cli;
use crate::config::{Config, ConfigError, LogConfig};
use anyhow::Context;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Cli::from_env() {
        Ok(Cli::Run { config }) => config,
        Ok(Cli::Help) => {
            print!("{}", cli::USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprint!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    let config = match startup(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config.theme).run(terminal);
    ratatui::restore();
    io_exit(r)
}

/// Load the configuration and set up logging, before the terminal is taken
/// over
fn startup(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = load_config(path)?;
    init_logging(&config.logging)?;
    Ok(config)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(p) = path {
        return Config::load(&p, false)
            .with_context(|| format!("failed to load configuration from {}", p.display()));
    }
    match Config::default_path() {
        Ok(p) => Config::load(&p, true)
            .with_context(|| format!("failed to load configuration from {}", p.display())),
        Err(ConfigError::NoPath) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

/// Send log messages to the configured file, if any.  `RUST_LOG` takes
/// precedence over the configured level.
fn init_logging(cfg: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = cfg.file.as_deref() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    env_logger::Builder::new()
        .filter_level(cfg.level)
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .format_timestamp_millis()
        .try_init()
        .context("failed to initialize logger")?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
