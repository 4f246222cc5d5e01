mod cli;
mod resolver;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Cli;
use nanomark_config::Config;
use nanomark_engine::ContentConverter;
use resolver::EmbedResolver;
use std::io::{self, Read, Write};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli)?;
    apply_overrides(cli, &mut config);

    let input = read_input(cli)?;
    let converter = config
        .html_converter()
        .with_resolver(Box::new(EmbedResolver));
    let html = converter.convert(&input, &config.convert_options())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let path = Config::expand_path(path);
            log::debug!("Loading config from {}", path.display());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file not found: {}", path.display()),
            }
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if cli.xhtml {
        config.html.xhtml = true;
    }
    if cli.hard_breaks {
        config.parser.hard_line_breaks = true;
    }
    if cli.no_links {
        config.parser.enable_links = false;
    }
    if let Some(prefix) = &cli.id_prefix {
        config.html.id_prefix = Some(prefix.clone());
    }
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
