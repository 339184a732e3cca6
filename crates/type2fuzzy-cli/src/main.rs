//! type2fuzzy CLI - Command-line interface for type-2 fuzzy sets
//!
//! Reads set representations from files, slices them and runs the type
//! reducers.

mod cli;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use type2fuzzy_reduce::Information;

use cli::{Cli, Commands, ConfigCommand};
use commands::{ReduceOptions, Settings};
use config::Config;
use output::{enable_colors, print_status, Status};

fn main() {
    if let Err(e) = run() {
        print_status(Status::Failed, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Override config with CLI options
    if let Some(precision) = cli.precision {
        config.reduction.precision = precision;
    }
    if let Some(information) = cli.information {
        config.reduction.information = information;
    }
    if let Some(format) = cli.output_format {
        config.output_format = format;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    } else if config.reduction.information == Information::Full {
        config.log_level = "debug".to_string();
    }
    if cli.no_color {
        config.colored = false;
    }

    enable_colors(config.colored);
    logging::init_logging(&config.log_level, config.colored)?;
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Reduce {
            file,
            method,
            slices,
            max_embedded_sets,
            parallel,
            defuzzify,
            interval,
        } => {
            if max_embedded_sets.is_some() {
                config.reduction.max_embedded_sets = max_embedded_sets;
            }
            if parallel {
                config.reduction.parallel = true;
            }
            let options = ReduceOptions {
                method,
                slices,
                defuzzify,
                interval,
            };
            commands::reduce(&file, options, &settings(&config))
        }
        Commands::Fou { file } => commands::fou(&file, &settings(&config)),
        Commands::Zslice { file, z } => commands::zslice(&file, z, &settings(&config)),
        Commands::Config { command } => handle_config_command(&command, &config),
    }
}

fn settings(config: &Config) -> Settings {
    Settings {
        reduction: config.reduction.clone(),
        output_format: config.output_format,
        slices: config.slices,
    }
}

fn handle_config_command(command: &ConfigCommand, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
        }
        ConfigCommand::Path => {
            let path = Config::config_path();
            println!("{}", path.display());
        }
        ConfigCommand::Init => {
            let path = Config::create_default()?;
            print_status(Status::Done, &format!("Created config file: {}", path.display()));
        }
    }

    Ok(())
}
