use super::print::{print_area_codes, print_config, print_messages, print_region, print_targets};
use super::setup::{Cli, Commands};
use super::terminal;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tenkey::api::{ConfigAction, TenkeyApi};
use tenkey::area_codes::AreaCodeTable;
use tenkey::config::TenkeyConfig;
use tenkey::error::{Result, TenkeyError};
use tenkey::model::Mode;
use tracing_subscriber::filter::LevelFilter;

const HOME_ENV: &str = "TENKEY_HOME";
const DEFAULT_AREA_CODES: &str = "area-codes.json";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let api = init_api(&cli)?;

    match cli.command {
        None => handle_practice(&api, None),
        Some(Commands::Practice { mode }) => handle_practice(&api, Some(mode)),
        Some(Commands::Generate { mode, count }) => handle_generate(&api, mode, count),
        Some(Commands::Region { number }) => handle_region(&api, &number.join(" ")),
        Some(Commands::Codes) => handle_codes(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    // Logs share the terminal with the typing screen, so they go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "tenkey", "tenkey")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TenkeyError::Config("Could not determine config dir".into()))
}

fn init_api(cli: &Cli) -> Result<TenkeyApi> {
    let dir = config_dir()?;
    let config = TenkeyConfig::load_or_default(&dir);

    let source = cli
        .area_codes
        .clone()
        .or_else(|| config.area_codes.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_AREA_CODES));
    let table = AreaCodeTable::load(&source);

    tracing::debug!(config_dir = %dir.display(), area_codes = %source.display(), "context ready");
    Ok(TenkeyApi::new(dir, config, table).with_seed(cli.seed))
}

fn handle_practice(api: &TenkeyApi, mode: Option<Mode>) -> Result<()> {
    terminal::run(api, mode)
}

fn handle_generate(api: &TenkeyApi, mode: Mode, count: usize) -> Result<()> {
    let result = api.generate(mode, count)?;
    print_targets(&result.targets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_region(api: &TenkeyApi, number: &str) -> Result<()> {
    let result = api.region(number)?;
    if let Some(region) = &result.region {
        print_region(region);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_codes(api: &TenkeyApi) -> Result<()> {
    let result = api.area_codes()?;
    print_area_codes(&result.area_codes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &TenkeyApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
