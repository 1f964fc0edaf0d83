use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};

use crate::cli::CliArgs;
use filterlist::app_dirs;

const ENV_PREFIX: &str = "FILTERLIST";
const LOCAL_FILE_NAMES: [&str; 2] = [".filterlist.toml", "filterlist.toml"];

/// Assemble every configuration layer for this invocation.
///
/// Later layers win: default files, then `--config` files, then
/// `FILTERLIST__<SECTION>__<KEY>` variables. CLI flags are applied after
/// deserialization.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let defaults = if cli.no_config {
        Vec::new()
    } else {
        default_config_files(app_dirs::get_config_dir().ok(), env::current_dir().ok())
    };

    layered(defaults, &cli.config, environment())
        .build()
        .context("failed to load configuration")
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn layered(
    defaults: Vec<PathBuf>,
    explicit: &[PathBuf],
    environment: Environment,
) -> ConfigBuilder<DefaultState> {
    let optional = defaults
        .into_iter()
        .map(|path| File::from(path).required(false));
    let required = explicit
        .iter()
        .map(|path| File::from(path.as_path()).required(true));

    optional
        .chain(required)
        .fold(Config::builder(), |builder, file| builder.add_source(file))
        .add_source(environment)
}

/// Optional files consulted unless `--no-config` is given, lowest priority
/// first.
fn default_config_files(config_dir: Option<PathBuf>, current_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let user = config_dir.map(|dir| dir.join("config.toml"));
    let local = current_dir
        .iter()
        .flat_map(|dir| LOCAL_FILE_NAMES.map(|name| dir.join(name)))
        .collect::<Vec<_>>();
    user.into_iter().chain(local).collect()
}
