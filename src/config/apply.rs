use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::ServerArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Values given on the command line or through the environment beat the
/// config file.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Merges config-file values into `args` for every setting the user did not
/// pass explicitly.
///
/// # Errors
///
/// Returns an error when the config lists an empty `data` array.
pub fn apply_config(
    args: &mut ServerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "listen")
        && let Some(listen) = config.listen.clone()
    {
        args.listen = listen;
    }

    if !is_explicit(matches, "data")
        && let Some(data) = config.data.as_ref()
    {
        if data.is_empty() {
            return Err(AppError::config(ConfigError::EmptyDataPaths));
        }
        args.data = data.iter().map(PathBuf::from).collect();
    }

    if !is_explicit(matches, "default_threshold_ms")
        && let Some(threshold) = config.default_threshold_ms
    {
        args.default_threshold_ms = threshold;
    }

    if !is_explicit(matches, "cors_origin")
        && let Some(origin) = config.cors_origin.clone()
    {
        args.cors_origin = origin;
    }

    if !is_explicit(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_explicit(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}
