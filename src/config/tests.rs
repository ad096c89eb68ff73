use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use super::{apply_config, load_config, load_config_file, types::ConfigFile};
use crate::args::ServerArgs;

fn parse_with_config(cli: &[&str], config: &ConfigFile) -> Result<ServerArgs, String> {
    let matches = ServerArgs::command()
        .try_get_matches_from(cli)
        .map_err(|err| format!("parse failed: {}", err))?;
    let mut args = ServerArgs::from_arg_matches(&matches)
        .map_err(|err| format!("from matches failed: {}", err))?;
    apply_config(&mut args, &matches, config).map_err(|err| err.to_string())?;
    Ok(args)
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("region-metrics.toml");
    let content = r#"
listen = "0.0.0.0:9000"
data = ["data/a.json", "b.jsonl"]
default_threshold_ms = 250
cors_origin = "https://dash.example"
verbose = true
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.listen.as_deref() != Some("0.0.0.0:9000") {
        return Err("Unexpected listen".to_owned());
    }
    if config.data.as_deref() != Some(&["data/a.json".to_owned(), "b.jsonl".to_owned()][..]) {
        return Err(format!("Unexpected data {:?}", config.data));
    }
    if config.default_threshold_ms != Some(250) || config.verbose != Some(true) {
        return Err("Unexpected threshold/verbose".to_owned());
    }
    if config.no_color.is_some() {
        return Err("no_color should be unset".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("region-metrics.json");
    std::fs::write(&path, r#"{"listen": "127.0.0.1:7000", "no_color": true}"#)
        .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config(path.to_str()).map_err(|err| err.to_string())?;
    let Some(config) = config else {
        return Err("Expected config".to_owned());
    };
    if config.listen.as_deref() != Some("127.0.0.1:7000") || config.no_color != Some(true) {
        return Err(format!("Unexpected config {:?}", config));
    }
    Ok(())
}

#[test]
fn rejects_unknown_extension_and_bad_content() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let yaml = dir.path().join("region-metrics.yaml");
    std::fs::write(&yaml, "listen: x").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&yaml).is_ok() {
        return Err("Expected unsupported extension error".to_owned());
    }

    let toml = dir.path().join("region-metrics.toml");
    std::fs::write(&toml, "default_threshold_ms = \"soon\"")
        .map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&toml).is_ok() {
        return Err("Expected TOML type error".to_owned());
    }

    if load_config_file(&dir.path().join("missing.toml")).is_ok() {
        return Err("Expected read error".to_owned());
    }
    Ok(())
}

#[test]
fn config_fills_values_not_given_on_cli() -> Result<(), String> {
    let config = ConfigFile {
        listen: Some("0.0.0.0:9000".to_owned()),
        data: Some(vec!["from-config.json".to_owned()]),
        default_threshold_ms: Some(300),
        cors_origin: Some("https://dash.example".to_owned()),
        verbose: Some(true),
        no_color: Some(true),
    };
    let args = parse_with_config(&["region-metrics", "--default-threshold-ms", "90"], &config)?;
    if args.default_threshold_ms != 90 {
        return Err(format!("CLI threshold overridden: {}", args.default_threshold_ms));
    }
    if args.data != [PathBuf::from("from-config.json")] {
        return Err(format!("Unexpected data {:?}", args.data));
    }
    if args.cors_origin != "https://dash.example" || !args.verbose || !args.no_color {
        return Err(format!("Config values not applied: {:?}", args));
    }
    Ok(())
}

#[test]
fn cli_data_beats_config_data() -> Result<(), String> {
    let config = ConfigFile {
        data: Some(vec!["from-config.json".to_owned()]),
        ..ConfigFile::default()
    };
    let args = parse_with_config(&["region-metrics", "--data", "cli.json"], &config)?;
    if args.data != [PathBuf::from("cli.json")] {
        return Err(format!("Unexpected data {:?}", args.data));
    }
    Ok(())
}

#[test]
fn empty_config_data_is_rejected() -> Result<(), String> {
    let config = ConfigFile {
        data: Some(Vec::new()),
        ..ConfigFile::default()
    };
    if parse_with_config(&["region-metrics"], &config).is_ok() {
        return Err("Expected empty data error".to_owned());
    }
    Ok(())
}
