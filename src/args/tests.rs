use std::path::PathBuf;

use clap::Parser;

use super::{Command, ServerArgs, default_data_paths};

fn parse(args: &[&str]) -> Result<ServerArgs, String> {
    ServerArgs::try_parse_from(args).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn defaults_apply_without_flags() -> Result<(), String> {
    let args = parse(&["region-metrics"])?;
    if args.command.is_some() {
        return Err("Unexpected subcommand".to_owned());
    }
    if args.default_threshold_ms != 180 {
        return Err(format!("Unexpected threshold {}", args.default_threshold_ms));
    }
    if args.cors_origin != "*" {
        return Err(format!("Unexpected CORS origin {}", args.cors_origin));
    }
    if args.data_candidates() != default_data_paths() {
        return Err(format!("Unexpected candidates {:?}", args.data_candidates()));
    }
    Ok(())
}

#[test]
fn data_flags_keep_priority_order() -> Result<(), String> {
    let args = parse(&["region-metrics", "-d", "first.json", "--data", "second.jsonl"])?;
    let expected = vec![PathBuf::from("first.json"), PathBuf::from("second.jsonl")];
    if args.data_candidates() != expected {
        return Err(format!("Unexpected candidates {:?}", args.data_candidates()));
    }
    Ok(())
}

#[test]
fn query_subcommand_collects_regions() -> Result<(), String> {
    let args = parse(&[
        "region-metrics",
        "query",
        "-r",
        "us-east-1",
        "--region",
        "eu-west-1",
        "--threshold-ms",
        "120",
        "--data",
        "t.json",
    ])?;
    let Some(Command::Query(query)) = args.command else {
        return Err("Expected query subcommand".to_owned());
    };
    if query.regions != ["us-east-1", "eu-west-1"] {
        return Err(format!("Unexpected regions {:?}", query.regions));
    }
    if query.threshold_ms.map(f64::to_bits) != Some(120.0_f64.to_bits()) {
        return Err(format!("Unexpected threshold {:?}", query.threshold_ms));
    }
    if args.data != [PathBuf::from("t.json")] {
        return Err(format!("Global --data not propagated: {:?}", args.data));
    }
    Ok(())
}

#[test]
fn rejects_non_numeric_threshold() -> Result<(), String> {
    if parse(&["region-metrics", "--default-threshold-ms", "fast"]).is_ok() {
        return Err("Expected parse failure".to_owned());
    }
    Ok(())
}
