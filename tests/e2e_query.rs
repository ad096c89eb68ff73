
use tempfile::tempdir;

use support_cli::{
    FIXTURE_DATASET, run_region_metrics, run_region_metrics_default_logging, write_fixture,
};

#[test]
fn e2e_query_prints_report_in_request_order() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    write_fixture(dir.path(), "telemetry.json", FIXTURE_DATASET)?;

    let output = run_region_metrics(
        [
            "query",
            "--region",
            "us-east-1",
            "-r",
            "nowhere",
            "--threshold-ms",
            "180",
        ],
        dir.path(),
    )?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = r#"{"us-east-1":{"avg_latency":150.0,"p95_latency":150,"avg_uptime":99.13,"breaches":1},"nowhere":{"avg_latency":null,"p95_latency":null,"avg_uptime":null,"breaches":0}}"#;
    if stdout.trim() != expected {
        return Err(format!("Unexpected report: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_query_keeps_logs_out_of_stdout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    write_fixture(dir.path(), "telemetry.json", FIXTURE_DATASET)?;

    let output =
        run_region_metrics_default_logging(["query", "-r", "eu-west-1", "--no-color"], dir.path())?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).map_err(|err| {
        format!(
            "stdout is not a JSON report ({}): {}",
            err,
            String::from_utf8_lossy(&output.stdout)
        )
    })?;
    if report["eu-west-1"]["breaches"] != 0 {
        return Err(format!("Unexpected report: {}", report));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("Loaded") {
        return Err(format!("Expected the load log on stderr, got: {}", stderr));
    }
    Ok(())
}

#[test]
fn e2e_query_uses_config_file_data_and_threshold() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    write_fixture(dir.path(), "fleet.json", FIXTURE_DATASET)?;
    write_fixture(
        dir.path(),
        "region-metrics.toml",
        "data = [\"missing.json\", \"fleet.json\"]\ndefault_threshold_ms = 120\n",
    )?;

    let output = run_region_metrics(["query", "-r", "us-east-1"], dir.path())?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains(r#""breaches":2"#) {
        return Err(format!("Config threshold not applied: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_query_fails_when_dataset_is_missing() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output = run_region_metrics(
        ["query", "-r", "us-east-1", "--data", "nope.json"],
        dir.path(),
    )?;
    if output.status.success() {
        return Err("Expected failure without a dataset".to_owned());
    }
    if !output.stdout.is_empty() {
        return Err(format!(
            "Expected no report, got: {}",
            String::from_utf8_lossy(&output.stdout)
        ));
    }
    Ok(())
}
