
use tempfile::tempdir;

use support_cli::{FIXTURE_DATASET, http_exchange, spawn_server, write_fixture};

#[test]
fn e2e_server_answers_metrics_requests() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let lines = serde_lines(FIXTURE_DATASET)?;
    write_fixture(dir.path(), "fleet.jsonl", &lines.join("\n"))?;

    let server = spawn_server(
        &["--data", "fleet.jsonl", "--cors-origin", "https://dash.test"],
        dir.path(),
    )?;

    let response = http_exchange(
        server.addr,
        "POST",
        r#"{"regions": ["eu-west-1", "us-east-1"], "threshold_ms": 90}"#,
    )?;
    if !response.starts_with("HTTP/1.1 200 OK\r\n") {
        return Err(format!("Unexpected response: {}", response));
    }
    if !response.contains("Access-Control-Allow-Origin: https://dash.test\r\n") {
        return Err(format!("Missing CORS header: {}", response));
    }
    let expected = r#"{"eu-west-1":{"avg_latency":80.0,"p95_latency":80,"avg_uptime":100.0,"breaches":0},"us-east-1":{"avg_latency":150.0,"p95_latency":150,"avg_uptime":99.13,"breaches":3}}"#;
    if !response.ends_with(expected) {
        return Err(format!("Unexpected body: {}", response));
    }

    let invalid = http_exchange(server.addr, "POST", "{not json")?;
    if !invalid.starts_with("HTTP/1.1 400 Bad Request\r\n") {
        return Err(format!("Expected 400: {}", invalid));
    }

    let wrong_method = http_exchange(server.addr, "GET", "")?;
    if !wrong_method.starts_with("HTTP/1.1 405 Method Not Allowed\r\n") {
        return Err(format!("Expected 405: {}", wrong_method));
    }
    Ok(())
}

#[test]
fn e2e_server_reports_unavailable_data() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let server = spawn_server(&["--data", "missing.json"], dir.path())?;

    for body in [r#"{"regions": ["us-east-1"]}"#, "{}"] {
        let response = http_exchange(server.addr, "POST", body)?;
        if !response.starts_with("HTTP/1.1 500 Internal Server Error\r\n") {
            return Err(format!("Expected 500: {}", response));
        }
        if !response.contains("Data could not be loaded on the server.") {
            return Err(format!("Unexpected body: {}", response));
        }
    }
    Ok(())
}

/// Re-encodes the JSON array fixture as JSON Lines.
fn serde_lines(array: &str) -> Result<Vec<String>, String> {
    let value: serde_json::Value =
        serde_json::from_str(array).map_err(|err| format!("fixture parse failed: {}", err))?;
    let items = value
        .as_array()
        .ok_or_else(|| "fixture is not an array".to_owned())?;
    items
        .iter()
        .map(|item| serde_json::to_string(item).map_err(|err| format!("encode failed: {}", err)))
        .collect()
}
