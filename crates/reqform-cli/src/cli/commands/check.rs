//! `reqform check` – advisory existence probe for a URL.

use anyhow::Result;
use reqform_core::config::ReqformConfig;
use reqform_core::probe;

/// Probes `url` with a HEAD request and prints the result. Best-effort:
/// unreachable or blocked targets report non-existence, never an error exit.
pub async fn run_check(cfg: &ReqformConfig, url: &str, json: bool) -> Result<()> {
    let probe_cfg = cfg.probe();
    let target = url.to_string();
    let report =
        tokio::task::spawn_blocking(move || probe::check_exists(&target, &probe_cfg)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (report.exists, report.status, report.error) {
        (true, status, _) => println!("exists (HTTP {})", status.unwrap_or(0)),
        (false, Some(status), _) => println!("not found (HTTP {})", status),
        (false, None, Some(error)) => println!("unreachable: {}", error),
        (false, None, None) => println!("not found"),
    }
    Ok(())
}
