//! `reqform validate` – check a URL against its page-type naming rule.

use anyhow::Result;
use reqform_core::config::ReqformConfig;
use reqform_core::probe;
use reqform_core::rules::{rule_for, validate, PageType};

/// Validates `url` for `page_type`, printing the verdict. Returns Err on an
/// invalid URL so the process exits nonzero (submission blocking); the
/// advisory existence probe never affects the outcome.
pub async fn run_validate(
    cfg: &ReqformConfig,
    url: &str,
    page_type: PageType,
    check_exists: bool,
    json: bool,
) -> Result<()> {
    let verdict = validate(url, page_type);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if verdict.valid {
        println!("OK: {} matches the rule for {}", url, page_type.label());
    } else {
        for error in &verdict.errors {
            println!("{}", error);
        }
        let rule = rule_for(page_type);
        println!("Expected shape: {}", rule.description);
        for example in rule.examples {
            println!("  e.g. {}", example);
        }
    }

    if check_exists {
        let probe_cfg = cfg.probe();
        let target = url.to_string();
        let report =
            tokio::task::spawn_blocking(move || probe::check_exists(&target, &probe_cfg)).await?;
        if report.exists {
            println!(
                "Warning: URL already resolves to live content (HTTP {})",
                report.status.unwrap_or(0)
            );
        } else if let Some(error) = &report.error {
            tracing::debug!("existence probe inconclusive: {}", error);
        }
    }

    if !verdict.valid {
        anyhow::bail!("URL does not satisfy the naming rule for {}", page_type);
    }
    Ok(())
}
