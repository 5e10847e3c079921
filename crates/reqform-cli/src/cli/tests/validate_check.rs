//! Tests for the validate and check subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;
use reqform_core::rules::PageType;

#[test]
fn cli_parse_validate() {
    match parse(&[
        "reqform",
        "validate",
        "https://example.com/lp_line/lp2/",
        "--page-type",
        "lp-line",
    ]) {
        CliCommand::Validate {
            url,
            page_type,
            check_exists,
            json,
        } => {
            assert_eq!(url, "https://example.com/lp_line/lp2/");
            assert_eq!(page_type, PageType::LpLine);
            assert!(!check_exists);
            assert!(!json);
        }
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_validate_flags() {
    match parse(&[
        "reqform",
        "validate",
        "https://example.com/form2/",
        "--page-type",
        "form-register",
        "--check-exists",
        "--json",
    ]) {
        CliCommand::Validate {
            page_type,
            check_exists,
            json,
            ..
        } => {
            assert_eq!(page_type, PageType::FormRegister);
            assert!(check_exists);
            assert!(json);
        }
        _ => panic!("expected Validate with flags"),
    }
}

#[test]
fn cli_validate_requires_page_type() {
    let result = crate::cli::Cli::try_parse_from(["reqform", "validate", "https://example.com/"]);
    assert!(result.is_err());
}

#[test]
fn cli_validate_rejects_unknown_page_type() {
    let result = crate::cli::Cli::try_parse_from([
        "reqform",
        "validate",
        "https://example.com/",
        "--page-type",
        "lp-unknown",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["reqform", "check", "https://example.com/lp2/"]) {
        CliCommand::Check { url, json } => {
            assert_eq!(url, "https://example.com/lp2/");
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_json() {
    match parse(&["reqform", "check", "https://example.com/", "--json"]) {
        CliCommand::Check { json, .. } => assert!(json),
        _ => panic!("expected Check with --json"),
    }
}
