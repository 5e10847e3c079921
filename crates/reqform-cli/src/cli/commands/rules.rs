//! `reqform rules` – list URL naming conventions and required fields.

use anyhow::Result;
use reqform_core::rules::{rule_for, PageType, WorkType};

pub fn run_rules(page_type: Option<PageType>, work_type: Option<WorkType>) -> Result<()> {
    match page_type {
        Some(p) => print_rule(p),
        None => {
            for p in PageType::ALL {
                print_rule(p);
            }
        }
    }

    if let Some(w) = work_type {
        println!("work type {} ({}):", w, w.label());
        if w.requires_new_url() {
            println!("  requires both the target URL and the new destination URL");
        } else {
            println!("  requires the target URL only");
        }
    }
    Ok(())
}

fn print_rule(page_type: PageType) {
    let rule = rule_for(page_type);
    println!("{} ({})", page_type, page_type.label());
    println!("  {}", rule.description);
    for example in rule.examples {
        println!("  e.g. {}", example);
    }
    if page_type.uses_lstep() {
        println!("  requests for this page type include the L-step section");
    }
}
