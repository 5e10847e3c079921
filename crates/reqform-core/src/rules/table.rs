//! Static rule table: one entry per page type.

use super::shape::PathShape;
use super::PageType;

/// Naming-convention rule for one page type. `description` and `examples`
/// are documentation shown to the requester; only `shape` drives validation.
#[derive(Debug, Clone, Copy)]
pub struct UrlRule {
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub shape: PathShape,
}

/// Looks up the rule for a page type. Total: every variant has an entry.
pub fn rule_for(page_type: PageType) -> &'static UrlRule {
    match page_type {
        PageType::LpLine => &UrlRule {
            description: "domain/lp_line/lp<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example.com/lp_line/lp2/",
                "https://example.com/lp_line/lp2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &["lp_line"],
                prefix: "lp",
                host_marker: None,
            },
        },
        PageType::LpSimulator => &UrlRule {
            description: "domain/lp<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example.com/lp2/",
                "https://example.com/lp2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &[],
                prefix: "lp",
                host_marker: None,
            },
        },
        PageType::LpLstepForm => &UrlRule {
            description: "domain must contain \"-form\"; \
                          domain/lp_line_form/lp<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example-form.com/lp_line_form/lp2/",
                "https://example-form.com/lp_line_form/lp2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &["lp_line_form"],
                prefix: "lp",
                host_marker: Some("-form"),
            },
        },
        PageType::LpDirect => &UrlRule {
            description: "domain/guide/lp<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example.com/guide/lp2/",
                "https://example.com/guide/lp2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &["guide"],
                prefix: "lp",
                host_marker: None,
            },
        },
        PageType::LpUntracked => &UrlRule {
            description: "domain/content/lp<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example.com/content/lp2/",
                "https://example.com/content/lp2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &["content"],
                prefix: "lp",
                host_marker: None,
            },
        },
        PageType::FormRegister => &UrlRule {
            description: "domain/form<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example.com/form2/",
                "https://example.com/form2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &[],
                prefix: "form",
                host_marker: None,
            },
        },
        PageType::FormLineLstep => &UrlRule {
            description: "domain must contain \"-form\"; \
                          domain/form_line/form<N>/ (N any number); \
                          versioned form ends in ver<M>.php",
            examples: &[
                "https://example-form.com/form_line/form2/",
                "https://example-form.com/form_line/form2/ver1.php",
            ],
            shape: PathShape::Numbered {
                lead_segments: &["form_line"],
                prefix: "form",
                host_marker: Some("-form"),
            },
        },
        PageType::Other => &UrlRule {
            description: "no naming restriction",
            examples: &[],
            shape: PathShape::Any,
        },
    }
}
