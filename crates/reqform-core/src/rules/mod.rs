//! URL naming-convention rules for production-request intake.
//!
//! Each page type carries one immutable rule describing the path shape its
//! URLs must follow. Rules are data (a declarative [`PathShape`] descriptor)
//! interpreted by one generic matcher, so the table stays easy to audit and
//! test exhaustively.

mod shape;
mod table;
mod validate;

pub use shape::{versioned_php_suffix_ok, PathShape};
pub use table::{rule_for, UrlRule};
pub use validate::{validate, Validation};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page-type categories, one per call-to-action/integration pattern.
/// The mapping to URL rules is total: every variant has an entry in the
/// rule table, including the permissive [`PageType::Other`] catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    /// LP with a LINE friend-registration CTA.
    LpLine,
    /// LP linking out to a form/simulator.
    LpSimulator,
    /// LP with an L-step-linked form CTA (hosted on a `-form` domain).
    LpLstepForm,
    /// LP with a directly specified CTA URL.
    LpDirect,
    /// LP not tracked in the in-house admin screen.
    LpUntracked,
    /// Form registering data into the in-house admin screen.
    FormRegister,
    /// Form doing LINE registration plus L-step data capture (`-form` domain).
    FormLineLstep,
    /// Other / new-spec page: no naming restriction.
    Other,
}

impl PageType {
    pub const ALL: [PageType; 8] = [
        PageType::LpLine,
        PageType::LpSimulator,
        PageType::LpLstepForm,
        PageType::LpDirect,
        PageType::LpUntracked,
        PageType::FormRegister,
        PageType::FormLineLstep,
        PageType::Other,
    ];

    /// CLI token (kebab-case, mirrors the serde names).
    pub fn token(&self) -> &'static str {
        match self {
            PageType::LpLine => "lp-line",
            PageType::LpSimulator => "lp-simulator",
            PageType::LpLstepForm => "lp-lstep-form",
            PageType::LpDirect => "lp-direct",
            PageType::LpUntracked => "lp-untracked",
            PageType::FormRegister => "form-register",
            PageType::FormLineLstep => "form-line-lstep",
            PageType::Other => "other",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            PageType::LpLine => "LP (CTA: LINE friend registration)",
            PageType::LpSimulator => "LP (CTA: form/simulator transition)",
            PageType::LpLstepForm => "LP (CTA: L-step-linked form transition)",
            PageType::LpDirect => "LP (CTA: direct URL)",
            PageType::LpUntracked => "LP (untracked in admin screen)",
            PageType::FormRegister => "Form (CTA: register to admin screen)",
            PageType::FormLineLstep => {
                "Form (CTA: LINE registration & L-step data capture)"
            }
            PageType::Other => "Other / new-spec page",
        }
    }

    /// True for the two page types whose requests need the L-step section.
    pub fn uses_lstep(&self) -> bool {
        matches!(self, PageType::LpLstepForm | PageType::FormLineLstep)
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PageType {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::ALL
            .into_iter()
            .find(|p| p.token() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Work-type categories: what kind of change is being requested. Determines
/// which URL fields the intake form requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    CreateNew,
    Migrate,
    Overwrite,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [WorkType::CreateNew, WorkType::Migrate, WorkType::Overwrite];

    pub fn token(&self) -> &'static str {
        match self {
            WorkType::CreateNew => "create-new",
            WorkType::Migrate => "migrate",
            WorkType::Overwrite => "overwrite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::CreateNew => "Create new",
            WorkType::Migrate => "Migrate existing",
            WorkType::Overwrite => "Overwrite in place",
        }
    }

    /// Only a migration needs the second (destination) URL field.
    pub fn requires_new_url(&self) -> bool {
        matches!(self, WorkType::Migrate)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for WorkType {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkType::ALL
            .into_iter()
            .find(|w| w.token() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Unknown page-type or work-type token.
#[derive(Debug)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category {:?}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
