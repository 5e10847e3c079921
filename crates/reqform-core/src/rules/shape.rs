//! Declarative path-shape descriptors and the generic matcher.

use url::Url;

/// Shape a URL must follow for a page type.
///
/// `Numbered` accepts two forms, matched against the *end* of the path
/// (extra leading segments are allowed):
///
/// - `/<lead...>/<prefix><N>/` (trailing slash required, `N` one or more
///   digits);
/// - `/<lead...>/<prefix><N>/ver<M>.php` (the version-suffixed form).
///
/// When `host_marker` is set, the hostname must also contain that substring
/// (the `-form` domain-naming convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    Numbered {
        lead_segments: &'static [&'static str],
        prefix: &'static str,
        host_marker: Option<&'static str>,
    },
    /// No restriction; any well-formed URL passes.
    Any,
}

impl PathShape {
    /// Applies this shape to an already-parsed URL.
    pub fn matches(&self, url: &Url) -> bool {
        match self {
            PathShape::Any => true,
            PathShape::Numbered {
                lead_segments,
                prefix,
                host_marker,
            } => {
                if let Some(marker) = host_marker {
                    let host_ok = url
                        .host_str()
                        .map(|h| h.contains(marker))
                        .unwrap_or(false);
                    if !host_ok {
                        return false;
                    }
                }
                path_matches(url.path(), lead_segments, prefix)
            }
        }
    }
}

/// Checks the two accepted path forms for a `Numbered` shape.
fn path_matches(path: &str, lead_segments: &[&str], prefix: &str) -> bool {
    let trailing_slash = path.ends_with('/');
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    // Directory form: .../<lead...>/<prefix><N>/
    if trailing_slash {
        return tail_matches(&segments, lead_segments, prefix);
    }

    // Version-suffixed form: .../<lead...>/<prefix><N>/ver<M>.php
    let (last, dir) = match segments.split_last() {
        Some(split) => split,
        None => return false,
    };
    is_version_php(last) && tail_matches(dir, lead_segments, prefix)
}

/// True when `segments` ends with `lead_segments` followed by one
/// `<prefix><digits>` segment.
fn tail_matches(segments: &[&str], lead_segments: &[&str], prefix: &str) -> bool {
    let (numbered, dir) = match segments.split_last() {
        Some(split) => split,
        None => return false,
    };
    if !is_numbered(numbered, prefix) {
        return false;
    }
    dir.ends_with(lead_segments)
}

/// `<prefix><N>` with N one or more digits.
fn is_numbered(segment: &str, prefix: &str) -> bool {
    match segment.strip_prefix(prefix) {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// `ver<M>.php` with M one or more digits.
fn is_version_php(segment: &str) -> bool {
    segment
        .strip_prefix("ver")
        .and_then(|rest| rest.strip_suffix(".php"))
        .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}

/// Common rule applied independently of page type: a URL ending in `.php`
/// must use the `ver<N>.php` version form; bare `.php` endings are rejected.
/// Non-`.php` URLs always pass. Not composed into [`super::validate`];
/// callers opt in where the form requires it.
pub fn versioned_php_suffix_ok(url: &str) -> bool {
    if !url.ends_with(".php") {
        return true;
    }
    url.rsplit('/')
        .next()
        .map(is_version_php)
        .unwrap_or(false)
}
