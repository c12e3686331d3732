//! Mirror equivalence predicates.
//!
//! A mirror is a label configured as an alias of the bare domain; for
//! every decision here it counts as "no real subdomain".

use crate::config::schema::{PreferredMirror, RewriterConfig};
use crate::rewrite::types::SubdomainSpec;

/// True when `label` is configured as a mirror of the bare domain.
pub fn is_mirror(config: &RewriterConfig, label: &str) -> bool {
    !label.is_empty() && config.mirrors.iter().any(|mirror| mirror == label)
}

/// True when `value` names a real subdomain: present, non-blank, and not
/// a mirror.
pub fn is_real_subdomain(config: &RewriterConfig, value: Option<&str>) -> bool {
    match value {
        Some(label) => !label.is_empty() && !is_mirror(config, label),
        None => false,
    }
}

/// Exact match between a requested value and the preferred-mirror
/// setting, comparing variant and content.
pub fn is_preferred_mirror(config: &RewriterConfig, value: &SubdomainSpec) -> bool {
    match (&config.preferred_mirror, value) {
        (PreferredMirror::Unset, SubdomainSpec::Unspecified) => true,
        (PreferredMirror::Strip, SubdomainSpec::Remove) => true,
        (PreferredMirror::Label(mirror), SubdomainSpec::Label(label)) => mirror == label,
        _ => false,
    }
}
