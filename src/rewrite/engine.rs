//! Rewrite decisions for generated links.
//!
//! # Responsibilities
//! - Decide whether a requested subdomain forces a host rewrite
//! - Produce the rewritten host
//! - Compare subdomains and hosts under mirror equivalence
//!
//! # Design Decisions
//! - `Unspecified` never rewrites, whatever the host looks like
//! - Removal resolves to the preferred mirror label when one is set
//! - A named preferred mirror makes an implied mirror explicit: asking
//!   for a mirror on a bare host then counts as a change

use crate::config::schema::{PreferredMirror, RewriterConfig};
use crate::host::parser;
use crate::rewrite::mirrors;
use crate::rewrite::types::SubdomainSpec;

/// Whether link generation must swap the host to honor `requested`.
pub fn needs_rewrite(
    config: &RewriterConfig,
    requested: &SubdomainSpec,
    host: Option<&str>,
) -> bool {
    let actual = host.and_then(|h| parser::subdomain_of(h, config.tld_size()));
    match requested {
        SubdomainSpec::Unspecified => false,
        SubdomainSpec::Remove => match &config.preferred_mirror {
            PreferredMirror::Label(target) => actual.as_deref() != Some(target.as_str()),
            PreferredMirror::Strip => actual.is_some(),
            PreferredMirror::Unset => mirrors::is_real_subdomain(config, actual.as_deref()),
        },
        SubdomainSpec::Label(label) => {
            if actual.as_deref() == Some(label.as_str()) {
                return false;
            }
            if actual.is_none() && mirrors::is_mirror(config, label) {
                // An implied mirror satisfies the request unless a named
                // preferred mirror demands it be spelled out.
                return matches!(config.preferred_mirror, PreferredMirror::Label(_));
            }
            true
        }
    }
}

/// The host to generate links against, honoring `requested`. Hosts with no
/// domain (IP addresses) or no room for a subdomain, and hosts that already
/// satisfy the request, come back unchanged; an absent host stays absent.
pub fn rewrite_host(
    config: &RewriterConfig,
    requested: &SubdomainSpec,
    host: Option<&str>,
) -> Option<String> {
    let host = host?;
    if !parser::has_domain(Some(host)) || parser::label_count(host) <= config.tld_size() {
        return Some(host.to_string());
    }
    if !needs_rewrite(config, requested, Some(host)) {
        return Some(host.to_string());
    }
    let replacement = match requested {
        SubdomainSpec::Label(label) => Some(label.as_str()),
        _ => config.preferred_mirror.label(),
    };
    Some(parser::with_subdomain(replacement, host, config.tld_size()))
}

/// True when `label` and the subdomain of `host` are interchangeable:
/// equal, or both collapsing to "no real subdomain".
pub fn same_subdomain(config: &RewriterConfig, label: Option<&str>, host: &str) -> bool {
    let actual = parser::subdomain_of(host, config.tld_size());
    label == actual.as_deref()
        || (!mirrors::is_real_subdomain(config, label)
            && !mirrors::is_real_subdomain(config, actual.as_deref()))
}

/// True when both hosts share the same domain once subdomains are dropped.
pub fn same_host(config: &RewriterConfig, host: Option<&str>, other: Option<&str>) -> bool {
    match (host, other) {
        (Some(host), Some(other)) => {
            parser::without_subdomain(host, config.tld_size())
                == parser::without_subdomain(other, config.tld_size())
        }
        _ => false,
    }
}
