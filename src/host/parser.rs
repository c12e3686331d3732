//! Host string splitting and reassembly.
//!
//! # Responsibilities
//! - Split a host into subdomain labels, domain, and port
//! - Decide whether a string names a routable domain at all
//! - Rebuild hosts after a subdomain change
//!
//! # Design Decisions
//! - Ports are preserved verbatim, including the leading colon
//! - The domain is the trailing `tld_size + 1` labels
//! - IPv4 detection is shape-only (dotted quad), not range-checked

/// Split a host into its name part and port suffix (including the `:`).
pub(crate) fn split_port(host: &str) -> (&str, &str) {
    match host.find(':') {
        Some(idx) => host.split_at(idx),
        None => (host, ""),
    }
}

/// Shape check for dotted-quad hosts: four dot-separated runs of one to
/// three ASCII digits. `999.1.1.1` still counts as an address.
fn is_ipv4_quad(name: &str) -> bool {
    let mut parts = 0;
    for part in name.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 4
}

/// Whether the registrable part of this host is the loopback name.
fn is_loopback(name: &str) -> bool {
    name.rsplit('.').next() == Some("localhost")
}

/// Number of labels in the host, ignoring any port. Blank hosts have none.
pub fn label_count(host: &str) -> usize {
    let (name, _) = split_port(host);
    if name.is_empty() {
        0
    } else {
        name.split('.').count()
    }
}

/// True when the host names something link generation can target: anything
/// non-blank that is not a bare IPv4 address. `localhost` counts, with or
/// without leading labels or a port.
pub fn has_domain(host: Option<&str>) -> bool {
    let Some(host) = host else { return false };
    let (name, _) = split_port(host);
    if name.is_empty() {
        return false;
    }
    if is_loopback(name) {
        return true;
    }
    !is_ipv4_quad(name)
}

/// The subdomain labels of `host` joined with `.`, or `None` when every
/// label belongs to the domain.
pub fn subdomain_of(host: &str, tld_size: usize) -> Option<String> {
    let (name, _) = split_port(host);
    let labels: Vec<&str> = name.split('.').collect();
    let domain_len = tld_size + 1;
    if labels.len() <= domain_len {
        return None;
    }
    Some(labels[..labels.len() - domain_len].join("."))
}

/// `host` with all subdomain labels removed. Hosts at or below the domain
/// width come back unchanged.
pub fn without_subdomain(host: &str, tld_size: usize) -> String {
    let (name, port) = split_port(host);
    let labels: Vec<&str> = name.split('.').collect();
    let domain_len = tld_size + 1;
    if labels.len() <= domain_len {
        return host.to_string();
    }
    let mut base = labels[labels.len() - domain_len..].join(".");
    base.push_str(port);
    base
}

/// Unconditionally replace the subdomain of `host`. `None` or a blank
/// label strips it.
pub fn with_subdomain(subdomain: Option<&str>, host: &str, tld_size: usize) -> String {
    let base = without_subdomain(host, tld_size);
    match subdomain {
        Some(label) if !label.is_empty() => format!("{label}.{base}"),
        _ => base,
    }
}
