//! Request-side host facts.
//!
//! # Responsibilities
//! - Carry the already-split subdomain labels, domain, and port of the
//!   active request
//! - Derive the logical subdomain and domain used for link generation
//! - Split a raw Host header by the configured TLD width
//!
//! # Design Decisions
//! - The framework's own host splitting is trusted; labels arrive pre-split
//! - The leading label is the mirror slot: it is dropped from the logical
//!   subdomain when it is not a real subdomain, and folded into the domain
//!   when deeper labels exist

use crate::config::schema::RewriterConfig;
use crate::host::parser;
use crate::rewrite::mirrors;

/// Host facts exposed by the framework's request object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFacts {
    /// Subdomain labels, outermost first, as split by the framework.
    pub subdomains: Vec<String>,

    /// Host minus subdomain labels and port.
    pub domain: String,

    /// Empty, or a port with its leading colon (`":3000"`).
    pub port_string: String,
}

impl RequestFacts {
    /// Split a raw `host[:port]` using the configured TLD width.
    pub fn from_host(host: &str, config: &RewriterConfig) -> Self {
        let tld_size = config.tld_size();
        let (name, port) = parser::split_port(host);
        let subdomains = match parser::subdomain_of(name, tld_size) {
            Some(joined) => joined.split('.').map(str::to_string).collect(),
            None => Vec::new(),
        };
        Self {
            subdomains,
            domain: parser::without_subdomain(name, tld_size),
            port_string: port.to_string(),
        }
    }

    /// Derive request facts from an HTTP request's Host header. Absent or
    /// non-ASCII Host headers yield `None`.
    pub fn from_request<B>(
        request: &axum::http::Request<B>,
        config: &RewriterConfig,
    ) -> Option<Self> {
        let host = request
            .headers()
            .get(axum::http::header::HOST)
            .and_then(|value| value.to_str().ok())?;
        Some(Self::from_host(host, config))
    }

    /// Rebuild the full `host[:port]` the request arrived on.
    pub fn host_with_port(&self) -> String {
        let mut host = String::new();
        for label in &self.subdomains {
            host.push_str(label);
            host.push('.');
        }
        host.push_str(&self.domain);
        host.push_str(&self.port_string);
        host
    }

    /// The logical subdomain of the request. The leading label is dropped
    /// when it is a mirror; the rest joins with `.`.
    pub fn current_subdomain(&self, config: &RewriterConfig) -> Option<String> {
        let mut labels: &[String] = &self.subdomains;
        if let Some((first, rest)) = labels.split_first() {
            if !mirrors::is_real_subdomain(config, Some(first)) {
                labels = rest;
            }
        }
        if labels.is_empty() {
            return None;
        }
        Some(labels.join("."))
    }

    /// The domain seen by the request: labels after the first fold back
    /// into the domain, and the port string is appended verbatim.
    pub fn current_domain(&self) -> String {
        let mut domain = String::new();
        if self.subdomains.len() > 1 {
            for label in &self.subdomains[1..] {
                domain.push_str(label);
                domain.push('.');
            }
        }
        domain.push_str(&self.domain);
        domain.push_str(&self.port_string);
        domain
    }
}
