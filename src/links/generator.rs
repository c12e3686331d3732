//! The link-generator contract.

use crate::rewrite::types::SubdomainSpec;

/// Options carried by an outgoing link-construction call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkOptions {
    /// Explicit host for the link. When absent, the active request's
    /// host-with-port is used instead.
    pub host: Option<String>,

    /// Requested subdomain handling.
    pub subdomain: SubdomainSpec,

    /// `Some(true)` asks for a bare path, `Some(false)` explicitly forces
    /// an absolute URL, `None` leaves the choice to the generator.
    pub only_path: Option<bool>,
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn subdomain(mut self, label: impl Into<String>) -> Self {
        self.subdomain = SubdomainSpec::Label(label.into());
        self
    }

    pub fn remove_subdomain(mut self) -> Self {
        self.subdomain = SubdomainSpec::Remove;
        self
    }

    pub fn only_path(mut self, flag: bool) -> Self {
        self.only_path = Some(flag);
        self
    }
}

/// Builds URL strings from a route and options.
///
/// Implemented by the host framework; this crate only mutates the options
/// on the way through.
pub trait LinkGenerator {
    type Error;

    fn url_for(&self, route: &str, options: &LinkOptions) -> Result<String, Self::Error>;
}
