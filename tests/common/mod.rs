//! Shared utilities for integration testing.

use subdomain_rewriter::{LinkGenerator, LinkOptions};
use thiserror::Error;

/// The wrapped generator had no host to build an absolute URL from.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing host to link to")]
pub struct MissingHost;

/// Stand-in for the framework URL builder: formats `http://host/route`,
/// or just `/route` when only a path was asked for.
pub struct FakeGenerator;

impl LinkGenerator for FakeGenerator {
    type Error = MissingHost;

    fn url_for(&self, route: &str, options: &LinkOptions) -> Result<String, MissingHost> {
        if options.only_path == Some(true) {
            return Ok(format!("/{route}"));
        }
        let host = options.host.as_deref().ok_or(MissingHost)?;
        Ok(format!("http://{host}/{route}"))
    }
}
