//! Subdomain-aware link rewriting.
//!
//! # Responsibilities
//! - Intercept outgoing link-construction calls
//! - Swap the host when the requested subdomain demands it
//! - Keep the subdomain option away from the underlying generator

use std::sync::Arc;

use crate::config::store::ConfigStore;
use crate::links::generator::{LinkGenerator, LinkOptions};
use crate::rewrite::engine;

/// Decorator that rewrites the host of outgoing links before delegating
/// to the wrapped generator.
///
/// Construct one per request with the request's host-with-port attached,
/// or without one in background contexts where no request is active.
pub struct SubdomainRewriter<G> {
    inner: G,
    store: Arc<ConfigStore>,
    request_host: Option<String>,
}

impl<G> SubdomainRewriter<G> {
    /// Wrap `inner` with no active request.
    pub fn new(inner: G, store: Arc<ConfigStore>) -> Self {
        Self {
            inner,
            store,
            request_host: None,
        }
    }

    /// Attach the active request's host-with-port.
    pub fn with_request_host(mut self, host: impl Into<String>) -> Self {
        self.request_host = Some(host.into());
        self
    }
}

impl<G: LinkGenerator> LinkGenerator for SubdomainRewriter<G> {
    type Error = G::Error;

    fn url_for(&self, route: &str, options: &LinkOptions) -> Result<String, G::Error> {
        let config = self.store.snapshot();
        let mut options = options.clone();
        let requested = std::mem::take(&mut options.subdomain);
        let effective_host = options.host.clone().or_else(|| self.request_host.clone());
        let forced_absolute = options.only_path == Some(false);

        if engine::needs_rewrite(&config, &requested, effective_host.as_deref()) || forced_absolute
        {
            if config.override_only_path {
                options.only_path = Some(false);
            }
            options.host = engine::rewrite_host(&config, &requested, effective_host.as_deref());
            tracing::trace!(route, host = ?options.host, "link host resolved for subdomain");
        }

        self.inner.url_for(route, &options)
    }
}
