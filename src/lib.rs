//! Subdomain routing and link rewriting for web applications.
//!
//! Splits hosts into subdomain, domain, and port given a configurable TLD
//! width, treats configured mirror labels (conventionally `www`) as
//! aliases of the bare domain, and decides when generated links must move
//! to a different host.
//!
//! The decision engine is pure: every call is a function of the requested
//! subdomain, the current host, and a configuration snapshot. The
//! `SubdomainRewriter` decorator wraps a framework link generator and
//! applies those decisions to outgoing links.

// Core subsystems
pub mod config;
pub mod host;
pub mod rewrite;

// Boundary glue
pub mod links;
pub mod request;

// Cross-cutting concerns
pub mod observability;

pub use config::schema::{PreferredMirror, RewriterConfig};
pub use config::store::ConfigStore;
pub use links::generator::{LinkGenerator, LinkOptions};
pub use links::rewriter::SubdomainRewriter;
pub use request::RequestFacts;
pub use rewrite::types::SubdomainSpec;
