//! Link generation boundary.
//!
//! # Data Flow
//! ```text
//! caller options {host?, subdomain, only_path?}
//!     → rewriter.rs (SubdomainRewriter decorator)
//!         → config snapshot
//!         → rewrite::engine (needs_rewrite / rewrite_host)
//!     → underlying LinkGenerator (framework URL builder)
//! ```
//!
//! # Design Decisions
//! - The rewriter wraps the generator; it never replaces or reimplements it
//! - The subdomain option is consumed here and never reaches the generator
//! - Generator failures pass through untranslated

pub mod generator;
pub mod rewriter;

pub use generator::{LinkGenerator, LinkOptions};
pub use rewriter::SubdomainRewriter;
