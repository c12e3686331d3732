//! Rewrite decision subsystem.
//!
//! # Data Flow
//! ```text
//! requested subdomain (Unspecified | Remove | Label)
//!   + current host
//!   + configuration snapshot
//!     → mirrors.rs (mirror equivalence predicates)
//!     → engine.rs (needs_rewrite / rewrite_host)
//!     → unchanged host, or the rewritten one
//! ```
//!
//! # Design Decisions
//! - Every call is a pure function of its arguments; no state
//! - Mirror labels collapse to "no subdomain" unless a preferred mirror
//!   says otherwise
//! - Hosts with no room for a subdomain are never touched

pub mod engine;
pub mod mirrors;
pub mod types;

pub use types::SubdomainSpec;
