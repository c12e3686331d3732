//! Host decomposition subsystem.
//!
//! # Data Flow
//! ```text
//! raw host string ("awesome.example.com:3000")
//!     → parser.rs (split on ports and dots, TLD width applied)
//!     → (subdomain labels, domain, port)
//!     → consumed by rewrite::engine and request facts
//! ```
//!
//! # Design Decisions
//! - Pure functions over string slices; no host newtype
//! - The TLD width is always passed in, never read from shared state
//! - Reassembly reproduces well-formed inputs byte for byte

pub mod parser;
