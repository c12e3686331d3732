//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RewriterConfig (validated)
//!     → store.rs (atomic swap of Arc<RewriterConfig>)
//!     → snapshot read on every rewrite decision
//!
//! On mutation (application code, tests):
//!     store.update(|config| ...)
//!     → validation.rs validates
//!     → atomic swap; next snapshot observes the change
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The engine never reads the store itself; callers pass a snapshot

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;

pub use schema::PreferredMirror;
pub use schema::RewriterConfig;
pub use store::ConfigStore;
