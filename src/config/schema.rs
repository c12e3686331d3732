//! Configuration schema definitions.
//!
//! This module defines the tunables for subdomain handling. All types
//! derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for subdomain routing and link rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Active deployment profile; selects the TLD width from `tld_sizes`.
    pub profile: String,

    /// Trailing labels beyond the registrable name, per profile.
    pub tld_sizes: BTreeMap<String, usize>,

    /// Subdomain labels treated as aliases of the bare domain.
    pub mirrors: Vec<String>,

    /// What an explicit removal request resolves to.
    #[serde(skip_serializing_if = "PreferredMirror::is_unset")]
    pub preferred_mirror: PreferredMirror,

    /// Force absolute URLs even when the caller asked for only a path.
    pub override_only_path: bool,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        let mut tld_sizes = BTreeMap::new();
        tld_sizes.insert(DEVELOPMENT.to_string(), 0);
        tld_sizes.insert(TEST.to_string(), 0);
        tld_sizes.insert(PRODUCTION.to_string(), 1);
        Self {
            profile: DEVELOPMENT.to_string(),
            tld_sizes,
            mirrors: vec!["www".to_string()],
            preferred_mirror: PreferredMirror::Unset,
            override_only_path: false,
        }
    }
}

/// Profiles configured out of the box.
pub const DEVELOPMENT: &str = "development";
pub const TEST: &str = "test";
pub const PRODUCTION: &str = "production";

impl RewriterConfig {
    /// TLD width for the active profile. Profiles without an entry get
    /// the stock width: 1 for production, 0 otherwise.
    pub fn tld_size(&self) -> usize {
        match self.tld_sizes.get(&self.profile) {
            Some(size) => *size,
            None if self.profile == PRODUCTION => 1,
            None => 0,
        }
    }

    /// Set the TLD width for the active profile.
    pub fn set_tld_size(&mut self, size: usize) {
        self.tld_sizes.insert(self.profile.clone(), size);
    }
}

/// What an explicit removal request should resolve to.
///
/// `Unset` leaves mirrors alone, `Strip` forces true removal even of
/// mirrors, and `Label` materializes that label instead of absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreferredMirror {
    #[default]
    Unset,
    Strip,
    Label(String),
}

impl PreferredMirror {
    pub fn is_unset(&self) -> bool {
        matches!(self, PreferredMirror::Unset)
    }

    /// The label removal requests resolve to, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            PreferredMirror::Label(label) => Some(label.as_str()),
            _ => None,
        }
    }
}

// Config files write `preferred_mirror = "www"` or `preferred_mirror =
// false`; an absent key means `Unset`.
impl<'de> Deserialize<'de> for PreferredMirror {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Label(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(PreferredMirror::Strip),
            Repr::Flag(true) => Err(serde::de::Error::custom(
                "preferred_mirror must be a label or false",
            )),
            Repr::Label(label) => Ok(PreferredMirror::Label(label)),
        }
    }
}

impl Serialize for PreferredMirror {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PreferredMirror::Unset => serializer.serialize_none(),
            PreferredMirror::Strip => serializer.serialize_bool(false),
            PreferredMirror::Label(label) => serializer.serialize_str(label),
        }
    }
}
