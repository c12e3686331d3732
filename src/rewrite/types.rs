//! Requested-subdomain values.

/// What a caller asked to happen to the subdomain of a generated link.
///
/// Omitting the option and asking for removal diverge once a preferred
/// mirror is configured, so they are separate variants rather than a
/// nullable label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubdomainSpec {
    /// No opinion; the current host is left alone.
    #[default]
    Unspecified,
    /// Strip any subdomain, deferring to the preferred mirror when one is
    /// configured.
    Remove,
    /// Use exactly this label. Dots are allowed for nested subdomains.
    Label(String),
}

impl SubdomainSpec {
    /// Convenience constructor for `Label`.
    pub fn label(value: impl Into<String>) -> Self {
        SubdomainSpec::Label(value.into())
    }

    /// The label this value names, if any.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            SubdomainSpec::Label(label) => Some(label.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for SubdomainSpec {
    fn from(label: &str) -> Self {
        SubdomainSpec::Label(label.to_string())
    }
}
