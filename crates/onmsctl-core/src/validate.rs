// Positional argument validation.
//
// Every handler declares the positional arguments it needs as a fixed
// signature and runs it before building any request. Checks run strictly
// left to right and stop at the first failure, so the message always names
// the outermost missing identifier (container, then item, then sub-key).

use thiserror::Error;

/// What a positional argument must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The argument must be given; an empty string is accepted.
    Present,
    /// The argument must be given and contain something besides whitespace.
    NonEmpty,
}

/// One slot of a command's positional signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positional {
    pub label: &'static str,
    pub requirement: Requirement,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

impl Positional {
    pub const fn present(label: &'static str) -> Self {
        Self {
            label,
            requirement: Requirement::Present,
        }
    }

    pub const fn non_empty(label: &'static str) -> Self {
        Self {
            label,
            requirement: Requirement::NonEmpty,
        }
    }

    /// Check a single value against this slot.
    pub fn check<'a>(&self, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
        match (value, self.requirement) {
            (None, _) => Err(ValidationError::Missing(self.label)),
            (Some(v), Requirement::NonEmpty) if v.trim().is_empty() => {
                Err(ValidationError::Empty(self.label))
            }
            (Some(v), _) => Ok(v),
        }
    }
}

// ── Well-known slots ─────────────────────────────────────────────────

pub const REQUISITION: Positional = Positional::non_empty("Requisition name");
pub const FOREIGN_ID: Positional = Positional::non_empty("Foreign ID");
/// Interface lookups only need the address to be given.
pub const IP_ADDRESS: Positional = Positional::present("IP Address");
/// Creating an interface needs a real address.
pub const NEW_IP_ADDRESS: Positional = Positional::non_empty("IP Address");
pub const SERVICE: Positional = Positional::non_empty("Service name");
pub const CATEGORY: Positional = Positional::non_empty("Category name");
pub const ASSET_NAME: Positional = Positional::non_empty("Asset name");
pub const ASSET_VALUE: Positional = Positional::present("Asset value");
pub const FOREIGN_SOURCE: Positional = Positional::non_empty("Foreign source name");
pub const SCAN_INTERVAL: Positional = Positional::non_empty("Scan interval");
pub const DETECTOR: Positional = Positional::non_empty("Detector name");
pub const POLICY: Positional = Positional::non_empty("Policy name");
pub const CLASS: Positional = Positional::non_empty("Class name");
pub const PLUGIN: Positional = Positional::non_empty("Plugin name or class");
/// The YAML payload of `apply`; always checked after the identifiers.
pub const CONTENT: Positional = Positional::non_empty("Content");

/// Validate `args` against `signature`, returning the values in order.
pub fn validate<'a, const N: usize>(
    signature: [Positional; N],
    args: [Option<&'a str>; N],
) -> Result<[&'a str; N], ValidationError> {
    for (slot, value) in signature.iter().zip(args) {
        slot.check(value)?;
    }
    Ok(args.map(Option::unwrap_or_default))
}
