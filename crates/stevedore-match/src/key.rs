use std::fmt;
use stevedore_oci::Descriptor;

/// Length of the digest prefix in a state key, matching what the client
/// prints in status output.
pub const KEY_PREFIX_LEN: usize = 12;

/// Composite lookup key identifying one content unit in status output:
/// the truncated digest prefix plus a name.
///
/// The name is a file name for blob pushes and a media type for manifests
/// and configs. Two keys are equal iff both fields are equal, byte for byte;
/// no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pub digest: String,
    pub name: String,
}

impl StateKey {
    pub fn new(digest: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            name: name.into(),
        }
    }

    /// The key a manifest or config descriptor produces in status output:
    /// its digest prefix paired with its media type.
    pub fn for_descriptor(desc: &Descriptor) -> Self {
        Self {
            digest: desc.digest.short().to_owned(),
            name: desc.media_type.clone(),
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digest, self.name)
    }
}
