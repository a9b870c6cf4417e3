//! State-key matching for Stevedore end-to-end assertions.
//!
//! The client prints one status line per content unit it transfers
//! (`"Uploaded fd6ed2f36b54 application/vnd.oci.image.manifest.v1+json"`).
//! Tests describe the expected outcome as a set of [`StateKey`]s, and
//! [`StatusMatcher`] checks a captured transcript against them.

pub mod key;
pub mod status;

pub use key::{StateKey, KEY_PREFIX_LEN};
pub use status::{MatchError, MatchReport, StatusLine, StatusMatcher};
