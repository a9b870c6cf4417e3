//! OCI annotation keys carried by the suite's fixtures.

/// Creation timestamp of an image manifest (RFC 3339).
pub const IMAGE_CREATED: &str = "org.opencontainers.image.created";

/// Creation timestamp of an artifact manifest (RFC 3339).
pub const ARTIFACT_CREATED: &str = "org.opencontainers.artifact.created";

/// Human-readable title, set to the source file name on file pushes.
pub const IMAGE_TITLE: &str = "org.opencontainers.image.title";
