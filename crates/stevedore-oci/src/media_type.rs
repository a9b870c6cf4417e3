//! Media types exercised by the end-to-end suite.

/// OCI image manifest.
pub const IMAGE_MANIFEST: &str = "application/vnd.oci.image.manifest.v1+json";

/// OCI artifact manifest (pre-1.1 registries).
pub const ARTIFACT_MANIFEST: &str = "application/vnd.oci.artifact.manifest.v1+json";

/// OCI image index.
pub const IMAGE_INDEX: &str = "application/vnd.oci.image.index.v1+json";

/// Config media type the client assigns when pushing plain files.
pub const UNKNOWN_CONFIG: &str = "application/vnd.unknown.config.v1+json";

/// Recommended media type for the empty `{}` config blob.
pub const EMPTY_CONFIG: &str = "application/vnd.oci.empty.v1+json";

/// Default layer media type for opaque blobs.
pub const OCTET_STREAM: &str = "application/octet-stream";
