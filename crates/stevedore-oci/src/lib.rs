//! OCI content model for Stevedore end-to-end tests.
//!
//! This crate defines the descriptor layer shared by the e2e fixtures and
//! assertions: algorithm-prefixed content digests (`Digest`), the OCI content
//! descriptor record (`Descriptor`), and the media-type and annotation-key
//! constants the suite exercises.

pub mod annotations;
pub mod descriptor;
pub mod digest;
pub mod media_type;

pub use descriptor::Descriptor;
pub use digest::{Digest, DigestError};
