//! The `foobar` artifact family: a three-layer file push, its image-form
//! twin, an attachable file, and the SBOM/signature referrers hung off the
//! manifest.
//!
//! Layer contents are tiny on purpose (`foo`, `foo`, `bar`) so their digests
//! are stable well-known values. State-key digest prefixes are the first 12
//! hex characters of the corresponding full digest.

use std::collections::BTreeMap;
use stevedore_match::StateKey;
use stevedore_oci::{annotations, media_type, Descriptor, Digest};

/// Tag the artifact is pushed under.
pub const TAG: &str = "foobar";

/// Digest of the pushed manifest.
pub const DIGEST: &str = "sha256:fd6ed2f36b5465244d5dc86cb4e7df0ab8a9d24adc57825099f522fe009a22bb";

/// State key the manifest upload produces.
pub fn manifest_state_key() -> StateKey {
    StateKey::new("fd6ed2f36b54", media_type::IMAGE_MANIFEST)
}

/// Layer file names as pushed from the testdata directory.
pub const FILE_LAYER_NAMES: [&str; 3] = ["foobar/foo1", "foobar/foo2", "foobar/bar"];

pub const FILE_CONFIG_NAME: &str = "foobar/config.json";

pub fn file_config_state_key() -> StateKey {
    StateKey::new("46b68ac1696c", media_type::UNKNOWN_CONFIG)
}

/// State keys for the file layers, aligned index-for-index with
/// [`FILE_LAYER_NAMES`].
pub fn file_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("2c26b46b68ff", FILE_LAYER_NAMES[0]),
        StateKey::new("2c26b46b68ff", FILE_LAYER_NAMES[1]),
        StateKey::new("fcde2b2edba5", FILE_LAYER_NAMES[2]),
    ]
}

/// Canonical JSON of the config descriptor the client prints on file pushes.
pub const CONFIG_DESC_JSON: &str = "{\"mediaType\":\"application/vnd.unknown.config.v1+json\",\"digest\":\"sha256:44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a\",\"size\":2}";

pub const ATTACH_FILE_NAME: &str = "foobar/to-be-attached";
pub const ATTACH_FILE_MEDIA_TYPE: &str = "test/stevedore.e2e";

pub fn attach_file_state_key() -> StateKey {
    StateKey::new("d3b29f7d12d9", ATTACH_FILE_NAME)
}

/// Layer names when the same content is pushed as an image.
pub const IMAGE_LAYER_NAMES: [&str; 3] = ["foo1", "foo2", "bar"];

pub const IMAGE_CONFIG_NAME: &str = "config.json";

/// State keys for the image layers, aligned index-for-index with
/// [`IMAGE_LAYER_NAMES`].
pub fn image_layer_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("2c26b46b68ff", IMAGE_LAYER_NAMES[0]),
        StateKey::new("2c26b46b68ff", IMAGE_LAYER_NAMES[1]),
        StateKey::new("fcde2b2edba5", IMAGE_LAYER_NAMES[2]),
    ]
}

/// State key of the image config under any chosen config file name. The
/// digest prefix is fixed: every image push here uses the empty `{}` config.
pub fn image_config_state_key(config_name: &str) -> StateKey {
    StateKey::new("44136fa355b3", config_name)
}

/// Content of the standalone `foo` blob.
pub const FOO_BLOB_CONTENT: &str = "foo";

pub const FOO_BLOB_DIGEST: &str =
    "sha256:2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae";

/// Canonical JSON of the `foo` blob descriptor.
pub const FOO_BLOB_DESCRIPTOR_JSON: &str = "{\"mediaType\":\"application/octet-stream\",\"digest\":\"sha256:2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae\",\"size\":3}";

/// Artifact type of the attached SBOM referrers.
pub const SBOM_ARTIFACT_TYPE: &str = "test.sbom.file";

/// Artifact type of the attached signature referrers.
pub const SIGNATURE_ARTIFACT_TYPE: &str = "test.signature.file";

/// SBOM referrer as stored by a registry with native referrers support,
/// image-manifest form.
pub fn sbom_image_referrer() -> Descriptor {
    Descriptor {
        media_type: media_type::IMAGE_MANIFEST.to_owned(),
        digest: Digest::new("sha256:32b78bd00723cd7d5251d4586f84d252530b7b5fe1c4104532767e6da4e04e47"),
        size: 660,
        annotations: Some(BTreeMap::from([(
            annotations::IMAGE_CREATED.to_owned(),
            "2023-01-18T08:37:42Z".to_owned(),
        )])),
        artifact_type: Some(SBOM_ARTIFACT_TYPE.to_owned()),
    }
}

/// Signature referrer, image-manifest form.
pub fn signature_image_referrer() -> Descriptor {
    Descriptor::new(
        media_type::IMAGE_MANIFEST,
        Digest::new("sha256:0e007dcb9ded7f49c4dc8e3eed4a446712eb6fdf08a665a4f2352d6d2f8bdf17"),
        670,
    )
}

/// SBOM referrer, artifact-manifest form.
pub fn sbom_artifact_referrer() -> Descriptor {
    Descriptor {
        media_type: media_type::ARTIFACT_MANIFEST.to_owned(),
        digest: Digest::new("sha256:8d7a27ff2662dae183f762d281f46d626ba7b6e56a72cc9959cdbcd91aad7fbc"),
        size: 547,
        annotations: Some(BTreeMap::from([(
            annotations::ARTIFACT_CREATED.to_owned(),
            "2023-01-16T05:49:46Z".to_owned(),
        )])),
        artifact_type: Some(SBOM_ARTIFACT_TYPE.to_owned()),
    }
}

/// Signature referrer, artifact-manifest form.
pub fn signature_artifact_referrer() -> Descriptor {
    Descriptor::new(
        media_type::ARTIFACT_MANIFEST,
        Digest::new("sha256:2dbea575a3490375f5052fbeb380a2f498866d99eb809b4168e49e224a274a39"),
        560,
    )
}

/// Upload keys of the artifact-manifest referrers, in attach order.
pub fn artifact_referrer_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("8d7a27ff2662", media_type::ARTIFACT_MANIFEST),
        StateKey::new("2dbea575a349", media_type::ARTIFACT_MANIFEST),
    ]
}

/// Upload keys of the image-manifest referrers, in attach order.
pub fn image_referrer_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("0e007dcb9ded", media_type::IMAGE_MANIFEST),
        StateKey::new("32b78bd00723", media_type::IMAGE_MANIFEST),
    ]
}

/// Config upload keys of the image-manifest referrers. Both reuse the empty
/// `{}` config blob, named by the referrer's artifact type.
pub fn image_referrer_config_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("44136fa355b3", SIGNATURE_ARTIFACT_TYPE),
        StateKey::new("44136fa355b3", SBOM_ARTIFACT_TYPE),
    ]
}

/// Upload keys of the referrers as listed through the tag-schema fallback.
pub fn fallback_image_referrer_state_keys() -> Vec<StateKey> {
    vec![
        StateKey::new("316405db72cc", media_type::IMAGE_MANIFEST),
        StateKey::new("8b3f7e000c4a", media_type::IMAGE_MANIFEST),
    ]
}

/// Signature referrer as stored through the tag-schema fallback.
pub fn fallback_signature_image_referrer() -> Descriptor {
    Descriptor::new(
        media_type::IMAGE_MANIFEST,
        Digest::new("sha256:8b3f7e000c4a6d32cd6bfcabfe874ed470d470501a09adc65afaf1c342f988ff"),
        670,
    )
}

/// SBOM referrer as stored through the tag-schema fallback.
pub fn fallback_sbom_image_referrer() -> Descriptor {
    Descriptor {
        media_type: media_type::IMAGE_MANIFEST.to_owned(),
        digest: Digest::new("sha256:316405db72cc8f0212c19db23b498f9af8a456c9cd288f9e33acd1ba9e7cd534"),
        size: 660,
        annotations: Some(BTreeMap::from([(
            annotations::IMAGE_CREATED.to_owned(),
            "2023-01-29T02:32:18Z".to_owned(),
        )])),
        artifact_type: Some(SBOM_ARTIFACT_TYPE.to_owned()),
    }
}
