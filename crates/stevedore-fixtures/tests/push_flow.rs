//! Fixture-driven push and attach assertions, wired the way e2e cases
//! consume them: materialize the files, fabricate the client transcript the
//! registry run would produce, and match it against the declared state keys.

use stevedore_fixtures::{foobar, FixtureLayout};
use stevedore_match::{StateKey, StatusMatcher};
use stevedore_oci::Digest;

/// Transcript the client prints for a successful upload of the given keys,
/// with the usual trailing noise lines.
fn upload_transcript(keys: &[StateKey]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(&format!("Uploaded {key}\n"));
    }
    out.push_str(&format!("Digest: {}\n", foobar::DIGEST));
    out
}

#[test]
fn file_push_transcript_matches_declared_keys() {
    let mut expected = foobar::file_state_keys();
    expected.push(foobar::file_config_state_key());
    expected.push(foobar::manifest_state_key());

    let report = StatusMatcher::new("Uploaded")
        .expect_all(expected.clone())
        .check(&upload_transcript(&expected))
        .unwrap();
    assert!(report.is_success());
    assert_eq!(report.matched.len(), expected.len());
    assert!(report.unexpected.is_empty());
}

#[test]
fn partial_transcript_reports_the_dropped_layer() {
    let expected = foobar::file_state_keys();
    let observed = upload_transcript(&expected[..2]);

    let report = StatusMatcher::new("Uploaded")
        .expect_all(expected.clone())
        .check(&observed)
        .unwrap();
    assert!(!report.is_success());
    assert_eq!(report.missing, vec![expected[2].clone()]);
}

#[test]
fn attach_transcript_matches_referrer_keys() {
    let mut expected = vec![foobar::attach_file_state_key()];
    expected.extend(foobar::artifact_referrer_state_keys());

    let report = StatusMatcher::new("Uploaded")
        .expect_all(expected.clone())
        .check(&upload_transcript(&expected))
        .unwrap();
    assert!(report.is_success());
}

#[test]
fn pull_transcript_uses_its_own_verb() {
    let expected = foobar::image_layer_state_keys();
    let mut transcript = String::new();
    for key in &expected {
        transcript.push_str(&format!("Downloaded {key}\n"));
    }

    // An upload matcher must not accept download lines.
    let uploads = StatusMatcher::new("Uploaded")
        .expect_all(expected.clone())
        .check(&transcript)
        .unwrap();
    assert_eq!(uploads.missing.len(), expected.len());

    let downloads = StatusMatcher::new("Downloaded")
        .expect_all(expected)
        .check(&transcript)
        .unwrap();
    assert!(downloads.is_success());
}

#[test]
fn materialized_files_produce_the_declared_upload_keys() {
    let dir = tempfile::tempdir().unwrap();
    let layout = FixtureLayout::new(dir.path().join("foobar"));
    layout.materialize().unwrap();

    // Recompute each layer key from the bytes on disk, as the client would.
    let mut observed = String::new();
    for (path, name) in [
        (layout.foo1_path(), foobar::IMAGE_LAYER_NAMES[0]),
        (layout.foo2_path(), foobar::IMAGE_LAYER_NAMES[1]),
        (layout.bar_path(), foobar::IMAGE_LAYER_NAMES[2]),
    ] {
        let content = std::fs::read(path).unwrap();
        let digest = Digest::from_bytes(&content);
        observed.push_str(&format!("Uploaded {} {name}\n", digest.short()));
    }

    let report = StatusMatcher::new("Uploaded")
        .expect_all(foobar::image_layer_state_keys())
        .check(&observed)
        .unwrap();
    assert!(report.is_success(), "missing: {:?}", report.missing);
}
