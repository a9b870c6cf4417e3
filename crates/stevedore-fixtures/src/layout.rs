use crate::foobar;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BAR_CONTENT: &str = "bar";
const CONFIG_CONTENT: &str = "{}";

/// On-disk form of the foobar push fixtures.
///
/// Push cases run the client against real files; this writes the layer and
/// config blobs under a caller-supplied root. The written bytes hash to the
/// digests declared in [`foobar`], so a push of these files produces exactly
/// the state keys the fixtures assert.
#[derive(Debug, Clone)]
pub struct FixtureLayout {
    root: PathBuf,
}

impl FixtureLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    pub fn foo1_path(&self) -> PathBuf {
        self.root.join("foo1")
    }

    #[inline]
    pub fn foo2_path(&self) -> PathBuf {
        self.root.join("foo2")
    }

    #[inline]
    pub fn bar_path(&self) -> PathBuf {
        self.root.join("bar")
    }

    #[inline]
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Write all fixture files, creating the root if needed. Idempotent;
    /// existing files are overwritten with the same content. Returns the
    /// written paths in layer order, config last.
    pub fn materialize(&self) -> Result<Vec<PathBuf>, io::Error> {
        fs::create_dir_all(&self.root)?;
        let files = [
            (self.foo1_path(), foobar::FOO_BLOB_CONTENT),
            (self.foo2_path(), foobar::FOO_BLOB_CONTENT),
            (self.bar_path(), BAR_CONTENT),
            (self.config_path(), CONFIG_CONTENT),
        ];
        let mut written = Vec::with_capacity(files.len());
        for (path, content) in files {
            fs::write(&path, content)?;
            written.push(path);
        }
        Ok(written)
    }
}
