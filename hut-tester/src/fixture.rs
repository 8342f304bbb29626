use anyhow::{Context, Result};
use hut_core::{FeedSnapshot, MenuRow, parse_feed};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Export used when no `--feed` is given.
const BUILT_IN_FEED: &str = include_str!("../../hut-core/tests/fixtures/menu.csv");

/// A parsed feed export plus what the reports need to identify it.
#[derive(Debug, Clone)]
pub struct FeedFixture {
    pub source: String,
    pub digest: String,
    pub rows: Vec<MenuRow>,
    pub snapshot: FeedSnapshot,
}

impl FeedFixture {
    /// Read and parse `path`, or the built-in export when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read feed {}", path.display()))?;
                Self::from_text(path.display().to_string(), &text)
            }
            None => Self::built_in(),
        }
    }

    pub fn built_in() -> Result<Self> {
        Self::from_text("built-in".to_string(), BUILT_IN_FEED)
    }

    pub fn from_text(source: String, text: &str) -> Result<Self> {
        let rows = parse_feed(text).with_context(|| format!("feed {source} does not parse"))?;
        log::debug!("loaded {} rows from {source}", rows.len());
        Ok(Self {
            source,
            digest: sha256_hex(text.as_bytes()),
            snapshot: FeedSnapshot::from_rows(rows.clone()),
            rows,
        })
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_feed_loads_with_stable_digest() {
        let a = FeedFixture::built_in().unwrap();
        let b = FeedFixture::built_in().unwrap();
        assert_eq!(a.digest, b.digest);
        assert_eq!(a.digest.len(), 64);
        assert!(!a.snapshot.catalog.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FeedFixture::load(Some(Path::new("/definitely/not/here.csv"))).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.csv"));
    }

    #[test]
    fn sha256_matches_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
