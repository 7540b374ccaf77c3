//! Versioned on-disk snapshots of a built [`NeighborMap`].
//!
//! Layout (bincode): magic tag, format version, then `(word, neighbors)`
//! entries sorted by word. Neighbor lists keep their stored order.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LadderError, Result};
use crate::graph_builder::NeighborMap;
use crate::word::Word;

pub const SNAPSHOT_MAGIC: [u8; 4] = *b"WLNM";
pub const SNAPSHOT_VERSION: u32 = 1;

/// Load/save capability for a previously built map.
pub trait SnapshotStore {
    /// `Ok(None)` when no snapshot exists yet.
    fn load(&self) -> Result<Option<NeighborMap>>;

    fn save(&self, map: &NeighborMap) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    magic: [u8; 4],
    version: u32,
    entries: Vec<(&'a Word, &'a Vec<Word>)>,
}

#[derive(Debug, Deserialize)]
struct SnapshotOwned {
    magic: [u8; 4],
    version: u32,
    entries: Vec<(Word, Vec<Word>)>,
}

/// Fixed-width integers; any byte left over after the entries is corruption.
fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

pub fn encode_snapshot(map: &NeighborMap) -> Result<Vec<u8>> {
    let snapshot = SnapshotRef {
        magic: SNAPSHOT_MAGIC,
        version: SNAPSHOT_VERSION,
        entries: map.sorted_entries(),
    };
    snapshot_options()
        .serialize(&snapshot)
        .map_err(LadderError::persistence)
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<NeighborMap> {
    let snapshot: SnapshotOwned = snapshot_options()
        .deserialize(bytes)
        .map_err(|e| LadderError::persistence(format!("corrupt snapshot: {}", e)))?;

    if snapshot.magic != SNAPSHOT_MAGIC {
        return Err(LadderError::persistence("not a word ladder snapshot"));
    }
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LadderError::persistence(format!(
            "unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }
    Ok(NeighborMap::from_entries(snapshot.entries))
}

/// Snapshot kept in a single file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failure(&self, e: impl std::fmt::Display) -> LadderError {
        LadderError::persistence(format!("{}: {}", self.path.display(), e))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<NeighborMap>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.failure(e)),
        };
        let map = decode_snapshot(&bytes).map_err(|e| match e {
            LadderError::PersistenceFailure(msg) => self.failure(msg),
            other => other,
        })?;
        info!(
            "Loaded snapshot {}: {} words, {} edges",
            self.path.display(),
            map.len(),
            map.edge_count()
        );
        Ok(Some(map))
    }

    fn save(&self, map: &NeighborMap) -> Result<()> {
        let bytes = encode_snapshot(map)?;

        // write beside the target, then rename over it
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        if let Err(e) = write_then_rename(&tmp_path, &self.path, &bytes) {
            let _ = fs::remove_file(&tmp_path); // may not exist if create failed
            return Err(self.failure(e));
        }

        info!(
            "Saved snapshot {}: {} words, {} bytes",
            self.path.display(),
            map.len(),
            bytes.len()
        );
        Ok(())
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp_path, path)
}
