//! A working session: one neighbor map, many searches.

use std::time::Instant;

use tracing::info;

use crate::config::LadderConfig;
use crate::error::Result;
use crate::graph_builder::{build_with_workers, NeighborMap};
use crate::path_finder::{find_path, Path};
use crate::snapshot::SnapshotStore;
use crate::word::Word;
use crate::word_source::WordSource;

/// Where the session's map came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOrigin {
    Snapshot,
    Built,
    Provided,
}

#[derive(Debug, Clone)]
pub struct Ladder {
    map: NeighborMap,
    origin: MapOrigin,
}

impl Ladder {
    /// Load the map from `store`, or build it from `source` and save it.
    ///
    /// Any word source or snapshot failure is returned as-is.
    pub fn open(
        config: &LadderConfig,
        source: &dyn WordSource,
        store: &dyn SnapshotStore,
    ) -> Result<Self> {
        config.validate()?;

        if !config.rebuild {
            if let Some(map) = store.load()? {
                return Ok(Self {
                    map,
                    origin: MapOrigin::Snapshot,
                });
            }
        }

        let start = Instant::now();
        let words = source.words()?;
        let map = build_with_workers(&words, config.workers)?;
        store.save(&map)?;
        info!("Graph ready in {}ms", start.elapsed().as_millis());

        Ok(Self {
            map,
            origin: MapOrigin::Built,
        })
    }

    pub fn from_map(map: NeighborMap) -> Self {
        Self {
            map,
            origin: MapOrigin::Provided,
        }
    }

    pub fn map(&self) -> &NeighborMap {
        &self.map
    }

    pub fn origin(&self) -> MapOrigin {
        self.origin
    }

    pub fn find_path(&self, start: &str, end: &str) -> Result<Option<Path>> {
        find_path(&self.map, start, end)
    }

    pub fn neighbors(&self, word: &str) -> Option<&[Word]> {
        self.map.neighbors(word)
    }
}
