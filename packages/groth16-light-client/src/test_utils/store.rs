//! An in-memory host store

use std::{collections::BTreeMap, ops::Bound};

use crate::store::{ClientStore, ReadStore};

/// A [`ClientStore`] backed by a sorted map, so that snapshots compare byte for byte
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore(pub BTreeMap<Vec<u8>, Vec<u8>>);

impl ReadStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key).cloned()
    }

    fn first_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        if start >= end {
            return None;
        }
        self.0
            .range::<[u8], _>((Bound::Included(start), Bound::Excluded(end)))
            .next()
            .map(|(_, value)| value.clone())
    }

    fn last_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        if start >= end {
            return None;
        }
        self.0
            .range::<[u8], _>((Bound::Included(start), Bound::Excluded(end)))
            .next_back()
            .map(|(_, value)| value.clone())
    }
}

impl ClientStore for MemoryStore {
    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.0.insert(key.to_vec(), value.to_vec());
    }
}
