// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory storage driver implementation for testing

use super::traits::{StorageDriver, StorageTree};
use super::types::{StorageResult, StorageType};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// In-memory storage driver for testing
pub struct MemoryStorageDriver {
    trees: Arc<RwLock<BTreeMap<String, MemoryTree>>>,
}

/// In-memory tree implementation
///
/// Backed by a BTreeMap so iteration yields entries in ascending key order,
/// matching the on-disk drivers.
#[derive(Clone)]
pub struct MemoryTree {
    data: Arc<RwLock<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStorageDriver {
    /// Create a new memory storage driver
    pub fn new() -> Self {
        Self {
            trees: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryStorageDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl StorageTree for MemoryTree {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn remove(&self, key: &[u8]) -> StorageResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn contains_key(&self, key: &[u8]) -> StorageResult<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn len(&self) -> StorageResult<usize> {
        Ok(self.data.read().len())
    }

    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        let data = self.data.read();
        let items: Vec<_> = data
            .iter()
            .map(|(k, v)| Ok((k.clone(), v.clone())))
            .collect();
        Ok(Box::new(items.into_iter()))
    }
}

impl StorageDriver for MemoryStorageDriver {
    type Tree = Box<dyn StorageTree>;

    fn open<P: AsRef<Path>>(_path: P) -> StorageResult<Self> {
        // Path is ignored - memory storage is not persistent
        Ok(Self::new())
    }

    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree> {
        let mut trees = self.trees.write();
        let tree = trees
            .entry(name.to_string())
            .or_insert_with(MemoryTree::new)
            .clone();
        Ok(Box::new(tree) as Box<dyn StorageTree>)
    }

    fn flush(&self) -> StorageResult<()> {
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Memory
    }
}
