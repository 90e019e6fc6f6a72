// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver traits
//!
//! This module defines the core traits for storage drivers and trees.
//! All storage drivers must implement these traits to provide a consistent
//! interface.

use super::types::{StorageResult, StorageType};
use std::path::Path;

/// Trait for a tree/column family in the storage driver
///
/// Represents a named collection of key-value pairs within a storage driver.
/// Similar to a table in SQL databases. Iteration is guaranteed to yield
/// entries in ascending key order; the catalog layer relies on that for
/// BookID-ordered scans.
pub trait StorageTree: Send + Sync {
    /// Insert a key-value pair
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()>;

    /// Get a value by key
    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>>;

    /// Remove a key-value pair
    fn remove(&self, key: &[u8]) -> StorageResult<()>;

    /// Check if a key exists
    fn contains_key(&self, key: &[u8]) -> StorageResult<bool>;

    /// Number of entries in the tree
    fn len(&self) -> StorageResult<usize>;

    /// Iterate over all key-value pairs in ascending key order
    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>>;
}

/// Main storage driver trait
///
/// Defines the interface that all storage drivers must implement.
/// Provides methods for opening databases, managing trees, and shutdown.
pub trait StorageDriver: Send + Sync {
    /// Type of tree/column family used by this driver
    type Tree: StorageTree;

    /// Open or create a storage driver at the given path
    fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self>
    where
        Self: Sized;

    /// Open or create a named tree/column family
    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree>;

    /// Flush all pending writes to disk
    fn flush(&self) -> StorageResult<()>;

    /// Get storage type
    fn storage_type(&self) -> StorageType;

    /// Explicitly close the storage driver and release any file locks
    /// This is called before dropping to ensure clean shutdown
    fn shutdown(&mut self) -> StorageResult<()> {
        // Default implementation just flushes
        self.flush()
    }
}

// Helper implementation for Box<dyn StorageTree>
// This allows us to use boxed trait objects seamlessly
impl StorageTree for Box<dyn StorageTree> {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        (**self).insert(key, value)
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn remove(&self, key: &[u8]) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn contains_key(&self, key: &[u8]) -> StorageResult<bool> {
        (**self).contains_key(key)
    }

    fn len(&self) -> StorageResult<usize> {
        (**self).len()
    }

    fn iter(
        &self,
    ) -> StorageResult<Box<dyn Iterator<Item = StorageResult<(Vec<u8>, Vec<u8>)>> + '_>> {
        (**self).iter()
    }
}
