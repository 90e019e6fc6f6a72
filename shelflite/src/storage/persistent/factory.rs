// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver factory
//!
//! This module provides factory functions for creating storage drivers based
//! on configuration. It handles the instantiation and setup of different
//! storage driver types.

use super::traits::{StorageDriver, StorageTree};
use super::types::{StorageResult, StorageType};
use std::path::Path;

#[cfg(not(feature = "sled-backend"))]
use super::types::StorageDriverError;

/// Factory function to create a storage driver based on configuration
///
/// This is the main entry point for creating storage drivers. It takes a
/// storage type and path, then returns the appropriate driver implementation
/// as a trait object.
///
/// # Arguments
/// * `storage_type` - The type of storage driver to create (Sled, Memory)
/// * `path` - The filesystem path where the database should be stored
///
/// # Returns
/// A boxed trait object that implements StorageDriver
pub fn create_storage_driver<P: AsRef<Path>>(
    storage_type: StorageType,
    path: P,
) -> StorageResult<Box<dyn StorageDriver<Tree = Box<dyn StorageTree>>>> {
    match storage_type {
        #[cfg(feature = "sled-backend")]
        StorageType::Sled => {
            use crate::storage::persistent::sled::SledDriver;
            let driver = SledDriver::open(path)?;
            Ok(Box::new(driver) as Box<dyn StorageDriver<Tree = Box<dyn StorageTree>>>)
        }
        #[cfg(not(feature = "sled-backend"))]
        StorageType::Sled => Err(StorageDriverError::Backend(
            "Sled storage backend not compiled in (enable the sled-backend feature)".to_string(),
        )),
        StorageType::Memory => {
            use crate::storage::persistent::memory::MemoryStorageDriver;
            let driver = MemoryStorageDriver::open(path)?;
            Ok(Box::new(driver) as Box<dyn StorageDriver<Tree = Box<dyn StorageTree>>>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(feature = "sled-backend")]
    #[test]
    fn test_create_sled_driver() {
        let temp_dir = TempDir::new().unwrap();
        let driver = create_storage_driver(StorageType::Sled, temp_dir.path()).unwrap();
        assert_eq!(driver.storage_type(), StorageType::Sled);
    }

    #[test]
    fn test_create_memory_driver() {
        let temp_dir = TempDir::new().unwrap();
        let driver = create_storage_driver(StorageType::Memory, temp_dir.path()).unwrap();
        assert_eq!(driver.storage_type(), StorageType::Memory);
    }
}
