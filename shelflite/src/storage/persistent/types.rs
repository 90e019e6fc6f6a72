// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver types and error handling
//!
//! This module defines the types, enums, and error handling used throughout
//! the storage driver system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage driver type configuration
///
/// Specifies which underlying storage technology to use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum StorageType {
    /// Sled - Pure Rust embedded database
    /// Best for: Normal operation, single-process embedded use
    Sled,

    /// Memory - In-memory storage for testing
    /// Best for: Unit testing, development
    Memory,
}

impl Default for StorageType {
    fn default() -> Self {
        StorageType::Sled
    }
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(StorageType::Sled),
            "memory" => Ok(StorageType::Memory),
            _ => Err(format!(
                "Unknown storage type: {}. Valid options: sled, memory",
                s
            )),
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StorageType::Sled => "sled",
            StorageType::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Error type for storage driver operations
///
/// Designed to be easily converted from underlying storage engine errors.
#[derive(Error, Debug)]
pub enum StorageDriverError {
    /// I/O related errors (file system, locks, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Driver-specific error (Sled, etc.)
    #[error("Storage driver error: {0}")]
    Backend(String),
}

impl From<bincode::Error> for StorageDriverError {
    fn from(e: bincode::Error) -> Self {
        StorageDriverError::Serialization(e.to_string())
    }
}

/// Result type for storage driver operations
pub type StorageResult<T> = Result<T, StorageDriverError>;
