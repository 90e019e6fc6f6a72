// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage layer for catalog records
//!
//! This module provides:
//! - Pluggable key-value storage drivers (Sled, in-memory)
//! - A driver factory selecting the backend from configuration
//!
//! The catalog layer sits on top of these drivers and never touches a
//! concrete backend directly.

pub(crate) mod persistent;

// Only expose StorageType for configuration
pub use persistent::StorageType;
// Public exports for the catalog layer and tests
pub use persistent::{create_storage_driver, StorageDriver, StorageTree};
pub use persistent::StorageDriverError;
