// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the catalog layer
//!
//! Absence of a record is never an error here: lookups return `Ok(None)`.
//! Only uniqueness violations are converted into a result variant; every
//! other store fault propagates unchanged and aborts the current operation.

use crate::catalog::records::BookId;
use crate::storage::StorageDriverError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Unknown book: BookID {0}")]
    UnknownBook(BookId),

    #[error("Book {0} is already reserved")]
    AlreadyReserved(BookId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err.to_string())
    }
}

impl From<bincode::Error> for CatalogError {
    fn from(err: bincode::Error) -> Self {
        CatalogError::Serialization(err.to_string())
    }
}

impl From<StorageDriverError> for CatalogError {
    fn from(err: StorageDriverError) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
