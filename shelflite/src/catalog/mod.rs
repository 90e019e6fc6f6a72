// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog and reservation management
//!
//! This module provides:
//! - Record types for books, users, and reservations
//! - A typed store layer over the key-value backend
//! - The catalog repository (book CRUD with joined reads)
//! - Identifier classification and lookup dispatch
//! - The mutation coordinator that keeps book availability consistent
//!   with reservation rows
//! - Guarded sample-data bootstrap

pub mod bootstrap;
pub mod error;
pub mod mutation;
pub mod records;
pub mod repository;
pub mod resolver;
pub mod store;
