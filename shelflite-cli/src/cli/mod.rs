// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for ShelfLite
//!
//! Provides the command-line interface: one-shot catalog commands and the
//! interactive console (numbered menu REPL).

pub mod commands;
pub mod console;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use console::handle_console;
pub use handlers::{
    handle_add, handle_delete, handle_detail, handle_list, handle_seed, handle_status,
    handle_update,
};
