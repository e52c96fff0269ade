// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pulsechain Price API - Read-only PulseChain gateway
//!
//! This crate serves native balances, ERC-20 token metadata and PulseX
//! swap-router price quotes over HTTP, backed by a single upstream
//! PulseChain RPC node.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - PulseChain integration (address validation, units, RPC client)
//! - `config` - Environment configuration
//! - `error` - JSON error envelope
//! - `telemetry` - Tracing subscriber setup

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;
