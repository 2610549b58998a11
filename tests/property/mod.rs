// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest to verify
//! the fundamental laws of the transformation engine: strategy
//! agreement, cursor protocol behavior, and sort correctness.

mod engine_laws;
mod sort_laws;
