//! Tests for the core error module
//!
//! This module organizes tests for each error type into separate files
//! for better maintainability and scalability.
