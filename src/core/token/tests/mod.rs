//! Tests for the core token module
//!
//! This module organizes tests for each token component into separate files
//! for better maintainability and scalability.

mod token_validation_tests;
