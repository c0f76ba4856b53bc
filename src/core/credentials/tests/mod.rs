//! Tests for the core credentials module
