//! Unit tests for vocabulary format implementations.
//!
//! These tests verify document encoding, snapshot recovery and round-trip
//! conversions.

mod json_tests;
