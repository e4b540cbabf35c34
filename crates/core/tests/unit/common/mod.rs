//! Shared-utility tests.
//!
//! This module contains unit tests for the bit-manipulation helpers and the
//! error types every other component builds on.
