//! Test module for winsearch-core
//!
//! This module contains tests for:
//! - Provider sessions, command handling and activation dispatch
//! - Matching and ranking properties over window lists
//! - Configuration loading and defaults

mod config_tests;
