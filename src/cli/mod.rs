//! CLI infrastructure for the oxo shell
//!
//! This module provides the command-line interface for playing against the
//! computer, analyzing positions, and pitting strategies against each other.

pub mod commands;
pub mod output;
