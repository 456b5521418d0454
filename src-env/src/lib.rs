//! Environment utilities for the CEC2009 tools
//!
//! Binaries write their artefacts (plots, JSON dumps) below the directory
//! pointed to by `CEC2009_DIR`.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
