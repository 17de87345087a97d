//! External tool detection and invocation
//!
//! This module provides:
//! - git availability detection
//! - git repository initialization for generated projects

pub mod git;

pub use git::{check_git, ensure_git, init_repository, RuntimeInfo};
