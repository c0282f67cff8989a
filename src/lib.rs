//! spmup - Swift package update checker library
//!
//! This library provides the core functionality for checking the dependencies
//! listed by swift-package-list against their GitHub releases:
//! - Package list parsing with fallback keys
//! - Latest version resolution (releases, then tags dated by commit)
//! - Report generation for outdated dependencies

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolver;
