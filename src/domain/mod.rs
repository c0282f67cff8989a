//! Core domain models for spmup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records read from the package list
//! - Release candidates produced while querying GitHub
//! - Resolved dependencies with their latest known version

mod candidate;
mod dependency;
mod resolved;

pub use candidate::ReleaseCandidate;
pub use dependency::DependencyRecord;
pub use resolved::ResolvedDependency;
