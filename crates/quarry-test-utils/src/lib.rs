//! Test utilities and mock types for Quarry development.
//!
//! Provides raw-dictionary fixtures for the primary feed and the
//! snapshot, and a [`MockEnvSpec`] for exercising environment wrappers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    held_index, primary_feed, snapshot, snapshot_with, OTHER_CONTAINER, PLAYER_CONTAINER,
};

use quarry_obs::{EnvSpec, Handler};

/// Mock implementation of [`EnvSpec`].
///
/// Holds a fixed name and observable list; clones the list on every
/// [`observables`](EnvSpec::observables) call.
#[derive(Clone, Debug)]
pub struct MockEnvSpec {
    pub name: String,
    pub observables: Vec<Handler>,
}

impl MockEnvSpec {
    pub fn new(name: impl Into<String>, observables: Vec<Handler>) -> Self {
        Self {
            name: name.into(),
            observables,
        }
    }
}

impl EnvSpec for MockEnvSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn observables(&self) -> Vec<Handler> {
        self.observables.clone()
    }
}
