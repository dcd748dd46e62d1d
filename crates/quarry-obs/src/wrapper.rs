//! Environment decorator that swaps one observation for a reconfigured one.

use quarry_core::ObsValue;

use crate::error::ConfigError;
use crate::handler::{Handler, TranslationHandler};

/// The part of an environment definition an observation wrapper needs.
pub trait EnvSpec {
    /// Display name, `<Task>-<version>`.
    fn name(&self) -> &str;

    /// Observation handlers in declaration order.
    fn observables(&self) -> Vec<Handler>;
}

/// Wraps an environment, replacing every observable with the same kind
/// and name as `replacement`.
///
/// The display name gains `qualifier` before its version suffix
/// (`Treechop-v0` with `HighRes` becomes `TreechopHighRes-v0`). Actions
/// and observations pass through unchanged in both directions.
#[derive(Clone, Debug)]
pub struct ReplaceObservation<E> {
    inner: E,
    name: String,
    replacement: Handler,
}

impl<E: EnvSpec> ReplaceObservation<E> {
    /// Wrap `inner`.
    ///
    /// Returns `Err(ConfigError::MissingVersion)` if the inner name has no
    /// `-<version>` suffix.
    pub fn new(inner: E, qualifier: &str, replacement: Handler) -> Result<Self, ConfigError> {
        let name = qualified_name(inner.name(), qualifier)?;
        Ok(Self {
            inner,
            name,
            replacement,
        })
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// The substituted handler.
    pub fn replacement(&self) -> &Handler {
        &self.replacement
    }

    /// Agent action to environment action.
    pub fn wrap_action<A>(&self, action: A) -> A {
        action
    }

    /// Environment action to agent action.
    pub fn unwrap_action<A>(&self, action: A) -> A {
        action
    }

    /// Environment observation to agent observation.
    pub fn wrap_observation(&self, obs: ObsValue) -> ObsValue {
        obs
    }

    /// Agent observation to environment observation.
    pub fn unwrap_observation(&self, obs: ObsValue) -> ObsValue {
        obs
    }
}

impl<E: EnvSpec> EnvSpec for ReplaceObservation<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn observables(&self) -> Vec<Handler> {
        self.inner
            .observables()
            .into_iter()
            .map(|obs| {
                if obs.kind() == self.replacement.kind() && obs.name() == self.replacement.name() {
                    self.replacement.clone()
                } else {
                    obs
                }
            })
            .collect()
    }
}

/// Insert `qualifier` before the last `-` of `name`.
///
/// ```
/// use quarry_obs::wrapper::qualified_name;
///
/// assert_eq!(qualified_name("MineRLTreechop-v0", "HighRes").unwrap(), "MineRLTreechopHighRes-v0");
/// assert!(qualified_name("Treechop", "HighRes").is_err());
/// ```
pub fn qualified_name(name: &str, qualifier: &str) -> Result<String, ConfigError> {
    let (task, version) = name
        .rsplit_once('-')
        .ok_or_else(|| ConfigError::MissingVersion {
            name: name.to_string(),
        })?;
    Ok(format!("{task}{qualifier}-{version}"))
}
