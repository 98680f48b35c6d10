#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a run does when it produces a non-finite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OnInstability {
    /// Discard the partial series and return the error.
    #[default]
    Fail,

    /// Return the days recorded before the failure with
    /// [`Status::Diverged`](super::Status::Diverged).
    ReturnPartial,
}

/// Configuration for the simulation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    pub on_instability: OnInstability,
}

impl Config {
    /// Returns a config that keeps partial results on numerical instability.
    #[must_use]
    pub fn return_partial() -> Self {
        Self {
            on_instability: OnInstability::ReturnPartial,
        }
    }
}
