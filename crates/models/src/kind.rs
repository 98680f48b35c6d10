use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects which compartment model a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ModelKind {
    #[default]
    Sir,
    Seir,
}

/// A model name that matches no known model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown model {0:?}, expected \"sir\" or \"seir\"")]
pub struct UnknownModelError(pub String);

impl FromStr for ModelKind {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sir" => Ok(Self::Sir),
            "seir" => Ok(Self::Seir),
            _ => Err(UnknownModelError(s.to_string())),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sir => f.write_str("SIR"),
            Self::Seir => f.write_str("SEIR"),
        }
    }
}
