use std::{fmt, str::FromStr};

use thiserror::Error;

/// How a model is evaluated at a state.
///
/// Integer flags from external callers map as `0 => Value` and
/// `1 => Derivative`; anything else is rejected with [`InvalidModeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Return the state after one explicit Euler substep.
    Value,

    /// Return the instantaneous rate of change of every compartment.
    Derivative,
}

/// An unrecognized model evaluation mode.
///
/// Always a programming error in the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid mode flag: expected 0/1 or \"value\"/\"derivative\", received {flag:?}")]
pub struct InvalidModeError {
    flag: String,
}

impl InvalidModeError {
    /// Returns the rejected flag as it was received.
    #[must_use]
    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl TryFrom<u8> for Mode {
    type Error = InvalidModeError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::Value),
            1 => Ok(Self::Derivative),
            other => Err(InvalidModeError {
                flag: other.to_string(),
            }),
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "value" => Ok(Self::Value),
            "1" | "derivative" => Ok(Self::Derivative),
            _ => Err(InvalidModeError {
                flag: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::Derivative => f.write_str("derivative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_flags() {
        assert_eq!(Mode::try_from(0), Ok(Mode::Value));
        assert_eq!(Mode::try_from(1), Ok(Mode::Derivative));

        let err = Mode::try_from(2).unwrap_err();
        assert_eq!(err.flag(), "2");
    }

    #[test]
    fn string_flags() {
        assert_eq!("Value".parse::<Mode>(), Ok(Mode::Value));
        assert_eq!(" derivative ".parse::<Mode>(), Ok(Mode::Derivative));
        assert_eq!("1".parse::<Mode>(), Ok(Mode::Derivative));

        let err = "slope".parse::<Mode>().unwrap_err();
        assert_eq!(err.flag(), "slope");
        assert!(err.to_string().contains("slope"));
    }

    #[test]
    fn display_round_trips() {
        for mode in [Mode::Value, Mode::Derivative] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }
}
