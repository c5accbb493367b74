//! Error types for the Enigma library.

use std::fmt;

use crate::rotor::RotorId;

/// Configuration errors detected while building a machine.
///
/// Every variant names the offending parameter and the violated
/// constraint so a caller can correct its settings without inspecting
/// machine internals. Once a machine is constructed, encoding is total
/// and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Rotor name not in the fixed catalog I–V.
    UnknownRotor(String),
    /// Reflector name not in the fixed catalog (only "B" exists).
    UnknownReflector(String),
    /// Ring setting outside the valid range [1, 26].
    RingSettingOutOfRange { rotor: RotorId, value: u8 },
    /// Starting position outside the valid range [1, 26].
    PositionOutOfRange { rotor: RotorId, value: u8 },
    /// Plugboard pair contains a character outside A–Z.
    PlugboardLetterNotAlphabetic(char),
    /// Letter wired into more than one plugboard pair.
    PlugboardLetterReused(char),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::UnknownRotor(name) => {
                write!(f, "Unknown rotor `{}`: expected one of I, II, III, IV, V", name)
            }
            EnigmaError::UnknownReflector(name) => {
                write!(f, "Unknown reflector `{}`: expected B", name)
            }
            EnigmaError::RingSettingOutOfRange { rotor, value } => {
                write!(
                    f,
                    "Ring setting {} for rotor {} is outside the valid range [1, 26]",
                    value, rotor
                )
            }
            EnigmaError::PositionOutOfRange { rotor, value } => {
                write!(
                    f,
                    "Starting position {} for rotor {} is outside the valid range [1, 26]",
                    value, rotor
                )
            }
            EnigmaError::PlugboardLetterNotAlphabetic(c) => {
                write!(f, "Plugboard letter `{}` is not in A-Z", c)
            }
            EnigmaError::PlugboardLetterReused(c) => {
                write!(f, "Plugboard letter `{}` is wired into more than one pair", c)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}
