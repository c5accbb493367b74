//! Reflector: fixed involutive permutation closing the rotor circuit.
//!
//! The reflector sends the signal back through the rotor chain after the
//! forward pass. Its wiring is a fixed-point free involution, which is
//! what makes the whole machine self-reciprocal and prevents any letter
//! from encoding to itself.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::LETTER_COUNT;
use crate::error::EnigmaError;

/// Identifier of a reflector in the fixed catalog.
///
/// The M3 machine modeled here carries the "B" reflector family only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    B,
}

const REFLECTOR_B_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

impl ReflectorId {
    /// Returns this reflector's wiring sequence.
    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorId::B => REFLECTOR_B_WIRING,
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectorId::B => f.write_str("B"),
        }
    }
}

impl FromStr for ReflectorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(ReflectorId::B),
            _ => Err(EnigmaError::UnknownReflector(s.to_string())),
        }
    }
}

/// A reflector instance with its lookup table precomputed.
///
/// Stateless: the table never changes after construction.
pub struct Reflector {
    id: ReflectorId,
    table: [u8; LETTER_COUNT],
}

impl Reflector {
    /// Builds the reflector for a catalog id.
    ///
    /// The stored table is the inverse lookup of the wiring sequence:
    /// entry `i` is the position whose wiring letter equals alphabet
    /// letter `i`. For an involution this coincides with the forward
    /// mapping itself.
    pub fn new(id: ReflectorId) -> Self {
        let mut table = [0u8; LETTER_COUNT];
        for (position, letter) in id.wiring().bytes().enumerate() {
            table[(letter - b'A') as usize] = position as u8;
        }
        Reflector { id, table }
    }

    /// Reflects an alphabet index back into the rotor chain.
    pub fn forward(&self, index: usize) -> usize {
        self.table[index] as usize
    }

    /// Returns the catalog id of this reflector.
    pub fn id(&self) -> ReflectorId {
        self.id
    }
}
