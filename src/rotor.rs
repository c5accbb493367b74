//! Rotor: rotatable letter permutation with turnover tracking.
//!
//! Each rotor applies a fixed wiring permutation shifted by its current
//! rotation. The rotation is held as a single integer offset (0–25);
//! `forward`/`reverse` compute `(index + rotation) mod 26` lookups against
//! fixed index tables instead of materializing rotated sequences.
//!
//! The catalog of historical rotors I–V is process-wide immutable data,
//! shared by every machine instance.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, LETTER_COUNT};
use crate::error::EnigmaError;

/// Identifier of a rotor in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

/// Static wiring data for one catalog rotor.
///
/// `wiring[i]` is the letter that contact `i` maps to in the base
/// orientation. `turnovers` are the window letters that raise the
/// turnover flag when rotated into view; `notches` are the window
/// letters at which the rotor engages the machine's double-step.
struct RotorSpec {
    wiring: &'static str,
    turnovers: &'static str,
    notches: &'static str,
}

const ROTOR_I: RotorSpec = RotorSpec {
    wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    turnovers: "R",
    notches: "Q",
};
const ROTOR_II: RotorSpec = RotorSpec {
    wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    turnovers: "F",
    notches: "E",
};
const ROTOR_III: RotorSpec = RotorSpec {
    wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    turnovers: "W",
    notches: "V",
};
const ROTOR_IV: RotorSpec = RotorSpec {
    wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
    turnovers: "K",
    notches: "J",
};
const ROTOR_V: RotorSpec = RotorSpec {
    wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
    turnovers: "A",
    notches: "Z",
};

impl RotorId {
    /// All catalog rotors, in catalog order.
    pub const ALL: [RotorId; 5] = [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    fn spec(self) -> &'static RotorSpec {
        match self {
            RotorId::I => &ROTOR_I,
            RotorId::II => &ROTOR_II,
            RotorId::III => &ROTOR_III,
            RotorId::IV => &ROTOR_IV,
            RotorId::V => &ROTOR_V,
        }
    }

    /// Returns this rotor's base wiring sequence.
    pub fn wiring(self) -> &'static str {
        self.spec().wiring
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(RotorId::I),
            "II" => Ok(RotorId::II),
            "III" => Ok(RotorId::III),
            "IV" => Ok(RotorId::IV),
            "V" => Ok(RotorId::V),
            _ => Err(EnigmaError::UnknownRotor(s.to_string())),
        }
    }
}

/// A rotor instance: catalog wiring plus per-session ring setting,
/// starting position, and the mutable rotation state.
///
/// The ring setting shifts the internal wiring relative to the casing;
/// the starting position is the visible window letter before the first
/// keypress. Both are applied as ordinary rotation steps when the rotor
/// is built or reset.
pub struct Rotor {
    id: RotorId,
    spec: &'static RotorSpec,
    forward_table: [u8; LETTER_COUNT],
    reverse_table: [u8; LETTER_COUNT],
    /// Zero-based ring setting (input is 1–26).
    ring_setting: u8,
    /// Zero-based starting position (input is 1–26).
    position: u8,
    /// Current rotation offset, always in 0–25.
    rotation: u8,
    turnover: bool,
}

impl Rotor {
    /// Builds a rotor from catalog id, ring setting, and starting position.
    ///
    /// Both numeric parameters are 1-based dial values; they are stored
    /// zero-based internally and applied as rotation steps, ring setting
    /// first, then starting position. The turnover flag is clear once
    /// construction finishes.
    ///
    /// # Parameters
    /// - `id`: Catalog rotor to instantiate.
    /// - `ring_setting`: Ring setting dial value, 1–26.
    /// - `position`: Starting position dial value, 1–26.
    ///
    /// # Errors
    /// Returns [`EnigmaError::RingSettingOutOfRange`] or
    /// [`EnigmaError::PositionOutOfRange`] when a dial value is outside
    /// [1, 26].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::rotor::{Rotor, RotorId};
    ///
    /// let rotor = Rotor::new(RotorId::I, 1, 1).unwrap();
    /// assert_eq!(rotor.window(), 'A');
    ///
    /// assert!(Rotor::new(RotorId::I, 0, 1).is_err());
    /// ```
    pub fn new(id: RotorId, ring_setting: u8, position: u8) -> Result<Self, EnigmaError> {
        if !(1..=26).contains(&ring_setting) {
            return Err(EnigmaError::RingSettingOutOfRange {
                rotor: id,
                value: ring_setting,
            });
        }
        if !(1..=26).contains(&position) {
            return Err(EnigmaError::PositionOutOfRange {
                rotor: id,
                value: position,
            });
        }

        let spec = id.spec();
        let mut forward_table = [0u8; LETTER_COUNT];
        let mut reverse_table = [0u8; LETTER_COUNT];
        for (i, letter) in spec.wiring.bytes().enumerate() {
            let target = letter - b'A';
            forward_table[i] = target;
            reverse_table[target as usize] = i as u8;
        }

        let mut rotor = Rotor {
            id,
            spec,
            forward_table,
            reverse_table,
            ring_setting: ring_setting - 1,
            position: position - 1,
            rotation: 0,
            turnover: false,
        };
        rotor.reset();
        Ok(rotor)
    }

    /// Restores the construction-time alignment.
    ///
    /// Rotation returns to the base orientation, then the ring setting
    /// and starting position are reapplied through the same
    /// [`rotate`](Self::rotate) path used at runtime. The turnover flag
    /// is clear afterwards.
    pub fn reset(&mut self) {
        self.rotation = 0;
        self.turnover = false;
        for _ in 0..self.ring_setting {
            self.rotate();
        }
        for _ in 0..self.position {
            self.rotate();
        }
        self.turnover = false;
    }

    /// Advances the rotation by one step.
    ///
    /// Sets the turnover flag when the new window letter is one of this
    /// rotor's turnover letters. The flag stays set until the machine's
    /// stepping protocol consumes it.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % LETTER_COUNT as u8;
        if self.spec.turnovers.contains(self.window()) {
            self.turnover = true;
        }
    }

    /// Permutes an alphabet index on the forward pass (keyboard side in,
    /// reflector side out).
    ///
    /// # Parameters
    /// - `index`: Entry contact, 0–25.
    ///
    /// # Returns
    /// The exit contact under the current rotation.
    pub fn forward(&self, index: usize) -> usize {
        let contact = (index + self.rotation as usize) % LETTER_COUNT;
        (self.forward_table[contact] as usize + LETTER_COUNT - self.rotation as usize)
            % LETTER_COUNT
    }

    /// Permutes an alphabet index on the return pass (reflector side in,
    /// keyboard side out). Mirror lookup of [`forward`](Self::forward).
    pub fn reverse(&self, index: usize) -> usize {
        let contact = (index + self.rotation as usize) % LETTER_COUNT;
        (self.reverse_table[contact] as usize + LETTER_COUNT - self.rotation as usize)
            % LETTER_COUNT
    }

    /// Returns the catalog id of this rotor.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Returns the letter currently visible in the rotor window.
    pub fn window(&self) -> char {
        alphabet::letter_at(self.rotation as usize)
    }

    /// True when the window shows one of this rotor's notch letters, the
    /// condition under which the machine double-steps a middle rotor.
    pub fn at_notch(&self) -> bool {
        self.spec.notches.contains(self.window())
    }

    /// Returns the pending turnover flag.
    pub fn turnover(&self) -> bool {
        self.turnover
    }

    /// Clears the turnover flag after the stepping protocol consumed it.
    pub fn clear_turnover(&mut self) {
        self.turnover = false;
    }

    /// Returns the wiring sequence as seen under the current rotation,
    /// as a 26-letter string.
    pub fn sequence(&self) -> String {
        let wiring = self.spec.wiring.as_bytes();
        (0..LETTER_COUNT)
            .map(|i| wiring[(i + self.rotation as usize) % LETTER_COUNT] as char)
            .collect()
    }
}
