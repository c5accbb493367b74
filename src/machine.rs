//! The Enigma machine: rotor chain, reflector, and plugboard composed
//! into a single character transform.
//!
//! Owns three rotors (index 0 is the fastest, the one closest to the
//! keyboard), one reflector, and one plugboard. Each alphabetic keypress
//! first runs the stepping protocol, then threads the letter through
//! plugboard → rotors → reflector → rotors reversed → plugboard.

use std::fmt;

use crate::alphabet::LETTER_COUNT;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorId};
use crate::rotor::{Rotor, RotorId};

/// Number of rotor slots in the machine.
pub const ROTOR_COUNT: usize = 3;

/// Settings for one rotor slot: which catalog rotor, its ring setting,
/// and its starting position (both 1–26 dial values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSetting {
    pub rotor: RotorId,
    pub ring_setting: u8,
    pub position: u8,
}

impl RotorSetting {
    /// Bundles a rotor id with its two dial values.
    pub fn new(rotor: RotorId, ring_setting: u8, position: u8) -> Self {
        RotorSetting {
            rotor,
            ring_setting,
            position,
        }
    }
}

/// The cipher engine for one session.
///
/// Construction validates every setting eagerly; a machine is never
/// returned in a partially configured state. Once built,
/// [`encode`](Self::encode) is total and mutates rotor rotation state on
/// every alphabetic character, so a single instance must be fed strictly
/// one character at a time, in input order.
pub struct Enigma {
    /// Rotors in stepping order: index 0 is the fastest (rightmost).
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Builds a machine from rotor settings and plugboard pairs.
    ///
    /// Settings are supplied slowest-to-fastest, the order an operator
    /// reads the rotor slots left to right; internally the rotors are
    /// instantiated in reverse so the fastest sits first in stepping
    /// order. The reflector is the fixed "B" of this machine family.
    ///
    /// # Parameters
    /// - `settings`: One entry per rotor slot, slowest first.
    /// - `plugboard_pairs`: Up to 13 letter pairs, each letter used once.
    ///
    /// # Errors
    /// Any [`EnigmaError`] from rotor or plugboard validation; no machine
    /// is constructed when a setting is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::{Enigma, RotorId, RotorSetting};
    ///
    /// let settings = [
    ///     RotorSetting::new(RotorId::I, 1, 1),
    ///     RotorSetting::new(RotorId::II, 1, 1),
    ///     RotorSetting::new(RotorId::III, 1, 1),
    /// ];
    /// let mut machine = Enigma::new(settings, &[('A', 'T')]).unwrap();
    /// assert_eq!(machine.encode('A'), 'O');
    /// ```
    pub fn new(
        settings: [RotorSetting; ROTOR_COUNT],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        let [slow, middle, fast] = settings;
        let rotors = [
            Rotor::new(fast.rotor, fast.ring_setting, fast.position)?,
            Rotor::new(middle.rotor, middle.ring_setting, middle.position)?,
            Rotor::new(slow.rotor, slow.ring_setting, slow.position)?,
        ];
        Ok(Enigma {
            rotors,
            reflector: Reflector::new(ReflectorId::B),
            plugboard: Plugboard::new(plugboard_pairs)?,
        })
    }

    /// Encodes one character.
    ///
    /// Alphabetic input (either case) steps the rotors and returns the
    /// uppercase cipher letter. Anything else is returned unchanged and
    /// leaves the machine state untouched.
    ///
    /// Deterministic given current machine state; by the reflector's
    /// symmetry, feeding the output back through a machine in the same
    /// state yields the input again.
    pub fn encode(&mut self, input: char) -> char {
        if !input.is_ascii_alphabetic() {
            return input;
        }
        let letter = input.to_ascii_uppercase();

        self.step();

        let mut index = self.plugboard.forward(letter);
        for rotor in &self.rotors {
            index = rotor.forward(index);
        }
        index = self.reflector.forward(index);
        for rotor in self.rotors.iter().rev() {
            index = rotor.reverse(index);
        }
        self.plugboard.reverse(index)
    }

    /// Encodes a whole message character by character.
    pub fn encode_str(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encode(c)).collect()
    }

    /// Advances rotor state for one keypress.
    ///
    /// The fastest rotor always rotates. A pending turnover flag carries
    /// a single step to the next slower rotor. A middle rotor sitting on
    /// its own notch letter then re-steps: the double-step anomaly.
    fn step(&mut self) {
        self.rotors[0].rotate();

        for i in 0..ROTOR_COUNT - 1 {
            if self.rotors[i].turnover() {
                self.rotors[i].clear_turnover();
                self.rotors[i + 1].rotate();
            }
        }

        if self.rotors[1].at_notch() {
            self.rotors[1].rotate();
        }
    }

    /// Restores every rotor to its constructed alignment.
    ///
    /// The plugboard and reflector are immutable across the session and
    /// are left untouched. After reset, the same plaintext encodes to the
    /// same ciphertext as after construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_m3::{Enigma, RotorId, RotorSetting};
    ///
    /// let settings = [
    ///     RotorSetting::new(RotorId::I, 1, 1),
    ///     RotorSetting::new(RotorId::II, 1, 1),
    ///     RotorSetting::new(RotorId::III, 1, 1),
    /// ];
    /// let mut machine = Enigma::new(settings, &[]).unwrap();
    /// let first = machine.encode_str("ENIGMA");
    /// machine.reset();
    /// assert_eq!(machine.encode_str("ENIGMA"), first);
    /// ```
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
    }

    /// Returns the letters visible in the rotor windows, slowest first,
    /// matching the order the settings were supplied in.
    pub fn rotor_windows(&self) -> [char; ROTOR_COUNT] {
        [
            self.rotors[2].window(),
            self.rotors[1].window(),
            self.rotors[0].window(),
        ]
    }

    /// Builds a read-only report of the current machine setup.
    ///
    /// Carries each rotor's id and current wiring sequence (slowest
    /// first), the reflector id and wiring, and the plugboard's full
    /// letter table. No side effects.
    pub fn setup_report(&self) -> SetupReport {
        SetupReport {
            rotors: [
                (self.rotors[2].id(), self.rotors[2].sequence()),
                (self.rotors[1].id(), self.rotors[1].sequence()),
                (self.rotors[0].id(), self.rotors[0].sequence()),
            ],
            reflector: (self.reflector.id(), self.reflector.id().wiring()),
            plugboard: self.plugboard.mapping(),
        }
    }
}

/// Snapshot of a machine's configuration for human inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Rotor ids with their current wiring sequences, slowest first.
    pub rotors: [(RotorId, String); ROTOR_COUNT],
    /// Reflector id and wiring.
    pub reflector: (ReflectorId, &'static str),
    /// Partner of every letter, indexed by alphabet position.
    pub plugboard: [char; LETTER_COUNT],
}

impl fmt::Display for SetupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rotor sequence:")?;
        for (id, sequence) in &self.rotors {
            writeln!(f, "{}\t{}", id, sequence)?;
        }
        writeln!(f)?;
        writeln!(f, "Reflector sequence:")?;
        writeln!(f, "{}\t{}", self.reflector.0, self.reflector.1)?;
        writeln!(f)?;
        writeln!(f, "Plugboard settings:")?;
        let mut any = false;
        for (i, &partner) in self.plugboard.iter().enumerate() {
            let letter = (b'A' + i as u8) as char;
            // Print each swapped pair once, from its lower letter.
            if partner > letter {
                if any {
                    write!(f, " ")?;
                }
                write!(f, "{}-{}", letter, partner)?;
                any = true;
            }
        }
        if !any {
            write!(f, "(none)")?;
        }
        writeln!(f)
    }
}
