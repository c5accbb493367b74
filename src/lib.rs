//! M3 Enigma cipher machine emulator.
//!
//! Emulates the 3-rotor electromechanical Enigma: each keypress advances
//! the rotor stack (including the historical double-step anomaly of the
//! middle rotor), then routes the letter through the plugboard, the rotor
//! chain, the reflector, and back. Because the reflector is a fixed-point
//! free involution, the whole transform is self-reciprocal: encoding
//! ciphertext under the same settings recovers the plaintext.
//!
//! # Architecture
//!
//! ```text
//! Plugboard  (configurable letter-pair involution)
//!     ↓ forward                          ↑ reverse
//! Rotor × 3  (stateful permutations, fastest → slowest)
//!     ↓ forward                          ↑ reverse
//! Reflector  (fixed involution — turns the signal around)
//! ```
//!
//! # Examples
//!
//! Encode a message with the default rotor order:
//!
//! ```
//! use enigma_m3::{Enigma, RotorId, RotorSetting};
//!
//! let settings = [
//!     RotorSetting::new(RotorId::I, 1, 1),
//!     RotorSetting::new(RotorId::II, 1, 1),
//!     RotorSetting::new(RotorId::III, 1, 1),
//! ];
//! let mut machine = Enigma::new(settings, &[]).unwrap();
//!
//! assert_eq!(machine.encode_str("MIKI"), "DOMQ");
//! ```
//!
//! Decode by resetting and feeding the ciphertext back in:
//!
//! ```
//! use enigma_m3::{Enigma, RotorId, RotorSetting};
//!
//! let settings = [
//!     RotorSetting::new(RotorId::II, 7, 3),
//!     RotorSetting::new(RotorId::IV, 12, 21),
//!     RotorSetting::new(RotorId::I, 2, 11),
//! ];
//! let mut machine = Enigma::new(settings, &[('B', 'Q'), ('C', 'R')]).unwrap();
//!
//! let ciphertext = machine.encode_str("TOPSECRET");
//! machine.reset();
//! assert_eq!(machine.encode_str(&ciphertext), "TOPSECRET");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use error::EnigmaError;
pub use machine::{Enigma, RotorSetting, SetupReport};
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorId};
pub use rotor::{Rotor, RotorId};
