//! Frozen-snapshot regression tests for the cipher engine.
//!
//! All expected ciphertexts are pinned fixtures: any change in output
//! indicates a behavioral regression in rotor mechanics, stepping, or
//! the plugboard/reflector passes.
//!
//! Coverage:
//! - default settings, short and long plaintext
//! - ring settings, starting positions, and both combined
//! - plugboard pairs
//! - mixed-case and non-alphabetic input
//! - setup introspection (wiring sequences and window letters)

use enigma_m3::{Enigma, RotorId, RotorSetting};

fn machine(settings: [(RotorId, u8, u8); 3], pairs: &[(char, char)]) -> Enigma {
    let [slow, middle, fast] = settings;
    Enigma::new(
        [
            RotorSetting::new(slow.0, slow.1, slow.2),
            RotorSetting::new(middle.0, middle.1, middle.2),
            RotorSetting::new(fast.0, fast.1, fast.2),
        ],
        pairs,
    )
    .unwrap()
}

fn identity() -> Enigma {
    machine(
        [(RotorId::I, 1, 1), (RotorId::II, 1, 1), (RotorId::III, 1, 1)],
        &[],
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Default settings — frozen ciphertexts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn default_settings_miki() {
    assert_eq!(identity().encode_str("MIKI"), "DOMQ");
}

/// The all-A probe matches the historical machine with rotors I-II-III,
/// rings at 1 and windows at AAA.
#[test]
fn default_settings_aaaaa() {
    assert_eq!(identity().encode_str("AAAAA"), "BDZGO");
}

#[test]
fn default_settings_pangram() {
    assert_eq!(
        identity().encode_str("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"),
        "OPCILLAZFXLQTDNLGGLEKDIZOKQKGXIEZKD"
    );
}

/// 120 characters crosses the fast rotor's turnover four times and the
/// middle rotor's notch once, exercising carry and double-step inside a
/// single frozen snapshot.
#[test]
fn default_settings_long_run() {
    let expected = concat!(
        "BDZGOWCXLTKSBTMCDLPBMUQOFXYHCXTGYJFLINHN",
        "XSHIUNTHEORXPQPKOVHCBUBTZSZSOOSTGOTFSODB",
        "BZZLXLCYZXIFGWFDZEEBIBMGFJBWZFCKPFMGBXQC"
    );
    assert_eq!(identity().encode_str(&"A".repeat(120)), expected);
}

#[test]
fn repeated_fresh_constructions_are_deterministic() {
    let first = identity().encode_str("MIKI");
    let second = identity().encode_str("MIKI");
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Ring settings, positions, plugboard — frozen ciphertexts
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn plugboard_pairs() {
    let mut machine = machine(
        [(RotorId::I, 1, 1), (RotorId::II, 1, 1), (RotorId::III, 1, 1)],
        &[('A', 'T'), ('C', 'E'), ('R', 'L')],
    );
    assert_eq!(machine.encode_str("PLUGBOARDSETTINGS"), "REFTSKHGLOWSBQOHU");
}

#[test]
fn ring_settings_with_plugboard() {
    let mut machine = machine(
        [(RotorId::IV, 3, 1), (RotorId::V, 9, 1), (RotorId::II, 4, 1)],
        &[('G', 'I'), ('L', 'M'), ('R', 'K')],
    );
    assert_eq!(machine.encode_str("WEATHERREPORTBISCAY"), "JJRSDYMJISDWRJACFSK");
}

#[test]
fn starting_positions() {
    let mut machine = machine(
        [(RotorId::I, 1, 17), (RotorId::II, 1, 5), (RotorId::III, 1, 22)],
        &[],
    );
    assert_eq!(
        machine.encode_str("GENERALSTABSNACHRICHT"),
        "CJEHVFVHMPNIJKWUJGWWY"
    );
}

#[test]
fn rings_positions_and_plugboard_combined() {
    let mut machine = machine(
        [(RotorId::II, 7, 3), (RotorId::IV, 12, 21), (RotorId::I, 2, 11)],
        &[
            ('B', 'Q'),
            ('C', 'R'),
            ('D', 'I'),
            ('E', 'J'),
            ('K', 'W'),
            ('M', 'T'),
            ('O', 'S'),
            ('P', 'X'),
            ('U', 'Z'),
            ('G', 'H'),
        ],
    );
    let ciphertext = machine.encode_str("OBERKOMMANDODERWEHRMACHT");
    assert_eq!(ciphertext, "GHKWNQRVMIVWNIPAWJLIGVVM");

    machine.reset();
    assert_eq!(machine.encode_str(&ciphertext), "OBERKOMMANDODERWEHRMACHT");
}

// ═══════════════════════════════════════════════════════════════════════
// Input normalization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn mixed_case_and_punctuation() {
    let mut machine = identity();
    assert_eq!(machine.encode_str("Attack at Dawn! 04:30."), "BZHGNO CR RTCM! 04:30.");
}

#[test]
fn lowercase_equals_uppercase() {
    let upper = identity().encode_str("OBERKOMMANDO");
    let lower = identity().encode_str("oberkommando");
    assert_eq!(upper, lower);
}

// ═══════════════════════════════════════════════════════════════════════
// Setup introspection — frozen wiring sequences
// ═══════════════════════════════════════════════════════════════════════

/// Wiring sequences and window letters after construction with mixed
/// dial settings, as reported by the read-only setup report.
#[test]
fn setup_report_sequences() {
    let machine = machine(
        [(RotorId::I, 2, 1), (RotorId::II, 1, 14), (RotorId::III, 5, 9)],
        &[('A', 'B')],
    );
    assert_eq!(machine.rotor_windows(), ['B', 'N', 'M']);

    let report = machine.setup_report();
    assert_eq!(report.rotors[0].0, RotorId::I);
    assert_eq!(report.rotors[0].1, "KMFLGDQVZNTOWYHXUSPAIBRCJE");
    assert_eq!(report.rotors[1].0, RotorId::II);
    assert_eq!(report.rotors[1].1, "TMCQGZNPYFVOEAJDKSIRUXBLHW");
    assert_eq!(report.rotors[2].0, RotorId::III);
    assert_eq!(report.rotors[2].1, "ZNYEIWGAKMUSQOBDFHJLCPRTXV");
    assert_eq!(report.reflector.1, "YRUHQSLDPXNGOKMIEBFZCWVJAT");
    assert_eq!(report.plugboard[0], 'B');
    assert_eq!(report.plugboard[1], 'A');
    assert_eq!(report.plugboard[2], 'C');
}

/// The report is read-only: producing it must not disturb encoding.
#[test]
fn setup_report_has_no_side_effects() {
    let mut with_report = identity();
    let _ = with_report.setup_report();
    let _ = with_report.setup_report();
    let mut without = identity();
    assert_eq!(with_report.encode_str("MIKI"), without.encode_str("MIKI"));
}
