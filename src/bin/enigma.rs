//! Command-line front end for the Enigma machine.
//!
//! Build:  cargo build --release
//! Usage:  enigma --rotors I,II,III --rings 1,1,1 --positions 1,1,1 \
//!                --plugboard AT,CE,RL "MESSAGE"
//!
//! Without a message argument, plaintext is read from stdin line by line
//! and ciphertext written to stdout.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use enigma_m3::{Enigma, ReflectorId, RotorId, RotorSetting};

#[derive(Parser)]
#[command(name = "enigma", version, about = "M3 Enigma cipher machine emulator")]
struct Args {
    /// Rotor order, slowest to fastest
    #[arg(long, default_value = "I,II,III", value_delimiter = ',')]
    rotors: Vec<String>,

    /// Ring settings (1-26), slowest to fastest
    #[arg(long, default_value = "1,1,1", value_delimiter = ',')]
    rings: Vec<u8>,

    /// Starting positions (1-26), slowest to fastest
    #[arg(long, default_value = "1,1,1", value_delimiter = ',')]
    positions: Vec<u8>,

    /// Plugboard pairs, e.g. AT,CE,RL
    #[arg(long, value_delimiter = ',')]
    plugboard: Vec<String>,

    /// Reflector name (only B exists on this machine)
    #[arg(long, default_value = "B")]
    reflector: String,

    /// Print the machine setup before encoding
    #[arg(long)]
    setup: bool,

    /// Message to encode; stdin is encoded when omitted
    message: Option<String>,
}

fn build_machine(args: &Args) -> Result<Enigma, String> {
    if args.rotors.len() != 3 || args.rings.len() != 3 || args.positions.len() != 3 {
        return Err("exactly 3 rotors, 3 rings, and 3 positions are required".to_string());
    }
    args.reflector
        .parse::<ReflectorId>()
        .map_err(|e| e.to_string())?;

    let mut settings = [RotorSetting::new(RotorId::I, 1, 1); 3];
    for (slot, setting) in settings.iter_mut().enumerate() {
        let rotor: RotorId = args.rotors[slot].parse().map_err(|e: enigma_m3::EnigmaError| e.to_string())?;
        *setting = RotorSetting::new(rotor, args.rings[slot], args.positions[slot]);
    }

    let mut pairs = Vec::with_capacity(args.plugboard.len());
    for pair in &args.plugboard {
        let letters: Vec<char> = pair.chars().collect();
        if letters.len() != 2 {
            return Err(format!("plugboard pair `{}` must be exactly two letters", pair));
        }
        pairs.push((letters[0], letters[1]));
    }

    Enigma::new(settings, &pairs).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    let mut machine = match build_machine(&args) {
        Ok(machine) => machine,
        Err(message) => {
            eprintln!("enigma: {}", message);
            process::exit(1);
        }
    };

    if args.setup {
        println!("{}", machine.setup_report());
    }

    match &args.message {
        Some(message) => println!("{}", machine.encode_str(message)),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        eprintln!("enigma: {}", error);
                        process::exit(1);
                    }
                };
                if writeln!(out, "{}", machine.encode_str(&line)).is_err() {
                    break;
                }
            }
        }
    }
}
