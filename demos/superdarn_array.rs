use nec_array::config::{DeckConfig, PhaseMode};
use nec_array::errors::Result;
use nec_array::io::generate_to_file;

fn main() -> Result<()> {
    // Standard site steered to beam 12 at 12 MHz.
    let config = DeckConfig::default()
        .with_frequency(12.0e6)
        .with_phase_mode(PhaseMode::beam(12));

    let path = std::env::args().nth(1).unwrap_or_else(|| "superdarn_array_output.nec".into());
    let deck = generate_to_file(&config, &path)?;

    println!("wrote {path}: {} cards", deck.len());
    for mnemonic in ["GW", "LD", "EX", "TL"] {
        println!("{mnemonic}: {}", deck.count(mnemonic));
    }
    Ok(())
}
