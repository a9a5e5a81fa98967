//! Deck generation: builds every wire for a run and lays the cards out in engine order.

use tracing::{debug, info};

use crate::array::{assemble_pair, ArrayDrive, ArrayPair};
use crate::cards::{Card, Conductivity, Deck};
use crate::config::DeckConfig;
use crate::elements::Antenna;
use crate::errors::Result;
use crate::geometry::wire::{TagSequence, Wire};

/// Generates the complete deck for `config`.
///
/// Tags are drawn from a sequence owned by this call, so identical configurations always
/// produce identical decks.
pub fn generate(config: &DeckConfig) -> Result<Deck> {
    let mut tags = TagSequence::new(config.min_frequency_hz);

    let (main_phases, int_phases) =
        config.phase_mode.phases(config.frequency_hz, &config.main, &config.interferometer)?;
    let main_magnitudes = config.main.uniform_magnitudes();
    let int_magnitudes = config.interferometer.uniform_magnitudes();
    let arrays = assemble_pair(
        &mut tags,
        ArrayDrive { layout: &config.main, magnitudes: &main_magnitudes, phases: &main_phases },
        ArrayDrive {
            layout: &config.interferometer,
            magnitudes: &int_magnitudes,
            phases: &int_phases,
        },
        &config.element,
    )?;

    let mut fence_wires = Vec::new();
    if let Some(fence) = &config.fence {
        fence_wires.extend(fence.fence_for(&config.main).build(&mut tags)?);
        if !config.interferometer.is_empty() {
            fence_wires.extend(fence.fence_for(&config.interferometer).build(&mut tags)?);
        }
        debug!(wires = fence_wires.len(), "reflector fences built");
    }

    let deck = lay_out(config, &arrays, &fence_wires, &tags);
    info!(
        element = config.element.name(),
        main = arrays.main.len(),
        interferometer = arrays.interferometer.len(),
        wires = tags.issued(),
        cards = deck.len(),
        "deck generated"
    );
    Ok(deck)
}

/// Writes the built geometry as cards in the order the engine expects.
fn lay_out(
    config: &DeckConfig,
    arrays: &ArrayPair,
    fence_wires: &[Wire],
    tags: &TagSequence,
) -> Deck {
    let mut deck = Deck::new();

    for element in arrays.iter() {
        deck.extend(element.geometry());
    }
    deck.extend(fence_wires.iter().cloned().map(Card::Wire));
    deck.push(Card::GeometryEnd(config.ground_plane));

    let conductivity = config.wire_conductivity();
    deck.extend(
        tags.tags().map(|tag| Card::Conductivity(Conductivity::whole_wire(tag, conductivity))),
    );

    for element in arrays.iter() {
        deck.extend(element.loads());
    }
    deck.push(Card::Ground(config.ground));
    deck.push(Card::ExtendedKernel);
    deck.push(Card::MaxCoupling);

    for element in arrays.iter() {
        deck.extend(element.excitations());
        deck.extend(element.transmission_lines());
    }
    for element in arrays.iter() {
        deck.extend(element.comment_block());
    }

    deck.push(Card::Frequency(config.frequency_sweep()));
    deck.push(Card::RadiationPattern(config.pattern));
    deck.push(Card::End);
    deck
}
