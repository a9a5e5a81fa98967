//! NEC card model and deck rendering.
//!
//! Every card is a fixed-field positional line starting with a two-letter mnemonic. Field order
//! and count are part of the engine's input contract; see [`format`] for how numbers are written.

/// Program control cards (`GN`, `RP`).
pub mod control;
/// Numeric field formatting.
pub mod format;
/// Loads, conductivity and excitation cards (`LD`, `EX`).
pub mod loading;
/// Transmission line cards (`TL`).
pub mod transmission;

use std::fmt;

use crate::geometry::wire::Wire;
use crate::sweep::FrequencySweep;

use self::format::Real;

pub use control::{Ground, RadiationPattern};
pub use loading::{Conductivity, Excitation, Load, SegmentSpan, SourceKind};
pub use transmission::{SegmentRef, TransmissionLine};

/// Line terminator expected by the engine.
pub const LINE_END: &str = "\r\n";

/// One line of a deck.
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    /// Free-text comment (`CM`).
    Comment(String),
    /// End of a comment block (`CE`).
    CommentEnd,
    /// Wire geometry (`GW`).
    Wire(Wire),
    /// End of geometry (`GE`) with its ground-plane flag.
    GeometryEnd(i32),
    /// Impedance load (`LD 4`).
    Load(Load),
    /// Conductor material (`LD 5`).
    Conductivity(Conductivity),
    /// Ground parameters (`GN`).
    Ground(Ground),
    /// Extended thin-wire kernel (`EK`).
    ExtendedKernel,
    /// Maximum coupling calculation (`CP`).
    MaxCoupling,
    /// Source (`EX`).
    Excitation(Excitation),
    /// Transmission line (`TL`).
    TransmissionLine(TransmissionLine),
    /// Frequency sweep (`FR`).
    Frequency(FrequencySweep),
    /// Radiation pattern request (`RP`).
    RadiationPattern(RadiationPattern),
    /// End of run (`EN`).
    End,
}

impl Card {
    /// Two-letter card mnemonic.
    #[must_use]
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Comment(_) => "CM",
            Self::CommentEnd => "CE",
            Self::Wire(_) => "GW",
            Self::GeometryEnd(_) => "GE",
            Self::Load(_) | Self::Conductivity(_) => "LD",
            Self::Ground(_) => "GN",
            Self::ExtendedKernel => "EK",
            Self::MaxCoupling => "CP",
            Self::Excitation(_) => "EX",
            Self::TransmissionLine(_) => "TL",
            Self::Frequency(_) => "FR",
            Self::RadiationPattern(_) => "RP",
            Self::End => "EN",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment(text) => write!(f, "CM {text}"),
            Self::CommentEnd => f.write_str("CE"),
            Self::Wire(w) => write!(
                f,
                "GW {} {} {} {} {} {} {} {} {}",
                w.tag(),
                w.segments(),
                Real(w.start.x),
                Real(w.start.y),
                Real(w.start.z),
                Real(w.end.x),
                Real(w.end.y),
                Real(w.end.z),
                Real(w.radius)
            ),
            Self::GeometryEnd(flag) => write!(f, "GE {flag}"),
            Self::Load(load) => fmt::Display::fmt(load, f),
            Self::Conductivity(c) => fmt::Display::fmt(c, f),
            Self::Ground(g) => fmt::Display::fmt(g, f),
            Self::ExtendedKernel => f.write_str("EK"),
            Self::MaxCoupling => f.write_str("CP * * * *"),
            Self::Excitation(ex) => fmt::Display::fmt(ex, f),
            Self::TransmissionLine(tl) => fmt::Display::fmt(tl, f),
            Self::Frequency(fr) => fmt::Display::fmt(fr, f),
            Self::RadiationPattern(rp) => fmt::Display::fmt(rp, f),
            Self::End => f.write_str("EN"),
        }
    }
}

impl From<Wire> for Card {
    fn from(wire: Wire) -> Self {
        Self::Wire(wire)
    }
}

impl From<Load> for Card {
    fn from(load: Load) -> Self {
        Self::Load(load)
    }
}

impl From<Excitation> for Card {
    fn from(ex: Excitation) -> Self {
        Self::Excitation(ex)
    }
}

impl From<TransmissionLine> for Card {
    fn from(tl: TransmissionLine) -> Self {
        Self::TransmissionLine(tl)
    }
}

/// Renders cards as CRLF-terminated lines.
#[must_use]
pub fn render(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.to_string());
        out.push_str(LINE_END);
    }
    out
}

/// Ordered, append-only collection of cards forming one engine input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one card.
    pub fn push(&mut self, card: impl Into<Card>) {
        self.cards.push(card.into());
    }

    /// Appends cards in order.
    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards with the given mnemonic.
    #[must_use]
    pub fn count(&self, mnemonic: &str) -> usize {
        self.cards.iter().filter(|c| c.mnemonic() == mnemonic).count()
    }

    /// Renders the deck as text. Every line ends in CRLF except a closing `EN`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for card in &self.cards {
            out.push_str(&card.to_string());
            if !matches!(card, Card::End) {
                out.push_str(LINE_END);
            }
        }
        out
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MIN_FREQUENCY_HZ;
    use crate::geometry::wire::TagSequence;
    use crate::math::R3;

    #[test]
    fn wire_card_fields() {
        let mut tags = TagSequence::new(DEFAULT_MIN_FREQUENCY_HZ);
        let wire = tags
            .wire(R3::new(-4.0, 0.0, 11.5), R3::new(4.0, 0.0, 11.5), 0.002)
            .unwrap();
        assert_eq!(Card::from(wire).to_string(), "GW 1 5 -4.0 0.0 11.5 4.0 0.0 11.5 0.002");
    }

    #[test]
    fn deck_renders_crlf_and_bare_end() {
        let mut deck = Deck::new();
        deck.push(Card::GeometryEnd(1));
        deck.push(Card::ExtendedKernel);
        deck.push(Card::MaxCoupling);
        deck.push(Card::End);
        assert_eq!(deck.render(), "GE 1\r\nEK\r\nCP * * * *\r\nEN");
        assert_eq!(deck.count("EN"), 1);
        assert_eq!(deck.len(), 4);
    }

    #[test]
    fn render_terminates_every_line() {
        let cards = [Card::Comment("Height: 10.0 m".into()), Card::CommentEnd];
        assert_eq!(render(&cards), "CM Height: 10.0 m\r\nCE\r\n");
    }
}
