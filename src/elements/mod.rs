//! Antenna elements built from wires.
//!
//! The element set is closed: [`Element`] holds one of the three supported designs and forwards
//! the [`Antenna`] operations to it. Every design renders all five card groups; loads and
//! transmission lines default to none.

/// Sabre-610 style log-periodic dipole array.
pub mod log_periodic;
/// Twin-terminated folded dipole.
pub mod ttfd;
/// Cushcraft A50-6S style Yagi.
pub mod yagi;

use crate::cards::Card;
use crate::errors::Result;
use crate::geometry::wire::{TagSequence, Wire};
use crate::math::{CScalar, R3};

pub use log_periodic::{LogPeriodic, LogPeriodicParams};
pub use ttfd::{Ttfd, TtfdParams};
pub use yagi::{Yagi, YagiParams};

/// Where an element sits and how hard it is driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Global offset added to every wire, meters.
    pub offset: R3,
    /// Complex feed current in amperes.
    pub current: CScalar,
}

impl Placement {
    /// Element at `offset` fed with `current`.
    #[must_use]
    pub fn new(offset: R3, current: CScalar) -> Self {
        Self { offset, current }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(R3::zeros(), CScalar::new(1.0, 0.0))
    }
}

/// Card groups every antenna element contributes to a deck.
pub trait Antenna {
    /// Wires owned by the element, in construction order.
    fn wires(&self) -> Vec<&Wire>;

    /// `GW` cards for the element.
    fn geometry(&self) -> Vec<Card>;

    /// `LD 4` cards for the element.
    fn loads(&self) -> Vec<Card> {
        Vec::new()
    }

    /// `EX` cards for the element.
    fn excitations(&self) -> Vec<Card>;

    /// `TL` cards for the element.
    fn transmission_lines(&self) -> Vec<Card> {
        Vec::new()
    }

    /// `CM`/`CE` block describing the element.
    fn comment_block(&self) -> Vec<Card>;
}

/// Element design and its dimensions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Twin-terminated folded dipole.
    Ttfd(TtfdParams),
    /// Log-periodic dipole array.
    LogPeriodic(LogPeriodicParams),
    /// Yagi.
    Yagi(YagiParams),
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Ttfd(TtfdParams::default())
    }
}

impl ElementKind {
    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ttfd(_) => "TTFD",
            Self::LogPeriodic(_) => "log-periodic",
            Self::Yagi(_) => "Yagi",
        }
    }

    /// Builds one element of this kind.
    pub fn build(&self, tags: &mut TagSequence, placement: Placement) -> Result<Element> {
        Ok(match self {
            Self::Ttfd(params) => Element::Ttfd(Ttfd::new(tags, params, placement)?),
            Self::LogPeriodic(params) => {
                Element::LogPeriodic(LogPeriodic::new(tags, params, placement)?)
            }
            Self::Yagi(params) => Element::Yagi(Yagi::new(tags, params, placement)?),
        })
    }
}

/// One built antenna element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Twin-terminated folded dipole.
    Ttfd(Ttfd),
    /// Log-periodic dipole array.
    LogPeriodic(LogPeriodic),
    /// Yagi.
    Yagi(Yagi),
}

impl Element {
    fn inner(&self) -> &dyn Antenna {
        match self {
            Self::Ttfd(e) => e,
            Self::LogPeriodic(e) => e,
            Self::Yagi(e) => e,
        }
    }
}

impl Antenna for Element {
    fn wires(&self) -> Vec<&Wire> {
        self.inner().wires()
    }

    fn geometry(&self) -> Vec<Card> {
        self.inner().geometry()
    }

    fn loads(&self) -> Vec<Card> {
        self.inner().loads()
    }

    fn excitations(&self) -> Vec<Card> {
        self.inner().excitations()
    }

    fn transmission_lines(&self) -> Vec<Card> {
        self.inner().transmission_lines()
    }

    fn comment_block(&self) -> Vec<Card> {
        self.inner().comment_block()
    }
}

/// Builds `CM` lines followed by the closing `CE`.
pub(crate) fn comment_block<I>(lines: I) -> Vec<Card>
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().map(Card::Comment).chain(std::iter::once(Card::CommentEnd)).collect()
}

/// `GW` cards for a list of wires.
pub(crate) fn wire_cards<'a, I>(wires: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a Wire>,
{
    wires.into_iter().cloned().map(Card::Wire).collect()
}
