//! Writing finished decks.
//!
//! A deck is always rendered in full before the first byte goes out, so a failed generation
//! never leaves a truncated file behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::cards::Deck;
use crate::config::DeckConfig;
use crate::errors::Result;
use crate::generator::generate;

/// Writes the rendered deck to `writer`.
pub fn write_deck<W: Write>(mut writer: W, deck: &Deck) -> Result<()> {
    writer.write_all(deck.render().as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Writes `deck` to `path`, replacing any existing file.
///
/// The text goes to a uniquely named temporary file in the target directory, which is renamed
/// over `path` once complete. The temporary file is removed if anything fails.
pub fn persist_deck(path: impl AsRef<Path>, deck: &Deck) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let text = deck.render();
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|err| err.error)?;
    info!(path = %path.display(), cards = deck.len(), bytes = text.len(), "deck written");
    Ok(())
}

/// Generates the deck for `config` and persists it to `path`.
pub fn generate_to_file(config: &DeckConfig, path: impl AsRef<Path>) -> Result<Deck> {
    let deck = generate(config)?;
    persist_deck(path, &deck)?;
    Ok(deck)
}
