//! Demo notes shipped with the widget.

use crate::model::palette::Palette;
use crate::store::note_store::NoteStore;

const SEED_NOTES: &[(&str, &str)] = &[
    (
        "UI concepts",
        "worth existing and exploring further for the next update.",
    ),
    (
        "Book Review",
        "The Design of Everyday Things by Don Norman. Focus on affordances.",
    ),
    (
        "Animes",
        "produced by Ufotable. Demon Slayer, Fate/stay night UBW.",
    ),
    (
        "Mangas",
        "planned to read: Chainsaw Man, JJK, Solo Leveling.",
    ),
];

/// Builds a store preloaded with the shipped demo notes.
///
/// Seeded notes follow the normal creation-order color cycle and leave
/// selection and activation empty.
pub fn seeded_store(palette: Palette) -> NoteStore {
    let mut store = NoteStore::new(palette);
    for (title, content) in SEED_NOTES {
        store.seed_note(title, content);
    }
    store
}
