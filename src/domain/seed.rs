//! Example notes shown when nothing has been saved yet.

use crate::domain::{Note, NoteId};

const SEED: [(i64, &str, &str); 3] = [
    (
        1,
        "Workout Plan",
        "Monday: Chest, Tuesday: Back, Wednesday: Legs",
    ),
    (
        2,
        "Books to Read",
        "Atomic Habits, Clean Code, The Pragmatic Programmer",
    ),
    (
        3,
        "Vacation Destinations",
        "Japan, Switzerland, New Zealand",
    ),
];

/// Returns the three example notes used as the initial collection.
pub fn default_notes() -> Vec<Note> {
    SEED.iter()
        .filter_map(|&(id, title, content)| Note::new(NoteId::from_millis(id), title, content).ok())
        .collect()
}
