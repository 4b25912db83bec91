//! Built-in sound catalog for the breakout game.

use crate::error::Result;
use crate::types::SoundCatalog;

/// Directory the game loads its sounds from, relative to the working directory.
pub const OUTPUT_DIR: &str = "audio";

/// Logical sound names and their free sound-effect URLs.
pub const SOUND_URLS: &[(&str, &str)] = &[
    (
        "background",
        "https://www.chosic.com/wp-content/uploads/2020/07/The-Epic-Hero-Power.mp3",
    ),
    ("hit", "https://www.soundjay.com/buttons/sounds/button-09.mp3"),
    ("levelup", "https://www.soundjay.com/misc/sounds/level-up-01.mp3"),
    ("gameover", "https://www.soundjay.com/misc/sounds/fail-buzzer-03.mp3"),
    ("mystery", "https://www.soundjay.com/misc/sounds/magic-chime-01.mp3"),
];

/// Returns the built-in catalog.
pub fn default_catalog() -> Result<SoundCatalog> {
    SoundCatalog::from_pairs(SOUND_URLS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), SOUND_URLS.len());
    }

    #[test]
    fn sounds_used_by_the_game_are_present() {
        let catalog = default_catalog().unwrap();
        for name in ["background", "hit", "levelup", "gameover", "mystery"] {
            assert!(catalog.get(name).is_some(), "missing sound: {}", name);
        }
    }

    #[test]
    fn order_matches_table() {
        let catalog = default_catalog().unwrap();
        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        let expected: Vec<_> = SOUND_URLS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
    }
}
