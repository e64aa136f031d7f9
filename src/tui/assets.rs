//! # Artwork Table
//!
//! Terminal stand-ins for the bundled item photos. Each entry pairs a
//! small card thumbnail with a larger drawing for the detail screen,
//! plus an accent color.
//!
//! Catalog items point here through their `ImageRef`; a ref that no
//! entry answers to resolves to `None` and the image slot stays empty.

use ratatui::style::Color;

use crate::core::catalog::ImageRef;

/// Thumbnail dimensions, as drawn on the item cards.
pub const THUMB_COLS: u16 = 7;
pub const THUMB_ROWS: usize = 3;

pub struct Artwork {
    pub name: &'static str,
    pub accent: Color,
    /// Card thumbnail: exactly `THUMB_ROWS` lines of `THUMB_COLS` cells.
    pub thumb: [&'static str; THUMB_ROWS],
    /// Full drawing for the detail screen.
    pub full: &'static [&'static str],
}

/// Resolve an [`ImageRef`] against the gallery.
pub fn resolve(image: ImageRef) -> Option<&'static Artwork> {
    GALLERY.iter().find(|art| art.name == image.name())
}

static GALLERY: [Artwork; 5] = [
    Artwork {
        name: "tumbler",
        accent: Color::Green,
        thumb: [
            " .---. ",
            " |   | ",
            " '---' ",
        ],
        full: &[
            "   .---.   ",
            "  _|___|_  ",
            " |       | ",
            " |       | ",
            " |       | ",
            " |       | ",
            " '-------' ",
        ],
    },
    Artwork {
        name: "kacamata",
        accent: Color::Cyan,
        thumb: [
            "  _ _  ",
            " (o|o) ",
            "       ",
        ],
        full: &[
            "  ____    ____  ",
            " /    \\__/    \\ ",
            "|  ()  ||  ()  |",
            " \\____/  \\____/ ",
        ],
    },
    Artwork {
        name: "jam",
        accent: Color::Yellow,
        thumb: [
            " .---. ",
            " |o..| ",
            " '---' ",
        ],
        full: &[
            "    ____    ",
            "   |____|   ",
            "  .-'``'-.  ",
            " /   12   \\ ",
            "|  9  o  3 |",
            " \\    6   / ",
            "  '-....-'  ",
            "   |____|   ",
        ],
    },
    Artwork {
        name: "sepatu",
        accent: Color::Magenta,
        thumb: [
            "  ___  ",
            " /o_o\\ ",
            " '---' ",
        ],
        full: &[
            "        ____    ",
            "    ___/    \\   ",
            "   /         \\__",
            "  |   o  o      \\",
            "  |______________|",
            "  '--------------'",
        ],
    },
    Artwork {
        name: "tas",
        accent: Color::White,
        thumb: [
            "  .--. ",
            "  |##| ",
            "  '--' ",
        ],
        full: &[
            "    .--.    ",
            "   /    \\   ",
            "  |------|  ",
            "  | #### |  ",
            "  | #### |  ",
            "  | #### |  ",
            "  |______|  ",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::sample_catalog;

    #[test]
    fn every_startup_item_has_artwork() {
        for item in sample_catalog().items() {
            assert!(
                resolve(item.image).is_some(),
                "no artwork for {:?}",
                item.image.name()
            );
        }
    }

    #[test]
    fn unknown_refs_resolve_to_none() {
        assert!(resolve(ImageRef::new("krs")).is_none());
    }

    #[test]
    fn thumbs_are_exactly_thumb_sized() {
        for art in &GALLERY {
            for line in &art.thumb {
                assert_eq!(line.len(), THUMB_COLS as usize, "thumb line in {}", art.name);
            }
        }
    }

    #[test]
    fn full_drawings_are_nonempty() {
        for art in &GALLERY {
            assert!(!art.full.is_empty(), "empty drawing for {}", art.name);
        }
    }
}
