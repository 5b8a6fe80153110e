//! Item variants
//!
//! Every catalog item is exactly one of a closed set of kinds. Each kind
//! carries its own payload; the `ItemType` tag names the kind without it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for the item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Book,
    Audiobook,
    EMagazine,
}

impl ItemType {
    /// All variants in display order
    pub fn all() -> &'static [ItemType] {
        &[Self::Book, Self::Audiobook, Self::EMagazine]
    }

    /// Parse an item type from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "book" | "books" => Some(Self::Book),
            "audiobook" | "audiobooks" | "audio" => Some(Self::Audiobook),
            "emagazine" | "emagazines" | "e-magazine" | "magazine" => Some(Self::EMagazine),
            _ => None,
        }
    }

    /// Match the exact persisted discriminator
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.tag() == tag)
    }

    /// The persisted discriminator string
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Audiobook => "Audiobook",
            Self::EMagazine => "EMagazine",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A printed book
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Book {
    pub page_count: u32,
}

/// A spoken-word recording
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Audiobook {
    /// Running time in hours
    pub duration: f64,
}

/// A single issue of an electronic magazine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EMagazine {
    pub issue_number: i64,
}

/// Variant-specific payload of an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemVariant {
    Book(Book),
    Audiobook(Audiobook),
    EMagazine(EMagazine),
}

impl ItemVariant {
    /// The tag for this payload
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Book(_) => ItemType::Book,
            Self::Audiobook(_) => ItemType::Audiobook,
            Self::EMagazine(_) => ItemType::EMagazine,
        }
    }

    /// Short label and value of the variant-specific field, e.g. ("Pages", "450")
    pub fn detail(&self) -> (&'static str, String) {
        match self {
            Self::Book(b) => ("Pages", b.page_count.to_string()),
            Self::Audiobook(a) => ("Duration", format!("{} hours", a.duration)),
            Self::EMagazine(m) => ("Issue", m.issue_number.to_string()),
        }
    }
}

impl From<Book> for ItemVariant {
    fn from(b: Book) -> Self {
        Self::Book(b)
    }
}

impl From<Audiobook> for ItemVariant {
    fn from(a: Audiobook) -> Self {
        Self::Audiobook(a)
    }
}

impl From<EMagazine> for ItemVariant {
    fn from(m: EMagazine) -> Self {
        Self::EMagazine(m)
    }
}

/// Something that can be played back
pub trait Playable {
    /// Start playback, returning a description of what is playing
    fn play(&self) -> String;
}

/// An audiobook item viewed through its playback capability
#[derive(Debug, Clone, Copy)]
pub struct PlayableItem<'a> {
    pub title: &'a str,
    pub audiobook: &'a Audiobook,
}

impl Playable for PlayableItem<'_> {
    fn play(&self) -> String {
        format!(
            "Playing audiobook: {} ({} hrs)",
            self.title, self.audiobook.duration
        )
    }
}
