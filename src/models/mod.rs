//! Core data models for LibraNet
//!
//! This module contains the data structures that represent the catalog
//! domain: items, their variants, loans and fines.

pub mod fine;
pub mod ids;
pub mod item;
pub mod loan;
pub mod variant;

pub use fine::{Fine, FINE_RATE};
pub use ids::ItemId;
pub use item::{Item, ItemValidationError};
pub use loan::{parse_loan_days, BorrowOutcome, ReturnOutcome};
pub use variant::{Audiobook, Book, EMagazine, ItemType, ItemVariant, Playable, PlayableItem};
