//! Host-document-facing behavior, decoupled from any real document tree.
//!
//! Each controller consumes plain data the host extracts from its document
//! (section geometry, image lists, scroll offsets, key presses) and returns
//! the presentation state to apply. A binding the host cannot supply simply
//! leaves that feature inoperative.
//!
//! The host routes a global Escape press to both
//! [`GalleryModal::handle_modal_key`] and
//! [`crate::schedule::BadgeController::dismiss`].

pub mod gallery;
pub mod nav;
pub mod reveal;

pub use gallery::{GalleryImage, GalleryModal, Key, ModalContent, IMAGE_TAB_INDEX};
pub use nav::{NavTracker, NavUpdate, SectionGeometry};
pub use reveal::{ObserverOptions, RevealController, RevealKind, RevealStyle};
