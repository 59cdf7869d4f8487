use log::debug;
use serde::{Deserialize, Serialize};

/// Tab index the host assigns gallery images so they are keyboard-focusable
pub const IMAGE_TAB_INDEX: i32 = 0;

/// Key presses the gallery reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

/// One image in the gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    /// Host identifier for the image element
    pub id: String,

    /// Thumbnail source shown in the gallery grid
    pub thumb_src: String,

    /// Full-size source for the modal; the thumbnail is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_src: Option<String>,

    /// Alternative text, carried into the modal
    pub alt: String,
}

/// Content the host loads into the modal image slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModalContent {
    pub src: String,
    pub alt: String,
}

/// Gallery modal state.
///
/// Activating an image (click, or Enter/Space while focused) loads it into
/// the modal and opens it; Escape closes. An unknown image id leaves the
/// modal untouched.
pub struct GalleryModal {
    images: Vec<GalleryImage>,
    open: bool,
    content: Option<ModalContent>,
}

impl GalleryModal {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            open: false,
            content: None,
        }
    }

    /// Activate an image, loading it into the modal
    pub fn activate(&mut self, image_id: &str) -> Option<&ModalContent> {
        let image = match self.images.iter().find(|image| image.id == image_id) {
            Some(image) => image,
            None => {
                debug!("Gallery activation ignored for unknown image '{}'", image_id);
                return None;
            }
        };

        let src = image
            .full_src
            .clone()
            .unwrap_or_else(|| image.thumb_src.clone());
        self.content = Some(ModalContent {
            src,
            alt: image.alt.clone(),
        });
        self.open = true;

        self.content.as_ref()
    }

    /// Handle a key press on a focused gallery image.
    ///
    /// Returns whether the host should suppress the default action.
    pub fn handle_image_key(&mut self, image_id: &str, key: Key) -> bool {
        match key {
            Key::Enter | Key::Space => {
                self.activate(image_id);
                true
            }
            _ => false,
        }
    }

    /// Handle a key press while the modal has focus
    pub fn handle_modal_key(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.open {
            self.close();
            true
        } else {
            false
        }
    }

    /// Close the modal
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Whether the modal is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Content currently loaded into the modal slot
    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// The images this gallery was built from
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }
}
