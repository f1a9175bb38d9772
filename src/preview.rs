//! Inline image preview.
//!
//! When an image is selected, its bytes are rendered as a data URL into a
//! preview card. The card is created on first use and reused for subsequent
//! selections; each preview component owns its own card, so two image inputs
//! on one page cannot fight over a shared element.

use crate::upload::FileMetadata;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// The rendered preview card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewCard {
    /// `data:<mime>;base64,...` source for the card's image
    pub data_url: String,
}

/// Preview state for one image-accepting file input.
#[derive(Debug, Default)]
pub struct ImagePreview {
    card: Option<PreviewCard>,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file was selected: if it is an image, encode its bytes into the
    /// card, creating the card on first use. Non-images are ignored.
    /// Returns true when the card was updated.
    pub fn select(&mut self, file: &FileMetadata, bytes: &[u8]) -> bool {
        if !file.is_image() {
            return false;
        }
        let data_url = format!("data:{};base64,{}", file.mime, STANDARD.encode(bytes));
        match &mut self.card {
            Some(card) => card.data_url = data_url,
            None => self.card = Some(PreviewCard { data_url }),
        }
        true
    }

    pub fn card(&self) -> Option<&PreviewCard> {
        self.card.as_ref()
    }
}
