//! Two-stage image fallback for listing cards.
//!
//! A card starts on its primary image. On the first load-failure signal
//! it swaps in the icon chosen by the category resolver; on a second
//! failure it settles on a neutral placeholder with an "Image
//! unavailable" message. Further failure signals are no-ops, so a
//! missing fallback asset cannot produce an error loop.

use ayumart_core::icon::resolve_icon;

/// Message shown alongside the placeholder glyph.
pub const UNAVAILABLE_MESSAGE: &str = "Image unavailable";

/// Neutral glyph rendered when both image stages have failed.
pub const PLACEHOLDER_GLYPH: &str = "□";

/// Which image the card is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStage {
    /// The record's own image.
    Primary,
    /// The resolver-chosen fallback icon.
    Fallback,
    /// Both stages failed; placeholder glyph and message.
    Unavailable,
}

/// Image state of one rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    src: String,
    /// Name handed to the category resolver on the first failure.
    fallback_name: String,
    stage: ImageStage,
}

impl ImageSlot {
    /// Start a slot on its primary image source.
    ///
    /// `fallback_name` is the category name the resolver will classify
    /// if the primary image fails to load.
    pub fn new(src: impl Into<String>, fallback_name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback_name: fallback_name.into(),
            stage: ImageStage::Primary,
        }
    }

    pub fn stage(&self) -> ImageStage {
        self.stage
    }

    /// Image source to render, `None` once unavailable.
    pub fn src(&self) -> Option<&str> {
        match self.stage {
            ImageStage::Unavailable => None,
            _ => Some(&self.src),
        }
    }

    /// Message to render instead of an image, once unavailable.
    pub fn message(&self) -> Option<&'static str> {
        match self.stage {
            ImageStage::Unavailable => Some(UNAVAILABLE_MESSAGE),
            _ => None,
        }
    }

    /// React to an image-load failure signal from the renderer.
    ///
    /// Primary → resolver fallback → unavailable; once unavailable,
    /// further signals change nothing.
    pub fn on_load_error(&mut self) {
        match self.stage {
            ImageStage::Primary => {
                self.src = resolve_icon(&self.fallback_name).to_string();
                self.stage = ImageStage::Fallback;
            }
            ImageStage::Fallback => {
                self.src.clear();
                self.stage = ImageStage::Unavailable;
            }
            ImageStage::Unavailable => {}
        }
    }
}
