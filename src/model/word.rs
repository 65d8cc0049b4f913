use serde::Serialize;
use tracing::trace;

use crate::model::ResourceId;

/// A vocabulary word the user wants to learn.
///
/// Pairs the word in a language the user already knows (such as English)
/// with its Miwok translation, an optional image and the audio clip of the
/// Miwok pronunciation. Entries never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    default_translation: String,
    local_translation: String,
    image_resource_id: Option<ResourceId>,
    audio_resource_id: Option<ResourceId>,
}

impl Word {
    /// Creates a word without an image.
    pub fn new(
        default_translation: impl Into<String>,
        local_translation: impl Into<String>,
        audio_resource_id: ResourceId,
    ) -> Self {
        Self::from_parts(default_translation, local_translation, None, audio_resource_id)
    }

    /// Creates a word with both an image and an audio clip.
    pub fn with_image(
        default_translation: impl Into<String>,
        local_translation: impl Into<String>,
        image_resource_id: ResourceId,
        audio_resource_id: ResourceId,
    ) -> Self {
        Self::from_parts(
            default_translation,
            local_translation,
            Some(image_resource_id),
            audio_resource_id,
        )
    }

    /// Creates a word with an optional image; `new` and `with_image` both delegate here.
    pub fn from_parts(
        default_translation: impl Into<String>,
        local_translation: impl Into<String>,
        image_resource_id: Option<ResourceId>,
        audio_resource_id: ResourceId,
    ) -> Self {
        let word = Self {
            default_translation: default_translation.into(),
            local_translation: local_translation.into(),
            image_resource_id,
            audio_resource_id: Some(audio_resource_id),
        };
        trace!(
            default_translation = %word.default_translation,
            local_translation = %word.local_translation,
            image_resource_id = ?word.image_resource_id,
            audio_resource_id = %audio_resource_id,
            "created word"
        );
        word
    }

    pub fn default_translation(&self) -> &str {
        &self.default_translation
    }

    /// The Miwok translation.
    pub fn local_translation(&self) -> &str {
        &self.local_translation
    }

    pub fn image_resource_id(&self) -> Option<ResourceId> {
        self.image_resource_id
    }

    pub fn audio_resource_id(&self) -> Option<ResourceId> {
        self.audio_resource_id
    }

    pub fn has_image(&self) -> bool {
        self.image_resource_id.is_some()
    }

    pub fn has_audio(&self) -> bool {
        self.audio_resource_id.is_some()
    }
}
