//! Lesson drafts as submitted by the editor before they are persisted

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Text,
    Video,
    Audio,
    Pdf,
    Quiz,
    File,
    Embed,
}

impl LessonType {
    /// Types whose payload lives in the media library rather than in `content`
    pub fn requires_media(self) -> bool {
        matches!(self, Self::Audio | Self::Video | Self::Pdf | Self::File)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
            Self::Quiz => "quiz",
            Self::File => "file",
            Self::Embed => "embed",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference into the media library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    #[serde(default)]
    pub media_id: Option<String>,
}

impl MediaRef {
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: Some(media_id.into()),
        }
    }
}

/// The parts of a lesson that are checked before saving
///
/// `content` is whatever structured document the editor produced: a rich-text
/// document for text lessons, `{ "value": url }` for embeds, a quiz for quiz
/// lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDraft {
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub media: Option<MediaRef>,
}

impl LessonDraft {
    pub fn new(lesson_type: LessonType) -> Self {
        Self {
            lesson_type,
            content: None,
            media: None,
        }
    }

    pub fn with_content(mut self, content: serde_json::Value) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_media(mut self, media: MediaRef) -> Self {
        self.media = Some(media);
        self
    }

    /// Media id if present and not blank
    pub fn media_id(&self) -> Option<&str> {
        self.media
            .as_ref()
            .and_then(|media| media.media_id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }
}
