//! Fingerspelling types
//!
//! Per-character annotations and the response envelopes sent to the front end.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Public URL prefix under which the alphabet images are served
pub const PUBLIC_IMAGE_PREFIX: &str = "/images/asl_alphabet";

/// Fixed image for spaces. Never existence-checked.
pub const SPACE_IMAGE_PATH: &str = "/images/asl_alphabet/space_test.jpg";

/// File name of the space image inside the asset root
pub const SPACE_IMAGE_FILE: &str = "space_test.jpg";

const IMAGE_SUFFIX: &str = "_test.jpg";

/// File name of the image for a (lower-cased) letter, e.g. `h_test.jpg`
pub fn image_file_name(letter: char) -> String {
    format!("{}{}", letter, IMAGE_SUFFIX)
}

/// Public path of the image for a (lower-cased) letter
pub fn public_image_path(letter: char) -> String {
    format!("{}/{}", PUBLIC_IMAGE_PREFIX, image_file_name(letter))
}

/// How a character can be depicted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignCategory {
    /// A space, always rendered with the fixed space image
    Space,
    /// A letter whose image exists in the asset root
    Letter,
    /// A letter with no image in the asset root
    Missing,
    /// Anything that is neither a space nor a letter
    Unsupported,
}

/// One annotation per input character
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterAnnotation {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(rename = "type")]
    pub category: SignCategory,
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
}

impl CharacterAnnotation {
    pub fn space() -> Self {
        Self {
            ch: ' ',
            category: SignCategory::Space,
            image_path: Some(SPACE_IMAGE_PATH.to_string()),
        }
    }

    pub fn letter(ch: char) -> Self {
        Self {
            ch,
            category: SignCategory::Letter,
            image_path: Some(public_image_path(ch)),
        }
    }

    pub fn missing(ch: char) -> Self {
        Self {
            ch,
            category: SignCategory::Missing,
            image_path: None,
        }
    }

    pub fn unsupported(ch: char) -> Self {
        Self {
            ch,
            category: SignCategory::Unsupported,
            image_path: None,
        }
    }
}

// Space records keep the legacy `image: null` field alongside `imagePath`.
// `imagePath` is always written, as `null` when there is no image.
impl Serialize for CharacterAnnotation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let legacy_image = self.category == SignCategory::Space;
        let len = if legacy_image { 4 } else { 3 };

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("char", &self.ch)?;
        if legacy_image {
            map.serialize_entry("image", &Option::<String>::None)?;
        }
        map.serialize_entry("type", &self.category)?;
        map.serialize_entry("imagePath", &self.image_path)?;
        map.end()
    }
}

/// Response body of the transcribe endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscribeResponse {
    pub result: Vec<CharacterAnnotation>,
}

/// Availability of a single alphabet image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabetEntry {
    pub letter: char,
    pub available: bool,
    pub image_path: Option<String>,
}

/// Response body of the alphabet endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetResponse {
    pub result: Vec<AlphabetEntry>,
}
