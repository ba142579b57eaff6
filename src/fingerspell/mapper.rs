//! Text to sign mapping
//!
//! Classifies every character of the input into a [`SignCategory`](super::SignCategory) and
//! resolves the image reference for the ones that can be depicted.

use std::path::Path;

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::types::{image_file_name, public_image_path, AlphabetEntry, CharacterAnnotation};
use crate::assets::{AssetError, AssetLookup};

/// Map text to one annotation per character.
///
/// The text is lower-cased as a whole before iterating. Each letter
/// character costs one lookup of `{char}_test.jpg` under `asset_root`,
/// issued in input order. The first failing lookup aborts the mapping.
pub fn map_text<L>(
    text: &str,
    asset_root: &Path,
    lookup: &L,
) -> Result<Vec<CharacterAnnotation>, AssetError>
where
    L: AssetLookup + ?Sized,
{
    text.to_lowercase()
        .chars()
        .map(|ch| annotate(ch, asset_root, lookup))
        .collect()
}

fn annotate<L>(ch: char, asset_root: &Path, lookup: &L) -> Result<CharacterAnnotation, AssetError>
where
    L: AssetLookup + ?Sized,
{
    if ch == ' ' {
        return Ok(CharacterAnnotation::space());
    }

    if !is_letter(ch) {
        return Ok(CharacterAnnotation::unsupported(ch));
    }

    let candidate = asset_root.join(image_file_name(ch));
    if lookup.exists(&candidate)? {
        Ok(CharacterAnnotation::letter(ch))
    } else {
        Ok(CharacterAnnotation::missing(ch))
    }
}

/// Letters are the `L*` general categories only; letter numbers, marks and
/// symbols such as circled letters are not.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[derive(Serialize)]
struct ResultEnvelope<'a> {
    result: &'a [CharacterAnnotation],
}

/// Serialize annotations as `{"result": [...]}`
pub fn to_json(annotations: &[CharacterAnnotation]) -> serde_json::Result<String> {
    serde_json::to_string(&ResultEnvelope {
        result: annotations,
    })
}

/// Availability of every image from `a` to `z`
pub fn alphabet_inventory<L>(asset_root: &Path, lookup: &L) -> Result<Vec<AlphabetEntry>, AssetError>
where
    L: AssetLookup + ?Sized,
{
    ('a'..='z')
        .map(|letter| -> Result<AlphabetEntry, AssetError> {
            let available = lookup.exists(&asset_root.join(image_file_name(letter)))?;
            Ok(AlphabetEntry {
                letter,
                available,
                image_path: available.then(|| public_image_path(letter)),
            })
        })
        .collect()
}
