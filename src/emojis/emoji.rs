/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! The main data struct for single emoji catalog entries.

use std::fmt::{Display, Formatter};
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A struct that holds one entry of the emoji catalog.
#[derive(Debug, Eq, Clone)]
pub struct Emoji {
    /// The raw glyph for this emoji, e.g. `"😄"`.
    ///
    /// It is guaranteed to be non-empty for every emoji that the catalog
    /// loader hands out.
    pub unicode: String,
    /// The name/description (if assigned) for the emoji
    ///
    /// This is particularly useful for error messages.
    pub description: Option<String>,
    /// Whether a Fitzpatrick skin tone modifier may be appended to the glyph.
    pub supports_fitzpatrick: bool,
    /// Shortcode names for this emoji, in catalog order (e.g. `smile`).
    pub aliases: Vec<String>,
    /// Search keywords for this emoji, in catalog order.
    pub tags: Vec<String>,
}

impl Emoji {
    /// Returns the Unicode® character codepoints of the glyph, in order.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::Emoji;
    ///
    /// let germany = Emoji::from("🇩🇪");
    ///
    /// assert_eq!(vec![0x1f1e9, 0x1f1ea], germany.codepoints());
    /// ```
    pub fn codepoints(&self) -> Vec<u32> {
        self.unicode.chars()
            .map(|codepoint| codepoint as u32)
            .collect()
    }

    /// Returns the decimal numeric character reference for the first
    /// codepoint of the glyph.
    ///
    /// It is recomputed from `unicode` on every call.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::Emoji;
    ///
    /// // Smiling face with open mouth and smiling eyes
    /// let smile = Emoji::from("😄");
    ///
    /// assert_eq!("&#128516;", smile.html_decimal());
    /// ```
    pub fn html_decimal(&self) -> String {
        self.unicode.chars().next()
            .map(|codepoint| format!("&#{};", codepoint as u32))
            .unwrap_or_default()
    }

    /// Returns the hexadecimal numeric character reference (with lowercase
    /// digits) for the first codepoint of the glyph.
    ///
    /// It is recomputed from `unicode` on every call.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::Emoji;
    ///
    /// let smile = Emoji::from("😄");
    ///
    /// assert_eq!("&#x1f604;", smile.html_hexadecimal());
    /// ```
    pub fn html_hexadecimal(&self) -> String {
        self.unicode.chars().next()
            .map(|codepoint| format!("&#x{:x};", codepoint as u32))
            .unwrap_or_default()
    }
}

impl From<String> for Emoji {
    /// Wraps a bare glyph in an `Emoji` without any metadata assigned.
    fn from(unicode: String) -> Self {
        Emoji {
            unicode,
            description: None,
            supports_fitzpatrick: false,
            aliases: vec![],
            tags: vec![],
        }
    }
}

impl From<&str> for Emoji {
    fn from(unicode: &str) -> Self {
        Emoji::from(unicode.to_string())
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.unicode
    }
}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unicode.hash(state)
    }
}

impl PartialEq<Emoji> for Emoji {
    /// Compares two emojis by their glyph; the metadata fields are
    /// descriptive, not identifying.
    fn eq(&self, other: &Emoji) -> bool {
        self.unicode == other.unicode
    }
}

impl PartialEq<str> for Emoji {
    fn eq(&self, other: &str) -> bool {
        self.unicode == other
    }
}

impl PartialEq<Emoji> for str {
    fn eq(&self, other: &Emoji) -> bool {
        other.unicode == self
    }
}

impl Display for Emoji {
    /// Tries to show the appropriate (if possible human-understandable) name
    /// for this emoji.
    /// If the description is assigned, it will output that one, otherwise
    /// the code sequence in square brackets (e.g. `[1F3F3-FE0F-200D-1F308]`).
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::Emoji;
    ///
    /// let thinking = Emoji::from("🤔");
    ///
    /// assert_eq!("[1F914]", format!("{}", thinking));
    /// ```
    ///
    /// ```
    /// use emoji_catalog::emojis::emoji::Emoji;
    ///
    /// let mut party = Emoji::from("🥳");
    /// party.description = Some(String::from("party face"));
    ///
    /// assert_eq!("party face", format!("{}", party));
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(description) = &self.description {
            write!(f, "{}", description)
        } else {
            write!(f, "[{}]", self.codepoints().iter()
                .map(|codepoint| format!("{:X}", codepoint))
                .join("-"))
        }
    }
}

/// The representation of a single catalog entry as it appears in the JSON
/// database, before any defaults are applied.
///
/// The field readers are lenient: scalars are read in their text form, and
/// a field of an unusable shape counts as absent. Deserializing a prototype
/// from an object therefore never fails.
#[derive(Deserialize, Debug, Default)]
pub struct EmojiPrototype {
    #[serde(default, deserialize_with = "lenient_text")]
    emoji: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_boolean")]
    supports_fitzpatrick: Option<bool>,
    #[serde(default, deserialize_with = "lenient_texts")]
    aliases: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_texts")]
    tags: Option<Vec<String>>,
}

impl EmojiPrototype {
    /// Builds the actual [Emoji] for this entry.
    ///
    /// Returns `None` if the entry carries no glyph (or an empty one); such
    /// entries are skipped by the catalog loader rather than reported as
    /// errors. All other fields fall back to their defaults when absent:
    /// no description, no Fitzpatrick support, no aliases, no tags.
    /// The order of the alias and tag lists is kept verbatim.
    pub fn build(self) -> Option<Emoji> {
        let unicode = match self.emoji.filter(|unicode| !unicode.is_empty()) {
            Some(unicode) => unicode,
            None => {
                debug!("Skipping a catalog entry without an emoji glyph");
                return None;
            }
        };
        Some(Emoji {
            unicode,
            description: self.description,
            supports_fitzpatrick: self.supports_fitzpatrick.unwrap_or(false),
            aliases: self.aliases.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
        })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de> {
    Ok(as_text(&Value::deserialize(deserializer)?))
}

fn lenient_texts<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where D: Deserializer<'de> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_array().map(|elements| elements.iter()
        .filter_map(as_text)
        .collect()))
}

fn lenient_boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where D: Deserializer<'de> {
    Ok(as_boolean(&Value::deserialize(deserializer)?))
}

/// Reads a scalar in its text form: strings as they are, numbers and
/// booleans as their decimal/`true`/`false` spelling. Anything else counts
/// as absent.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(boolean) => Some(boolean.to_string()),
        _ => None,
    }
}

/// Reads a scalar as a boolean: booleans as they are, numbers as
/// zero/non-zero, the string `"true"` as true and any other string as false.
fn as_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(boolean) => Some(*boolean),
        Value::Number(number) => number.as_i64().map(|number| number != 0),
        Value::String(text) => Some(text == "true"),
        _ => None,
    }
}
