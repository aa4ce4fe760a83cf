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
//! Loading the emoji catalog from its JSON database.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::catalogs::decode_error::DecodeError;
use crate::emojis::emoji::{Emoji, EmojiPrototype};

/// Loads a catalog of emojis from a reader over a JSON array and returns
/// them in document order.
///
/// Entries that carry no emoji glyph are skipped; they neither show up in
/// the result nor abort the load. An empty JSON object is tolerated as a
/// degenerate catalog and loads zero emojis. Any other non-array root, and
/// any malformed JSON, aborts the load with a [DecodeError].
pub fn load_catalog<R>(reader: R) -> Result<Vec<Emoji>, DecodeError>
    where R: Read {
    let catalog: Value = serde_json::from_reader(reader)?;
    let entries = match catalog {
        Value::Array(entries) => entries,
        Value::Object(entries) if entries.is_empty() => {
            warn!("The catalog is an empty object; loading zero emojis");
            vec![]
        }
        other => return Err(DecodeError::UnexpectedRoot(json_kind(&other))),
    };

    let mut emojis = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(emoji) = build_emoji(entry) {
            emojis.push(emoji);
        }
    }
    Ok(emojis)
}

/// Loads a catalog from a JSON file, like the database file the emoji
/// lookup ships with.
pub fn load_catalog_file<P>(path: P) -> Result<Vec<Emoji>, DecodeError>
    where P: AsRef<Path> {
    let reader = BufReader::new(File::open(path)?);
    load_catalog(reader)
}

/// Builds zero or one [Emoji] from a single catalog element.
///
/// Elements that are not objects and entries without a usable glyph yield
/// `None`. The field readers are lenient: scalars are read in their text
/// form and a field of an unusable shape counts as absent, so a single odd
/// entry never aborts a load.
pub fn build_emoji(entry: Value) -> Option<Emoji> {
    if !entry.is_object() {
        debug!("Skipping {}, a catalog entry that is not an object", entry);
        return None;
    }
    // The lenient field readers accept any object shape, so this cannot fail
    let prototype: EmojiPrototype = serde_json::from_value(entry)
        .unwrap_or_default();
    prototype.build()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
