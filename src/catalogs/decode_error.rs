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

use std::fmt::{Display, Formatter};
use std::fmt;

/// A representation of errors encountered while loading an emoji catalog.
///
/// Any of these aborts the whole load; no partial catalog is returned.
#[derive(Debug)]
pub enum DecodeError {
    /// Wrapper for [std::io::Error]: the catalog data could not be read
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]: the catalog data is not well-formed
    /// JSON
    Serde(serde_json::Error),
    /// The top-level JSON value is neither an array nor an empty object;
    /// carries a short name of what was found instead
    UnexpectedRoot(&'static str),
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Serde(err)
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(err) => err.fmt(f),
            DecodeError::Serde(err) => err.fmt(f),
            DecodeError::UnexpectedRoot(found) => write!(
                f,
                "Expected a JSON array of emojis, found {}",
                found
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            DecodeError::Serde(err) => Some(err),
            DecodeError::UnexpectedRoot(_) => None,
        }
    }
}
