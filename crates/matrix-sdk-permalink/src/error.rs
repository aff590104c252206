// Copyright 2024 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Error type describing why a string isn't a valid Matrix identifier.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    /// The identifier is empty, or only consists of its sigil.
    #[error("identifier is empty")]
    Empty,

    /// The identifier is longer than 255 bytes.
    #[error("identifier exceeds the maximum length of 255 bytes")]
    MaximumLengthExceeded,

    /// The identifier doesn't start with the sigil of its kind.
    #[error("leading sigil is incorrect or missing")]
    MissingLeadingSigil,

    /// No `:` separates the localpart from the server name.
    #[error("colon is required between localpart and server name")]
    MissingColon,

    /// Nothing between the sigil and the `:`.
    #[error("localpart is empty")]
    EmptyLocalpart,

    /// Nothing after the `:`.
    #[error("server name is empty")]
    EmptyServerName,

    /// The identifier contains whitespace or control characters.
    #[error("identifier contains invalid characters")]
    InvalidCharacters,
}

/// Error type for loading a [`PermalinkConfig`](crate::PermalinkConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration isn't valid JSON, or doesn't have the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A field has a value that can't be used.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// The name of the offending field.
        field: &'static str,
        /// Why the value was refused.
        reason: &'static str,
    },
}
