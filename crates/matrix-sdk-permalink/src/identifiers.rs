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

//! Lightweight Matrix identifiers.
//!
//! Only the sigil grammar is checked here: a leading sigil, and for the
//! server-scoped kinds a `localpart:server_name` shape. Nothing is resolved
//! against a homeserver.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdParseError;

/// The maximum length of any identifier, in bytes.
pub const MAX_BYTES: usize = 255;

const USER_ID_SIGIL: char = '@';
const ROOM_ID_SIGIL: char = '!';
const ROOM_ALIAS_SIGIL: char = '#';
const EVENT_ID_SIGIL: char = '$';
const GROUP_ID_SIGIL: char = '+';

/// Validate an identifier of the form `<sigil><localpart>:<server_name>`.
fn validate_server_scoped(s: &str, sigil: char) -> Result<(), IdParseError> {
    validate_common(s, sigil)?;

    let (localpart, server_name) =
        s[sigil.len_utf8()..].split_once(':').ok_or(IdParseError::MissingColon)?;

    if localpart.is_empty() {
        return Err(IdParseError::EmptyLocalpart);
    }
    if server_name.is_empty() {
        return Err(IdParseError::EmptyServerName);
    }

    Ok(())
}

fn validate_common(s: &str, sigil: char) -> Result<(), IdParseError> {
    if s.is_empty() {
        return Err(IdParseError::Empty);
    }
    if s.len() > MAX_BYTES {
        return Err(IdParseError::MaximumLengthExceeded);
    }
    if !s.starts_with(sigil) {
        return Err(IdParseError::MissingLeadingSigil);
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(IdParseError::InvalidCharacters);
    }

    Ok(())
}

fn validate_user_id(s: &str) -> Result<(), IdParseError> {
    validate_server_scoped(s, USER_ID_SIGIL)
}

fn validate_room_id(s: &str) -> Result<(), IdParseError> {
    validate_server_scoped(s, ROOM_ID_SIGIL)
}

fn validate_room_alias(s: &str) -> Result<(), IdParseError> {
    validate_server_scoped(s, ROOM_ALIAS_SIGIL)
}

fn validate_event_id(s: &str) -> Result<(), IdParseError> {
    validate_common(s, EVENT_ID_SIGIL)?;

    if s.len() == EVENT_ID_SIGIL.len_utf8() {
        return Err(IdParseError::Empty);
    }

    Ok(())
}

/// Whether the given string is a valid user ID, e.g. `@alice:example.org`.
pub fn is_user_id(s: &str) -> bool {
    validate_user_id(s).is_ok()
}

/// Whether the given string is a valid room ID, e.g. `!abc:example.org`.
pub fn is_room_id(s: &str) -> bool {
    validate_room_id(s).is_ok()
}

/// Whether the given string is a valid room alias, e.g. `#room:example.org`.
pub fn is_room_alias(s: &str) -> bool {
    validate_room_alias(s).is_ok()
}

/// Whether the given string is a valid event ID, e.g. `$abc` or
/// `$abc:example.org` for older room versions.
pub fn is_event_id(s: &str) -> bool {
    validate_event_id(s).is_ok()
}

/// Whether the given string is a legacy community (group) ID, e.g.
/// `+group:example.org`.
///
/// Communities have been removed from the protocol, links to them are only
/// recognized to tell the user about it.
pub fn is_group_id(s: &str) -> bool {
    validate_server_scoped(s, GROUP_ID_SIGIL).is_ok()
}

macro_rules! identifier {
    (
        $(#[$meta:meta])*
        $name:ident, $validate:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Try to parse the given string into this identifier.
            pub fn parse(id: impl Into<String>) -> Result<Self, IdParseError> {
                let id = id.into();
                $validate(id.as_str())?;
                Ok(Self(id))
            }

            /// The identifier as a string slice, including the sigil.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdParseError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! server_scoped {
    ($name:ident) => {
        impl $name {
            /// The part between the sigil and the first `:`.
            pub fn localpart(&self) -> &str {
                let (localpart, _) = self.split();
                localpart
            }

            /// The part after the first `:`.
            pub fn server_name(&self) -> &str {
                let (_, server_name) = self.split();
                server_name
            }

            fn split(&self) -> (&str, &str) {
                // Validated on construction, the colon is always there.
                self.0[1..].split_once(':').unwrap_or((&self.0[1..], ""))
            }
        }
    };
}

identifier! {
    /// A Matrix user ID, e.g. `@alice:example.org`.
    UserId, validate_user_id
}

identifier! {
    /// A Matrix room ID, e.g. `!abc123:example.org`.
    RoomId, validate_room_id
}

identifier! {
    /// A Matrix room alias, e.g. `#room:example.org`.
    RoomAliasId, validate_room_alias
}

identifier! {
    /// A Matrix event ID, e.g. `$Rqnc-F-dvnEYJTyHq_iKxU2bZ1CI92-kuZq3a5lr5Zg`.
    EventId, validate_event_id
}

server_scoped!(UserId);
server_scoped!(RoomId);
server_scoped!(RoomAliasId);
