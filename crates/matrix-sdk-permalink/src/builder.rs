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

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;

use crate::{
    config::PermalinkConfig,
    identifiers::{EventId, RoomAliasId, RoomId, UserId},
};

/// Same set as Ruma's path encoding, plus `%` so that decoding gives back the
/// exact identifier.
const SEGMENT_PERCENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Builds canonical `matrix.to` permalinks.
///
/// ```
/// # use matrix_sdk_permalink::{PermalinkBuilder, RoomAliasId};
/// let alias = RoomAliasId::parse("#room:example.org")?;
///
/// assert_eq!(
///     PermalinkBuilder::default().for_room_alias(&alias),
///     "https://matrix.to/#/%23room:example.org"
/// );
/// # Ok::<(), matrix_sdk_permalink::IdParseError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PermalinkBuilder {
    config: PermalinkConfig,
}

impl PermalinkBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: PermalinkConfig) -> Self {
        Self { config }
    }

    /// A permalink to the given user.
    pub fn for_user(&self, user_id: &UserId) -> String {
        self.build(&[user_id.as_str()], &[])
    }

    /// A permalink to the given room, by ID.
    ///
    /// Room IDs can't be resolved without knowing a server that is in the
    /// room, `via` should contain at least one.
    pub fn for_room_id(&self, room_id: &RoomId, via: &[String]) -> String {
        self.build(&[room_id.as_str()], via)
    }

    /// A permalink to the given room, by alias.
    pub fn for_room_alias(&self, room_alias: &RoomAliasId) -> String {
        self.build(&[room_alias.as_str()], &[])
    }

    /// A permalink to an event in the given room.
    pub fn for_event(&self, room_id: &RoomId, event_id: &EventId, via: &[String]) -> String {
        self.build(&[room_id.as_str(), event_id.as_str()], via)
    }

    fn build(&self, segments: &[&str], via: &[String]) -> String {
        let mut permalink = self.config.matrix_to_base_url();

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                permalink.push('/');
            }
            permalink.extend(utf8_percent_encode(segment, SEGMENT_PERCENT_ENCODE_SET));
        }

        if !via.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(via.iter().map(|server| ("via", server)))
                .finish();
            permalink.push('?');
            permalink.push_str(&query);
        }

        permalink
    }
}
