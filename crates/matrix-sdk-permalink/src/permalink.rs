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

//! Parsing of permalinks into [`PermalinkData`].

use std::fmt;

use percent_encoding::percent_decode_str;
use tracing::{debug, trace, warn};
use url::{form_urlencoded, Url};

use crate::{
    config::PermalinkConfig,
    identifiers::{is_group_id, EventId, RoomAliasId, RoomId, UserId},
    matrix_to::MatrixToConverter,
};

/// What a permalink points to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermalinkData {
    /// A link to a user.
    UserLink {
        /// The user the link points to.
        user_id: UserId,
    },

    /// A link to a room, by ID.
    RoomIdLink {
        /// The room the link points to.
        room_id: RoomId,
        /// Servers that can be used to join the room, in the order they
        /// appear in the link.
        via_parameters: Vec<String>,
    },

    /// A link to a room, by alias.
    RoomAliasLink {
        /// The alias of the room the link points to.
        room_alias: RoomAliasId,
        /// Servers that can be used to join the room, in the order they
        /// appear in the link.
        via_parameters: Vec<String>,
    },

    /// A link to an event in a room identified by its ID.
    EventIdLink {
        /// The room the event belongs to.
        room_id: RoomId,
        /// The event the link points to.
        event_id: EventId,
        /// Servers that can be used to join the room, in the order they
        /// appear in the link.
        via_parameters: Vec<String>,
    },

    /// A link to an event in a room identified by its alias.
    EventIdAliasLink {
        /// The alias of the room the event belongs to.
        room_alias: RoomAliasId,
        /// The event the link points to.
        event_id: EventId,
        /// Servers that can be used to join the room, in the order they
        /// appear in the link.
        via_parameters: Vec<String>,
    },

    /// An invite to a room that was sent to an email address through an
    /// identity server.
    RoomEmailInviteLink(RoomEmailInviteData),

    /// A link that isn't a permalink, or that is malformed.
    FallbackLink {
        /// The link, exactly as it was given to the parser.
        url: String,
        /// Whether the link points to a community (`+group:server`).
        /// Communities don't exist anymore, so clients may want to tell the
        /// user rather than open the link.
        is_legacy_group_link: bool,
    },
}

impl PermalinkData {
    /// Whether the link wasn't recognized as a permalink.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackLink { .. })
    }

    /// The ID of the room the link points to, if it contains one.
    pub fn room_id(&self) -> Option<&RoomId> {
        match self {
            Self::RoomIdLink { room_id, .. } | Self::EventIdLink { room_id, .. } => Some(room_id),
            Self::RoomEmailInviteLink(data) => Some(&data.room_id),
            Self::UserLink { .. }
            | Self::RoomAliasLink { .. }
            | Self::EventIdAliasLink { .. }
            | Self::FallbackLink { .. } => None,
        }
    }

    /// The ID of the event the link points to, if any.
    pub fn event_id(&self) -> Option<&EventId> {
        match self {
            Self::EventIdLink { event_id, .. } | Self::EventIdAliasLink { event_id, .. } => {
                Some(event_id)
            }
            Self::UserLink { .. }
            | Self::RoomIdLink { .. }
            | Self::RoomAliasLink { .. }
            | Self::RoomEmailInviteLink(_)
            | Self::FallbackLink { .. } => None,
        }
    }

    /// The `via` servers of the link, empty if the link doesn't point to a
    /// room.
    pub fn via_parameters(&self) -> &[String] {
        match self {
            Self::RoomIdLink { via_parameters, .. }
            | Self::RoomAliasLink { via_parameters, .. }
            | Self::EventIdLink { via_parameters, .. }
            | Self::EventIdAliasLink { via_parameters, .. } => via_parameters,
            Self::UserLink { .. } | Self::RoomEmailInviteLink(_) | Self::FallbackLink { .. } => {
                &[]
            }
        }
    }
}

/// The content of a room invite sent to an email address.
///
/// Optional values that are missing from the link are empty strings.
#[derive(Clone, PartialEq, Eq)]
pub struct RoomEmailInviteData {
    /// The room the invite is for.
    pub room_id: RoomId,
    /// The email address that was invited.
    pub email: String,
    /// The identity server URL that signs the invite, it embeds the token and
    /// the private key.
    pub sign_url: String,
    /// The name of the room at the time of the invite.
    pub room_name: String,
    /// The avatar of the room at the time of the invite.
    pub room_avatar_url: String,
    /// The display name of the user who sent the invite.
    pub inviter_name: String,
    /// The host, and port if any, of the identity server.
    pub identity_server: String,
    /// The token of the invite.
    pub token: String,
    /// The ephemeral private key used to sign the invite.
    pub private_key: String,
    /// The type of the room, e.g. `m.space`.
    pub room_type: String,
}

impl fmt::Debug for RoomEmailInviteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomEmailInviteData")
            .field("room_id", &self.room_id)
            .field("email", &self.email)
            .field("room_name", &self.room_name)
            .field("room_avatar_url", &self.room_avatar_url)
            .field("inviter_name", &self.inviter_name)
            .field("identity_server", &self.identity_server)
            .field("room_type", &self.room_type)
            .finish_non_exhaustive()
    }
}

/// The kind of identifier a web client route announces, e.g. `#/room/…`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RouteKind {
    User,
    Room,
    /// Groups were replaced by spaces, these links can't be opened anymore.
    Group,
}

/// The query part of a permalink, which lives inside the fragment.
struct FragmentQuery {
    pairs: Vec<(String, String)>,
}

impl FragmentQuery {
    fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|query| form_urlencoded::parse(query.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    /// The first value of the given parameter.
    fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// The first value of the given parameter, if it isn't empty.
    fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// All the values of the given parameter, in order.
    fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v.clone()).collect()
    }
}

/// Parses permalinks into [`PermalinkData`].
///
/// The parser never fails: anything it doesn't understand becomes a
/// [`PermalinkData::FallbackLink`] holding the original string.
#[derive(Clone, Debug, Default)]
pub struct PermalinkParser {
    config: PermalinkConfig,
    converter: MatrixToConverter,
}

impl PermalinkParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: PermalinkConfig) -> Self {
        let converter = MatrixToConverter::new(config.clone());
        Self { config, converter }
    }

    /// The configuration of this parser.
    pub fn config(&self) -> &PermalinkConfig {
        &self.config
    }

    /// Parse the given link.
    ///
    /// Legacy links are first converted with the [`MatrixToConverter`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_sdk_permalink::{PermalinkData, PermalinkParser};
    /// let parser = PermalinkParser::default();
    ///
    /// let data = parser.parse("https://matrix.to/#/!abc:example.org/$event?via=example.org");
    /// assert_eq!(data.room_id().unwrap(), "!abc:example.org");
    /// assert_eq!(data.event_id().unwrap(), "$event");
    /// assert_eq!(data.via_parameters(), ["example.org"]);
    ///
    /// assert!(parser.parse("https://element.io/").is_fallback());
    /// ```
    pub fn parse(&self, url: &str) -> PermalinkData {
        if Url::parse(url).is_err() {
            trace!("Not a URL");
            return fallback(url, false);
        }

        let converted = self.converter.convert(url);
        let Ok(matrix_to_url) = Url::parse(&converted) else {
            return fallback(url, false);
        };

        if !self.converter.is_canonical(&matrix_to_url) {
            trace!("Not a permalink");
            return fallback(url, false);
        }

        // The fragment is kept percent-encoded by `Url`, which matters for query
        // values that are URLs themselves, like `signurl`.
        let fragment = matrix_to_url.fragment().unwrap_or_default();
        let fragment = fragment.strip_prefix('/').unwrap_or(fragment);
        let (path, query) = match fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (fragment, None),
        };

        let Some(segments) = decode_segments(path) else {
            debug!("The permalink path is not valid UTF-8");
            return fallback(url, false);
        };

        self.parse_segments(url, &segments, &FragmentQuery::parse(query))
    }

    fn parse_segments(
        &self,
        url: &str,
        segments: &[String],
        query: &FragmentQuery,
    ) -> PermalinkData {
        let (route, segments) = match segments.split_first() {
            Some((first, rest)) if first == "user" => (Some(RouteKind::User), rest),
            Some((first, rest)) if first == "room" => (Some(RouteKind::Room), rest),
            Some((first, rest)) if first == "group" => (Some(RouteKind::Group), rest),
            _ => (None, segments),
        };

        let Some((identifier, rest)) = segments.split_first() else {
            trace!("The permalink has no identifier");
            return fallback(url, false);
        };
        let event_id = rest.first().and_then(|segment| EventId::parse(segment.as_str()).ok());

        if matches!(route, None | Some(RouteKind::User)) {
            if let Ok(user_id) = UserId::parse(identifier.as_str()) {
                return PermalinkData::UserLink { user_id };
            }
        }

        if matches!(route, None | Some(RouteKind::Room)) {
            if let Ok(room_id) = RoomId::parse(identifier.as_str()) {
                return self.parse_room_id(url, room_id, event_id, query);
            }

            if let Ok(room_alias) = RoomAliasId::parse(identifier.as_str()) {
                let via_parameters = query.get_all("via");
                return match event_id {
                    Some(event_id) => {
                        PermalinkData::EventIdAliasLink { room_alias, event_id, via_parameters }
                    }
                    None => PermalinkData::RoomAliasLink { room_alias, via_parameters },
                };
            }
        }

        debug!(?route, "The permalink identifier is not valid");
        fallback(url, is_group_id(identifier))
    }

    fn parse_room_id(
        &self,
        url: &str,
        room_id: RoomId,
        event_id: Option<EventId>,
        query: &FragmentQuery,
    ) -> PermalinkData {
        if let (Some(email), Some(sign_url)) =
            (query.get_non_empty("email"), query.get_non_empty("signurl"))
        {
            return match parse_email_invite(room_id, email, sign_url, query) {
                Some(data) => PermalinkData::RoomEmailInviteLink(data),
                // Without the token and key the invite can't be accepted, a room
                // link would silently drop it.
                None => {
                    warn!("Found a malformed email invite link");
                    fallback(url, false)
                }
            };
        }

        let via_parameters = query.get_all("via");
        match event_id {
            Some(event_id) => PermalinkData::EventIdLink { room_id, event_id, via_parameters },
            None => PermalinkData::RoomIdLink { room_id, via_parameters },
        }
    }
}

fn parse_email_invite(
    room_id: RoomId,
    email: &str,
    sign_url: &str,
    query: &FragmentQuery,
) -> Option<RoomEmailInviteData> {
    let parsed = Url::parse(sign_url).ok()?;
    let host = parsed.host_str().filter(|host| !host.is_empty())?;
    let identity_server = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };

    let sign_query = FragmentQuery { pairs: parsed.query_pairs().into_owned().collect() };
    let token = sign_query.get("token")?.to_owned();
    let private_key = sign_query.get("private_key")?.to_owned();

    let optional = |key| query.get(key).unwrap_or_default().to_owned();

    Some(RoomEmailInviteData {
        room_id,
        email: email.to_owned(),
        sign_url: sign_url.to_owned(),
        room_name: optional("room_name"),
        room_avatar_url: optional("room_avatar_url"),
        inviter_name: optional("inviter_name"),
        identity_server,
        token,
        private_key,
        room_type: optional("room_type"),
    })
}

/// Split the path of the fragment into its non-empty, percent-decoded
/// segments.
fn decode_segments(path: &str) -> Option<Vec<String>> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8().ok().map(|s| s.into_owned()))
        .collect()
}

fn fallback(url: &str, is_legacy_group_link: bool) -> PermalinkData {
    PermalinkData::FallbackLink { url: url.to_owned(), is_legacy_group_link }
}

/// Parse the given link with the default configuration.
///
/// See [`PermalinkParser::parse`].
pub fn parse_permalink(url: &str) -> PermalinkData {
    PermalinkParser::default().parse(url)
}

#[cfg(test)]
mod tests {
    use assert_matches2::{assert_let, assert_matches};
    use proptest::prelude::*;
    use similar_asserts::assert_eq;

    use super::{parse_permalink, PermalinkData, PermalinkParser, RoomEmailInviteData};
    use crate::{
        builder::PermalinkBuilder,
        config::PermalinkConfig,
        identifiers::{EventId, RoomAliasId, RoomId, UserId},
    };

    fn fallback(url: &str) -> PermalinkData {
        PermalinkData::FallbackLink { url: url.to_owned(), is_legacy_group_link: false }
    }

    #[test]
    fn invalid_url_is_a_fallback_link() {
        assert_eq!(parse_permalink("https://element.io"), fallback("https://element.io"));
        assert_eq!(parse_permalink("https://element.io/"), fallback("https://element.io/"));
        assert_eq!(parse_permalink("not a url"), fallback("not a url"));
    }

    #[test]
    fn right_path_without_content_is_a_fallback_link() {
        assert!(parse_permalink("https://app.element.io/#/user").is_fallback());
        assert!(parse_permalink("https://app.element.io/#/user/").is_fallback());
        assert!(parse_permalink("https://matrix.to/#/").is_fallback());
        assert!(parse_permalink("https://matrix.to/#/room").is_fallback());
    }

    #[test]
    fn right_path_with_invalid_content_is_a_fallback_link() {
        let url = "https://app.element.io/#/user/some%20user!";
        assert_eq!(parse_permalink(url), fallback(url));
    }

    #[test]
    fn user_link() {
        assert_eq!(
            parse_permalink("https://app.element.io/#/user/@test:matrix.org"),
            PermalinkData::UserLink { user_id: UserId::parse("@test:matrix.org").unwrap() }
        );
        assert_eq!(
            parse_permalink("https://matrix.to/#/@test:matrix.org"),
            PermalinkData::UserLink { user_id: UserId::parse("@test:matrix.org").unwrap() }
        );
    }

    #[test]
    fn room_id_link() {
        assert_eq!(
            parse_permalink("https://app.element.io/#/room/!aBCD1234:matrix.org"),
            PermalinkData::RoomIdLink {
                room_id: RoomId::parse("!aBCD1234:matrix.org").unwrap(),
                via_parameters: vec![],
            }
        );
    }

    #[test]
    fn event_id_link() {
        assert_eq!(
            parse_permalink(
                "https://app.element.io/#/room/!aBCD1234:matrix.org/$1234567890abcdef:matrix.org"
            ),
            PermalinkData::EventIdLink {
                room_id: RoomId::parse("!aBCD1234:matrix.org").unwrap(),
                event_id: EventId::parse("$1234567890abcdef:matrix.org").unwrap(),
                via_parameters: vec![],
            }
        );
    }

    #[test]
    fn invalid_event_id_is_ignored() {
        assert_eq!(
            parse_permalink(
                "https://app.element.io/#/room/!aBCD1234:matrix.org/1234567890abcdef:matrix.org"
            ),
            PermalinkData::RoomIdLink {
                room_id: RoomId::parse("!aBCD1234:matrix.org").unwrap(),
                via_parameters: vec![],
            }
        );
    }

    #[test]
    fn event_id_link_with_via_parameters() {
        assert_eq!(
            parse_permalink(
                "https://app.element.io/#/room/!aBCD1234:matrix.org/$1234567890abcdef:matrix.org\
                 ?via=matrix.org&via=matrix.com"
            ),
            PermalinkData::EventIdLink {
                room_id: RoomId::parse("!aBCD1234:matrix.org").unwrap(),
                event_id: EventId::parse("$1234567890abcdef:matrix.org").unwrap(),
                via_parameters: vec!["matrix.org".to_owned(), "matrix.com".to_owned()],
            }
        );
    }

    #[test]
    fn room_alias_link() {
        assert_eq!(
            parse_permalink("https://app.element.io/#/room/#element-android:matrix.org"),
            PermalinkData::RoomAliasLink {
                room_alias: RoomAliasId::parse("#element-android:matrix.org").unwrap(),
                via_parameters: vec![],
            }
        );
    }

    #[test]
    fn room_alias_link_with_event_id() {
        assert_eq!(
            parse_permalink(
                "https://app.element.io/#/room/#element-android:matrix.org/$1234567890abcdef:matrix.org"
            ),
            PermalinkData::EventIdAliasLink {
                room_alias: RoomAliasId::parse("#element-android:matrix.org").unwrap(),
                event_id: EventId::parse("$1234567890abcdef:matrix.org").unwrap(),
                via_parameters: vec![],
            }
        );
    }

    #[test]
    fn percent_encoded_alias() {
        assert_let!(
            PermalinkData::RoomAliasLink { room_alias, .. } =
                parse_permalink("https://matrix.to/#/%23element-android%3Amatrix.org")
        );
        assert_eq!(room_alias, "#element-android:matrix.org");
    }

    #[test]
    fn route_kind_must_match_identifier() {
        assert!(parse_permalink("https://matrix.to/#/user/!aBCD1234:matrix.org").is_fallback());
        assert!(parse_permalink("https://matrix.to/#/room/@test:matrix.org").is_fallback());
        assert_matches!(
            parse_permalink("https://matrix.to/#/room/!aBCD1234:matrix.org"),
            PermalinkData::RoomIdLink { .. }
        );
    }

    #[test]
    fn group_link_is_flagged() {
        for url in [
            "https://app.element.io/#/group/+group:matrix.org",
            "https://matrix.to/#/group/+group:matrix.org",
            "https://matrix.to/#/+group:matrix.org",
        ] {
            assert_eq!(
                parse_permalink(url),
                PermalinkData::FallbackLink { url: url.to_owned(), is_legacy_group_link: true }
            );
        }
    }

    #[test]
    fn group_route_only_accepts_groups() {
        assert_eq!(
            parse_permalink("https://matrix.to/#/group/@test:matrix.org"),
            fallback("https://matrix.to/#/group/@test:matrix.org")
        );
        assert_eq!(
            parse_permalink("https://matrix.to/#/group/!aBCD1234:matrix.org"),
            fallback("https://matrix.to/#/group/!aBCD1234:matrix.org")
        );
    }

    #[test]
    fn custom_scheme_link() {
        assert_eq!(
            parse_permalink("element://user/@alice:matrix.org"),
            PermalinkData::UserLink { user_id: UserId::parse("@alice:matrix.org").unwrap() }
        );
    }

    const INVITE_QUERY_TAIL: &str = "&room_name=TestRoom\
        &room_avatar_url=\
        &inviter_name=User\
        &guest_access_token=\
        &guest_user_id=\
        &room_type=";

    #[test]
    fn sign_url_without_private_key_is_a_fallback_link() {
        let url = format!(
            "https://app.element.io/#/room/%21aBCDEF12345%3Amatrix.org\
             ?email=testuser%40element.io\
             &signurl=https%3A%2F%2Fvector.im%2F_matrix%2Fidentity%2Fapi%2Fv1%2Fsign-ed25519%3Ftoken%3Da_token\
             {INVITE_QUERY_TAIL}"
        );

        assert_eq!(parse_permalink(&url), fallback(&url));
    }

    #[test]
    fn sign_url_that_is_not_a_url_is_a_fallback_link() {
        let url = "https://matrix.to/#/!aBCDEF12345:matrix.org?email=a%40b.c&signurl=nope";
        assert_eq!(parse_permalink(url), fallback(url));
    }

    #[test]
    fn room_email_invite_link() {
        let url = format!(
            "https://app.element.io/#/room/%21aBCDEF12345%3Amatrix.org\
             ?email=testuser%40element.io\
             &signurl=https%3A%2F%2Fvector.im%2F_matrix%2Fidentity%2Fapi%2Fv1%2Fsign-ed25519\
             %3Ftoken%3Da_token%26private_key%3Da_private_key\
             {INVITE_QUERY_TAIL}"
        );

        assert_eq!(
            parse_permalink(&url),
            PermalinkData::RoomEmailInviteLink(RoomEmailInviteData {
                room_id: RoomId::parse("!aBCDEF12345:matrix.org").unwrap(),
                email: "testuser@element.io".to_owned(),
                sign_url: "https://vector.im/_matrix/identity/api/v1/sign-ed25519\
                           ?token=a_token&private_key=a_private_key"
                    .to_owned(),
                room_name: "TestRoom".to_owned(),
                room_avatar_url: String::new(),
                inviter_name: "User".to_owned(),
                identity_server: "vector.im".to_owned(),
                token: "a_token".to_owned(),
                private_key: "a_private_key".to_owned(),
                room_type: String::new(),
            })
        );
    }

    #[test]
    fn missing_optional_invite_fields_are_empty() {
        let url = "https://matrix.to/#/!room:matrix.org?email=a%40b.c\
                   &signurl=https%3A%2F%2Fis.example.org%3A8090%2Fsign%3Ftoken%3Dt%26private_key%3Dk";

        assert_let!(PermalinkData::RoomEmailInviteLink(data) = parse_permalink(url));
        assert_eq!(data.identity_server, "is.example.org:8090");
        assert_eq!(data.room_name, "");
        assert_eq!(data.inviter_name, "");
        assert_eq!(data.room_type, "");
    }

    #[test]
    fn invite_debug_hides_secrets() {
        let url = "https://matrix.to/#/!room:matrix.org?email=a%40b.c\
                   &signurl=https%3A%2F%2Fvector.im%2Fsign%3Ftoken%3Dt0k3n%26private_key%3Ds3cr3t";

        assert_let!(PermalinkData::RoomEmailInviteLink(data) = parse_permalink(url));
        let debug = format!("{data:?}");
        assert!(!debug.contains("t0k3n"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn email_invite_only_applies_to_room_ids() {
        let url = "https://matrix.to/#/#alias:matrix.org?email=a%40b.c&signurl=https%3A%2F%2Fvector.im";
        assert_matches!(parse_permalink(url), PermalinkData::RoomAliasLink { .. });
    }

    #[test]
    fn custom_permalink_host() {
        let parser = PermalinkParser::new(PermalinkConfig {
            matrix_to_host: "links.example.org".to_owned(),
            ..Default::default()
        });

        assert_matches!(
            parser.parse("https://links.example.org/#/@test:matrix.org"),
            PermalinkData::UserLink { .. }
        );
        assert!(parser.parse("https://matrix.to/#/@test:matrix.org").is_fallback());
    }

    #[test]
    fn mixed_case_permalink_host() {
        let config = PermalinkConfig::from_json(r#"{ "matrix_to_host": "Links.Example.org" }"#)
            .unwrap();
        let parser = PermalinkParser::new(config.clone());
        let user_id = UserId::parse("@alice:example.org").unwrap();

        let permalink = PermalinkBuilder::new(config).for_user(&user_id);
        assert_eq!(parser.parse(&permalink), PermalinkData::UserLink { user_id: user_id.clone() });
        assert_eq!(
            parser.parse("https://app.element.io/#/user/@alice:example.org"),
            PermalinkData::UserLink { user_id }
        );
    }

    proptest! {
        #[test]
        fn any_user_id_is_a_user_link(
            localpart in "[a-z0-9._=-]{1,16}",
            server in "[a-z0-9-]{1,12}(\\.[a-z]{2,6})?",
        ) {
            let user_id = format!("@{localpart}:{server}");
            let data = parse_permalink(&format!("https://matrix.to/#/{user_id}"));

            let expected = PermalinkData::UserLink { user_id: UserId::parse(user_id).unwrap() };
            prop_assert_eq!(data, expected);
        }

        #[test]
        fn via_parameters_keep_their_order(
            servers in proptest::collection::vec("[a-z]{1,3}\\.(org|com)", 0..6),
        ) {
            let query: Vec<_> = servers.iter().map(|server| format!("via={server}")).collect();
            let url = format!("https://matrix.to/#/!room:matrix.org?{}", query.join("&"));

            let data = parse_permalink(&url);
            prop_assert_eq!(data.via_parameters(), servers.as_slice());
        }
    }
}
