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

//! Parsing of links that open an Element Call instance.
//!
//! The hosted instance is linked to directly. Other instances are reached
//! through a custom scheme carrying the real URL in its `url` parameter:
//!
//! - `element://call?url=https%3A%2F%2Fcall.example.org%2Froom`
//! - `io.element.call:/?url=https%3A%2F%2Fcall.example.org%2Froom`
//!
//! Whatever the link says, the resulting URL never prompts the user to open
//! another app and never lets them leave the room.

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::config::PermalinkConfig;

const APP_PROMPT_PARAMETER: &str = "appPrompt";
const CONFINE_TO_ROOM_PARAMETER: &str = "confineToRoom";

const ELEMENT_SCHEME: &str = "element";
const ELEMENT_SCHEME_CALL_HOST: &str = "call";
const ELEMENT_CALL_SCHEME: &str = "io.element.call";

/// Extracts the Element Call URL to load from an incoming link.
#[derive(Clone, Debug, Default)]
pub struct CallLinkParser {
    config: PermalinkConfig,
}

impl CallLinkParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: PermalinkConfig) -> Self {
        Self { config }
    }

    /// Get the URL to load for the given link, or `None` if it isn't a call
    /// link.
    ///
    /// The returned URL always ends its query with
    /// `appPrompt=false&confineToRoom=true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_sdk_permalink::CallLinkParser;
    /// let parser = CallLinkParser::default();
    ///
    /// assert_eq!(
    ///     parser.parse(Some("https://call.element.io/room?appPrompt=true")).as_deref(),
    ///     Some("https://call.element.io/room?appPrompt=false&confineToRoom=true")
    /// );
    /// assert_eq!(parser.parse(Some("https://example.org/room")), None);
    /// ```
    pub fn parse(&self, data: Option<&str>) -> Option<String> {
        let url = Url::parse(data?).ok()?;

        let target = match (url.scheme(), url.host_str()) {
            ("https", Some(host)) if self.is_element_call_host(host) => url.clone(),
            // Other instances of Element Call can only be reached through the custom
            // schemes, all we can check is that they are served over https.
            (ELEMENT_SCHEME, Some(ELEMENT_SCHEME_CALL_HOST)) => embedded_url(&url)?,
            (ELEMENT_CALL_SCHEME, None | Some("" | ELEMENT_SCHEME_CALL_HOST)) => {
                embedded_url(&url)?
            }
            (scheme, _) => {
                debug!(scheme, "Not a call link");
                return None;
            }
        };

        Some(with_enforced_parameters(target).into())
    }

    fn is_element_call_host(&self, host: &str) -> bool {
        self.config.element_call_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

/// The URL in the `url` query parameter, if it is a https URL with a host.
fn embedded_url(url: &Url) -> Option<Url> {
    let (_, value) = url.query_pairs().find(|(key, _)| key == "url")?;

    let Ok(embedded) = Url::parse(&value) else {
        debug!("The embedded call URL is not a URL");
        return None;
    };

    let has_host = embedded.host_str().is_some_and(|host| !host.is_empty());
    if embedded.scheme() != "https" || !has_host {
        debug!(scheme = embedded.scheme(), has_host, "Refusing the embedded call URL");
        return None;
    }

    Some(embedded)
}

/// Replace any `appPrompt` and `confineToRoom` parameters with
/// `appPrompt=false&confineToRoom=true` at the end of the query.
///
/// The other parameters are kept as they were, including their order and
/// encoding.
fn with_enforced_parameters(mut url: Url) -> Url {
    let mut query: Vec<&str> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            let key = percent_decode_str(key).decode_utf8_lossy();
            key != APP_PROMPT_PARAMETER && key != CONFINE_TO_ROOM_PARAMETER
        })
        .collect();

    let app_prompt = format!("{APP_PROMPT_PARAMETER}=false");
    let confine_to_room = format!("{CONFINE_TO_ROOM_PARAMETER}=true");
    query.push(&app_prompt);
    query.push(&confine_to_room);

    let query = query.join("&");
    url.set_query(Some(&query));
    url
}

/// Get the Element Call URL to load for the given link with the default
/// configuration.
///
/// See [`CallLinkParser::parse`].
pub fn parse_call_link(data: Option<&str>) -> Option<String> {
    CallLinkParser::default().parse(data)
}
