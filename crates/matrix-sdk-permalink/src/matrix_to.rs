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

//! Rewriting of older link dialects into canonical `matrix.to` permalinks.
//!
//! Web clients put the identifier behind a `#/room/` or `#/user/` route
//! (`https://app.element.io/#/room/#room:example.org`), and the `matrix.to`
//! website hands links over to the app with a custom scheme
//! (`element://room/#room:example.org`). Both are turned into
//! `https://matrix.to/#/#room:example.org`, which is the only shape the
//! [`PermalinkParser`](crate::PermalinkParser) has to understand.

use tracing::trace;
use url::Url;

use crate::config::PermalinkConfig;

/// Converts legacy links into canonical `matrix.to` permalinks.
#[derive(Clone, Debug, Default)]
pub struct MatrixToConverter {
    config: PermalinkConfig,
}

impl MatrixToConverter {
    /// Create a new converter with the given configuration.
    pub fn new(config: PermalinkConfig) -> Self {
        Self { config }
    }

    /// Convert the given link into a canonical permalink.
    ///
    /// Links that are already canonical, and links that don't match any of
    /// the known legacy shapes, are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use matrix_sdk_permalink::MatrixToConverter;
    /// let converter = MatrixToConverter::default();
    ///
    /// assert_eq!(
    ///     converter.convert("https://app.element.io/#/user/@alice:example.org"),
    ///     "https://matrix.to/#/@alice:example.org"
    /// );
    /// assert_eq!(converter.convert("https://element.io/"), "https://element.io/");
    /// ```
    pub fn convert(&self, url: &str) -> String {
        let Ok(parsed) = Url::parse(url) else {
            trace!("Not an absolute URL, leaving it untouched");
            return url.to_owned();
        };

        if self.is_canonical(&parsed) {
            return url.to_owned();
        }

        if let Some(remainder) = self.web_client_remainder(&parsed, url) {
            trace!("Converting a web client link");
            return self.canonical(remainder);
        }

        if let Some(remainder) = self.custom_scheme_remainder(&parsed, url) {
            trace!(scheme = parsed.scheme(), "Converting a custom scheme link");
            return self.canonical(remainder);
        }

        url.to_owned()
    }

    fn canonical(&self, remainder: &str) -> String {
        let mut canonical = self.config.matrix_to_base_url();
        canonical.push_str(remainder);
        canonical
    }

    /// Whether the link is a `https://matrix.to/#/...` link.
    pub(crate) fn is_canonical(&self, url: &Url) -> bool {
        self.is_permalink_host(url)
            && url.fragment().is_some_and(|fragment| fragment.starts_with('/'))
    }

    /// Hosts are lowercased by the URL parser, the configured one might not
    /// be.
    fn is_permalink_host(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| host.eq_ignore_ascii_case(&self.config.matrix_to_host))
    }

    /// Everything after the web client path marker, for links that aren't
    /// hosted on the permalink service.
    ///
    /// Markers routing inside the fragment (`/#/room/`) are matched against
    /// the parsed fragment first, so a query before the `#` doesn't hide
    /// them.
    fn web_client_remainder<'a>(&self, parsed: &'a Url, url: &'a str) -> Option<&'a str> {
        if self.is_permalink_host(parsed) {
            return None;
        }

        let in_fragment = parsed.fragment().and_then(|fragment| {
            self.config.web_client_paths.iter().find_map(|marker| {
                let (_, route) = marker.split_once('#')?;
                fragment.strip_prefix(route).filter(|_| !route.is_empty())
            })
        });

        let remainder = match in_fragment {
            Some(remainder) => remainder,
            None => {
                let (position, marker) = self
                    .config
                    .web_client_paths
                    .iter()
                    .filter_map(|marker| {
                        url.find(marker.as_str()).map(|position| (position, marker))
                    })
                    .min_by_key(|(position, _)| *position)?;

                &url[position + marker.len()..]
            }
        };

        (!remainder.is_empty()).then_some(remainder)
    }

    /// Everything after `scheme://host/` for custom scheme links.
    ///
    /// The raw string is used on purpose: in `element://room/#room:server`
    /// the alias sigil would otherwise be parsed as the fragment delimiter.
    fn custom_scheme_remainder<'a>(&self, parsed: &Url, url: &'a str) -> Option<&'a str> {
        if matches!(parsed.scheme(), "http" | "https") {
            return None;
        }

        let host = parsed.host_str()?;
        if !self.config.custom_scheme_hosts.iter().any(|h| h.eq_ignore_ascii_case(host)) {
            return None;
        }

        let (_, after_scheme) = url.split_once("://")?;
        let (raw_host, remainder) = after_scheme.split_once('/')?;
        if !raw_host.eq_ignore_ascii_case(host) {
            return None;
        }

        (!remainder.is_empty()).then_some(remainder)
    }
}

/// Convert the given link into a canonical `matrix.to` permalink, using the
/// default configuration.
///
/// See [`MatrixToConverter::convert`].
pub fn normalize(url: &str) -> String {
    MatrixToConverter::default().convert(url)
}
