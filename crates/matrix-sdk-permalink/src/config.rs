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

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The host of the public permalink service.
pub const MATRIX_TO_HOST: &str = "matrix.to";

/// The host of the hosted Element Call instance.
pub const ELEMENT_CALL_HOST: &str = "call.element.io";

/// Settings shared by the permalink and call link parsers.
///
/// Every field has a default, so a partial JSON object can be used to only
/// override what differs for a given client:
///
/// ```
/// # use matrix_sdk_permalink::PermalinkConfig;
/// let config = PermalinkConfig::from_json(r#"{ "element_call_hosts": ["call.example.org"] }"#)?;
///
/// assert_eq!(config.matrix_to_host, "matrix.to");
/// assert_eq!(config.element_call_hosts, ["call.example.org"]);
/// # Ok::<(), matrix_sdk_permalink::ConfigError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PermalinkConfig {
    /// Host of the canonical permalink service. Canonical permalinks look
    /// like `https://<matrix_to_host>/#/<identifier>`.
    pub matrix_to_host: String,

    /// Path markers of web client links, e.g. the `/#/room/` in
    /// `https://app.element.io/#/room/#room:example.org`. The part after the
    /// `#` is also looked for at the start of the fragment.
    pub web_client_paths: Vec<String>,

    /// Hosts accepted under a custom app scheme, e.g. the `room` in
    /// `element://room/#room:example.org`.
    pub custom_scheme_hosts: Vec<String>,

    /// Hosts whose `https` links are Element Call links on their own.
    pub element_call_hosts: Vec<String>,
}

impl Default for PermalinkConfig {
    fn default() -> Self {
        Self {
            matrix_to_host: MATRIX_TO_HOST.to_owned(),
            web_client_paths: ["/#/room/", "/#/user/", "/#/group/"]
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            custom_scheme_hosts: ["room", "user"].into_iter().map(ToOwned::to_owned).collect(),
            element_call_hosts: vec![ELEMENT_CALL_HOST.to_owned()],
        }
    }
}

impl PermalinkConfig {
    /// Load a configuration from a JSON object.
    ///
    /// Missing fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The prefix every canonical permalink starts with, e.g.
    /// `https://matrix.to/#/`.
    pub fn matrix_to_base_url(&self) -> String {
        format!("https://{}/#/", self.matrix_to_host)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix_to_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "matrix_to_host",
                reason: "must not be empty",
            });
        }
        if self.matrix_to_host.contains(['/', '#', '?']) {
            return Err(ConfigError::InvalidValue {
                field: "matrix_to_host",
                reason: "must be a bare host name",
            });
        }
        if self.web_client_paths.iter().any(|path| path.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "web_client_paths",
                reason: "entries must not be empty",
            });
        }
        if self.custom_scheme_hosts.iter().any(|host| host.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "custom_scheme_hosts",
                reason: "entries must not be empty",
            });
        }
        if self.element_call_hosts.iter().any(|host| host.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "element_call_hosts",
                reason: "entries must not be empty",
            });
        }

        Ok(())
    }
}
