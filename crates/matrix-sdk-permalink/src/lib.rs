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

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs)]

mod builder;
mod call_link;
mod config;
mod error;
mod identifiers;
mod matrix_to;
mod permalink;

pub use builder::PermalinkBuilder;
pub use call_link::{parse_call_link, CallLinkParser};
pub use config::{PermalinkConfig, ELEMENT_CALL_HOST, MATRIX_TO_HOST};
pub use error::{ConfigError, IdParseError};
pub use identifiers::{
    is_event_id, is_group_id, is_room_alias, is_room_id, is_user_id, EventId, RoomAliasId, RoomId,
    UserId,
};
pub use matrix_to::{normalize, MatrixToConverter};
pub use permalink::{parse_permalink, PermalinkData, PermalinkParser, RoomEmailInviteData};

// Enable tracing for tests in this crate
#[cfg(test)]
#[ctor::ctor]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .init();
}
