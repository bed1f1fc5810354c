// Copyright 2025 The chat-sdk Authors
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

//! Aggregation of raw per-user reactions into display units.

use std::cmp::Ordering;

use itertools::Itertools as _;

use super::event::ReactionsByKeyBySender;

/// All reactions with the same key on one item, collapsed into a single
/// display unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedReaction {
    /// The reaction key, usually an emoji.
    pub key: String,

    /// Who reacted, most recent first.
    pub senders: Vec<ReactionSenderData>,

    /// Whether the account viewing the timeline is among the senders.
    pub includes_own_user: bool,
}

impl AggregatedReaction {
    /// How many senders reacted with this key.
    pub fn count(&self) -> usize {
        self.senders.len()
    }
}

/// One sender of an aggregated reaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionSenderData {
    /// The sender's user ID.
    pub sender_id: String,

    /// When the sender reacted, in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Groups raw reactions into ordered, deduplicated aggregates.
///
/// Within an aggregation, senders are ordered by timestamp descending;
/// the most recent sender comes first, which is what the reaction summary
/// view wants. Aggregations themselves are ordered by count descending
/// and, for equal counts, by the timestamp of their most recent sender
/// ascending. New aggregations thus append at the end of the reaction
/// layout, and the deterministic sort keeps reactions from jumping around
/// when the view reloads the same data.
pub(super) fn aggregate_reactions(
    reactions: &ReactionsByKeyBySender,
    own_user_id: &str,
) -> Vec<AggregatedReaction> {
    reactions
        .iter()
        .filter(|(_, senders)| !senders.is_empty())
        .map(|(key, senders)| {
            let senders = senders
                .iter()
                .map(|(sender_id, info)| ReactionSenderData {
                    sender_id: sender_id.clone(),
                    timestamp: info.timestamp,
                })
                .sorted_by(|a, b| b.timestamp.cmp(&a.timestamp))
                .collect::<Vec<_>>();

            AggregatedReaction {
                key: key.clone(),
                includes_own_user: senders.iter().any(|sender| sender.sender_id == own_user_id),
                senders,
            }
        })
        .sorted_by(|a, b| match b.count().cmp(&a.count()) {
            Ordering::Equal => a.senders[0].timestamp.cmp(&b.senders[0].timestamp),
            ordering => ordering,
        })
        .collect()
}
