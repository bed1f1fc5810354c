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

//! Rendering of poll results.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::event::PollStart;

/// Whether votes are visible before the poll ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollKind {
    /// Votes are visible while the poll runs.
    Disclosed,
    /// Votes only become visible once the poll ends.
    Undisclosed,
}

/// A poll with its current results, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
    /// The question being asked.
    pub question: String,

    /// Whether votes are visible before the poll ends.
    pub kind: PollKind,

    /// How many options one user may select.
    pub max_selections: u64,

    /// The options, in the order the creator defined them.
    pub options: Vec<PollOption>,

    /// The raw vote map: option ID to the users who picked it.
    pub votes: IndexMap<String, Vec<String>>,

    /// When the poll ended, if it has ended.
    pub end_date: Option<DateTime<Utc>>,

    /// Whether the account viewing the timeline created the poll.
    pub created_by_own_user: bool,
}

/// One option of a poll, with its share of the votes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOption {
    /// The stable identifier of the option.
    pub id: String,

    /// The text shown to voters.
    pub text: String,

    /// How many votes this option received.
    pub votes: usize,

    /// How many votes were cast in the whole poll.
    pub all_votes: usize,

    /// Whether the account viewing the timeline picked this option.
    pub is_selected: bool,

    /// Whether this option has the highest vote count. Ties produce
    /// multiple winning options.
    pub is_winning: bool,
}

impl Poll {
    /// Computes the displayable results of a poll start event.
    pub(super) fn from_start(start: &PollStart, own_user_id: &str, sender_id: &str) -> Self {
        let all_votes = start.votes.values().map(Vec::len).sum();
        let max_option_votes = start.votes.values().map(Vec::len).max();

        let options = start
            .answers
            .iter()
            .map(|answer| {
                let option_votes = start.votes.get(&answer.id).map(Vec::len);
                PollOption {
                    id: answer.id.clone(),
                    text: answer.text.clone(),
                    votes: option_votes.unwrap_or(0),
                    all_votes,
                    is_selected: start
                        .votes
                        .get(&answer.id)
                        .is_some_and(|voters| voters.iter().any(|voter| voter == own_user_id)),
                    is_winning: option_votes
                        .is_some_and(|votes| Some(votes) == max_option_votes),
                }
            })
            .collect();

        Poll {
            question: start.question.clone(),
            kind: start.kind,
            max_selections: start.max_selections,
            options,
            votes: start.votes.clone(),
            // The end time is in milliseconds; the calendar instant only
            // needs second precision.
            end_date: start
                .end_time
                .and_then(|end_time| DateTime::from_timestamp((end_time / 1000) as i64, 0)),
            created_by_own_user: sender_id == own_user_id,
        }
    }
}
