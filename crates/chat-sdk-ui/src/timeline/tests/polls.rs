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

use assert_matches2::assert_let;
use chrono::{TimeZone, Utc};
use indexmap::IndexMap;

use super::{event, test_factory, ALICE, BOB};
use crate::timeline::{
    Poll, PollAnswer, PollKind, PollStart, TimelineEventKind, TimelineItemContent,
};

fn poll_start(votes: IndexMap<String, Vec<String>>) -> PollStart {
    PollStart {
        question: "Lunch?".to_owned(),
        kind: PollKind::Disclosed,
        max_selections: 1,
        answers: vec![
            PollAnswer { id: "pizza".to_owned(), text: "Pizza".to_owned() },
            PollAnswer { id: "sushi".to_owned(), text: "Sushi".to_owned() },
            PollAnswer { id: "salad".to_owned(), text: "Salad".to_owned() },
        ],
        votes,
        end_time: None,
        has_been_edited: false,
    }
}

fn build_poll(start: PollStart) -> Poll {
    let factory = test_factory();
    let item = factory
        .build_timeline_item(&event(TimelineEventKind::Poll(start)), false)
        .unwrap();
    assert_let!(TimelineItemContent::Poll(poll) = item.content);
    poll
}

#[test]
fn test_options_keep_creator_order_and_count_votes() {
    let votes = IndexMap::from([
        ("pizza".to_owned(), vec![BOB.to_owned(), "@carol:example.org".to_owned()]),
        ("sushi".to_owned(), vec![ALICE.to_owned()]),
    ]);

    let poll = build_poll(poll_start(votes));

    assert_eq!(poll.question, "Lunch?");
    let summary = poll
        .options
        .iter()
        .map(|option| (option.id.as_str(), option.votes, option.all_votes))
        .collect::<Vec<_>>();
    assert_eq!(summary, [("pizza", 2, 3), ("sushi", 1, 3), ("salad", 0, 3)]);
}

#[test]
fn test_the_highest_vote_count_wins() {
    let votes = IndexMap::from([
        ("pizza".to_owned(), vec![BOB.to_owned(), "@carol:example.org".to_owned()]),
        ("sushi".to_owned(), vec![ALICE.to_owned()]),
    ]);

    let poll = build_poll(poll_start(votes));

    let winning = poll
        .options
        .iter()
        .filter(|option| option.is_winning)
        .map(|option| option.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(winning, ["pizza"]);
}

#[test]
fn test_tied_options_all_win() {
    let votes = IndexMap::from([
        ("pizza".to_owned(), vec![BOB.to_owned()]),
        ("sushi".to_owned(), vec![ALICE.to_owned()]),
    ]);

    let poll = build_poll(poll_start(votes));

    let winning = poll
        .options
        .iter()
        .filter(|option| option.is_winning)
        .map(|option| option.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(winning, ["pizza", "sushi"]);
    assert!(!poll.options[2].is_winning);
}

#[test]
fn test_a_poll_without_votes_has_no_winner() {
    let poll = build_poll(poll_start(IndexMap::new()));

    assert!(poll.options.iter().all(|option| !option.is_winning));
    assert!(poll.options.iter().all(|option| option.all_votes == 0));
}

#[test]
fn test_own_votes_are_marked_selected() {
    let votes = IndexMap::from([("sushi".to_owned(), vec![ALICE.to_owned()])]);

    let poll = build_poll(poll_start(votes));

    assert!(!poll.options[0].is_selected);
    assert!(poll.options[1].is_selected);
}

#[test]
fn test_the_end_time_becomes_a_calendar_date() {
    let mut start = poll_start(IndexMap::new());
    // 2017-07-14 02:40:00 UTC.
    start.end_time = Some(1_500_000_000_000);

    let poll = build_poll(start);

    assert_eq!(poll.end_date, Some(Utc.with_ymd_and_hms(2017, 7, 14, 2, 40, 0).unwrap()));
}

#[test]
fn test_a_running_poll_has_no_end_date() {
    let poll = build_poll(poll_start(IndexMap::new()));
    assert!(poll.end_date.is_none());
}

#[test]
fn test_creator_and_edit_flags() {
    let factory = test_factory();

    let mut start = poll_start(IndexMap::new());
    start.has_been_edited = true;

    let mut event = event(TimelineEventKind::Poll(start));
    event.sender = super::sender(ALICE);
    event.is_own = true;

    let item = factory.build_timeline_item(&event, false).unwrap();
    assert!(item.properties.is_edited);

    assert_let!(TimelineItemContent::Poll(poll) = item.content);
    assert!(poll.created_by_own_user);
}
