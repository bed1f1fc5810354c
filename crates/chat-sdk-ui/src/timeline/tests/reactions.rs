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

use indexmap::IndexMap;
use proptest::prelude::*;

use super::{event, test_factory, text_message, ALICE, BOB};
use crate::timeline::{ReactionInfo, ReactionsByKeyBySender};

fn reactions(
    groups: &[(&str, &[(&str, u64)])],
) -> ReactionsByKeyBySender {
    groups
        .iter()
        .map(|(key, senders)| {
            let senders = senders
                .iter()
                .map(|(sender, timestamp)| {
                    ((*sender).to_owned(), ReactionInfo { timestamp: *timestamp })
                })
                .collect::<IndexMap<_, _>>();
            ((*key).to_owned(), senders)
        })
        .collect()
}

fn build_reactions(raw: ReactionsByKeyBySender) -> Vec<crate::timeline::AggregatedReaction> {
    let factory = test_factory();
    let mut event = event(text_message("hello"));
    event.reactions = raw;
    factory.build_timeline_item(&event, false).unwrap().properties.reactions
}

#[test]
fn test_reactions_are_ordered_by_count_descending() {
    let aggregated = build_reactions(reactions(&[
        ("👀", &[("@carol:example.org", 30)]),
        ("🚀", &[(BOB, 10), (ALICE, 20)]),
    ]));

    assert_eq!(aggregated.len(), 2);
    assert_eq!(aggregated[0].key, "🚀");
    assert_eq!(aggregated[0].count(), 2);
    assert_eq!(aggregated[1].key, "👀");
}

#[test]
fn test_equal_counts_are_ordered_by_most_recent_sender_ascending() {
    let aggregated = build_reactions(reactions(&[
        ("👀", &[(BOB, 50)]),
        ("🚀", &[(BOB, 40)]),
        ("🎉", &[(BOB, 60)]),
    ]));

    let keys = aggregated.iter().map(|reaction| reaction.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, ["🚀", "👀", "🎉"]);
}

#[test]
fn test_senders_within_a_group_are_most_recent_first() {
    let aggregated = build_reactions(reactions(&[(
        "🚀",
        &[(BOB, 10), ("@carol:example.org", 30), (ALICE, 20)],
    )]));

    let senders = aggregated[0]
        .senders
        .iter()
        .map(|sender| sender.sender_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(senders, ["@carol:example.org", ALICE, BOB]);
}

#[test]
fn test_own_reaction_is_flagged() {
    let aggregated = build_reactions(reactions(&[
        ("🚀", &[(ALICE, 10)]),
        ("👀", &[(BOB, 10)]),
    ]));

    let rocket = aggregated.iter().find(|reaction| reaction.key == "🚀").unwrap();
    let eyes = aggregated.iter().find(|reaction| reaction.key == "👀").unwrap();
    assert!(rocket.includes_own_user);
    assert!(!eyes.includes_own_user);
}

#[test]
fn test_empty_groups_are_dropped() {
    let mut raw = reactions(&[("🚀", &[(BOB, 10)])]);
    raw.insert("👀".to_owned(), IndexMap::new());

    let aggregated = build_reactions(raw);

    assert_eq!(aggregated.len(), 1);
    assert_eq!(aggregated[0].key, "🚀");
}

proptest! {
    // Whatever the input, the aggregation order must be deterministic and
    // counts must never increase down the list.
    #[test]
    fn test_aggregation_order_is_total_and_by_count(raw in arbitrary_reactions()) {
        let first = build_reactions(raw.clone());
        let second = build_reactions(raw);

        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            prop_assert!(pair[0].count() >= pair[1].count());
        }

        for reaction in &first {
            prop_assert!(!reaction.senders.is_empty());
            for pair in reaction.senders.windows(2) {
                prop_assert!(pair[0].timestamp >= pair[1].timestamp);
            }
        }
    }
}

fn arbitrary_reactions() -> impl Strategy<Value = ReactionsByKeyBySender> {
    let senders = proptest::collection::hash_map("@[a-z]{1,4}:x", 0u64..100, 0..5).prop_map(
        |senders| {
            senders
                .into_iter()
                .map(|(sender, timestamp)| (sender, ReactionInfo { timestamp }))
                .collect::<IndexMap<_, _>>()
        },
    );

    proptest::collection::hash_map("[a-z]{1,3}", senders, 0..5)
        .prop_map(|groups| groups.into_iter().collect())
}
