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

use super::{event, test_factory, text_message, DEFAULT_TS};
use crate::timeline::{ReadReceipt, Receipt};

fn build_receipts(receipts: IndexMap<String, Receipt>) -> Vec<ReadReceipt> {
    let factory = test_factory();
    let mut event = event(text_message("hello"));
    event.read_receipts = receipts;
    factory.build_timeline_item(&event, false).unwrap().properties.read_receipts
}

#[test]
fn test_receipts_are_ordered_most_recent_first() {
    let receipts = IndexMap::from([
        ("@carol:example.org".to_owned(), Receipt { timestamp: Some(DEFAULT_TS) }),
        ("@dan:example.org".to_owned(), Receipt { timestamp: Some(DEFAULT_TS + 60_000) }),
        ("@erin:example.org".to_owned(), Receipt { timestamp: Some(DEFAULT_TS + 30_000) }),
    ]);

    let ordered = build_receipts(receipts);

    let users = ordered.iter().map(|receipt| receipt.user_id.as_str()).collect::<Vec<_>>();
    assert_eq!(users, ["@dan:example.org", "@erin:example.org", "@carol:example.org"]);
}

#[test]
fn test_receipts_without_a_timestamp_sort_last() {
    let receipts = IndexMap::from([
        ("@carol:example.org".to_owned(), Receipt { timestamp: None }),
        ("@dan:example.org".to_owned(), Receipt { timestamp: Some(DEFAULT_TS) }),
    ]);

    let ordered = build_receipts(receipts);

    assert_eq!(ordered[0].user_id, "@dan:example.org");
    assert_eq!(ordered[1].user_id, "@carol:example.org");
    assert!(ordered[1].formatted_timestamp.is_none());
}

#[test]
fn test_receipt_timestamps_are_formatted_as_time_of_day() {
    let receipts = IndexMap::from([(
        "@carol:example.org".to_owned(),
        Receipt { timestamp: Some(DEFAULT_TS) },
    )]);

    let ordered = build_receipts(receipts);

    assert_eq!(ordered[0].formatted_timestamp.as_deref(), Some("02:40"));
}
