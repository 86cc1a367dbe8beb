//! Combined values and connector tables are shareable across threads
//! read-only.

use std::sync::Arc;
use std::thread;

use disjunct::{combine, Connectors, JsonPath, Message, MessageSet};
use serde_json::json;

#[test]
fn test_combine_against_shared_connectors() {
    let connectors = Arc::new(Connectors::with_or("or"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let connectors = Arc::clone(&connectors);
            thread::spawn(move || {
                let path = JsonPath::from_field(format!("field{}", i));
                let left = MessageSet::from(Message::new(path.clone(), "must be an integer"));
                let right = MessageSet::from(Message::new(path, "must be positive"));
                combine(left, right, &connectors).unwrap().dump()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "must be an integer or must be positive"
        );
    }
}

#[test]
fn test_combined_result_is_shareable() {
    let left = MessageSet::many(vec![Message::new(
        JsonPath::root().push_field("a").push_field("x"),
        "X1",
    )]);
    let right = MessageSet::many(vec![Message::new(
        JsonPath::root().push_field("a").push_field("y"),
        "Y1",
    )]);

    let combined = Arc::new(combine(left, right, &Connectors::with_or("or")).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let combined = Arc::clone(&combined);
            thread::spawn(move || combined.to_h())
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            json!({"a": {"or": [{"x": "X1"}, {"y": "Y1"}]}})
        );
    }
}
