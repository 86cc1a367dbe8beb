//! Combining the two failure results of a disjunctive validation.
//!
//! When a value is checked against `A or B` and both branches fail, the two
//! error results have to be presented as one. [`combine`] inspects the two
//! message sets and picks the strategy:
//!
//! - Both branches failed on the same field → [`SinglePath`], one joined
//!   sentence ("must be an integer or must be positive").
//! - Both branches produced nested error trees over different sub-fields →
//!   [`MultiPath`], a merged mapping with both trees under an `or` node at
//!   their common path prefix.
//! - The results are not comparable as a merge → one side is preferred
//!   deterministically, without merging.
//!
//! # Example
//!
//! ```rust
//! use disjunct::{combine, Connectors, JsonPath, Message, MessageSet};
//! use serde_json::json;
//!
//! let left = MessageSet::from(Message::new(JsonPath::from_field("age"), "must be an integer"));
//! let right = MessageSet::from(Message::new(JsonPath::from_field("age"), "must be positive"));
//!
//! let combined = combine(left, right, &Connectors::with_or("or")).unwrap();
//! assert_eq!(
//!     combined.to_h(),
//!     json!({"age": "must be an integer or must be positive"})
//! );
//! ```

mod merge;
mod multi_path;
mod single_path;

pub use multi_path::MultiPath;
pub use single_path::SinglePath;

use indexmap::IndexSet;
use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::connector::{Connectors, MissingConnector, OR};
use crate::message::{Message, MessageSet};

use merge::deep_merge;

/// The composite result of combining two disjunction branches.
///
/// Every variant renders uniformly through [`dump`](Combined::dump) and
/// [`to_h`](Combined::to_h), so the message-set renderer consuming this value
/// does not care which strategy produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Combined {
    /// One branch's single message, preferred over the other.
    Message(Message),
    /// One branch's message tree, preferred over the other and passed through
    /// unchanged.
    Messages(NonEmptyVec<Message>),
    /// Both branches joined into one sentence at a shared path.
    SinglePath(SinglePath),
    /// Both branches merged into one tree under a shared `or` node.
    MultiPath(MultiPath),
}

impl Combined {
    /// Renders this result as a human-readable string.
    ///
    /// A passed-through tree joins its message texts with `", "`.
    pub fn dump(&self) -> String {
        match self {
            Combined::Message(message) => message.dump().to_string(),
            Combined::Messages(messages) => {
                let texts: Vec<&str> = messages.iter().map(|m| m.dump()).collect();
                texts.join(", ")
            }
            Combined::SinglePath(single) => single.dump(),
            Combined::MultiPath(multi) => multi.dump(),
        }
    }

    /// Renders this result as a nested mapping.
    ///
    /// A passed-through tree deep-merges the mappings of its messages.
    pub fn to_h(&self) -> Value {
        match self {
            Combined::Message(message) => message.to_h(),
            Combined::Messages(messages) => messages
                .iter()
                .fold(json!({}), |acc, m| deep_merge(acc, m.to_h())),
            Combined::SinglePath(single) => single.to_h(),
            Combined::MultiPath(multi) => multi.to_h(),
        }
    }
}

/// Combines the failure results of two disjunction branches.
///
/// Pure and deterministic. The decision:
///
/// 1. Every message on both sides has the same path → [`Combined::SinglePath`].
/// 2. Both sides are trees touching more than one path → [`Combined::MultiPath`].
/// 3. Exactly one side is a tree → that tree is passed through unchanged; a
///    structured result carries more information than a single scalar message.
/// 4. Two single messages with different paths → the greater message under
///    [`Message`]'s total order (the more specific one).
///
/// # Errors
///
/// Returns [`MissingConnector`] if the joined-sentence case is selected and
/// `connectors` has no `or` entry.
///
/// # Panics
///
/// Panics if the same-path case is selected while a side holds several
/// messages. The rule engine hands pairwise results to this function; a
/// multi-message branch collapsing onto one path violates that contract.
pub fn combine(
    left: MessageSet,
    right: MessageSet,
    connectors: &Connectors,
) -> Result<Combined, MissingConnector> {
    let distinct_paths = left
        .iter()
        .chain(right.iter())
        .map(|m| &m.path)
        .collect::<IndexSet<_>>()
        .len();

    if distinct_paths == 1 {
        let connector = connectors.lookup(OR)?;
        return Ok(Combined::SinglePath(SinglePath::new(
            sole(left),
            sole(right),
            connector,
        )));
    }

    Ok(match (left, right) {
        (MessageSet::Many(left), MessageSet::Many(right)) => {
            Combined::MultiPath(MultiPath::new(left, right))
        }
        (MessageSet::Single(_), MessageSet::Many(right)) => Combined::Messages(right),
        (MessageSet::Many(left), MessageSet::Single(_)) => Combined::Messages(left),
        (MessageSet::Single(left), MessageSet::Single(right)) => {
            Combined::Message(left.max(right))
        }
    })
}

/// Extracts the single message of a branch whose paths all collapsed onto one
/// field.
fn sole(set: MessageSet) -> Message {
    match set {
        MessageSet::Single(message) => message,
        MessageSet::Many(messages) => {
            assert!(
                messages.len() == 1,
                "a same-path disjunction branch must carry exactly one message"
            );
            messages.head().clone()
        }
    }
}
