//! Validation failure messages.
//!
//! This module provides [`Message`], a single immutable validation failure
//! bound to a field path, and [`MessageSet`], the tagged union distinguishing
//! one failure from a non-empty tree of failures. The combining layer works
//! over `MessageSet` so its branches are exhaustive matches rather than
//! runtime type tests.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single validation failure with its location.
///
/// A `Message` captures where a check failed (`path`) and the human-readable
/// description of the failure (`text`). Messages are immutable once
/// constructed.
///
/// # Example
///
/// ```rust
/// use disjunct::{JsonPath, Message};
/// use serde_json::json;
///
/// let msg = Message::new(JsonPath::from_field("age"), "must be positive");
///
/// assert_eq!(msg.dump(), "must be positive");
/// assert_eq!(msg.to_h(), json!({"age": "must be positive"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    /// The path to the value that failed validation.
    pub path: JsonPath,
    /// Human-readable description of the failure.
    pub text: String,
}

impl Message {
    /// Creates a new message for the given path.
    pub fn new(path: JsonPath, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }

    /// Returns the human-readable message text.
    pub fn dump(&self) -> &str {
        &self.text
    }

    /// Renders this message as a nested mapping shaped by its path.
    ///
    /// The leaf of the mapping is the message text.
    pub fn to_h(&self) -> Value {
        self.path.wrap(json!(self.text))
    }

    /// Returns this message with its path made relative to `root`.
    ///
    /// Used when nesting a message under a shared disjunction node: the
    /// rebased message renders relative to the node, which itself sits at
    /// `root`.
    pub fn rebase(&self, root: &JsonPath) -> Self {
        Self {
            path: self.path.strip_prefix(root),
            text: self.text.clone(),
        }
    }
}

/// Messages are totally ordered so a combiner can deterministically prefer
/// one of two incomparable failures. A message with a longer path is greater
/// (it is more specific); ties fall back to segment order, then to text.
impl Ord for Message {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .len()
            .cmp(&other.path.len())
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Message {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.text)
        } else {
            write!(f, "{}: {}", self.path, self.text)
        }
    }
}

// Message is Send + Sync since all fields are owned types. Asserted so it
// stays true if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Message>();
    assert_sync::<Message>();
};

/// One validation failure or a non-empty ordered tree of them.
///
/// A disjunction branch either fails with a single scalar message or, for
/// structured checks, with several messages spread over nested paths. The two
/// cases carry different combining semantics, so they are distinct variants
/// rather than a bare `Vec` inspected at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageSet {
    /// A single failure.
    Single(Message),
    /// Several failures from a nested/structured check, in evaluation order.
    Many(NonEmptyVec<Message>),
}

impl MessageSet {
    /// Creates a `Many` set from a vec of messages.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty. An empty branch result is a caller
    /// contract violation, not a recoverable condition.
    pub fn many(messages: Vec<Message>) -> Self {
        MessageSet::Many(
            NonEmptyVec::from_vec(messages).expect("MessageSet requires at least one message"),
        )
    }

    /// Returns the number of messages in this set.
    pub fn len(&self) -> usize {
        match self {
            MessageSet::Single(_) => 1,
            MessageSet::Many(messages) => messages.len(),
        }
    }

    /// Returns false since a set always holds at least one message.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained messages.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        match self {
            MessageSet::Single(message) => Box::new(std::iter::once(message)),
            MessageSet::Many(messages) => Box::new(messages.iter()),
        }
    }
}

impl From<Message> for MessageSet {
    fn from(message: Message) -> Self {
        MessageSet::Single(message)
    }
}

impl From<NonEmptyVec<Message>> for MessageSet {
    fn from(messages: NonEmptyVec<Message>) -> Self {
        MessageSet::Many(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(path: JsonPath, text: &str) -> Message {
        Message::new(path, text)
    }

    #[test]
    fn test_message_dump_is_text() {
        let m = msg(JsonPath::from_field("age"), "must be an integer");
        assert_eq!(m.dump(), "must be an integer");
    }

    #[test]
    fn test_message_to_h_wraps_by_path() {
        let m = msg(
            JsonPath::root().push_field("user").push_field("age"),
            "must be positive",
        );
        assert_eq!(m.to_h(), json!({"user": {"age": "must be positive"}}));
    }

    #[test]
    fn test_message_display_includes_path() {
        let m = msg(JsonPath::from_field("email"), "invalid format");
        assert_eq!(m.to_string(), "email: invalid format");
    }

    #[test]
    fn test_message_display_root() {
        let m = msg(JsonPath::root(), "value is null");
        assert_eq!(m.to_string(), "(root): value is null");
    }

    #[test]
    fn test_rebase_strips_root() {
        let m = msg(JsonPath::root().push_field("a").push_field("x"), "X1");
        let rebased = m.rebase(&JsonPath::from_field("a"));

        assert_eq!(rebased.path, JsonPath::from_field("x"));
        assert_eq!(rebased.text, "X1");
    }

    #[test]
    fn test_rebase_at_root_is_identity() {
        let m = msg(JsonPath::from_field("a"), "X1");
        assert_eq!(m.rebase(&JsonPath::root()), m);
    }

    #[test]
    fn test_ordering_prefers_longer_path() {
        let shallow = msg(JsonPath::from_field("a"), "zzz");
        let deep = msg(JsonPath::root().push_field("a").push_field("b"), "aaa");

        assert!(deep > shallow);
        assert_eq!(std::cmp::max(shallow.clone(), deep.clone()), deep);
        // Deterministic regardless of argument order.
        assert_eq!(std::cmp::max(deep.clone(), shallow), deep);
    }

    #[test]
    fn test_ordering_same_length_falls_back_to_segments_then_text() {
        let a = msg(JsonPath::from_field("a"), "m");
        let b = msg(JsonPath::from_field("b"), "m");
        assert!(b > a);

        let a1 = msg(JsonPath::from_field("a"), "m1");
        let a2 = msg(JsonPath::from_field("a"), "m2");
        assert!(a2 > a1);
    }

    #[test]
    fn test_message_set_single_len() {
        let set = MessageSet::from(msg(JsonPath::from_field("a"), "bad"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_message_set_many_preserves_order() {
        let set = MessageSet::many(vec![
            msg(JsonPath::from_field("a"), "first"),
            msg(JsonPath::from_field("b"), "second"),
        ]);

        assert_eq!(set.len(), 2);
        let texts: Vec<&str> = set.iter().map(|m| m.dump()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    #[should_panic(expected = "at least one message")]
    fn test_message_set_many_rejects_empty() {
        MessageSet::many(Vec::new());
    }
}
