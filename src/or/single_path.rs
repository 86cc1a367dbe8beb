//! The joined-sentence result: both branches failed on the same field.

use serde_json::{json, Value};

use crate::message::Message;
use crate::path::JsonPath;

/// Two alternative failures on one field, rendered as a single sentence.
///
/// Both messages are guaranteed to share the same path; [`combine`] only
/// constructs this shape after establishing that.
///
/// [`combine`]: crate::or::combine
#[derive(Debug, Clone)]
pub struct SinglePath {
    left: Message,
    right: Message,
    path: JsonPath,
    connector: String,
}

impl SinglePath {
    /// Creates a joined message from two same-path failures.
    ///
    /// `connector` is the already-resolved localized word joining the two
    /// texts.
    pub(crate) fn new(left: Message, right: Message, connector: impl Into<String>) -> Self {
        debug_assert_eq!(
            left.path, right.path,
            "SinglePath requires both messages to share one path"
        );
        let path = left.path.clone();
        Self {
            left,
            right,
            path,
            connector: connector.into(),
        }
    }

    /// The shared field path.
    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// The left branch's message.
    pub fn left(&self) -> &Message {
        &self.left
    }

    /// The right branch's message.
    pub fn right(&self) -> &Message {
        &self.right
    }

    /// Renders the joined sentence, e.g. `"must be an integer or must be
    /// positive"`.
    pub fn dump(&self) -> String {
        format!(
            "{} {} {}",
            self.left.dump(),
            self.connector,
            self.right.dump()
        )
    }

    /// Renders the joined sentence as a nested mapping shaped by the shared
    /// path.
    pub fn to_h(&self) -> Value {
        self.path.wrap(json!(self.dump()))
    }
}

/// Equality considers only the two underlying messages.
impl PartialEq for SinglePath {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl Eq for SinglePath {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SinglePath {
        SinglePath::new(
            Message::new(JsonPath::from_field("age"), "must be an integer"),
            Message::new(JsonPath::from_field("age"), "must be positive"),
            "or",
        )
    }

    #[test]
    fn test_dump_joins_with_connector() {
        assert_eq!(sample().dump(), "must be an integer or must be positive");
    }

    #[test]
    fn test_dump_uses_localized_connector() {
        let joined = SinglePath::new(
            Message::new(JsonPath::from_field("age"), "muss eine Zahl sein"),
            Message::new(JsonPath::from_field("age"), "muss positiv sein"),
            "oder",
        );
        assert_eq!(joined.dump(), "muss eine Zahl sein oder muss positiv sein");
    }

    #[test]
    fn test_to_h_wraps_at_shared_path() {
        assert_eq!(
            sample().to_h(),
            json!({"age": "must be an integer or must be positive"})
        );
    }

    #[test]
    fn test_to_h_nested_path() {
        let joined = SinglePath::new(
            Message::new(JsonPath::root().push_field("user").push_field("age"), "A"),
            Message::new(JsonPath::root().push_field("user").push_field("age"), "B"),
            "or",
        );
        assert_eq!(joined.to_h(), json!({"user": {"age": "A or B"}}));
    }

    #[test]
    fn test_equality_over_messages_only() {
        let a = sample();
        let mut b = sample();
        b.connector = "oder".to_string();
        assert_eq!(a, b);

        let c = SinglePath::new(
            Message::new(JsonPath::from_field("age"), "must be an integer"),
            Message::new(JsonPath::from_field("age"), "must be odd"),
            "or",
        );
        assert_ne!(a, c);
    }
}
