//! The merged-tree result: the branches failed on different sub-fields.

use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::connector::OR;
use crate::message::Message;
use crate::path::JsonPath;

use super::merge::deep_merge;

/// Two alternative failure trees merged under their common path prefix.
///
/// `root` is the longest leading path shared by every message on both sides
/// (possibly the document root). The stored messages are rebased to be
/// relative to `root`, so rendering places both branches under an explicit
/// `or` node at `root`:
///
/// ```text
/// {"a": {"or": [{"x": "X1"}, {"y": "Y1"}]}}
/// ```
#[derive(Debug, Clone)]
pub struct MultiPath {
    left: NonEmptyVec<Message>,
    right: NonEmptyVec<Message>,
    root: JsonPath,
}

impl MultiPath {
    /// Creates a merged tree from the raw message sequences of both branches.
    pub(crate) fn new(left: NonEmptyVec<Message>, right: NonEmptyVec<Message>) -> Self {
        let root = JsonPath::common_prefix(left.iter().chain(right.iter()).map(|m| &m.path));
        let left = rebase_all(left, &root);
        let right = rebase_all(right, &root);
        Self { left, right, root }
    }

    /// The common path prefix of every message on both sides.
    pub fn root(&self) -> &JsonPath {
        &self.root
    }

    /// The left branch's messages, relative to `root`.
    pub fn left(&self) -> &NonEmptyVec<Message> {
        &self.left
    }

    /// The right branch's messages, relative to `root`.
    pub fn right(&self) -> &NonEmptyVec<Message> {
        &self.right
    }

    /// Renders both branches as one nested mapping.
    ///
    /// Each branch's messages deep-merge into a single mapping; the pair of
    /// branch mappings sits in a two-element array at `root.or`.
    pub fn to_h(&self) -> Value {
        let branches = json!([merge(&self.left), merge(&self.right)]);
        self.root.push_field(OR).wrap(branches)
    }

    /// Renders this tree as a compact string.
    ///
    /// A merged tree has no single sentence form, so this is the JSON
    /// serialization of [`to_h`](MultiPath::to_h).
    pub fn dump(&self) -> String {
        self.to_h().to_string()
    }
}

/// Equality considers only the rebased message sequences.
impl PartialEq for MultiPath {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right
    }
}

fn rebase_all(messages: NonEmptyVec<Message>, root: &JsonPath) -> NonEmptyVec<Message> {
    let rebased: Vec<Message> = messages.iter().map(|m| m.rebase(root)).collect();
    NonEmptyVec::from_vec(rebased).expect("rebasing preserves non-emptiness")
}

fn merge(messages: &NonEmptyVec<Message>) -> Value {
    messages
        .iter()
        .fold(json!({}), |acc, m| deep_merge(acc, m.to_h()))
}
