//! Field path representation for locating failures in nested structures.
//!
//! This module provides [`JsonPath`] and [`PathSegment`] for addressing the
//! value a validation message refers to, plus the path algebra the combining
//! layer relies on: common-prefix computation across many paths, rebasing a
//! path relative to a prefix, and wrapping a value into a nested mapping
//! shaped by a path.

use std::fmt::{self, Display};

use serde_json::{Map, Value};

/// A segment of a field path.
///
/// Paths are built from segments that represent either field access or array
/// indexing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Returns this segment as a mapping key.
    ///
    /// Index segments are keyed by their decimal form since JSON object keys
    /// are strings.
    fn as_key(&self) -> String {
        match self {
            PathSegment::Field(name) => name.clone(),
            PathSegment::Index(idx) => idx.to_string(),
        }
    }
}

/// A path to a value in a nested JSON-like structure.
///
/// `JsonPath` represents locations like `users[0].email`. Paths are immutable;
/// every operation returns a new path.
///
/// # Example
///
/// ```rust
/// use disjunct::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Returns true if this path begins with all of `prefix`'s segments.
    ///
    /// The root path is a prefix of every path.
    pub fn starts_with(&self, prefix: &JsonPath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Returns this path with a matching leading `prefix` removed.
    ///
    /// If `prefix` does not match, the path is returned unchanged.
    pub fn strip_prefix(&self, prefix: &JsonPath) -> Self {
        if self.starts_with(prefix) {
            Self {
                segments: self.segments[prefix.segments.len()..].to_vec(),
            }
        } else {
            self.clone()
        }
    }

    /// Returns the concatenation of this path and `other`.
    pub fn join(&self, other: &JsonPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Computes the longest leading segment sequence shared by all `paths`.
    ///
    /// Returns the root path when `paths` is empty or the paths share no
    /// leading segments.
    pub fn common_prefix<'a>(paths: impl IntoIterator<Item = &'a JsonPath>) -> Self {
        let mut iter = paths.into_iter();
        let Some(first) = iter.next() else {
            return Self::root();
        };

        let mut shared = first.segments.clone();
        for path in iter {
            let matched = shared
                .iter()
                .zip(path.segments.iter())
                .take_while(|(a, b)| a == b)
                .count();
            shared.truncate(matched);
            if shared.is_empty() {
                break;
            }
        }

        Self { segments: shared }
    }

    /// Wraps `value` in nested objects shaped by this path.
    ///
    /// Each segment becomes an object key (index segments use their decimal
    /// form); the innermost value is `value`. The root path returns `value`
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use disjunct::JsonPath;
    /// use serde_json::json;
    ///
    /// let path = JsonPath::root().push_field("user").push_field("age");
    /// assert_eq!(path.wrap(json!("must be positive")),
    ///            json!({"user": {"age": "must be positive"}}));
    /// ```
    pub fn wrap(&self, value: Value) -> Value {
        self.segments.iter().rev().fold(value, |acc, segment| {
            let mut map = Map::new();
            map.insert(segment.as_key(), acc);
            Value::Object(map)
        })
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
