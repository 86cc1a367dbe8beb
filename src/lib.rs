//! # Disjunct
//!
//! Combines the error results of disjunctive validations ("A or B") into one
//! composite, renderable message value.
//!
//! ## Overview
//!
//! When a value is checked against two alternative rules and both fail, the
//! two error trees have to be presented as a single failure. [`combine`]
//! decides how: a single joined sentence when both alternatives failed on the
//! same field, a merged nested tree when they failed on different sub-fields
//! of a shared parent, or a deterministic preference for one side when the
//! results are not comparable.
//!
//! ## Core Types
//!
//! - [`JsonPath`]: Paths to values in nested structures (e.g., `users[0].email`)
//! - [`Message`]: A single validation failure bound to a path
//! - [`MessageSet`]: One failure or a non-empty tree of failures
//! - [`Connectors`]: Read-only lookup of localized connector words
//! - [`Combined`]: The composite result, rendering via `dump`/`to_h`
//!
//! ## Example
//!
//! ```rust
//! use disjunct::{combine, Connectors, JsonPath, Message, MessageSet};
//! use serde_json::json;
//!
//! let left = MessageSet::from(Message::new(
//!     JsonPath::from_field("age"),
//!     "must be an integer",
//! ));
//! let right = MessageSet::from(Message::new(
//!     JsonPath::from_field("age"),
//!     "must be positive",
//! ));
//!
//! let combined = combine(left, right, &Connectors::with_or("or")).unwrap();
//! assert_eq!(
//!     combined.to_h(),
//!     json!({"age": "must be an integer or must be positive"})
//! );
//! ```

pub mod connector;
pub mod message;
pub mod or;
pub mod path;

pub use connector::{Connectors, MissingConnector, OR};
pub use message::{Message, MessageSet};
pub use or::{combine, Combined, MultiPath, SinglePath};
pub use path::{JsonPath, PathSegment};
