// SPDX-FileCopyrightText: 2025-2026 tick contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Opaque server-assigned todo identifier.
///
/// The backend assigns ids and the client never invents them. Backends
/// disagree on the wire form (some send numbers, some strings), so
/// deserialization accepts both; the id is carried and displayed as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a new `TodoId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TodoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for TodoId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = TodoId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(TodoId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(TodoId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(TodoId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A single task record with a title and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier, immutable once assigned.
    pub id: TodoId,
    /// Title of the todo, non-empty.
    pub title: String,
    /// Whether the todo is completed.
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_id() {
        let todo: Todo =
            serde_json::from_str(r#"{"id": 1, "title": "Todo 1", "completed": false}"#).unwrap();
        assert_eq!(todo.id, TodoId::from("1"));
        assert_eq!(todo.title, "Todo 1");
        assert!(!todo.completed);
    }

    #[test]
    fn deserializes_string_id() {
        let todo: Todo =
            serde_json::from_str(r#"{"id": "a1b2", "title": "Todo", "completed": true}"#).unwrap();
        assert_eq!(todo.id, TodoId::from("a1b2"));
        assert!(todo.completed);
    }

    #[test]
    fn rejects_missing_fields() {
        let result = serde_json::from_str::<Todo>(r#"{"id": 1, "title": "Todo 1"}"#);
        assert!(result.is_err());
    }
}
