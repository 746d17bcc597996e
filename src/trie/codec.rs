// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Serde encoding of trie nodes.
//!
//! A node is written as a map. The reserved key `"#"` holds the node's value and
//! every other key is a child token. Tokens that start with `"#"` are escaped by
//! prepending one more `"#"`, so `"#"` becomes `"##"` and `"#tag"` becomes
//! `"##tag"`. This matches files written by earlier releases byte for byte (up to
//! key order) and keeps the reserved key unambiguous.
//!
//! Nodes with neither a value nor children are dropped while reading. Such
//! nodes are never written, but a hand-edited file containing one can search
//! differently once loaded: with `{"a": {"#": 1, "b": {}}}` the stream `a b`
//! finds `1`, because the empty `b` branch no longer absorbs the second token.
//!
//! Each token of a phrase adds one level of nesting. Both directions grow the
//! stack on demand, so phrase length is bounded by memory rather than by the
//! thread's stack size.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::node::TrieNode;

/// Key under which a node stores its value.
pub const VALUE_KEY: &str = "#";

/// Remaining stack below which a nested node is handled on a fresh segment.
const RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated for deep nesting.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Escapes a token for use as a map key.
pub(crate) fn escape_token(token: &str) -> Cow<'_, str> {
    if token.starts_with(VALUE_KEY) {
        Cow::Owned(format!("{VALUE_KEY}{token}"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Reverses [`escape_token`] for any key other than [`VALUE_KEY`].
///
/// Returns `None` for keys that escaping can never produce, such as `"#tag"`.
pub(crate) fn unescape_key(key: &str) -> Option<&str> {
    match key.strip_prefix(VALUE_KEY) {
        None => Some(key),
        Some(rest) if rest.starts_with(VALUE_KEY) => Some(rest),
        Some(_) => None,
    }
}

impl<V: Serialize> Serialize for TrieNode<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.children.len() + usize::from(self.value.is_some());
        let mut map = serializer.serialize_map(Some(len))?;

        if let Some(value) = &self.value {
            map.serialize_entry(VALUE_KEY, value)?;
        }

        // Sorted so that exports are reproducible.
        let mut children: Vec<_> = self.children.iter().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (token, child) in children {
            stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || {
                map.serialize_entry(&escape_token(token), child)
            })?;
        }

        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for TrieNode<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodeVisitor(PhantomData))
    }
}

struct NodeVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for NodeVisitor<V> {
    type Value = TrieNode<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of tokens to trie nodes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut node = TrieNode::new();

        while let Some(key) = access.next_key::<String>()? {
            if key == VALUE_KEY {
                node.value = Some(access.next_value()?);
                continue;
            }

            let token = unescape_key(&key).ok_or_else(|| {
                <A::Error as de::Error>::custom(format_args!(
                    "key {key:?} starts with the reserved prefix {VALUE_KEY:?} but is not escaped"
                ))
            })?;
            let child: TrieNode<V> =
                stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || {
                    access.next_value::<TrieNode<V>>()
                })?;

            // Empty nodes never arise from insertion and match nothing.
            if child.is_vacant() {
                node.children.remove(token);
            } else {
                node.children.insert(token.to_owned(), child);
            }
        }

        Ok(node)
    }
}
