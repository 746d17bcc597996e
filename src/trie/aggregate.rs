// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ready-made aggregators for [`WordTrie::add_with`](super::WordTrie::add_with).
//!
//! An aggregator receives `(existing, new)` and returns the value to store. It is
//! only consulted when the phrase already holds a value.

use std::ops::Add;

/// Last write wins. This is what [`WordTrie::add`](super::WordTrie::add) uses.
pub fn replace<V>(_old: V, new: V) -> V {
    new
}

/// First write wins.
pub fn keep_first<V>(old: V, _new: V) -> V {
    old
}

/// Adds the values, e.g. to count phrase occurrences.
pub fn sum<V: Add<Output = V>>(old: V, new: V) -> V {
    old + new
}

/// Appends the new items after the existing ones.
pub fn concat<T>(mut old: Vec<T>, new: Vec<T>) -> Vec<T> {
    old.extend(new);
    old
}
