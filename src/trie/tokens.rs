// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Conversion of caller input into token sequences.
//!
//! Strings are split on whitespace; every other sequence is taken token by token
//! without re-splitting, so a slice such as `["new york"]` is a single token.

use std::str::SplitWhitespace;

/// Types that can be turned into a sequence of tokens.
pub trait IntoTokens {
    /// A single token.
    type Token: AsRef<str>;

    /// Iterator over the tokens.
    type IntoIter: Iterator<Item = Self::Token>;

    /// Converts `self` into its tokens.
    fn into_tokens(self) -> Self::IntoIter;
}

impl<'a> IntoTokens for &'a str {
    type Token = &'a str;
    type IntoIter = SplitWhitespace<'a>;

    fn into_tokens(self) -> Self::IntoIter {
        self.split_whitespace()
    }
}

impl<'a> IntoTokens for &'a String {
    type Token = &'a str;
    type IntoIter = SplitWhitespace<'a>;

    fn into_tokens(self) -> Self::IntoIter {
        self.split_whitespace()
    }
}

impl IntoTokens for String {
    type Token = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_tokens(self) -> Self::IntoIter {
        self.split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<'a, S: AsRef<str>> IntoTokens for &'a [S] {
    type Token = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_tokens(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: AsRef<str>, const N: usize> IntoTokens for &'a [S; N] {
    type Token = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_tokens(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>, const N: usize> IntoTokens for [S; N] {
    type Token = S;
    type IntoIter = std::array::IntoIter<S, N>;

    fn into_tokens(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<'a, S: AsRef<str>> IntoTokens for &'a Vec<S> {
    type Token = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_tokens(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> IntoTokens for Vec<S> {
    type Token = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_tokens(self) -> Self::IntoIter {
        self.into_iter()
    }
}

/// Wraps any iterable of string-like items as a pre-tokenized sequence.
///
/// Useful for streaming tokens from a reader or a tokenizer without collecting
/// them first:
///
/// ```
/// use wordtrie::{Tokens, WordTrie};
///
/// let mut trie = WordTrie::new();
/// trie.add("new york", 1);
///
/// let stream = "i love new york".split(' ');
/// assert_eq!(trie.search(Tokens(stream)), vec![&1]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<I>(pub I);

impl<I> IntoTokens for Tokens<I>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    type Token = I::Item;
    type IntoIter = I::IntoIter;

    fn into_tokens(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
