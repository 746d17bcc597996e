// Copyright (c) 2025 WordTrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON import and export of whole tries.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::de::{IoRead, StrRead};
use serde_json::ser::PrettyFormatter;

use super::node::TrieNode;
use super::WordTrie;
use crate::config::ExportConfig;
use crate::error::{WordTrieError, WordTrieResult};

/// Serializes `value` as JSON laid out according to `config`.
fn write_json<W: Write, T: Serialize>(
    writer: W,
    value: &T,
    config: &ExportConfig,
) -> serde_json::Result<()> {
    if config.pretty {
        let indent = " ".repeat(config.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        value.serialize(&mut serializer)
    } else {
        serde_json::to_writer(writer, value)
    }
}

/// Parses a root node from `read`.
///
/// The nesting limit is lifted because every token of a phrase adds a level;
/// the node codec grows the stack as it descends.
fn read_json<'de, R, V>(read: R) -> serde_json::Result<TrieNode<V>>
where
    R: serde_json::de::Read<'de>,
    V: DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::new(read);
    deserializer.disable_recursion_limit();
    let root = TrieNode::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(root)
}

impl<V: Serialize> WordTrie<V> {
    /// Writes the trie to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// * [`WordTrieError::DestinationUnwritable`] - The file cannot be created or written.
    /// * [`WordTrieError::Serialization`] - A value failed to serialize.
    pub fn export_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        config: &ExportConfig,
    ) -> WordTrieResult<()> {
        let path = path.as_ref();
        let unwritable = |source| WordTrieError::DestinationUnwritable {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(unwritable)?);
        write_json(&mut writer, &self.root, config)
            .map_err(|e| WordTrieError::from_write(path.to_path_buf(), e))?;
        writer.flush().map_err(unwritable)?;

        tracing::debug!(path = %path.display(), phrases = self.len(), "word trie exported");
        Ok(())
    }

    /// Writes the trie to `writer`.
    pub fn export_to_writer<W: Write>(&self, writer: W, config: &ExportConfig) -> WordTrieResult<()> {
        write_json(writer, &self.root, config).map_err(|e| {
            if e.is_io() {
                WordTrieError::Io(e.into())
            } else {
                WordTrieError::Serialization(e)
            }
        })
    }

    /// Renders the trie as a JSON string.
    pub fn to_json_string(&self, config: &ExportConfig) -> WordTrieResult<String> {
        let mut buffer = Vec::new();
        self.export_to_writer(&mut buffer, config)?;
        String::from_utf8(buffer).map_err(|e| WordTrieError::Custom(e.to_string()))
    }
}

impl<V: DeserializeOwned> WordTrie<V> {
    /// Replaces the contents of the trie with the trie stored at `path`.
    ///
    /// On error the current contents are left untouched.
    ///
    /// # Errors
    ///
    /// * [`WordTrieError::SourceUnreadable`] - The file cannot be opened or read.
    /// * [`WordTrieError::MalformedData`] - The file is not a valid trie encoding.
    pub fn import_from_path<P: AsRef<Path>>(&mut self, path: P) -> WordTrieResult<&mut Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordTrieError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let root: TrieNode<V> = read_json(IoRead::new(BufReader::new(file)))
            .map_err(|e| WordTrieError::from_read(path.to_path_buf(), e))?;
        self.root = root;

        tracing::debug!(path = %path.display(), phrases = self.len(), "word trie imported");
        Ok(self)
    }

    /// Replaces the contents of the trie with the trie read from `reader`.
    pub fn import_from_reader<R: Read>(&mut self, reader: R) -> WordTrieResult<&mut Self> {
        let root: TrieNode<V> = read_json(IoRead::new(reader)).map_err(|e| {
            if e.is_io() {
                WordTrieError::Io(e.into())
            } else {
                WordTrieError::MalformedData(e)
            }
        })?;
        self.root = root;
        Ok(self)
    }

    /// Loads a trie from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> WordTrieResult<Self> {
        let mut trie = Self::new();
        trie.import_from_path(path)?;
        Ok(trie)
    }

    /// Parses a trie from its JSON encoding.
    pub fn from_json_str(json: &str) -> WordTrieResult<Self> {
        let root = read_json(StrRead::new(json)).map_err(WordTrieError::MalformedData)?;
        Ok(Self::from_root(root))
    }
}
