//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for canvas elements
///
/// Ids render as `node-` followed by exactly four lowercase hex digits.
/// Storing the suffix numerically makes format conformance structural:
/// there is no textual form of a `NodeId` that violates the id pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId(u16);

impl NodeId {
    /// Literal prefix of every id
    pub const PREFIX: &'static str = "node-";

    /// Number of hex digits after the prefix
    pub const SUFFIX_LEN: usize = 4;

    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    /// Find the first id-format substring in `text`
    ///
    /// Matching is case-sensitive and requires no word boundary, so an id
    /// embedded in a longer token still matches. Registry existence is not
    /// checked here.
    pub fn find_in(text: &str) -> Option<Self> {
        Self::matches(text).into_iter().next().map(|(_, id)| id)
    }

    /// Remove every id-format substring from `text`
    pub fn strip_all(text: &str) -> String {
        let span = Self::PREFIX.len() + Self::SUFFIX_LEN;
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, _) in Self::matches(text) {
            out.push_str(&text[cursor..start]);
            cursor = start + span;
        }
        out.push_str(&text[cursor..]);
        out
    }

    /// Non-overlapping left-to-right matches of the id pattern
    fn matches(text: &str) -> Vec<(usize, Self)> {
        let bytes = text.as_bytes();
        let mut found = Vec::new();
        let mut i = 0;
        while let Some(pos) = text[i..].find(Self::PREFIX) {
            let start = i + pos;
            let suffix_start = start + Self::PREFIX.len();
            let suffix_end = suffix_start + Self::SUFFIX_LEN;
            if suffix_end > bytes.len() {
                break;
            }
            match Self::decode_suffix(&bytes[suffix_start..suffix_end]) {
                Some(value) => {
                    found.push((start, Self(value)));
                    i = suffix_end;
                }
                None => i = start + 1,
            }
        }
        found
    }

    /// Decode exactly four lowercase hex digits; uppercase is rejected
    fn decode_suffix(bytes: &[u8]) -> Option<u16> {
        let mut value: u16 = 0;
        for &b in bytes {
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => return None,
            };
            value = (value << 4) | u16::from(digit);
        }
        Some(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04x}", Self::PREFIX, self.0)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suffix = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| format!("invalid node id: {}", s))?;
        if suffix.len() != Self::SUFFIX_LEN {
            return Err(format!("invalid node id: {}", s));
        }
        Self::decode_suffix(suffix.as_bytes())
            .map(Self)
            .ok_or_else(|| format!("invalid node id: {}", s))
    }
}

impl TryFrom<String> for NodeId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
