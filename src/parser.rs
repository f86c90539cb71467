//! Parsers for the compact values accepted on the command line.
//!
//! * crafting patterns: `"SSS"," T "," T "`
//! * pattern keys: `S=minecraft:iron_ingot;T=forge:rods/wooden`
//! * item stacks: `foo:bar`, `#forge:dusts/iron`, `foo:bar,2`, `foo:bar,0.1`

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

// Relative `/`-separated segments; `.` and `..` are rejected separately.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_.-]+(/[a-z0-9_.-]+)*$").expect("valid name regex")
});

/// Marks a tag reference in place of an item id.
pub const TAG_PREFIX: char = '#';

/// A direct item reference or a reference to a tag of items.
///
/// Serializes to `{"item": id}` or `{"tag": id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ingredient {
    Item(String),
    Tag(String),
}

impl Ingredient {
    /// Classifies a pattern key value: `#`-prefixed or path-like values are tags.
    pub fn from_key_value(value: &str) -> Result<Self> {
        if let Some(tag) = value.strip_prefix(TAG_PREFIX) {
            return Ok(Ingredient::Tag(non_empty_id(tag, value)?));
        }
        Ok(Ingredient::Item(non_empty_id(value, value)?).tag_if_path())
    }

    /// Path-like item ids such as `forge:rods/wooden` name tags.
    pub fn tag_if_path(self) -> Self {
        match self {
            Ingredient::Item(id) if id.contains('/') => Ingredient::Tag(id),
            other => other,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Ingredient::Item(id) | Ingredient::Tag(id) => id,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Ingredient::Tag(_))
    }
}

/// Optional suffix of an item stack token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Amount {
    Count(u32),
    Chance(f64),
}

/// An ingredient with an optional count or chance, e.g. `foo:bar_dust,0.1`.
///
/// Serializes flat: `{"item": "foo:bar_dust", "chance": 0.1}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStack {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl ItemStack {
    pub fn count(&self) -> Option<u32> {
        match self.amount {
            Some(Amount::Count(count)) => Some(count),
            _ => None,
        }
    }
}

impl FromStr for ItemStack {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split(',').collect();
        if parts.len() > 2 {
            return Err(Error::ValidationError(format!(
                "'{token}' has more than one ',' separator"
            )));
        }

        let raw_id = parts[0].trim();
        let ingredient = match raw_id.strip_prefix(TAG_PREFIX) {
            Some(tag) => Ingredient::Tag(non_empty_id(tag, token)?),
            None => Ingredient::Item(non_empty_id(raw_id, token)?),
        };

        let amount = match parts.get(1).map(|s| s.trim()) {
            None => None,
            Some(raw) if raw.contains('.') => {
                let chance: f64 = raw.parse().map_err(|_| {
                    Error::ValidationError(format!("'{raw}' in '{token}' is not a valid chance"))
                })?;
                if !(0.0..=1.0).contains(&chance) {
                    return Err(Error::ValidationError(format!(
                        "chance {chance} in '{token}' is outside 0.0..=1.0"
                    )));
                }
                Some(Amount::Chance(chance))
            }
            Some(raw) => {
                let count: u32 = raw.parse().map_err(|_| {
                    Error::ValidationError(format!("'{raw}' in '{token}' is not a valid count"))
                })?;
                if count == 0 {
                    return Err(Error::ValidationError(format!(
                        "count in '{token}' must be at least 1"
                    )));
                }
                Some(Amount::Count(count))
            }
        };

        Ok(ItemStack { ingredient, amount })
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ingredient.is_tag() {
            write!(f, "{TAG_PREFIX}")?;
        }
        write!(f, "{}", self.ingredient.id())?;
        match self.amount {
            Some(Amount::Count(count)) => write!(f, ",{count}"),
            Some(Amount::Chance(chance)) => write!(f, ",{chance}"),
            None => Ok(()),
        }
    }
}

fn non_empty_id(id: &str, token: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::ValidationError(format!("'{token}' has an empty id")));
    }
    Ok(id.to_string())
}

/// Splits a crafting pattern on `,` into rows.
///
/// Rows may be wrapped in double quotes. A pattern has 1 to 3 rows of equal
/// width, each 1 to 3 characters wide.
pub fn parse_pattern(pattern: &str) -> Result<Vec<String>> {
    let rows: Vec<String> = pattern
        .split(',')
        .map(|row| {
            let row = row.trim_matches(|c: char| c == '\n' || c == '\r');
            let trimmed = row.trim();
            if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
                trimmed[1..trimmed.len() - 1].to_string()
            } else {
                row.to_string()
            }
        })
        .collect();

    if rows.len() > 3 {
        return Err(Error::ValidationError(format!(
            "pattern '{pattern}' has {} rows, at most 3 are allowed",
            rows.len()
        )));
    }
    let width = rows[0].chars().count();
    if width == 0 || width > 3 {
        return Err(Error::ValidationError(format!(
            "pattern '{pattern}' rows must be 1 to 3 characters wide"
        )));
    }
    if rows.iter().any(|row| row.chars().count() != width) {
        return Err(Error::ValidationError(format!(
            "pattern '{pattern}' rows must all have the same width"
        )));
    }
    Ok(rows)
}

/// Parses `;`-separated `key=value` pattern keys, keeping their order.
pub fn parse_keys(keys: &str) -> Result<IndexMap<char, Ingredient>> {
    let mut parsed = IndexMap::new();
    for assignment in keys.split(';').filter(|a| !a.trim().is_empty()) {
        let parts: Vec<&str> = assignment.split('=').collect();
        let [key, value] = parts.as_slice() else {
            return Err(Error::ValidationError(format!(
                "key assignment '{assignment}' must have the form 'K=id'"
            )));
        };
        let mut chars = key.trim().chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c != ' ' => c,
            _ => {
                return Err(Error::ValidationError(format!(
                    "key '{key}' must be a single non-space character"
                )))
            }
        };
        if parsed
            .insert(key, Ingredient::from_key_value(value.trim())?)
            .is_some()
        {
            return Err(Error::ValidationError(format!("key '{key}' is assigned twice")));
        }
    }
    if parsed.is_empty() {
        return Err(Error::ValidationError(format!("no keys found in '{keys}'")));
    }
    Ok(parsed)
}

/// Symbols used by a pattern in first-seen order, ignoring spaces.
pub fn pattern_symbols(rows: &[String]) -> Vec<char> {
    let mut symbols = Vec::new();
    for c in rows.iter().flat_map(|row| row.chars()) {
        if c != ' ' && !symbols.contains(&c) {
            symbols.push(c);
        }
    }
    symbols
}

/// Checks a resource name such as `steel_block` or `tools/steel_axe`.
///
/// Names become paths below the output root, so absolute paths, empty
/// segments and `.` or `..` segments are rejected.
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_RE.is_match(name) && name.split('/').all(|segment| segment != "." && segment != "..") {
        Ok(())
    } else {
        Err(Error::ValidationError(format!(
            "'{name}' is not a valid name; use relative '/'-separated segments of lowercase letters, digits, '_', '-' and '.'"
        )))
    }
}

/// The path part of an id: `foo:bar` -> `bar`, `bar` -> `bar`.
pub fn id_path(id: &str) -> &str {
    id.rsplit_once(':').map_or(id, |(_, path)| path)
}
