//! Output context for a generator run.
//!
//! Generators only see a [`Context`]: the namespace that qualifies every
//! identifier, the directory documents are written under and the category it
//! belongs to. [`Context::from_dir`] is the adapter that derives one from a
//! resource directory such as `src/main/resources/data/<namespace>/recipes`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

static NAMESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]+$").expect("valid namespace regex"));

/// The kind of resource directory a generator writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Blockstates,
    Models,
    Recipes,
    LootTables,
    Advancements,
}

impl Category {
    /// Path segments below the namespace directory, outermost first.
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Category::Blockstates => &["blockstates"],
            Category::Models => &["models"],
            Category::Recipes => &["recipes"],
            Category::LootTables => &["loot_tables", "blocks"],
            Category::Advancements => &["advancements", "recipes"],
        }
    }

    /// The directory above the namespace directory.
    pub fn root(&self) -> &'static str {
        match self {
            Category::Blockstates | Category::Models => "assets",
            Category::Recipes | Category::LootTables | Category::Advancements => "data",
        }
    }

    /// Human readable form of the expected layout, e.g. `data/<namespace>/recipes`.
    pub fn expected_layout(&self) -> String {
        format!("{}/<namespace>/{}", self.root(), self.segments().join("/"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

/// Read-only information every generator resolves identifiers against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub namespace: String,
    pub output_root: PathBuf,
    pub category: Category,
}

impl Context {
    /// Creates a context explicitly, validating only the namespace.
    pub fn new<S, P>(namespace: S, output_root: P, category: Category) -> Result<Self>
    where
        S: Into<String>,
        P: Into<PathBuf>,
    {
        let namespace = namespace.into();
        if !NAMESPACE_RE.is_match(&namespace) {
            return Err(Error::ContextError(format!(
                "'{namespace}' is not a valid namespace"
            )));
        }
        Ok(Self {
            namespace,
            output_root: output_root.into(),
            category,
        })
    }

    /// Derives the context from a resource directory.
    ///
    /// The innermost segments of `dir` must match the category segments, the
    /// segment above them is taken as the namespace, and the one above that
    /// must be the category root (`assets` or `data`).
    ///
    /// # Errors
    /// * `Error::ContextError` naming the first segment that does not match
    pub fn from_dir<P: AsRef<Path>>(dir: P, category: Category) -> Result<Self> {
        let dir = dir.as_ref();
        let mut names = dir
            .components()
            .rev()
            .map(|component| component.as_os_str().to_string_lossy().into_owned());

        for expected in category.segments().iter().rev() {
            match names.next() {
                Some(found) if found == *expected => {}
                found => {
                    return Err(mismatch(category, expected, found));
                }
            }
        }

        let namespace = names
            .next()
            .ok_or_else(|| mismatch(category, "<namespace>", None))?;

        match names.next() {
            Some(found) if found == category.root() => {}
            found => return Err(mismatch(category, category.root(), found)),
        }

        debug!("Resolved namespace '{}' from {}", namespace, dir.display());
        Self::new(namespace, dir, category)
    }

    /// `namespace:path`
    pub fn id(&self, path: &str) -> String {
        format!("{}:{}", self.namespace, path)
    }

    /// `namespace:block/name`
    pub fn block(&self, name: &str) -> String {
        format!("{}:block/{}", self.namespace, name)
    }

    /// `namespace:item/name`
    pub fn item(&self, name: &str) -> String {
        format!("{}:item/{}", self.namespace, name)
    }

    /// Returns `id` unchanged when it carries a namespace, otherwise qualifies it.
    pub fn qualify(&self, id: &str) -> String {
        if id.contains(':') {
            id.to_string()
        } else {
            self.id(id)
        }
    }
}

fn mismatch(category: Category, expected: &str, found: Option<String>) -> Error {
    let found = found.map_or_else(|| "nothing".to_string(), |f| format!("'{f}'"));
    Error::ContextError(format!(
        "not in {} directory: expected '{}', found {}",
        category.expected_layout(),
        expected,
        found
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_recipes() {
        let ctx = Context::from_dir("/src/main/resources/data/ironworks/recipes", Category::Recipes)
            .unwrap();
        assert_eq!(ctx.namespace, "ironworks");
        assert_eq!(ctx.category, Category::Recipes);
    }

    #[test]
    fn test_from_dir_nested_category() {
        let ctx = Context::from_dir(
            "/res/data/ironworks/loot_tables/blocks",
            Category::LootTables,
        )
        .unwrap();
        assert_eq!(ctx.namespace, "ironworks");

        let err = Context::from_dir("/res/data/ironworks/blocks", Category::LootTables)
            .unwrap_err();
        assert!(err.to_string().contains("expected 'loot_tables'"));
    }

    #[test]
    fn test_from_dir_wrong_root() {
        let err = Context::from_dir("/res/assets/ironworks/recipes", Category::Recipes)
            .unwrap_err();
        assert!(err.to_string().contains("expected 'data', found 'assets'"));
    }

    #[test]
    fn test_from_dir_too_short() {
        let err = Context::from_dir("models", Category::Models).unwrap_err();
        assert!(err.to_string().contains("<namespace>"));
    }

    #[test]
    fn test_identifier_helpers() {
        let ctx = Context::new("ironworks", "out", Category::Models).unwrap();
        assert_eq!(ctx.block("steel_block"), "ironworks:block/steel_block");
        assert_eq!(ctx.item("steel_ingot"), "ironworks:item/steel_ingot");
        assert_eq!(ctx.qualify("steel_ingot"), "ironworks:steel_ingot");
        assert_eq!(ctx.qualify("minecraft:stick"), "minecraft:stick");
    }

    #[test]
    fn test_invalid_namespace() {
        assert!(Context::new("Iron Works", "out", Category::Models).is_err());
    }
}
