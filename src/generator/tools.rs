//! Tool and armor recipe sets for a material, optionally with its storage set.

use indexmap::IndexMap;
use log::debug;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::Result;
use crate::generator::recipe::{finish, shaped, SHAPED};
use crate::generator::storage::{StorageRequest, DEFAULT_BLOCK, DEFAULT_ITEM};
use crate::parser::{pattern_symbols, validate_name, Ingredient};

/// Handle ingredient of every tool.
pub const ROD_TAG: &str = "forge:rods/wooden";

pub const TOOLS: [(&str, &[&str]); 6] = [
    ("axe", &["SS ", "ST ", " T "]),
    ("hoe", &["SS ", " T ", " T "]),
    ("pickaxe", &["SSS", " T ", " T "]),
    ("shears", &["S ", " S"]),
    ("shovel", &[" S ", " T ", " T "]),
    ("sword", &[" S ", " S ", " T "]),
];

pub const ARMOR: [(&str, &[&str]); 4] = [
    ("boots", &["S S", "S S"]),
    ("chestplate", &["S S", "SSS", "SSS"]),
    ("helmet", &["SSS", "S S"]),
    ("leggings", &["SSS", "S S", "S S"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsRequest {
    pub prefix: String,
    pub armor: bool,
    pub storage: bool,
    pub conditions: bool,
}

impl ToolsRequest {
    pub fn new(prefix: String, armor: bool, storage: bool, conditions: bool) -> Result<Self> {
        validate_name(&prefix)?;
        Ok(Self {
            prefix,
            armor,
            storage,
            conditions,
        })
    }

    fn equipment(&self) -> Vec<(&'static str, &'static [&'static str])> {
        let mut items = TOOLS.to_vec();
        if self.armor {
            items.extend(ARMOR);
        }
        items
    }

    fn storage_request(&self) -> Result<Option<StorageRequest>> {
        if !self.storage {
            return Ok(None);
        }
        StorageRequest::new(
            self.prefix.clone(),
            DEFAULT_ITEM.to_string(),
            DEFAULT_BLOCK.to_string(),
            true,
            false,
            false,
            self.conditions,
        )
        .map(Some)
    }

    /// Ingredient behind each pattern symbol.
    pub fn keys(&self, ctx: &Context) -> IndexMap<char, Ingredient> {
        IndexMap::from([
            ('S', Ingredient::Item(ctx.id(&format!("{}_{}", self.prefix, DEFAULT_ITEM)))),
            ('T', Ingredient::Tag(ROD_TAG.to_string())),
        ])
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let keys = self.keys(ctx);
        let mut documents = Vec::new();
        for (tool, pattern) in self.equipment() {
            let stem = format!("{}_{}", self.prefix, tool);
            let rows: Vec<String> = pattern.iter().map(|row| row.to_string()).collect();
            let symbols = pattern_symbols(&rows);
            let mut used = keys.clone();
            used.retain(|symbol, _| symbols.contains(symbol));
            let doc = shaped(&rows, &used, &ctx.id(&stem), 1)?;
            let doc = finish(doc, &SHAPED, ctx, self.conditions)?;
            debug!("Resolved tool recipe '{}'", stem);
            documents.push(OutputDocument::json("", &stem, doc, KeyOrder::Sorted));
        }
        if let Some(storage) = self.storage_request()? {
            documents.extend(storage.generate(ctx)?);
        }
        Ok(documents)
    }

    pub fn summary(&self, ctx: &Context) -> Vec<String> {
        let mut lines = vec![format!(
            "Generating {} recipes for mod {}:",
            self.prefix, ctx.namespace
        )];
        lines.extend(
            self.equipment()
                .into_iter()
                .map(|(tool, _)| format!("\t{}_{}", self.prefix, tool)),
        );
        if let Ok(Some(storage)) = self.storage_request() {
            lines.extend(storage.file_stems().into_iter().map(|stem| format!("\t{stem}")));
        }
        for (symbol, ingredient) in self.keys(ctx) {
            let kind = if ingredient.is_tag() { "tag" } else { "item" };
            lines.push(format!("{symbol} will be {kind} {}", ingredient.id()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Category;
    use serde_json::json;

    fn ctx() -> Context {
        Context::new("ironworks", "out", Category::Recipes).unwrap()
    }

    #[test]
    fn test_tools_only() {
        let request = ToolsRequest::new("steel".to_string(), false, false, false).unwrap();
        let docs = request.generate(&ctx()).unwrap();
        assert_eq!(docs.len(), 6);
        let shears = docs.iter().find(|d| d.path.to_string_lossy() == "steel_shears.json").unwrap();
        assert_eq!(shears.content["pattern"], json!(["S ", " S"]));
        assert_eq!(shears.content["key"], json!({"S": {"item": "ironworks:steel_ingot"}}));
        assert_eq!(shears.content["result"], json!({"item": "ironworks:steel_shears"}));
    }

    #[test]
    fn test_armor_and_storage() {
        let request = ToolsRequest::new("steel".to_string(), true, true, false).unwrap();
        let docs = request.generate(&ctx()).unwrap();
        assert_eq!(docs.len(), 6 + 4 + 4);
        let axe = &docs[0].content;
        assert_eq!(axe["key"]["T"], json!({"tag": "forge:rods/wooden"}));
        assert!(docs.iter().any(|d| d.path.to_string_lossy() == "steel_ingot_from_nuggets.json"));
    }

    #[test]
    fn test_summary_lists_keys() {
        let request = ToolsRequest::new("steel".to_string(), false, true, false).unwrap();
        let lines = request.summary(&ctx());
        assert!(lines.contains(&"\tsteel_sword".to_string()));
        assert!(lines.contains(&"\tsteel_nugget".to_string()));
        assert!(lines.contains(&"T will be tag forge:rods/wooden".to_string()));
    }
}
