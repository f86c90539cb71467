//! Recipe unlock advancements, granted when the player picks up an item.

use log::debug;
use serde_json::Value;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::{Error, Result};
use crate::parser::{id_path, validate_name};
use crate::template::{ensure_resolved, fill, Template};

const ADVANCEMENT: Template = Template::new(
    "recipe_advancement",
    r#"{
        "parent": null,
        "rewards": { "recipes": null },
        "criteria": {
            "has_item": {
                "trigger": "minecraft:inventory_changed",
                "conditions": { "items": [ { "item": null } ] }
            }
        },
        "requirements": [ [ "has_item" ] ]
    }"#,
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancementRequest {
    pub item: String,
    pub recipes: Vec<String>,
    pub output: Option<String>,
}

impl AdvancementRequest {
    pub fn new(item: String, recipes: Vec<String>, output: Option<String>) -> Result<Self> {
        if recipes.is_empty() {
            return Err(Error::ValidationError("at least one recipe is required".to_string()));
        }
        for id in recipes.iter().chain(std::iter::once(&item)) {
            validate_name(id_path(id))?;
        }
        if let Some(output) = &output {
            validate_name(output)?;
        }
        Ok(Self {
            item,
            recipes,
            output,
        })
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let recipes: Vec<Value> = self.recipes.iter().map(|r| ctx.qualify(r).into()).collect();

        let mut doc = ADVANCEMENT.instantiate()?;
        fill(&mut doc, "/parent", ctx.id("recipes/root"))?;
        fill(&mut doc, "/rewards/recipes", recipes)?;
        fill(
            &mut doc,
            "/criteria/has_item/conditions/items/0/item",
            ctx.qualify(&self.item),
        )?;
        ensure_resolved(&doc, &ADVANCEMENT)?;

        let stem = self
            .output
            .clone()
            .unwrap_or_else(|| id_path(&self.item).to_string());
        debug!("Resolved advancement '{}'", stem);
        Ok(vec![OutputDocument::json("", &stem, doc, KeyOrder::Inserted)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Category;
    use serde_json::json;

    #[test]
    fn test_advancement() {
        let ctx = Context::new("ironworks", "out", Category::Advancements).unwrap();
        let request = AdvancementRequest::new(
            "ironworks:steel_ingot".to_string(),
            vec!["steel_block".to_string(), "minecraft:iron_bars".to_string()],
            None,
        )
        .unwrap();
        let docs = request.generate(&ctx).unwrap();
        assert_eq!(docs[0].path.to_string_lossy(), "steel_ingot.json");
        let doc = &docs[0].content;
        assert_eq!(doc["parent"], "ironworks:recipes/root");
        assert_eq!(
            doc["rewards"]["recipes"],
            json!(["ironworks:steel_block", "minecraft:iron_bars"])
        );
        assert_eq!(
            doc["criteria"]["has_item"]["conditions"]["items"],
            json!([{"item": "ironworks:steel_ingot"}])
        );
    }
}
