//! "Drop myself" block loot tables.

use log::debug;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::Result;
use crate::parser::validate_name;
use crate::template::{ensure_resolved, fill, Template};

const LOOT_TABLE: Template = Template::new(
    "block_loot_table",
    r#"{
        "type": "minecraft:block",
        "pools": [
            {
                "name": null,
                "rolls": 1,
                "entries": [ { "type": "minecraft:item", "name": null } ],
                "conditions": [ { "condition": "minecraft:survives_explosion" } ]
            }
        ]
    }"#,
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootRequest {
    pub block: String,
}

impl LootRequest {
    pub fn new(block: String) -> Result<Self> {
        validate_name(&block)?;
        Ok(Self { block })
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let mut doc = LOOT_TABLE.instantiate()?;
        fill(&mut doc, "/pools/0/name", self.block.as_str())?;
        fill(&mut doc, "/pools/0/entries/0/name", ctx.id(&self.block))?;
        ensure_resolved(&doc, &LOOT_TABLE)?;
        debug!("Resolved loot table '{}'", self.block);
        Ok(vec![OutputDocument::json("", &self.block, doc, KeyOrder::Inserted)])
    }
}
