//! Document generators, one module per resource category.
//!
//! Every generator is a pure function from a request and a [`Context`] to a
//! list of [`OutputDocument`]s. Nothing here touches the filesystem; writing
//! is left to the processor.

use serde_json::Value;

use crate::context::{Category, Context};
use crate::document::OutputDocument;
use crate::error::Result;
use crate::template::{ensure_resolved, fill, push, remove, Template};

pub mod advancement;
pub mod blockstate;
pub mod loot;
pub mod machine;
pub mod model;
pub mod recipe;
pub mod storage;
pub mod tools;

use advancement::AdvancementRequest;
use blockstate::BlockstateRequest;
use loot::LootRequest;
use machine::MachineRequest;
use model::ModelRequest;
use recipe::RecipeRequest;
use storage::StorageRequest;
use tools::ToolsRequest;

const FLAG_CONDITION: Template = Template::new("flag_condition", r#"{ "type": null, "flag": null }"#);

/// A validated request for one generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Blockstate(BlockstateRequest),
    Model(ModelRequest),
    Recipe(RecipeRequest),
    Machine(MachineRequest),
    Storage(StorageRequest),
    Tools(ToolsRequest),
    Loot(LootRequest),
    Advancement(AdvancementRequest),
}

impl Request {
    /// The directory category the request must be run in.
    pub fn category(&self) -> Category {
        match self {
            Request::Blockstate(_) => Category::Blockstates,
            Request::Model(_) => Category::Models,
            Request::Recipe(_) | Request::Machine(_) | Request::Storage(_) | Request::Tools(_) => {
                Category::Recipes
            }
            Request::Loot(_) => Category::LootTables,
            Request::Advancement(_) => Category::Advancements,
        }
    }

    /// Resolves every document of the request.
    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        match self {
            Request::Blockstate(request) => request.generate(ctx),
            Request::Model(request) => request.generate(ctx),
            Request::Recipe(request) => request.generate(ctx),
            Request::Machine(request) => request.generate(ctx),
            Request::Storage(request) => request.generate(ctx),
            Request::Tools(request) => request.generate(ctx),
            Request::Loot(request) => request.generate(ctx),
            Request::Advancement(request) => request.generate(ctx),
        }
    }

    /// Lines shown before asking for confirmation. `None` writes without asking.
    pub fn summary(&self, ctx: &Context) -> Option<Vec<String>> {
        match self {
            Request::Storage(request) => Some(request.summary(ctx)),
            Request::Tools(request) => Some(request.summary(ctx)),
            _ => None,
        }
    }
}

/// Appends the namespace flag condition, or drops the `conditions` field.
pub(crate) fn apply_condition(doc: &mut Value, ctx: &Context, enabled: bool) -> Result<()> {
    if !enabled {
        remove(doc, "conditions");
        return Ok(());
    }
    let mut condition = FLAG_CONDITION.instantiate()?;
    fill(&mut condition, "/type", ctx.id("flag"))?;
    fill(&mut condition, "/flag", format!("{}_enabled", ctx.namespace))?;
    ensure_resolved(&condition, &FLAG_CONDITION)?;
    push(doc, "/conditions", condition)
}
