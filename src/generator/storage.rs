//! Storage recipe sets: block, item (ingot by default), nugget and chunk tiers.
//!
//! The recipes form a small graph. Block and item convert into each other
//! (9 items per block), as do item and nugget. The optional chunk tiers are
//! built from nuggets and break back down into them.

use indexmap::IndexMap;
use log::debug;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::{Error, Result};
use crate::generator::recipe::{finish, shaped, shapeless, SHAPED, SHAPELESS};
use crate::parser::{validate_name, Ingredient};

pub const DEFAULT_ITEM: &str = "ingot";
pub const DEFAULT_BLOCK: &str = "block";

const BLOCK_PATTERN: [&str; 3] = ["SSS", "SSS", "SSS"];
const NUGGET_PATTERN: [&str; 3] = ["###", "###", "###"];
const LARGE_CHUNK_PATTERN: [&str; 3] = ["###", "# #", "###"];

/// One recipe of a storage set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageRecipe {
    Block,
    Item,
    ItemFromNuggets,
    Nugget,
    LargeChunk,
    NuggetsFromLargeChunk,
    MediumChunk,
    NuggetsFromMediumChunk,
}

enum Shape {
    Shaped(&'static [&'static str; 3], char),
    Shapeless,
}

/// How a single recipe is put together.
struct Plan {
    stem: String,
    shape: Shape,
    ingredient: String,
    result: String,
    count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRequest {
    pub material: String,
    pub item: String,
    pub block: String,
    pub nuggets: bool,
    pub large_chunk: bool,
    pub medium_chunk: bool,
    pub conditions: bool,
}

impl StorageRequest {
    pub fn new(
        material: String,
        item: String,
        block: String,
        nuggets: bool,
        large_chunk: bool,
        medium_chunk: bool,
        conditions: bool,
    ) -> Result<Self> {
        for name in [&material, &item, &block] {
            validate_name(name)?;
        }
        if (large_chunk || medium_chunk) && !nuggets {
            return Err(Error::ValidationError(
                "chunk recipes need the nugget recipes".to_string(),
            ));
        }
        if medium_chunk && !large_chunk {
            return Err(Error::ValidationError(
                "medium chunk recipes need the large chunk recipes".to_string(),
            ));
        }
        Ok(Self {
            material,
            item,
            block,
            nuggets,
            large_chunk,
            medium_chunk,
            conditions,
        })
    }

    /// The recipes this request produces, in write order.
    pub fn recipes(&self) -> Vec<StorageRecipe> {
        let mut recipes = vec![StorageRecipe::Block, StorageRecipe::Item];
        if self.nuggets {
            recipes.extend([StorageRecipe::ItemFromNuggets, StorageRecipe::Nugget]);
        }
        if self.large_chunk {
            recipes.extend([StorageRecipe::LargeChunk, StorageRecipe::NuggetsFromLargeChunk]);
        }
        if self.medium_chunk {
            recipes.extend([StorageRecipe::MediumChunk, StorageRecipe::NuggetsFromMediumChunk]);
        }
        recipes
    }

    fn block_name(&self) -> String {
        format!("{}_{}", self.material, self.block)
    }

    fn item_name(&self) -> String {
        format!("{}_{}", self.material, self.item)
    }

    fn nugget_name(&self) -> String {
        format!("{}_nugget", self.material)
    }

    fn large_chunk_name(&self) -> String {
        format!("large_{}_chunk", self.material)
    }

    fn medium_chunk_name(&self) -> String {
        format!("medium_{}_chunk", self.material)
    }

    fn plan(&self, recipe: StorageRecipe) -> Plan {
        let m = &self.material;
        let (stem, shape, ingredient, result, count) = match recipe {
            StorageRecipe::Block => (
                self.block_name(),
                Shape::Shaped(&BLOCK_PATTERN, 'S'),
                self.item_name(),
                self.block_name(),
                1,
            ),
            StorageRecipe::Item => (
                self.item_name(),
                Shape::Shapeless,
                self.block_name(),
                self.item_name(),
                9,
            ),
            StorageRecipe::ItemFromNuggets => (
                format!("{}_from_nuggets", self.item_name()),
                Shape::Shaped(&NUGGET_PATTERN, '#'),
                self.nugget_name(),
                self.item_name(),
                1,
            ),
            StorageRecipe::Nugget => (
                self.nugget_name(),
                Shape::Shapeless,
                self.item_name(),
                self.nugget_name(),
                9,
            ),
            StorageRecipe::LargeChunk => (
                self.large_chunk_name(),
                Shape::Shaped(&LARGE_CHUNK_PATTERN, '#'),
                self.nugget_name(),
                self.large_chunk_name(),
                1,
            ),
            StorageRecipe::NuggetsFromLargeChunk => (
                format!("{m}_nuggets_from_chunk"),
                Shape::Shapeless,
                self.large_chunk_name(),
                self.nugget_name(),
                8,
            ),
            StorageRecipe::MediumChunk => (
                self.medium_chunk_name(),
                Shape::Shapeless,
                self.large_chunk_name(),
                self.medium_chunk_name(),
                2,
            ),
            StorageRecipe::NuggetsFromMediumChunk => (
                format!("{m}_nuggets_from_medium_chunk"),
                Shape::Shapeless,
                self.medium_chunk_name(),
                self.nugget_name(),
                4,
            ),
        };
        Plan {
            stem,
            shape,
            ingredient,
            result,
            count,
        }
    }

    /// File stems of every recipe, in write order.
    pub fn file_stems(&self) -> Vec<String> {
        self.recipes().into_iter().map(|r| self.plan(r).stem).collect()
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let mut documents = Vec::new();
        for recipe in self.recipes() {
            let plan = self.plan(recipe);
            let ingredient = Ingredient::Item(ctx.id(&plan.ingredient));
            let result = ctx.id(&plan.result);
            let (template, doc) = match plan.shape {
                Shape::Shaped(pattern, symbol) => {
                    let rows: Vec<String> = pattern.iter().map(|row| row.to_string()).collect();
                    let keys = IndexMap::from([(symbol, ingredient)]);
                    (SHAPED, shaped(&rows, &keys, &result, plan.count)?)
                }
                Shape::Shapeless => (SHAPELESS, shapeless(&ingredient, 1, &result, plan.count)?),
            };
            let doc = finish(doc, &template, ctx, self.conditions)?;
            debug!("Resolved {:?} storage recipe '{}'", recipe, plan.stem);
            documents.push(OutputDocument::json("", &plan.stem, doc, KeyOrder::Sorted));
        }
        Ok(documents)
    }

    pub fn summary(&self, ctx: &Context) -> Vec<String> {
        let mut lines = vec![format!(
            "Generating {} recipes for mod {}:",
            self.material, ctx.namespace
        )];
        lines.extend(self.file_stems().into_iter().map(|stem| format!("\t{stem}")));
        lines
    }
}
