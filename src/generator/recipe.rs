//! Crafting and cooking recipes.
//!
//! The shaped and shapeless builders here are shared with the storage and
//! tool set generators.

use clap::ValueEnum;
use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::{Error, Result};
use crate::generator::apply_condition;
use crate::parser::{id_path, pattern_symbols, validate_name, Amount, Ingredient, ItemStack};
use crate::template::{ensure_resolved, fill, insert, Template};

pub(crate) const SHAPED: Template = Template::new(
    "shaped",
    r#"{
        "type": "minecraft:crafting_shaped",
        "conditions": [],
        "pattern": null,
        "key": {},
        "result": { "item": null }
    }"#,
);

pub(crate) const SHAPELESS: Template = Template::new(
    "shapeless",
    r#"{
        "type": "minecraft:crafting_shapeless",
        "conditions": [],
        "ingredients": [ null ],
        "result": { "item": null }
    }"#,
);

// Shared by smelting, smoking, blasting and campfire cooking.
const COOKING: Template = Template::new(
    "cooking",
    r#"{
        "type": null,
        "conditions": [],
        "ingredient": null,
        "result": null,
        "experience": 0.0,
        "cookingtime": null
    }"#,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecipeKind {
    Shaped,
    Shapeless,
    Smelting,
    Smoking,
    Blasting,
    Campfire,
}

impl RecipeKind {
    /// Recipe type and default cooking time for the cooking kinds.
    fn cooking(&self) -> Option<(&'static str, u32)> {
        match self {
            RecipeKind::Shaped | RecipeKind::Shapeless => None,
            RecipeKind::Smelting => Some(("minecraft:smelting", 200)),
            RecipeKind::Smoking => Some(("minecraft:smoking", 100)),
            RecipeKind::Blasting => Some(("minecraft:blasting", 100)),
            RecipeKind::Campfire => Some(("minecraft:campfire_cooking", 600)),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RecipeKind::Shaped => "shaped",
            RecipeKind::Shapeless => "shapeless",
            RecipeKind::Smelting => "smelting",
            RecipeKind::Smoking => "smoking",
            RecipeKind::Blasting => "blasting",
            RecipeKind::Campfire => "campfire",
        }
    }
}

/// What the recipe consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeInput {
    /// A single ingredient, repeated `count` times for shapeless recipes.
    Ingredient { stack: ItemStack, count: u32 },
    /// A crafting grid and the ingredient behind each symbol.
    Pattern {
        rows: Vec<String>,
        keys: IndexMap<char, Ingredient>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    pub kind: RecipeKind,
    pub result: String,
    pub result_count: u32,
    pub input: RecipeInput,
    pub experience: Option<f64>,
    pub cooking_time: Option<u32>,
    pub output: Option<String>,
    pub conditions: bool,
}

impl RecipeRequest {
    /// Validates that the input fits the kind and trims unused pattern keys.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: RecipeKind,
        result: String,
        result_count: u32,
        input: RecipeInput,
        experience: Option<f64>,
        cooking_time: Option<u32>,
        output: Option<String>,
        conditions: bool,
    ) -> Result<Self> {
        validate_name(id_path(&result))?;
        if let Some(output) = &output {
            validate_name(output)?;
        }
        if result_count == 0 {
            return Err(Error::ValidationError("result count must be at least 1".to_string()));
        }
        if let Some(xp) = experience {
            if !xp.is_finite() || xp < 0.0 {
                return Err(Error::ValidationError(format!("experience {xp} must be a non-negative number")));
            }
        }

        let input = match (kind, input) {
            (RecipeKind::Shaped, RecipeInput::Pattern { rows, keys }) => {
                RecipeInput::Pattern { keys: used_keys(&rows, keys)?, rows }
            }
            (RecipeKind::Shaped, RecipeInput::Ingredient { .. }) => {
                return Err(Error::ValidationError(
                    "shaped recipes need --pattern and --keys".to_string(),
                ))
            }
            (_, RecipeInput::Pattern { .. }) => {
                return Err(Error::ValidationError(format!(
                    "{} recipes need --ingredient, not --pattern",
                    kind.name()
                )))
            }
            (_, RecipeInput::Ingredient { stack, count }) => {
                if stack.amount.is_some() {
                    return Err(Error::ValidationError(format!(
                        "ingredient '{stack}' cannot carry a count or chance here; use --count"
                    )));
                }
                if count == 0 {
                    return Err(Error::ValidationError("ingredient count must be at least 1".to_string()));
                }
                if count > 1 && kind != RecipeKind::Shapeless {
                    warn!("--count only applies to shapeless recipes, ignoring it");
                }
                let stack = ItemStack {
                    ingredient: stack.ingredient.tag_if_path(),
                    amount: None,
                };
                RecipeInput::Ingredient { stack, count }
            }
        };

        if kind.cooking().is_none() && (experience.is_some() || cooking_time.is_some()) {
            warn!("--xp and --cooking-time only apply to cooking recipes, ignoring them");
        }

        Ok(Self {
            kind,
            result,
            result_count,
            input,
            experience,
            cooking_time,
            output,
            conditions,
        })
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let result = ctx.qualify(&self.result);
        let (template, doc, stem) = match (&self.input, self.kind.cooking()) {
            (RecipeInput::Pattern { rows, keys }, _) => (
                SHAPED,
                shaped(rows, keys, &result, self.result_count)?,
                id_path(&self.result).to_string(),
            ),
            (RecipeInput::Ingredient { stack, count }, None) => (
                SHAPELESS,
                shapeless(&stack.ingredient, *count, &result, self.result_count)?,
                id_path(&self.result).to_string(),
            ),
            (RecipeInput::Ingredient { stack, .. }, Some((recipe_type, default_time))) => {
                let mut doc = COOKING.instantiate()?;
                fill(&mut doc, "/type", recipe_type)?;
                fill(&mut doc, "/ingredient", serde_json::to_value(&stack.ingredient)?)?;
                fill(&mut doc, "/result", result.as_str())?;
                if let Some(xp) = self.experience {
                    fill(&mut doc, "/experience", xp)?;
                }
                fill(&mut doc, "/cookingtime", self.cooking_time.unwrap_or(default_time))?;
                let stem = format!("{}_from_{}", id_path(&self.result), self.kind.name());
                (COOKING, doc, stem)
            }
        };

        let doc = finish(doc, &template, ctx, self.conditions)?;
        let stem = self.output.clone().unwrap_or(stem);
        Ok(vec![OutputDocument::json("", &stem, doc, KeyOrder::Sorted)])
    }
}

/// Keeps the keys the pattern uses; every symbol must have one.
fn used_keys(
    rows: &[String],
    mut keys: IndexMap<char, Ingredient>,
) -> Result<IndexMap<char, Ingredient>> {
    let symbols = pattern_symbols(rows);
    if let Some(missing) = symbols.iter().find(|s| !keys.contains_key(*s)) {
        return Err(Error::ValidationError(format!(
            "pattern symbol '{missing}' has no key"
        )));
    }
    keys.retain(|symbol, _| {
        let used = symbols.contains(symbol);
        if !used {
            warn!("key '{symbol}' is not used by the pattern, dropping it");
        }
        used
    });
    Ok(keys)
}

/// Builds an unconditioned shaped recipe.
pub(crate) fn shaped(
    rows: &[String],
    keys: &IndexMap<char, Ingredient>,
    result: &str,
    count: u32,
) -> Result<Value> {
    let mut doc = SHAPED.instantiate()?;
    fill(&mut doc, "/pattern", rows.to_vec())?;
    for (symbol, ingredient) in keys {
        insert(&mut doc, "/key", &symbol.to_string(), serde_json::to_value(ingredient)?)?;
    }
    fill(&mut doc, "/result/item", result)?;
    if count > 1 {
        insert(&mut doc, "/result", "count", count)?;
    }
    Ok(doc)
}

/// Builds an unconditioned shapeless recipe with one ingredient entry.
pub(crate) fn shapeless(
    ingredient: &Ingredient,
    ingredient_count: u32,
    result: &str,
    count: u32,
) -> Result<Value> {
    let mut doc = SHAPELESS.instantiate()?;
    let stack = ItemStack {
        ingredient: ingredient.clone(),
        amount: (ingredient_count > 1).then_some(Amount::Count(ingredient_count)),
    };
    fill(&mut doc, "/ingredients/0", serde_json::to_value(&stack)?)?;
    fill(&mut doc, "/result/item", result)?;
    if count > 1 {
        insert(&mut doc, "/result", "count", count)?;
    }
    Ok(doc)
}

/// Applies the condition clause and checks that nothing is left unresolved.
pub(crate) fn finish(
    mut doc: Value,
    template: &Template,
    ctx: &Context,
    conditions: bool,
) -> Result<Value> {
    apply_condition(&mut doc, ctx, conditions)?;
    ensure_resolved(&doc, template)?;
    Ok(doc)
}
