//! Machine recipes for Silent's Mechanisms (crusher and alloy smelter).

use clap::ValueEnum;
use log::{debug, warn};

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::{Error, Result};
use crate::parser::{validate_name, Amount, ItemStack};
use crate::template::{ensure_resolved, fill, push, Template};

const CRUSHING: Template = Template::new(
    "crushing",
    r#"{
        "conditions": [ { "modid": "silents_mechanisms", "type": "forge:mod_loaded" } ],
        "type": "silents_mechanisms:crushing",
        "process_time": 300,
        "ingredient": null,
        "results": []
    }"#,
);

const ALLOY_SMELTING: Template = Template::new(
    "alloy_smelting",
    r#"{
        "conditions": [ { "modid": "silents_mechanisms", "type": "forge:mod_loaded" } ],
        "type": "silents_mechanisms:alloy_smelting",
        "process_time": 200,
        "ingredients": [],
        "result": null
    }"#,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MachineKind {
    Crusher,
    AlloySmelter,
}

impl MachineKind {
    /// Subdirectory of the recipes folder the document is written to.
    pub fn directory(&self) -> &'static str {
        match self {
            MachineKind::Crusher => "crushing",
            MachineKind::AlloySmelter => "alloy_smelting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MachineRequest {
    pub kind: MachineKind,
    pub name: String,
    pub ticks: Option<u32>,
    pub ingredients: Vec<ItemStack>,
    pub results: Vec<ItemStack>,
}

impl MachineRequest {
    pub fn new(
        kind: MachineKind,
        name: String,
        ticks: Option<u32>,
        mut ingredients: Vec<ItemStack>,
        mut results: Vec<ItemStack>,
    ) -> Result<Self> {
        validate_name(&name)?;
        if ingredients.is_empty() || results.is_empty() {
            return Err(Error::ValidationError(
                "at least one ingredient and one result are required".to_string(),
            ));
        }
        if ticks == Some(0) {
            return Err(Error::ValidationError("--ticks must be at least 1".to_string()));
        }

        match kind {
            MachineKind::Crusher => {
                if ingredients.len() > 1 {
                    warn!("crusher recipes take one ingredient, ignoring all but the first");
                    ingredients.truncate(1);
                }
                if let Some(amount) = ingredients[0].amount {
                    return Err(Error::ValidationError(format!(
                        "crusher ingredient '{}' cannot carry {}",
                        ingredients[0],
                        describe(amount)
                    )));
                }
            }
            MachineKind::AlloySmelter => {
                if results.len() > 1 {
                    warn!("alloy smelter recipes have one result, ignoring all but the first");
                    results.truncate(1);
                }
                if let Some(stack) = ingredients
                    .iter()
                    .chain(results.iter())
                    .find(|stack| matches!(stack.amount, Some(Amount::Chance(_))))
                {
                    return Err(Error::ValidationError(format!(
                        "alloy smelter entry '{stack}' can only carry a count"
                    )));
                }
            }
        }

        Ok(Self {
            kind,
            name,
            ticks,
            ingredients,
            results,
        })
    }

    pub fn generate(&self, _ctx: &Context) -> Result<Vec<OutputDocument>> {
        let (template, mut doc) = match self.kind {
            MachineKind::Crusher => {
                let mut doc = CRUSHING.instantiate()?;
                fill(&mut doc, "/ingredient", serde_json::to_value(&self.ingredients[0])?)?;
                for result in &self.results {
                    push(&mut doc, "/results", serde_json::to_value(result)?)?;
                }
                (CRUSHING, doc)
            }
            MachineKind::AlloySmelter => {
                let mut doc = ALLOY_SMELTING.instantiate()?;
                for ingredient in &self.ingredients {
                    push(&mut doc, "/ingredients", serde_json::to_value(ingredient)?)?;
                }
                // The result count is always written, defaulting to 1.
                let result = ItemStack {
                    ingredient: self.results[0].ingredient.clone(),
                    amount: Some(Amount::Count(self.results[0].count().unwrap_or(1))),
                };
                fill(&mut doc, "/result", serde_json::to_value(&result)?)?;
                (ALLOY_SMELTING, doc)
            }
        };

        if let Some(ticks) = self.ticks {
            fill(&mut doc, "/process_time", ticks)?;
        }
        ensure_resolved(&doc, &template)?;
        debug!("Resolved {} recipe '{}'", template.name, self.name);
        Ok(vec![OutputDocument::json(
            self.kind.directory(),
            &self.name,
            doc,
            KeyOrder::Inserted,
        )])
    }
}

fn describe(amount: Amount) -> String {
    match amount {
        Amount::Count(count) => format!("a count ({count})"),
        Amount::Chance(chance) => format!("a chance ({chance})"),
    }
}
