use clap::ValueEnum;
use datagen::context::{Category, Context};
use datagen::generator::{
    advancement::AdvancementRequest,
    blockstate::{BlockstateKind, BlockstateRequest},
    loot::LootRequest,
    machine::{MachineKind, MachineRequest},
    model::{ModelKind, ModelRequest},
    recipe::{RecipeInput, RecipeKind, RecipeRequest},
    storage::StorageRequest,
    tools::ToolsRequest,
    Request,
};
use datagen::parser::{parse_keys, parse_pattern, ItemStack};
use serde_json::{json, Value};

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

fn generate(request: Request) -> Vec<Value> {
    let ctx = Context::new("ironworks", "out", request.category()).unwrap();
    request
        .generate(&ctx)
        .unwrap()
        .into_iter()
        .map(|doc| doc.content)
        .collect()
}

fn stacks(tokens: &[&str]) -> Vec<ItemStack> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

fn recipe(kind: RecipeKind, input: RecipeInput, conditions: bool) -> Request {
    Request::Recipe(
        RecipeRequest::new(kind, "steel_ingot".to_string(), 1, input, None, None, None, conditions)
            .unwrap(),
    )
}

fn ingredient(token: &str, count: u32) -> RecipeInput {
    RecipeInput::Ingredient {
        stack: token.parse().unwrap(),
        count,
    }
}

fn every_request() -> Vec<Request> {
    let mut requests = Vec::new();
    for kind in BlockstateKind::value_variants() {
        requests.push(Request::Blockstate(
            BlockstateRequest::new(*kind, "steel_block".to_string()).unwrap(),
        ));
    }
    for kind in ModelKind::value_variants() {
        requests.push(Request::Model(
            ModelRequest::new(*kind, "steel_block".to_string(), false).unwrap(),
        ));
    }
    for kind in RecipeKind::value_variants() {
        let input = match kind {
            RecipeKind::Shaped => RecipeInput::Pattern {
                rows: parse_pattern("SSS,SSS,SSS").unwrap(),
                keys: parse_keys("S=ironworks:steel_nugget").unwrap(),
            },
            _ => ingredient("#forge:dusts/steel", 1),
        };
        requests.push(recipe(*kind, input.clone(), false));
        requests.push(recipe(*kind, input, true));
    }
    requests.push(Request::Machine(
        MachineRequest::new(
            MachineKind::Crusher,
            "steel_ore".to_string(),
            None,
            stacks(&["#forge:ores/steel"]),
            stacks(&["ironworks:steel_dust,2", "minecraft:cobblestone,0.1"]),
        )
        .unwrap(),
    ));
    requests.push(Request::Machine(
        MachineRequest::new(
            MachineKind::AlloySmelter,
            "steel_ingot".to_string(),
            Some(400),
            stacks(&["#forge:ingots/iron,2", "minecraft:coal"]),
            stacks(&["ironworks:steel_ingot"]),
        )
        .unwrap(),
    ));
    requests.push(Request::Storage(
        StorageRequest::new(
            "steel".to_string(),
            "ingot".to_string(),
            "block".to_string(),
            true,
            true,
            true,
            true,
        )
        .unwrap(),
    ));
    requests.push(Request::Tools(
        ToolsRequest::new("steel".to_string(), true, true, true).unwrap(),
    ));
    requests.push(Request::Loot(LootRequest::new("steel_block".to_string()).unwrap()));
    requests.push(Request::Advancement(
        AdvancementRequest::new(
            "steel_ingot".to_string(),
            vec!["steel_block".to_string()],
            None,
        )
        .unwrap(),
    ));
    requests
}

#[test_log::test]
fn test_no_placeholder_survives() {
    for request in every_request() {
        let label = format!("{request:?}");
        let docs = generate(request);
        assert!(!docs.is_empty(), "{label}");
        for doc in docs {
            assert!(!contains_null(&doc), "{label}: {doc}");
        }
    }
}

#[test]
fn test_condition_toggle() {
    let with = generate(recipe(RecipeKind::Shapeless, ingredient("ironworks:steel_block", 1), true));
    assert_eq!(
        with[0]["conditions"],
        json!([{"type": "ironworks:flag", "flag": "ironworks_enabled"}])
    );

    let without =
        generate(recipe(RecipeKind::Shapeless, ingredient("ironworks:steel_block", 1), false));
    assert!(without[0].get("conditions").is_none());
}

#[test]
fn test_cooking_recipe() {
    let docs = generate(recipe(RecipeKind::Blasting, ingredient("#forge:dusts/steel", 1), false));
    assert_eq!(
        docs[0],
        json!({
            "type": "minecraft:blasting",
            "ingredient": {"tag": "forge:dusts/steel"},
            "result": "ironworks:steel_ingot",
            "experience": 0.0,
            "cookingtime": 100
        })
    );
}

#[test]
fn test_path_like_ingredient_is_tag() {
    let docs = generate(recipe(RecipeKind::Smelting, ingredient("forge:dusts/steel", 1), false));
    assert_eq!(docs[0]["ingredient"], json!({"tag": "forge:dusts/steel"}));

    let docs = generate(recipe(RecipeKind::Shapeless, ingredient("forge:ingots/steel", 1), false));
    assert_eq!(docs[0]["ingredients"], json!([{"tag": "forge:ingots/steel"}]));

    let docs = generate(recipe(RecipeKind::Smelting, ingredient("ironworks:steel_dust", 1), false));
    assert_eq!(docs[0]["ingredient"], json!({"item": "ironworks:steel_dust"}));
}

#[test]
fn test_shapeless_count() {
    let docs = generate(recipe(RecipeKind::Shapeless, ingredient("ironworks:steel_nugget", 9), false));
    assert_eq!(
        docs[0]["ingredients"],
        json!([{"item": "ironworks:steel_nugget", "count": 9}])
    );
    assert_eq!(docs[0]["result"], json!({"item": "ironworks:steel_ingot"}));
}

#[test]
fn test_crusher_results() {
    let docs = generate(Request::Machine(
        MachineRequest::new(
            MachineKind::Crusher,
            "steel_ore".to_string(),
            None,
            stacks(&["#forge:ores/steel"]),
            stacks(&["ironworks:steel_dust,2", "minecraft:cobblestone,0.1"]),
        )
        .unwrap(),
    ));
    assert_eq!(docs[0]["ingredient"], json!({"tag": "forge:ores/steel"}));
    assert_eq!(
        docs[0]["results"],
        json!([
            {"item": "ironworks:steel_dust", "count": 2},
            {"item": "minecraft:cobblestone", "chance": 0.1}
        ])
    );
    assert_eq!(docs[0]["process_time"], 300);
}

#[test]
fn test_storage_graph() {
    let ctx = Context::new("ironworks", "out", Category::Recipes).unwrap();
    let request = StorageRequest::new(
        "steel".to_string(),
        "ingot".to_string(),
        "block".to_string(),
        true,
        true,
        true,
        false,
    )
    .unwrap();
    let docs = request.generate(&ctx).unwrap();
    let find = |stem: &str| {
        docs.iter()
            .find(|d| d.path.to_string_lossy() == format!("{stem}.json"))
            .map(|d| d.content.clone())
            .unwrap_or_else(|| panic!("missing {stem}"))
    };

    assert_eq!(find("steel_block")["key"]["S"], json!({"item": "ironworks:steel_ingot"}));
    assert_eq!(
        find("steel_ingot")["ingredients"],
        json!([{"item": "ironworks:steel_block"}])
    );
    assert_eq!(find("steel_ingot")["result"]["count"], 9);
    assert_eq!(find("steel_ingot_from_nuggets")["key"]["#"], json!({"item": "ironworks:steel_nugget"}));
    assert_eq!(find("steel_nugget")["result"]["count"], 9);
    assert_eq!(find("large_steel_chunk")["pattern"], json!(["###", "# #", "###"]));
    assert_eq!(find("steel_nuggets_from_chunk")["result"]["count"], 8);
    assert_eq!(find("medium_steel_chunk")["result"]["count"], 2);
    assert_eq!(find("steel_nuggets_from_medium_chunk")["result"]["count"], 4);
}
