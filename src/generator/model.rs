//! Block and item model documents (`assets/<namespace>/models/{block,item}/*.json`).

use clap::ValueEnum;
use log::debug;
use serde_json::Value;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::Result;
use crate::generator::blockstate::{DoorModel, SlabNames, StairNames};
use crate::parser::validate_name;
use crate::template::{ensure_resolved, fill, Template};

pub const BLOCK_DIR: &str = "block";
pub const ITEM_DIR: &str = "item";

const ITEM_BLOCK: Template = Template::new("item_block", r#"{ "parent": null }"#);

const ITEM_GENERATED: Template = Template::new(
    "item_generated",
    r#"{ "parent": "minecraft:item/generated", "textures": { "layer0": null } }"#,
);

const ITEM_HANDHELD: Template = Template::new(
    "item_handheld",
    r#"{ "parent": "minecraft:item/handheld", "textures": { "layer0": null } }"#,
);

const CUBE_ALL: Template = Template::new(
    "cube_all",
    r#"{ "parent": "minecraft:block/cube_all", "textures": { "all": null } }"#,
);

const CUBE_COLUMN: Template = Template::new(
    "cube_column",
    r#"{ "parent": "minecraft:block/cube_column", "textures": { "end": null, "side": null } }"#,
);

const ORIENTABLE: Template = Template::new(
    "orientable",
    r#"{
        "parent": "minecraft:block/orientable",
        "textures": { "top": null, "front": null, "side": null }
    }"#,
);

const PLATE_UP: Template = Template::new(
    "pressure_plate_up",
    r#"{ "parent": "minecraft:block/pressure_plate_up", "textures": { "texture": null } }"#,
);

const PLATE_DOWN: Template = Template::new(
    "pressure_plate_down",
    r#"{ "parent": "minecraft:block/pressure_plate_down", "textures": { "texture": null } }"#,
);

const SLAB: Template = Template::new(
    "slab",
    r#"{
        "parent": "minecraft:block/slab",
        "textures": { "bottom": null, "top": null, "side": null }
    }"#,
);

const SLAB_TOP: Template = Template::new(
    "slab_top",
    r#"{
        "parent": "minecraft:block/slab_top",
        "textures": { "bottom": null, "top": null, "side": null }
    }"#,
);

const STAIRS: Template = Template::new(
    "stairs",
    r#"{
        "parent": "minecraft:block/stairs",
        "textures": { "bottom": null, "top": null, "side": null }
    }"#,
);

const INNER_STAIRS: Template = Template::new(
    "inner_stairs",
    r#"{
        "parent": "minecraft:block/inner_stairs",
        "textures": { "bottom": null, "top": null, "side": null }
    }"#,
);

const OUTER_STAIRS: Template = Template::new(
    "outer_stairs",
    r#"{
        "parent": "minecraft:block/outer_stairs",
        "textures": { "bottom": null, "top": null, "side": null }
    }"#,
);

const DOOR_BOTTOM: Template = Template::new(
    "door_bottom",
    r#"{ "parent": "minecraft:block/door_bottom", "textures": { "top": null, "bottom": null } }"#,
);

const DOOR_BOTTOM_HINGE: Template = Template::new(
    "door_bottom_rh",
    r#"{ "parent": "minecraft:block/door_bottom_rh", "textures": { "top": null, "bottom": null } }"#,
);

const DOOR_TOP: Template = Template::new(
    "door_top",
    r#"{ "parent": "minecraft:block/door_top", "textures": { "top": null, "bottom": null } }"#,
);

const DOOR_TOP_HINGE: Template = Template::new(
    "door_top_rh",
    r#"{ "parent": "minecraft:block/door_top_rh", "textures": { "top": null, "bottom": null } }"#,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Full cube with one texture
    Block,
    /// Column with `_top` end texture
    Pillar,
    /// Orientable block with `_top`, `_front` and `_side` textures
    Facing,
    #[value(alias = "pressure_plate")]
    PressurePlate,
    Slab,
    Stairs,
    Door,
    /// Item model only, pointing at an existing block model
    #[value(alias = "blockitem")]
    BlockItem,
    Inventory,
    Tool,
    Armor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub kind: ModelKind,
    pub name: String,
    pub item_only: bool,
}

impl ModelRequest {
    pub fn new(kind: ModelKind, name: String, item_only: bool) -> Result<Self> {
        validate_name(&name)?;
        Ok(Self {
            kind,
            name,
            item_only,
        })
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let mut documents = Vec::new();
        if !self.item_only {
            for (template, stem, doc) in self.block_models(ctx)? {
                ensure_resolved(&doc, &template)?;
                debug!("Resolved block model '{}' from '{}'", stem, template.name);
                documents.push(OutputDocument::json(BLOCK_DIR, &stem, doc, KeyOrder::Inserted));
            }
        }
        let (template, stem, doc) = self.item_model(ctx)?;
        ensure_resolved(&doc, &template)?;
        debug!("Resolved item model '{}' from '{}'", stem, template.name);
        documents.push(OutputDocument::json(ITEM_DIR, &stem, doc, KeyOrder::Inserted));
        Ok(documents)
    }

    fn block_models(&self, ctx: &Context) -> Result<Vec<(Template, String, Value)>> {
        let name = self.name.as_str();
        let models = match self.kind {
            ModelKind::Block => {
                vec![(CUBE_ALL, name.to_string(), textures(CUBE_ALL, &[("all", ctx.block(name))])?)]
            }
            ModelKind::Pillar => vec![(
                CUBE_COLUMN,
                name.to_string(),
                textures(
                    CUBE_COLUMN,
                    &[("end", ctx.block(&format!("{name}_top"))), ("side", ctx.block(name))],
                )?,
            )],
            ModelKind::Facing => vec![(
                ORIENTABLE,
                name.to_string(),
                textures(
                    ORIENTABLE,
                    &[
                        ("top", ctx.block(&format!("{name}_top"))),
                        ("front", ctx.block(&format!("{name}_front"))),
                        ("side", ctx.block(&format!("{name}_side"))),
                    ],
                )?,
            )],
            ModelKind::PressurePlate => {
                let texture = [("texture", ctx.block(name))];
                vec![
                    (PLATE_UP, name.to_string(), textures(PLATE_UP, &texture)?),
                    (PLATE_DOWN, format!("{name}_down"), textures(PLATE_DOWN, &texture)?),
                ]
            }
            ModelKind::Slab => {
                let names = SlabNames::new(name);
                let texture = ctx.block(&names.double);
                let faces = [("bottom", texture.clone()), ("top", texture.clone()), ("side", texture)];
                vec![
                    (SLAB, names.bottom, textures(SLAB, &faces)?),
                    (SLAB_TOP, names.top, textures(SLAB_TOP, &faces)?),
                ]
            }
            ModelKind::Stairs => {
                let names = StairNames::new(name);
                let texture = ctx.block(&names.stem);
                let faces = [("bottom", texture.clone()), ("top", texture.clone()), ("side", texture)];
                vec![
                    (STAIRS, names.straight, textures(STAIRS, &faces)?),
                    (INNER_STAIRS, names.inner, textures(INNER_STAIRS, &faces)?),
                    (OUTER_STAIRS, names.outer, textures(OUTER_STAIRS, &faces)?),
                ]
            }
            ModelKind::Door => {
                let faces = [
                    ("top", ctx.block(&format!("{name}_top"))),
                    ("bottom", ctx.block(&format!("{name}_bottom"))),
                ];
                [
                    (DOOR_BOTTOM, DoorModel::Bottom),
                    (DOOR_BOTTOM_HINGE, DoorModel::BottomHinge),
                    (DOOR_TOP, DoorModel::Top),
                    (DOOR_TOP_HINGE, DoorModel::TopHinge),
                ]
                .into_iter()
                .map(|(template, model)| {
                    Ok((template, format!("{name}{}", model.suffix()), textures(template, &faces)?))
                })
                .collect::<Result<Vec<_>>>()?
            }
            ModelKind::BlockItem | ModelKind::Inventory | ModelKind::Tool | ModelKind::Armor => {
                Vec::new()
            }
        };
        Ok(models)
    }

    fn item_model(&self, ctx: &Context) -> Result<(Template, String, Value)> {
        let name = self.name.as_str();
        let (template, stem, pointer, value) = match self.kind {
            ModelKind::Block
            | ModelKind::Pillar
            | ModelKind::Facing
            | ModelKind::PressurePlate
            | ModelKind::BlockItem => (ITEM_BLOCK, name.to_string(), "/parent", ctx.block(name)),
            ModelKind::Slab => {
                let bottom = SlabNames::new(name).bottom;
                (ITEM_BLOCK, bottom.clone(), "/parent", ctx.block(&bottom))
            }
            ModelKind::Stairs => {
                let straight = StairNames::new(name).straight;
                (ITEM_BLOCK, straight.clone(), "/parent", ctx.block(&straight))
            }
            ModelKind::Door | ModelKind::Inventory | ModelKind::Armor => {
                (ITEM_GENERATED, name.to_string(), "/textures/layer0", ctx.item(name))
            }
            ModelKind::Tool => (ITEM_HANDHELD, name.to_string(), "/textures/layer0", ctx.item(name)),
        };
        let mut doc = template.instantiate()?;
        fill(&mut doc, pointer, value)?;
        Ok((template, stem, doc))
    }
}

fn textures(template: Template, faces: &[(&str, String)]) -> Result<Value> {
    let mut doc = template.instantiate()?;
    for (face, texture) in faces {
        fill(&mut doc, &format!("/textures/{face}"), texture.as_str())?;
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Category;
    use serde_json::json;

    fn ctx() -> Context {
        Context::new("ironworks", "out", Category::Models).unwrap()
    }

    fn generate(kind: ModelKind, name: &str, item_only: bool) -> Vec<OutputDocument> {
        ModelRequest::new(kind, name.to_string(), item_only)
            .unwrap()
            .generate(&ctx())
            .unwrap()
    }

    fn paths(docs: &[OutputDocument]) -> Vec<String> {
        docs.iter().map(|d| d.path.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_block_model() {
        let docs = generate(ModelKind::Block, "steel_block", false);
        assert_eq!(paths(&docs), vec!["block/steel_block.json", "item/steel_block.json"]);
        assert_eq!(docs[0].content["textures"]["all"], "ironworks:block/steel_block");
        assert_eq!(docs[1].content, json!({"parent": "ironworks:block/steel_block"}));
    }

    #[test]
    fn test_item_only_skips_block_models() {
        let docs = generate(ModelKind::Block, "steel_block", true);
        assert_eq!(paths(&docs), vec!["item/steel_block.json"]);
    }

    #[test]
    fn test_slab_models() {
        let docs = generate(ModelKind::Slab, "steel_block", false);
        assert_eq!(
            paths(&docs),
            vec!["block/steel_slab.json", "block/steel_slab_top.json", "item/steel_slab.json"]
        );
        assert_eq!(docs[1].content["parent"], "minecraft:block/slab_top");
        assert_eq!(docs[1].content["textures"]["side"], "ironworks:block/steel_block");
        assert_eq!(docs[2].content["parent"], "ironworks:block/steel_slab");
    }

    #[test]
    fn test_stairs_models() {
        let docs = generate(ModelKind::Stairs, "steel_stairs", false);
        assert_eq!(
            paths(&docs),
            vec![
                "block/steel_stairs.json",
                "block/steel_stairs_inner.json",
                "block/steel_stairs_outer.json",
                "item/steel_stairs.json"
            ]
        );
        assert_eq!(docs[2].content["parent"], "minecraft:block/outer_stairs");
        assert_eq!(docs[0].content["textures"]["top"], "ironworks:block/steel");
    }

    #[test]
    fn test_door_models() {
        let docs = generate(ModelKind::Door, "steel_door", false);
        assert_eq!(docs.len(), 5);
        assert_eq!(docs[1].path.to_string_lossy(), "block/steel_door_bottom_hinge.json");
        assert_eq!(docs[1].content["parent"], "minecraft:block/door_bottom_rh");
        assert_eq!(docs[4].content["textures"]["layer0"], "ironworks:item/steel_door");
    }

    #[test]
    fn test_item_kinds() {
        let docs = generate(ModelKind::Tool, "steel_pickaxe", false);
        assert_eq!(
            docs[0].content,
            json!({
                "parent": "minecraft:item/handheld",
                "textures": {"layer0": "ironworks:item/steel_pickaxe"}
            })
        );
        let docs = generate(ModelKind::Armor, "steel_helmet", false);
        assert_eq!(docs[0].content["parent"], "minecraft:item/generated");
    }
}
