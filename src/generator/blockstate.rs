//! Block state documents (`assets/<namespace>/blockstates/*.json`).

use clap::ValueEnum;
use log::debug;
use serde_json::Value;

use crate::context::Context;
use crate::document::{KeyOrder, OutputDocument};
use crate::error::Result;
use crate::parser::validate_name;
use crate::template::{ensure_resolved, fill, insert, Template};

/// Suffix removed from a block name before naming its slab models.
pub const SLAB_BASE_SUFFIX: &str = "_block";
/// Suffix removed from a stairs name before naming its models.
pub const STAIRS_SUFFIX: &str = "_stairs";

const SIMPLE: Template = Template::new("simple", r#"{ "variants": { "": { "model": null } } }"#);

const PRESSURE_PLATE: Template = Template::new(
    "pressure_plate",
    r#"{
        "variants": {
            "powered=false": { "model": null },
            "powered=true": { "model": null }
        }
    }"#,
);

const SLAB: Template = Template::new(
    "slab",
    r#"{
        "variants": {
            "type=bottom": { "model": null },
            "type=double": { "model": null },
            "type=top": { "model": null }
        }
    }"#,
);

const VARIANTS: Template = Template::new("variants", r#"{ "variants": {} }"#);

const VARIANT: Template = Template::new("variant", r#"{ "model": null }"#);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BlockstateKind {
    /// One model, no properties
    Simple,
    /// Horizontal facing, e.g. furnaces
    Facing,
    /// Axis aligned, e.g. logs
    Pillar,
    #[value(alias = "pressure_plate")]
    PressurePlate,
    Slab,
    Stairs,
    Door,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StairModel {
    Straight,
    Inner,
    Outer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorModel {
    Bottom,
    BottomHinge,
    Top,
    TopHinge,
}

impl DoorModel {
    pub fn suffix(&self) -> &'static str {
        match self {
            DoorModel::Bottom => "_bottom",
            DoorModel::BottomHinge => "_bottom_hinge",
            DoorModel::Top => "_top",
            DoorModel::TopHinge => "_top_hinge",
        }
    }
}

/// (facing, half, shape, model, x, y, uvlock)
pub type StairVariant = (&'static str, &'static str, &'static str, StairModel, u16, u16, bool);

pub const STAIR_VARIANTS: [StairVariant; 40] = [
    ("east", "bottom", "inner_left", StairModel::Inner, 0, 270, true),
    ("east", "bottom", "inner_right", StairModel::Inner, 0, 0, false),
    ("east", "bottom", "outer_left", StairModel::Outer, 0, 270, true),
    ("east", "bottom", "outer_right", StairModel::Outer, 0, 0, false),
    ("east", "bottom", "straight", StairModel::Straight, 0, 0, false),
    ("east", "top", "inner_left", StairModel::Inner, 180, 0, true),
    ("east", "top", "inner_right", StairModel::Inner, 180, 90, true),
    ("east", "top", "outer_left", StairModel::Outer, 180, 0, true),
    ("east", "top", "outer_right", StairModel::Outer, 180, 90, true),
    ("east", "top", "straight", StairModel::Straight, 180, 0, true),
    ("north", "bottom", "inner_left", StairModel::Inner, 0, 180, true),
    ("north", "bottom", "inner_right", StairModel::Inner, 0, 270, true),
    ("north", "bottom", "outer_left", StairModel::Outer, 0, 180, true),
    ("north", "bottom", "outer_right", StairModel::Outer, 0, 270, true),
    ("north", "bottom", "straight", StairModel::Straight, 0, 270, true),
    ("north", "top", "inner_left", StairModel::Inner, 180, 270, true),
    ("north", "top", "inner_right", StairModel::Inner, 180, 0, true),
    ("north", "top", "outer_left", StairModel::Outer, 180, 270, true),
    ("north", "top", "outer_right", StairModel::Outer, 180, 0, true),
    ("north", "top", "straight", StairModel::Straight, 180, 270, true),
    ("south", "bottom", "inner_left", StairModel::Inner, 0, 0, false),
    ("south", "bottom", "inner_right", StairModel::Inner, 0, 90, true),
    ("south", "bottom", "outer_left", StairModel::Outer, 0, 0, false),
    ("south", "bottom", "outer_right", StairModel::Outer, 0, 90, true),
    ("south", "bottom", "straight", StairModel::Straight, 0, 90, true),
    ("south", "top", "inner_left", StairModel::Inner, 180, 90, true),
    ("south", "top", "inner_right", StairModel::Inner, 180, 180, true),
    ("south", "top", "outer_left", StairModel::Outer, 180, 90, true),
    ("south", "top", "outer_right", StairModel::Outer, 180, 180, true),
    ("south", "top", "straight", StairModel::Straight, 180, 90, true),
    ("west", "bottom", "inner_left", StairModel::Inner, 0, 90, true),
    ("west", "bottom", "inner_right", StairModel::Inner, 0, 180, true),
    ("west", "bottom", "outer_left", StairModel::Outer, 0, 90, true),
    ("west", "bottom", "outer_right", StairModel::Outer, 0, 180, true),
    ("west", "bottom", "straight", StairModel::Straight, 0, 180, true),
    ("west", "top", "inner_left", StairModel::Inner, 180, 180, true),
    ("west", "top", "inner_right", StairModel::Inner, 180, 270, true),
    ("west", "top", "outer_left", StairModel::Outer, 180, 180, true),
    ("west", "top", "outer_right", StairModel::Outer, 180, 270, true),
    ("west", "top", "straight", StairModel::Straight, 180, 180, true),
];

/// (facing, half, hinge, open, model, y)
pub type DoorVariant = (&'static str, &'static str, &'static str, &'static str, DoorModel, u16);

pub const DOOR_VARIANTS: [DoorVariant; 32] = [
    ("east", "lower", "left", "false", DoorModel::Bottom, 0),
    ("east", "lower", "left", "true", DoorModel::BottomHinge, 90),
    ("east", "lower", "right", "false", DoorModel::BottomHinge, 0),
    ("east", "lower", "right", "true", DoorModel::Bottom, 270),
    ("east", "upper", "left", "false", DoorModel::Top, 0),
    ("east", "upper", "left", "true", DoorModel::TopHinge, 90),
    ("east", "upper", "right", "false", DoorModel::TopHinge, 0),
    ("east", "upper", "right", "true", DoorModel::Top, 270),
    ("north", "lower", "left", "false", DoorModel::Bottom, 270),
    ("north", "lower", "left", "true", DoorModel::BottomHinge, 0),
    ("north", "lower", "right", "false", DoorModel::BottomHinge, 270),
    ("north", "lower", "right", "true", DoorModel::Bottom, 180),
    ("north", "upper", "left", "false", DoorModel::Top, 270),
    ("north", "upper", "left", "true", DoorModel::TopHinge, 0),
    ("north", "upper", "right", "false", DoorModel::TopHinge, 270),
    ("north", "upper", "right", "true", DoorModel::Top, 180),
    ("south", "lower", "left", "false", DoorModel::Bottom, 90),
    ("south", "lower", "left", "true", DoorModel::BottomHinge, 180),
    ("south", "lower", "right", "false", DoorModel::BottomHinge, 90),
    ("south", "lower", "right", "true", DoorModel::Bottom, 0),
    ("south", "upper", "left", "false", DoorModel::Top, 90),
    ("south", "upper", "left", "true", DoorModel::TopHinge, 180),
    ("south", "upper", "right", "false", DoorModel::TopHinge, 90),
    ("south", "upper", "right", "true", DoorModel::Top, 0),
    ("west", "lower", "left", "false", DoorModel::Bottom, 180),
    ("west", "lower", "left", "true", DoorModel::BottomHinge, 270),
    ("west", "lower", "right", "false", DoorModel::BottomHinge, 180),
    ("west", "lower", "right", "true", DoorModel::Bottom, 90),
    ("west", "upper", "left", "false", DoorModel::Top, 180),
    ("west", "upper", "left", "true", DoorModel::TopHinge, 270),
    ("west", "upper", "right", "false", DoorModel::TopHinge, 180),
    ("west", "upper", "right", "true", DoorModel::Top, 90),
];

/// (facing, x, y)
const FACING_VARIANTS: [(&str, u16, u16); 4] =
    [("east", 0, 90), ("north", 0, 0), ("south", 0, 180), ("west", 0, 270)];

/// (axis, x, y)
const PILLAR_VARIANTS: [(&str, u16, u16); 3] = [("x", 90, 90), ("y", 0, 0), ("z", 90, 0)];

/// Model names of a slab set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabNames {
    pub bottom: String,
    pub top: String,
    pub double: String,
}

impl SlabNames {
    /// `X_block` and `X` both give `X_slab` / `X_slab_top`; double keeps the name as given.
    pub fn new(name: &str) -> Self {
        let stem = name.strip_suffix(SLAB_BASE_SUFFIX).unwrap_or(name);
        Self {
            bottom: format!("{stem}_slab"),
            top: format!("{stem}_slab_top"),
            double: name.to_string(),
        }
    }
}

/// Model names of a stairs set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StairNames {
    pub stem: String,
    pub straight: String,
    pub inner: String,
    pub outer: String,
}

impl StairNames {
    /// `X_stairs` and `X` both give `X_stairs`, `X_stairs_inner`, `X_stairs_outer`.
    pub fn new(name: &str) -> Self {
        let stem = name.strip_suffix(STAIRS_SUFFIX).unwrap_or(name);
        let straight = format!("{stem}{STAIRS_SUFFIX}");
        Self {
            stem: stem.to_string(),
            inner: format!("{straight}_inner"),
            outer: format!("{straight}_outer"),
            straight,
        }
    }

    pub fn model(&self, model: StairModel) -> &str {
        match model {
            StairModel::Straight => &self.straight,
            StairModel::Inner => &self.inner,
            StairModel::Outer => &self.outer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockstateRequest {
    pub kind: BlockstateKind,
    pub name: String,
}

impl BlockstateRequest {
    pub fn new(kind: BlockstateKind, name: String) -> Result<Self> {
        validate_name(&name)?;
        Ok(Self { kind, name })
    }

    pub fn generate(&self, ctx: &Context) -> Result<Vec<OutputDocument>> {
        let name = self.name.as_str();
        let (template, doc, stem) = match self.kind {
            BlockstateKind::Simple => {
                let mut doc = SIMPLE.instantiate()?;
                fill(&mut doc, "/variants//model", ctx.block(name))?;
                (SIMPLE, doc, name.to_string())
            }
            BlockstateKind::Facing => {
                let mut doc = VARIANTS.instantiate()?;
                for (facing, x, y) in FACING_VARIANTS {
                    let entry = variant(ctx.block(name), x, y, false)?;
                    insert(&mut doc, "/variants", &format!("facing={facing}"), entry)?;
                }
                (VARIANTS, doc, name.to_string())
            }
            BlockstateKind::Pillar => {
                let mut doc = VARIANTS.instantiate()?;
                for (axis, x, y) in PILLAR_VARIANTS {
                    let entry = variant(ctx.block(name), x, y, false)?;
                    insert(&mut doc, "/variants", &format!("axis={axis}"), entry)?;
                }
                (VARIANTS, doc, name.to_string())
            }
            BlockstateKind::PressurePlate => {
                let mut doc = PRESSURE_PLATE.instantiate()?;
                fill(&mut doc, "/variants/powered=false/model", ctx.block(name))?;
                fill(&mut doc, "/variants/powered=true/model", ctx.block(&format!("{name}_down")))?;
                (PRESSURE_PLATE, doc, name.to_string())
            }
            BlockstateKind::Slab => {
                let names = SlabNames::new(name);
                let mut doc = SLAB.instantiate()?;
                fill(&mut doc, "/variants/type=bottom/model", ctx.block(&names.bottom))?;
                fill(&mut doc, "/variants/type=double/model", ctx.block(&names.double))?;
                fill(&mut doc, "/variants/type=top/model", ctx.block(&names.top))?;
                (SLAB, doc, names.bottom)
            }
            BlockstateKind::Stairs => {
                let names = StairNames::new(name);
                let mut doc = VARIANTS.instantiate()?;
                for (facing, half, shape, model, x, y, uvlock) in STAIR_VARIANTS {
                    let entry = variant(ctx.block(names.model(model)), x, y, uvlock)?;
                    let key = format!("facing={facing},half={half},shape={shape}");
                    insert(&mut doc, "/variants", &key, entry)?;
                }
                (VARIANTS, doc, names.straight)
            }
            BlockstateKind::Door => {
                let mut doc = VARIANTS.instantiate()?;
                for (facing, half, hinge, open, model, y) in DOOR_VARIANTS {
                    let entry = variant(ctx.block(&format!("{name}{}", model.suffix())), 0, y, false)?;
                    let key = format!("facing={facing},half={half},hinge={hinge},open={open}");
                    insert(&mut doc, "/variants", &key, entry)?;
                }
                (VARIANTS, doc, name.to_string())
            }
        };

        ensure_resolved(&doc, &template)?;
        debug!("Resolved {:?} block state '{}'", self.kind, stem);
        Ok(vec![OutputDocument::json("", &stem, doc, KeyOrder::Inserted)])
    }
}

/// One variant entry; rotations of zero and a false uvlock are left out.
fn variant(model: String, x: u16, y: u16, uvlock: bool) -> Result<Value> {
    let mut entry = VARIANT.instantiate()?;
    fill(&mut entry, "/model", model)?;
    if x != 0 {
        insert(&mut entry, "", "x", x)?;
    }
    if y != 0 {
        insert(&mut entry, "", "y", y)?;
    }
    if uvlock {
        insert(&mut entry, "", "uvlock", true)?;
    }
    ensure_resolved(&entry, &VARIANT)?;
    Ok(entry)
}
