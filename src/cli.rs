//! Command-line interface implementation for datagen.
//! Provides argument parsing and help text formatting using clap, and turns
//! the parsed arguments into validated generator requests.

use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::context::Category;
use crate::error::{Error, Result};
use crate::generator::{
    advancement::AdvancementRequest,
    blockstate::{BlockstateKind, BlockstateRequest},
    loot::LootRequest,
    machine::{MachineKind, MachineRequest},
    model::{ModelKind, ModelRequest},
    recipe::{RecipeInput, RecipeKind, RecipeRequest},
    storage::{StorageRequest, DEFAULT_BLOCK, DEFAULT_ITEM},
    tools::ToolsRequest,
    Request,
};
use crate::parser::{parse_keys, parse_pattern, ItemStack};

/// Command-line arguments structure for datagen.
#[derive(Parser, Debug)]
#[command(author, version, about = "datagen: block state, model, recipe, loot table and advancement generator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Use DIR instead of the current directory.
    /// It must have the layout the command expects, e.g. data/<namespace>/recipes
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Block states; run in assets/<namespace>/blockstates
    Blockstate(BlockstateArgs),
    /// Block and item models; run in assets/<namespace>/models
    Model(ModelArgs),
    /// Crafting and cooking recipes; run in data/<namespace>/recipes
    Recipe(RecipeArgs),
    /// Crusher and alloy smelter recipes; run in data/<namespace>/recipes
    Machine(MachineArgs),
    /// Block, ingot, nugget and chunk storage recipes; run in data/<namespace>/recipes
    Storage(StorageArgs),
    /// Tool, armor and storage recipes for a material; run in data/<namespace>/recipes
    Tools(ToolsArgs),
    /// Block loot tables; run in data/<namespace>/loot_tables/blocks
    Loot(LootArgs),
    /// Recipe unlock advancements; run in data/<namespace>/advancements/recipes
    Advancement(AdvancementArgs),
}

#[derive(clap::Args, Debug)]
pub struct BlockstateArgs {
    /// Block name, also the file name
    pub name: String,

    /// Type of block state
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: BlockstateKind,
}

#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Model name, also the file name
    pub name: String,

    /// Type of model
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: ModelKind,

    /// Only write the item model
    #[arg(long, alias = "item")]
    pub item_only: bool,
}

#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["ingredient", "pattern"])))]
#[command(group(ArgGroup::new("amount").args(["count", "keys"])))]
pub struct RecipeArgs {
    /// Id of the recipe result, e.g. 'steel_pickaxe'
    pub result: String,

    /// Number of result items
    #[arg(default_value_t = 1)]
    pub result_count: u32,

    /// Type of recipe
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: RecipeKind,

    /// Insert the namespace flag condition into the recipe
    #[arg(short, long)]
    pub conditions: bool,

    /// Id of the shapeless or cooking ingredient; '#'-prefixed or path-like ids are tags
    #[arg(short, long)]
    pub ingredient: Option<String>,

    /// Shaped crafting pattern, e.g. '"SSS"," T "," T "'
    #[arg(short, long, allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Count of shapeless ingredients
    #[arg(short = 'n', long)]
    pub count: Option<u32>,

    /// Pattern keys, semicolon separated, e.g. 'S=minecraft:iron_ingot;T=forge:rods/wooden'
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Cooking experience
    #[arg(long)]
    pub xp: Option<f64>,

    /// Cooking time in ticks, overriding the default of the recipe type
    #[arg(long)]
    pub cooking_time: Option<u32>,

    /// Alternate output file name, without extension
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct MachineArgs {
    /// Base output file name
    pub name: String,

    /// Type of machine recipe
    #[arg(short = 't', long = "type", value_enum)]
    pub kind: MachineKind,

    /// Process time in ticks
    #[arg(short = 'k', long)]
    pub ticks: Option<u32>,

    /// Ingredient ids, optionally with a count, e.g. 'foo:bar_dust,2'; prefix tags with '#'
    #[arg(short, long, required = true, num_args = 1..)]
    pub ingredient: Vec<String>,

    /// Result ids, optionally with a count or a chance, e.g. 'foo:bar_dust,0.1'
    #[arg(short, long, required = true, num_args = 1..)]
    pub result: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct StorageArgs {
    /// Material name, e.g. 'steel' for 'steel_block', 'steel_ingot', 'steel_nugget'
    pub material: String,

    /// Do not generate nugget recipes
    #[arg(short = 'n', long)]
    pub no_nugget: bool,

    /// Insert the namespace flag condition into the recipes
    #[arg(short, long)]
    pub conditions: bool,

    /// Also generate large chunk recipes
    #[arg(short = 'L', long, conflicts_with = "no_nugget")]
    pub large_chunk: bool,

    /// Also generate medium chunk recipes
    #[arg(short = 'M', long, requires = "large_chunk", conflicts_with = "no_nugget")]
    pub medium_chunk: bool,

    /// Alternate name for the item
    #[arg(short, long, default_value = DEFAULT_ITEM)]
    pub item: String,

    /// Alternate name for the block
    #[arg(short, long, default_value = DEFAULT_BLOCK)]
    pub block: String,
}

#[derive(clap::Args, Debug)]
pub struct ToolsArgs {
    /// Material prefix, e.g. 'steel' for 'steel_axe', 'steel_pickaxe'
    pub prefix: String,

    /// Also generate armor recipes
    #[arg(short, long)]
    pub armor: bool,

    /// Do not generate the block, ingot and nugget recipes
    #[arg(long)]
    pub nostore: bool,

    /// Insert the namespace flag condition into the recipes
    #[arg(short, long)]
    pub conditions: bool,
}

#[derive(clap::Args, Debug)]
pub struct LootArgs {
    /// Name of the block (without namespace) that drops itself
    pub block: String,
}

#[derive(clap::Args, Debug)]
pub struct AdvancementArgs {
    /// Recipes granted by the advancement
    #[arg(required = true)]
    pub recipes: Vec<String>,

    /// Id of the item whose possession triggers the advancement
    #[arg(short, long)]
    pub item: String,

    /// Alternate output file name, without extension
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Command {
    /// The directory category the command has to run in.
    pub fn category(&self) -> Category {
        match self {
            Command::Blockstate(_) => Category::Blockstates,
            Command::Model(_) => Category::Models,
            Command::Recipe(_) | Command::Machine(_) | Command::Storage(_) | Command::Tools(_) => {
                Category::Recipes
            }
            Command::Loot(_) => Category::LootTables,
            Command::Advancement(_) => Category::Advancements,
        }
    }

    /// Parses compact values and validates the arguments into a request.
    pub fn into_request(self) -> Result<Request> {
        let request = match self {
            Command::Blockstate(args) => {
                Request::Blockstate(BlockstateRequest::new(args.kind, args.name)?)
            }
            Command::Model(args) => {
                Request::Model(ModelRequest::new(args.kind, args.name, args.item_only)?)
            }
            Command::Recipe(args) => Request::Recipe(args.into_request()?),
            Command::Machine(args) => Request::Machine(MachineRequest::new(
                args.kind,
                args.name,
                args.ticks,
                parse_stacks(&args.ingredient)?,
                parse_stacks(&args.result)?,
            )?),
            Command::Storage(args) => Request::Storage(StorageRequest::new(
                args.material,
                args.item,
                args.block,
                !args.no_nugget,
                args.large_chunk,
                args.medium_chunk,
                args.conditions,
            )?),
            Command::Tools(args) => Request::Tools(ToolsRequest::new(
                args.prefix,
                args.armor,
                !args.nostore,
                args.conditions,
            )?),
            Command::Loot(args) => Request::Loot(LootRequest::new(args.block)?),
            Command::Advancement(args) => Request::Advancement(AdvancementRequest::new(
                args.item,
                args.recipes,
                args.output,
            )?),
        };
        Ok(request)
    }
}

impl RecipeArgs {
    fn into_request(self) -> Result<RecipeRequest> {
        let input = match (self.ingredient, self.pattern) {
            (Some(ingredient), None) => {
                if self.keys.is_some() {
                    return Err(Error::ValidationError(
                        "--keys only applies to --pattern".to_string(),
                    ));
                }
                RecipeInput::Ingredient {
                    stack: ingredient.parse()?,
                    count: self.count.unwrap_or(1),
                }
            }
            (None, Some(pattern)) => {
                let keys = self.keys.ok_or_else(|| {
                    Error::ValidationError("--pattern needs --keys".to_string())
                })?;
                RecipeInput::Pattern {
                    rows: parse_pattern(&pattern)?,
                    keys: parse_keys(&keys)?,
                }
            }
            _ => {
                return Err(Error::ValidationError(
                    "exactly one of --ingredient and --pattern is required".to_string(),
                ))
            }
        };
        RecipeRequest::new(
            self.kind,
            self.result,
            self.result_count,
            input,
            self.xp,
            self.cooking_time,
            self.output,
            self.conditions,
        )
    }
}

fn parse_stacks(tokens: &[String]) -> Result<Vec<ItemStack>> {
    tokens.iter().map(|token| token.parse()).collect()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing, after printing help
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
