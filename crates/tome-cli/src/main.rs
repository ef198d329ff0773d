//! CLI frontend for the Tome character sheet engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tome_core::{AbilityType, SkillType};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tome",
    about = "Tome: a character sheet engine for tabletop role-playing games",
    version,
    propagate_version = true
)]
struct Cli {
    /// Character document to operate on
    #[arg(long, global = true, env = "TOME_SHEET", default_value = "character.json")]
    sheet: PathBuf,

    /// RNG seed for deterministic d20 rolls
    #[arg(long, global = true, env = "TOME_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character sheet
    New {
        /// Character name
        name: String,

        /// Starting level
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// Overwrite an existing sheet
        #[arg(long)]
        force: bool,
    },

    /// Print the full character sheet
    Show,

    /// Tabulate ability and skill modifiers
    Modifiers,

    /// Set an ability score (1-30)
    Set {
        /// Ability name or abbreviation (e.g. dexterity, dex)
        ability: AbilityType,

        /// New score
        score: i32,
    },

    /// Change the character's level
    Level {
        /// New level (at least 1)
        level: u32,
    },

    /// Learn, forget, or retrain skills
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },

    /// Apply or remove buffs and debuffs
    Buff {
        #[command(subcommand)]
        action: BuffAction,
    },

    /// Roll a check and record it (advances buffs by one round)
    Roll {
        #[command(subcommand)]
        check: RollCheck,
    },

    /// Show or edit the roll history
    History {
        /// Only show the most recent N rolls
        #[arg(short, long)]
        last: Option<usize>,

        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand)]
enum SkillAction {
    /// Learn a skill
    Add {
        /// Skill name (e.g. stealth, "sleight of hand")
        skill: SkillType,

        /// Mark the character as proficient
        #[arg(short, long)]
        proficient: bool,
    },
    /// Forget a skill
    Remove {
        /// Skill name
        skill: SkillType,
    },
    /// Set proficiency on a learned skill
    Proficient {
        /// Skill name
        skill: SkillType,

        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

#[derive(Subcommand)]
enum BuffAction {
    /// Apply a buff or debuff
    Add {
        /// Display name
        name: String,

        /// Affected ability
        ability: AbilityType,

        /// Signed amount added to the ability modifier
        #[arg(allow_negative_numbers = true)]
        magnitude: i32,

        /// Duration in rounds
        duration: u32,
    },
    /// Remove the first buff or debuff with this name
    Remove {
        /// Display name
        name: String,
    },
    /// Remove all buffs and debuffs
    Clear,
    /// Remove buffs and debuffs whose duration has run out
    Prune,
}

#[derive(Subcommand)]
enum RollCheck {
    /// Roll a skill check
    Skill {
        /// Skill name
        skill: SkillType,

        /// Use this die result instead of rolling a d20
        #[arg(short, long)]
        base: Option<i32>,
    },
    /// Roll an ability check
    Ability {
        /// Ability name or abbreviation
        ability: AbilityType,

        /// Use this die result instead of rolling a d20
        #[arg(short, long)]
        base: Option<i32>,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Remove every recorded roll
    Clear,
    /// Remove one roll by index (0 = oldest)
    Remove {
        /// Roll index as shown by `tome history`
        index: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TOME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let sheet = cli.sheet.as_path();

    let result = match cli.command {
        Commands::New { name, level, force } => commands::new::run(sheet, &name, level, force),
        Commands::Show => commands::show::run(sheet),
        Commands::Modifiers => commands::modifiers::run(sheet),
        Commands::Set { ability, score } => commands::set::run(sheet, ability, score),
        Commands::Level { level } => commands::set::run_level(sheet, level),
        Commands::Skill { action } => match action {
            SkillAction::Add { skill, proficient } => {
                commands::skill::add(sheet, skill, proficient)
            }
            SkillAction::Remove { skill } => commands::skill::remove(sheet, skill),
            SkillAction::Proficient { skill, value } => {
                commands::skill::set_proficient(sheet, skill, value)
            }
        },
        Commands::Buff { action } => match action {
            BuffAction::Add {
                name,
                ability,
                magnitude,
                duration,
            } => commands::buff::add(sheet, &name, ability, magnitude, duration),
            BuffAction::Remove { name } => commands::buff::remove(sheet, &name),
            BuffAction::Clear => commands::buff::clear(sheet),
            BuffAction::Prune => commands::buff::prune(sheet),
        },
        Commands::Roll { check } => match check {
            RollCheck::Skill { skill, base } => {
                commands::roll::run(sheet, skill.into(), base, cli.seed)
            }
            RollCheck::Ability { ability, base } => {
                commands::roll::run(sheet, ability.into(), base, cli.seed)
            }
        },
        Commands::History { last, action } => match action {
            None => commands::history::list(sheet, last),
            Some(HistoryAction::Clear) => commands::history::clear(sheet),
            Some(HistoryAction::Remove { index }) => commands::history::remove(sheet, index),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
