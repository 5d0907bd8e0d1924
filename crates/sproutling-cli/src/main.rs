//! Sproutling command line interface
//!
//! Front end over the two core crates: the impact calculator is a pure
//! computation over flags or a TOML profile, while the companion
//! commands load state from the data directory, run one transition,
//! and write it back.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use companion_core::{
    apply_care_action, can_unlock, chapters_for, complete_daily_action, find_chapter,
    refresh_on_load, rescue_roster, unlock_story, CareAction, CompanionRecord, CompanionStore,
    DailyAction, DailyActionLedger, JsonFileStore, ProgressionEvent,
};
use impact_core::{
    economic_score, environmental_score, evaluate_achievements, ConsumptionVector, EconomicTotals,
    EnvironmentalEquivalents, EnvironmentalTotals, FoodCategory, ImpactConfig, ImpactTotals,
    MAX_MEALS_PER_WEEK,
};

mod error;

use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "sproutling")]
#[command(about = "Track the impact of plant-based eating and care for a rescued companion")]
struct Cli {
    /// Directory holding companion state
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the impact of a weekly consumption profile
    Impact {
        /// Weekly meals avoided as category=count, repeatable
        #[arg(long = "meals", value_name = "FOOD=N")]
        meals: Vec<String>,

        /// TOML file with a [meals] table
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// TOML file overriding tables, weights, or the tier ladder
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// List the rescue animals available for adoption
    Roster,
    /// Adopt a rescue animal by id
    Adopt {
        /// Roster id, e.g. cow-1
        id: String,

        /// Rename the companion at adoption
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the companion's current state
    Status,
    /// Interact with the companion
    Care {
        /// One of: feed, pet, play
        action: String,
    },
    /// Complete a once-per-day task, or list them
    Daily {
        /// Task id, e.g. log-meal; omit to list today's tasks
        action: Option<String>,
    },
    /// Show story chapters, optionally unlocking one
    Story {
        /// Chapter id to unlock
        #[arg(long, value_name = "ID")]
        unlock: Option<String>,
    },
}

/// Meal profile file shape: a single [meals] table.
#[derive(Debug, Default, Deserialize)]
struct MealProfile {
    #[serde(default)]
    meals: HashMap<FoodCategory, u32>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sproutling=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = JsonFileStore::new(&cli.data_dir);
    match cli.command {
        Command::Impact {
            meals,
            profile,
            config,
        } => cmd_impact(&meals, profile.as_deref(), config.as_deref()),
        Command::Roster => cmd_roster(),
        Command::Adopt { id, name } => cmd_adopt(&store, &id, name),
        Command::Status => cmd_status(&store),
        Command::Care { action } => cmd_care(&store, &action),
        Command::Daily { action } => cmd_daily(&store, action.as_deref()),
        Command::Story { unlock } => cmd_story(&store, unlock.as_deref()),
    }
}

fn cmd_impact(
    meals: &[String],
    profile: Option<&std::path::Path>,
    config: Option<&std::path::Path>,
) -> Result<(), CliError> {
    let config = match config {
        Some(path) => ImpactConfig::from_file(path)?,
        None => ImpactConfig::default(),
    };

    let mut consumption = ConsumptionVector::new();
    if let Some(path) = profile {
        let raw = std::fs::read_to_string(path)?;
        let parsed: MealProfile = toml::from_str(&raw)?;
        for (category, count) in parsed.meals {
            consumption.set(category, count);
        }
    }
    for entry in meals {
        let (category, count) = parse_meal_flag(entry)?;
        consumption.set(category, count);
    }
    if consumption.is_empty() {
        return Err(CliError::Usage(
            "no meals given; pass --meals beef=3 or --profile meals.toml".to_string(),
        ));
    }

    let environmental = EnvironmentalTotals::compute(&consumption, &config.environmental);
    let economic = EconomicTotals::compute(&consumption, &config.economic);
    let env_points = environmental_score(&environmental, &config.weights.environmental);
    let eco_points = economic_score(&economic, &config.weights.economic);
    let score = env_points + eco_points;

    println!("Weekly Impact");
    println!("=============");
    for category in FoodCategory::ALL {
        let count = consumption.get(category);
        if count > 0 {
            println!("  {} meals of {} avoided", count, category.name());
        }
    }
    println!();
    println!("Environmental");
    println!("  Water saved:      {:.0} gallons", environmental.water);
    println!("  CO2 avoided:      {:.1} kg", environmental.carbon);
    println!("  Land spared:      {:.0} sq ft", environmental.land);
    println!("  Grain freed:      {:.1} lb", environmental.grain);
    let eq = EnvironmentalEquivalents::from_totals(&environmental);
    println!("  That is {} showers, {} miles of driving, {} meals of grain",
        eq.showers, eq.miles_driven, eq.people_meals);
    println!();
    println!("Economic");
    println!("  Cost savings:     ${:.2}", economic.savings);
    println!("  Jobs supported:   {:.3}", economic.jobs);
    println!("  Market growth:    ${:.2}", economic.market);
    println!("  Healthcare saved: ${:.2}", economic.healthcare);
    println!();
    println!("Score");
    println!("  Environmental: {} points", env_points);
    println!("  Economic:      {} points", eco_points);
    println!("  Total:         {} points", score);

    let tier = config.tiers.tier_for(score);
    let progress = config.tiers.progress_to_next(score);
    println!("  Tier:          {}", tier.title);
    match progress.next {
        Some(next) => println!(
            "  Next tier:     {} ({} points to go, {}%)",
            next.title, progress.points_needed, progress.percent
        ),
        None => println!("  Next tier:     none, top of the ladder"),
    }

    let totals = ImpactTotals::from_parts(&environmental, &economic, &config.weights.economic);
    let earned = evaluate_achievements(&totals, &Default::default());
    if !earned.is_empty() {
        println!();
        println!("Achievements");
        for achievement in earned {
            println!("  {}: {}", achievement.title(), achievement.description());
        }
    }
    Ok(())
}

fn parse_meal_flag(entry: &str) -> Result<(FoodCategory, u32), CliError> {
    let (name, count) = entry
        .split_once('=')
        .ok_or_else(|| CliError::Usage(format!("expected FOOD=N, got '{entry}'")))?;
    let category: FoodCategory = name.parse()?;
    let count: u32 = count
        .parse()
        .map_err(|_| CliError::Usage(format!("meal count must be a number, got '{count}'")))?;
    if count > MAX_MEALS_PER_WEEK {
        debug!(category = %category, count, "clamping meal count");
    }
    Ok((category, count))
}

fn cmd_roster() -> Result<(), CliError> {
    println!("Rescue Roster");
    println!("=============");
    for profile in rescue_roster() {
        println!("  {:10} {} the {}", profile.id, profile.name, profile.species);
        println!("             {}", profile.story);
    }
    println!();
    println!("Adopt one with: sproutling adopt <id>");
    Ok(())
}

fn cmd_adopt(store: &JsonFileStore, id: &str, name: Option<String>) -> Result<(), CliError> {
    if let Some(existing) = store.load_companion()? {
        return Err(CliError::Usage(format!(
            "you already care for {}; one companion at a time",
            existing.name
        )));
    }
    let roster = rescue_roster();
    let profile = roster
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CliError::Usage(format!("no rescue animal with id '{id}'")))?;

    let now = Utc::now();
    let mut record = CompanionRecord::adopt(profile, now);
    if let Some(name) = name {
        record.name = name;
    }
    store.save_companion(&record)?;
    store.save_ledger(&DailyActionLedger::fresh(now.date_naive()))?;

    println!("You adopted {} the {}!", record.name, record.species);
    println!("{}", record.origin_story);
    println!();
    println!("Check in with: sproutling status");
    Ok(())
}

/// Loads the companion, migrating legacy documents, applying absence
/// decay, and sweeping day-gated milestones. Every companion command
/// starts here.
fn load_companion(store: &JsonFileStore) -> Result<CompanionRecord, CliError> {
    let mut record = store
        .load_companion()?
        .ok_or_else(|| CliError::Usage("no companion yet; run: sproutling roster".to_string()))?;
    let now = Utc::now();
    let migrated = record.migrate();
    let (report, events) = refresh_on_load(&mut record, now);
    if let Some(report) = report {
        if report.misses_you {
            println!(
                "{} missed you! It has been {} days.",
                record.name, report.days_away
            );
        }
    }
    print_events(&events);
    if migrated || report.is_some() || !events.is_empty() {
        store.save_companion(&record)?;
    }
    Ok(record)
}

fn load_ledger(store: &JsonFileStore) -> Result<DailyActionLedger, CliError> {
    let mut ledger = store
        .load_ledger()?
        .unwrap_or_else(|| DailyActionLedger::fresh(Utc::now().date_naive()));
    ledger.roll_to(Utc::now().date_naive());
    Ok(ledger)
}

fn cmd_status(store: &JsonFileStore) -> Result<(), CliError> {
    let record = load_companion(store)?;
    println!("{} the {}", record.name, record.species);
    println!("=============");
    println!("  Level:      {} ({}/{} exp)", record.level, record.experience, record.next_level_exp);
    println!("  Health:     {}/100", record.health);
    println!("  Happiness:  {}/100", record.happiness);
    println!("  Mood:       {}", record.mood());
    println!("  Adopted:    {}", record.adopted_at.format("%Y-%m-%d"));

    println!();
    println!("Milestones");
    for milestone in &record.milestones {
        let mark = if milestone.achieved { "x" } else { " " };
        println!("  [{}] {}", mark, milestone.name);
    }

    if !record.actions.is_empty() {
        println!();
        println!("Recent activity");
        for entry in record.actions.iter().take(5) {
            println!(
                "  {}  {} (+{} exp)",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.description,
                entry.exp_gained
            );
        }
    }
    Ok(())
}

fn cmd_care(store: &JsonFileStore, action: &str) -> Result<(), CliError> {
    let action: CareAction = action.parse()?;
    let mut record = load_companion(store)?;

    let events = apply_care_action(&mut record, action, Utc::now());
    store.save_companion(&record)?;

    println!("{}", record.actions[0].description);
    println!(
        "  +{} exp, health {}/100, happiness {}/100",
        action.exp_reward(),
        record.health,
        record.happiness
    );
    print_events(&events);
    Ok(())
}

fn cmd_daily(store: &JsonFileStore, action: Option<&str>) -> Result<(), CliError> {
    let mut record = load_companion(store)?;
    let mut ledger = load_ledger(store)?;

    let Some(action) = action else {
        println!("Today's tasks");
        println!("=============");
        for task in DailyAction::ALL {
            let mark = if ledger.is_completed(task) { "x" } else { " " };
            println!("  [{}] {:16} {} (+{} exp)", mark, task.id(), task.title(), task.exp_reward());
        }
        return Ok(());
    };

    let action: DailyAction = action.parse()?;
    let outcome = complete_daily_action(&mut record, &mut ledger, action, Utc::now());
    if !outcome.applied {
        println!("{} is already done today. Come back tomorrow!", action.title());
        return Ok(());
    }
    store.save_companion(&record)?;
    store.save_ledger(&ledger)?;

    println!("{} complete! +{} exp", action.title(), action.exp_reward());
    print_events(&outcome.events);
    Ok(())
}

fn cmd_story(store: &JsonFileStore, unlock: Option<&str>) -> Result<(), CliError> {
    let mut record = load_companion(store)?;
    let species = record.species;

    if let Some(id) = unlock {
        let chapter = find_chapter(species, id)
            .ok_or_else(|| CliError::Usage(format!("no chapter '{id}' for a {species}")))?;
        if record.unlocked_stories.iter().any(|s| s == chapter.id) {
            println!("You have already read \"{}\".", chapter.title);
            return Ok(());
        }
        if !can_unlock(&record, chapter) {
            return Err(CliError::Usage(format!(
                "\"{}\" unlocks at level {}; {} is level {}",
                chapter.title, chapter.unlock_level, record.name, record.level
            )));
        }
        let events = unlock_story(&mut record, chapter, Utc::now());
        store.save_companion(&record)?;
        println!("Unlocked \"{}\"! +25 exp", chapter.title);
        print_events(&events);
        return Ok(());
    }

    println!("{}'s story", record.name);
    println!("=============");
    for chapter in chapters_for(species) {
        let state = if record.unlocked_stories.iter().any(|s| s == chapter.id) {
            "read".to_string()
        } else if record.level >= chapter.unlock_level {
            "ready to unlock".to_string()
        } else {
            format!("locked until level {}", chapter.unlock_level)
        };
        println!("  {:16} {:24} {}", chapter.id, chapter.title, state);
    }
    Ok(())
}

fn print_events(events: &[ProgressionEvent]) {
    for event in events {
        match event {
            ProgressionEvent::LeveledUp { level } => {
                println!("  Level up! Now level {level}.");
            }
            ProgressionEvent::MilestoneAchieved { name, .. } => {
                println!("  Milestone achieved: {name}");
            }
            ProgressionEvent::ChapterUnlocked { title, .. } => {
                println!("  New chapter: \"{title}\"");
            }
        }
    }
}
