use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hearing_allocation::{
    get_delta_seeded_prosecution_cases, get_differences,
    get_related_seeding_hearings_prosecution_cases_map,
    transform_to_update_hearing_for_partial_allocation, AllocationConfig,
    CourtCentreCommittingCourt, ListingCommandBuilder, NextHearingGrouper,
    SeededProsecutionCases,
};
use hearing_model::{
    ConfirmedHearing, Hearing, Jurisdiction, ListCourtHearing, ListNextHearings, ProsecutionCase,
    SeedingHearing, UpdateHearingForPartialAllocation,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "hearing-allocation")]
#[command(about = "Split resulted and partially allocated court hearings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Allocation config (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number new listings seed+1, seed+2, ... instead of random ids
    #[arg(long, global = true)]
    listing_id_seed: Option<Uuid>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a resulted hearing into the next hearings its results ask for
    #[command(name = "next-hearings")]
    NextHearings(NextHearingsArgs),

    /// Compute what a confirmed hearing dropped and the removal command for it
    #[command(name = "partial-allocation")]
    PartialAllocation(PartialAllocationArgs),

    /// Split unconfirmed offences by the hearing that seeded them
    Seeded(SeededArgs),
}

#[derive(Args)]
struct NextHearingsArgs {
    /// Resulted hearing (JSON)
    #[arg(long)]
    hearing: PathBuf,

    /// Attach committing court details to listed offences
    #[arg(long)]
    include_committing_court: bool,

    #[command(flatten)]
    seeding: OptionalSeedingArgs,
}

#[derive(Args)]
struct OptionalSeedingArgs {
    /// Hearing that seeds the next hearings
    #[arg(long, requires = "seeding_jurisdiction")]
    seeding_hearing_id: Option<Uuid>,

    #[arg(long, value_enum, requires = "seeding_hearing_id")]
    seeding_jurisdiction: Option<JurisdictionArg>,
}

impl OptionalSeedingArgs {
    fn seeding_hearing(&self) -> Option<SeedingHearing> {
        let id = self.seeding_hearing_id?;
        let jurisdiction = self.seeding_jurisdiction?;
        Some(SeedingHearing::new(id, jurisdiction.into()))
    }
}

#[derive(Args)]
struct PartialAllocationArgs {
    /// Confirmed hearing (JSON)
    #[arg(long)]
    confirmed: PathBuf,

    /// Hearing in progression (JSON)
    #[arg(long)]
    hearing: PathBuf,

    /// Also build a listing request for the detached cases
    #[arg(long)]
    relist: bool,
}

#[derive(Args)]
struct SeededArgs {
    /// Confirmed hearing (JSON)
    #[arg(long)]
    confirmed: PathBuf,

    /// Hearing in progression (JSON)
    #[arg(long)]
    hearing: PathBuf,

    #[arg(long)]
    seeding_hearing_id: Uuid,

    #[arg(long, value_enum)]
    seeding_jurisdiction: JurisdictionArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum JurisdictionArg {
    Crown,
    Magistrates,
}

impl From<JurisdictionArg> for Jurisdiction {
    fn from(arg: JurisdictionArg) -> Self {
        match arg {
            JurisdictionArg::Crown => Self::Crown,
            JurisdictionArg::Magistrates => Self::Magistrates,
        }
    }
}

#[derive(Serialize)]
struct PartialAllocationOutput {
    update_hearing: UpdateHearingForPartialAllocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_court_hearing: Option<ListCourtHearing>,
}

#[derive(Serialize)]
struct SeededOutput {
    delta_seeded: Vec<ProsecutionCase>,
    related: Vec<SeededProsecutionCases>,
    list_next_hearings: Vec<ListNextHearings>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = match &cli.config {
        Some(path) => AllocationConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AllocationConfig::default(),
    };

    let seed = cli.listing_id_seed;
    match cli.command {
        Commands::NextHearings(args) => run_next_hearings(args, config),
        Commands::PartialAllocation(args) => run_partial_allocation(args, config, seed),
        Commands::Seeded(args) => run_seeded(args, config, seed),
    }
}

fn listing_builder(
    config: AllocationConfig,
    seed: Option<Uuid>,
) -> ListingCommandBuilder<Box<dyn Fn() -> Uuid>> {
    let next_id: Box<dyn Fn() -> Uuid> = match seed {
        Some(seed) => {
            let issued = Cell::new(0u128);
            Box::new(move || {
                issued.set(issued.get() + 1);
                Uuid::from_u128(seed.as_u128().wrapping_add(issued.get()))
            })
        }
        None => Box::new(Uuid::new_v4),
    };
    ListingCommandBuilder::with_id_source(config, next_id)
}

fn run_next_hearings(args: NextHearingsArgs, config: AllocationConfig) -> Result<()> {
    let hearing: Hearing = read_json(&args.hearing)?;
    let seeding = args.seeding.seeding_hearing();

    let grouper = NextHearingGrouper::with_converter(
        config,
        CourtCentreCommittingCourt::new(hearing.court_centre.clone()),
    );
    let details = grouper
        .get_next_hearing_details(&hearing, args.include_committing_court, seeding.as_ref())
        .with_context(|| format!("Failed to group next hearings of {}", hearing.id))?;

    print_json(&details)
}

fn run_partial_allocation(
    args: PartialAllocationArgs,
    config: AllocationConfig,
    seed: Option<Uuid>,
) -> Result<()> {
    let confirmed: ConfirmedHearing = read_json(&args.confirmed)?;
    let hearing: Hearing = read_json(&args.hearing)?;

    let delta = get_differences(&confirmed, &hearing)
        .with_context(|| format!("Failed to diff hearing {}", hearing.id))?;
    let update_hearing = transform_to_update_hearing_for_partial_allocation(hearing.id, &delta);

    let builder = listing_builder(config, seed);
    let list_court_hearing = (args.relist && !update_hearing.is_empty()).then(|| {
        builder.transform_to_list_court_hearing(&delta, &confirmed, &hearing)
    });

    log::info!(
        "Hearing {}: removing {} offence(s)",
        hearing.id,
        update_hearing.offence_count()
    );

    print_json(&PartialAllocationOutput {
        update_hearing,
        list_court_hearing,
    })
}

fn run_seeded(args: SeededArgs, config: AllocationConfig, seed: Option<Uuid>) -> Result<()> {
    let confirmed: ConfirmedHearing = read_json(&args.confirmed)?;
    let hearing: Hearing = read_json(&args.hearing)?;
    let seeding = SeedingHearing::new(args.seeding_hearing_id, args.seeding_jurisdiction.into());

    let delta_seeded = get_delta_seeded_prosecution_cases(&confirmed, &hearing, &seeding)?;
    let related =
        get_related_seeding_hearings_prosecution_cases_map(&confirmed, &hearing, &seeding)?;

    let builder = listing_builder(config, seed);
    let mut list_next_hearings = Vec::with_capacity(related.len() + 1);
    if !delta_seeded.is_empty() {
        list_next_hearings.push(builder.transform_to_list_next_court_hearing(
            &delta_seeded,
            &confirmed,
            &hearing,
            seeding,
        ));
    }
    let related_listings =
        builder.transform_related_seeding_hearings(&related, &confirmed, &hearing);
    list_next_hearings.extend(related_listings);

    print_json(&SeededOutput {
        delta_seeded,
        related,
        list_next_hearings,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
