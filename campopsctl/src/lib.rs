use std::path::PathBuf;

use campops_core::{
    load_campops_config, template_for_trip_type, CampopsConfig, NewTrip, PackingItem,
    PackingRepository, ReadinessStats, StorageEngine, Trip, TripRepository, TripType,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] campops_core::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage error: {0}")]
    Storage(#[from] campops_core::StorageError),
    #[error("trip error: {0}")]
    Trip(#[from] campops_core::TripError),
    #[error("packing error: {0}")]
    Packing(#[from] campops_core::PackingError),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("required resource missing: {0}")]
    MissingResource(String),
    #[error("trip {trip_id} already has packing items; pass --force to add the template anyway")]
    TemplateRefused { trip_id: String },
    #[error("no built-in template for trip type {trip_type}")]
    NoTemplate { trip_type: TripType },
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Campops trip-packing command line", long_about = None)]
pub struct Cli {
    /// Path to the main campops.toml
    #[arg(long, default_value = "configs/campops.toml")]
    pub config: PathBuf,
    /// Override for the data directory (replaces paths.data_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Override for the campops.sqlite path
    #[arg(long)]
    pub db: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and apply the schema
    Init,
    /// Trip operations
    #[command(subcommand)]
    Trip(TripCommands),
    /// Packing checklist operations
    #[command(subcommand)]
    Pack(PackCommands),
    /// Readiness summary for a trip
    Readiness { trip_id: String },
}

#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// List trips, most recently updated first
    List,
    /// Show one trip
    Show { trip_id: String },
    /// Create a trip
    Create(TripCreateArgs),
    /// Delete a trip and its packing items
    Delete { trip_id: String },
}

#[derive(Args, Debug)]
pub struct TripCreateArgs {
    /// Trip name
    #[arg(long)]
    pub name: String,
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub start_date: NaiveDate,
    /// Last day, YYYY-MM-DD
    #[arg(long)]
    pub end_date: NaiveDate,
    /// car_camping or backpacking
    #[arg(long)]
    pub trip_type: TripType,
    /// Number of people
    #[arg(long, default_value_t = 1)]
    pub group_size: i64,
}

#[derive(Subcommand, Debug)]
pub enum PackCommands {
    /// List the checklist for a trip
    List { trip_id: String },
    /// Seed the trip's checklist from the built-in template for its type
    ApplyTemplate(ApplyTemplateArgs),
    /// Mark an item packed (or unpacked with --unpack)
    Toggle(ToggleArgs),
}

#[derive(Args, Debug)]
pub struct ApplyTemplateArgs {
    pub trip_id: String,
    /// Add the template even if the trip already has items
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ToggleArgs {
    pub item_id: String,
    /// Mark the item unpacked instead of packed
    #[arg(long, default_value_t = false)]
    pub unpack: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let context = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Init => {
            let result = context.init()?;
            render(&result, cli.format)?;
        }
        Commands::Trip(TripCommands::List) => {
            context.require_database()?;
            let trips = context.trip_list()?;
            render(&trips, cli.format)?;
        }
        Commands::Trip(TripCommands::Show { trip_id }) => {
            context.require_database()?;
            let trip = context.trip_show(trip_id)?;
            render(&trip, cli.format)?;
        }
        Commands::Trip(TripCommands::Create(args)) => {
            context.require_database()?;
            let trip = context.trip_create(args)?;
            render(&trip, cli.format)?;
        }
        Commands::Trip(TripCommands::Delete { trip_id }) => {
            context.require_database()?;
            let result = context.trip_delete(trip_id)?;
            render(&result, cli.format)?;
        }
        Commands::Pack(PackCommands::List { trip_id }) => {
            context.require_database()?;
            let list = context.pack_list(trip_id)?;
            render(&list, cli.format)?;
        }
        Commands::Pack(PackCommands::ApplyTemplate(args)) => {
            context.require_database()?;
            let result = context.apply_template(args)?;
            render(&result, cli.format)?;
        }
        Commands::Pack(PackCommands::Toggle(args)) => {
            context.require_database()?;
            let result = context.toggle(args)?;
            render(&result, cli.format)?;
        }
        Commands::Readiness { trip_id } => {
            context.require_database()?;
            let report = context.readiness(trip_id)?;
            render(&report, cli.format)?;
        }
    }

    Ok(())
}

fn render<T>(value: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + DisplayFallback,
{
    match format {
        OutputFormat::Text => {
            println!("{}", value.display());
            Ok(())
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            println!("{}", json);
            Ok(())
        }
    }
}

trait DisplayFallback {
    fn display(&self) -> String;
}

#[derive(Debug)]
struct AppContext {
    config: CampopsConfig,
    db_path: PathBuf,
    trips: TripRepository,
    packing: PackingRepository,
    engine: StorageEngine,
}

impl AppContext {
    fn new(cli: &Cli) -> Result<Self> {
        let config = load_campops_config(&cli.config)?;

        let data_dir = cli
            .data_dir
            .clone()
            .unwrap_or_else(|| config.resolve_path(&config.paths.data_dir));
        let db_path = cli.db.clone().unwrap_or_else(|| data_dir.join("campops.sqlite"));

        let engine = StorageEngine::new(&db_path)?;
        Ok(Self {
            config,
            db_path,
            trips: TripRepository::new(engine.clone()),
            packing: PackingRepository::new(engine.clone()),
            engine,
        })
    }

    fn require_database(&self) -> Result<()> {
        if self.db_path.exists() {
            Ok(())
        } else {
            Err(AppError::MissingResource(format!(
                "database not found at {}; run `campopsctl init` first",
                self.db_path.display()
            )))
        }
    }

    fn init(&self) -> Result<InitResult> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.engine.initialize()?;
        Ok(InitResult {
            app_name: self.config.system.app_name.clone(),
            db_path: self.db_path.display().to_string(),
        })
    }

    fn trip_list(&self) -> Result<TripList> {
        Ok(TripList {
            rows: self.trips.list()?,
        })
    }

    fn trip_show(&self, trip_id: &str) -> Result<TripDetail> {
        let trip = self.trips.fetch_by_id(trip_id)?.ok_or_else(|| {
            AppError::MissingResource(format!("trip {trip_id} not found"))
        })?;
        let item_count = self.packing.count_items(trip_id)?;
        Ok(TripDetail { trip, item_count })
    }

    fn trip_create(&self, args: &TripCreateArgs) -> Result<TripDetail> {
        let id = self.trips.create(&NewTrip {
            name: args.name.clone(),
            start_date: args.start_date,
            end_date: args.end_date,
            trip_type: args.trip_type,
            group_size: args.group_size,
        })?;
        self.trip_show(&id)
    }

    fn trip_delete(&self, trip_id: &str) -> Result<Ack> {
        self.trips.delete(trip_id)?;
        Ok(Ack {
            message: format!("trip {trip_id} deleted"),
        })
    }

    fn pack_list(&self, trip_id: &str) -> Result<PackList> {
        Ok(PackList {
            rows: self.packing.list_items(trip_id)?,
        })
    }

    fn apply_template(&self, args: &ApplyTemplateArgs) -> Result<ApplyResult> {
        let trip = self.trips.fetch_by_id(&args.trip_id)?.ok_or_else(|| {
            AppError::MissingResource(format!("trip {} not found", args.trip_id))
        })?;

        if !args.force && self.packing.count_items(&args.trip_id)? > 0 {
            return Err(AppError::TemplateRefused {
                trip_id: args.trip_id.clone(),
            });
        }

        let template = template_for_trip_type(trip.trip_type).ok_or(AppError::NoTemplate {
            trip_type: trip.trip_type,
        })?;
        let inserted = self.packing.apply_template(&args.trip_id, &template.items)?;

        Ok(ApplyResult {
            trip_id: args.trip_id.clone(),
            template_id: template.id,
            items_added: inserted,
        })
    }

    fn toggle(&self, args: &ToggleArgs) -> Result<Ack> {
        let packed = !args.unpack;
        self.packing.set_packed(&args.item_id, packed)?;
        Ok(Ack {
            message: format!(
                "item {} marked {}",
                args.item_id,
                if packed { "packed" } else { "unpacked" }
            ),
        })
    }

    fn readiness(&self, trip_id: &str) -> Result<ReadinessReport> {
        let trip = self.trips.fetch_by_id(trip_id)?.ok_or_else(|| {
            AppError::MissingResource(format!("trip {trip_id} not found"))
        })?;
        let stats = self.packing.readiness(trip_id)?;
        Ok(ReadinessReport {
            trip_id: trip.id,
            trip_name: trip.name,
            stats,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct InitResult {
    pub app_name: String,
    pub db_path: String,
}

impl DisplayFallback for InitResult {
    fn display(&self) -> String {
        format!("{} database ready at {}", self.app_name, self.db_path)
    }
}

#[derive(Debug, Serialize)]
pub struct TripList {
    pub rows: Vec<Trip>,
}

impl DisplayFallback for TripList {
    fn display(&self) -> String {
        if self.rows.is_empty() {
            return "No trips yet".to_string();
        }
        let mut lines = Vec::new();
        for trip in &self.rows {
            lines.push(format!(
                "{} | {} | {} → {} | {} | group={}",
                trip.id, trip.name, trip.start_date, trip.end_date, trip.trip_type, trip.group_size
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct TripDetail {
    pub trip: Trip,
    pub item_count: i64,
}

impl DisplayFallback for TripDetail {
    fn display(&self) -> String {
        format!(
            "{}\n  name: {}\n  dates: {} → {}\n  type: {}\n  group: {}\n  items: {}",
            self.trip.id,
            self.trip.name,
            self.trip.start_date,
            self.trip.end_date,
            self.trip.trip_type,
            self.trip.group_size,
            self.item_count
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PackList {
    pub rows: Vec<PackingItem>,
}

impl DisplayFallback for PackList {
    fn display(&self) -> String {
        if self.rows.is_empty() {
            return "Checklist is empty".to_string();
        }
        let mut lines = Vec::new();
        let mut current_category = "";
        for item in &self.rows {
            if item.category != current_category {
                lines.push(format!("{}:", item.category));
                current_category = &item.category;
            }
            let mark = if item.packed { "x" } else { " " };
            let quantity = if item.quantity > 1 {
                format!(" x{}", item.quantity)
            } else {
                String::new()
            };
            lines.push(format!("  [{mark}] {}{} ({})", item.name, quantity, item.id));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct ApplyResult {
    pub trip_id: String,
    pub template_id: String,
    pub items_added: usize,
}

impl DisplayFallback for ApplyResult {
    fn display(&self) -> String {
        format!(
            "added {} items from {} to {}",
            self.items_added, self.template_id, self.trip_id
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ReadinessReport {
    pub trip_id: String,
    pub trip_name: String,
    #[serde(flatten)]
    pub stats: ReadinessStats,
}

impl DisplayFallback for ReadinessReport {
    fn display(&self) -> String {
        let mut lines = vec![format!(
            "{}: {} of {} packed ({}%)",
            self.trip_name, self.stats.packed_count, self.stats.total_count, self.stats.percent_packed
        )];
        if !self.stats.missing_by_category.is_empty() {
            lines.push("Still missing:".to_string());
            for entry in &self.stats.missing_by_category {
                lines.push(format!("  - {}: {}", entry.category, entry.missing_count));
            }
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: String,
}

impl DisplayFallback for Ack {
    fn display(&self) -> String {
        self.message.clone()
    }
}
