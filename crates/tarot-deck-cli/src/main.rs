use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Map, Value};
use tarot_deck_core::{Arcana, CardRecord, LookupService, Suit, CATALOG_SIZE};
use tracing_subscriber::EnvFilter;

const CLI_CONTRACT_VERSION: &str = "cli.v1";

#[derive(Debug, Parser)]
#[command(name = "deck")]
#[command(about = "Tarot deck catalog CLI")]
struct Cli {
    /// Log verbosity on stderr. `RUST_LOG` takes precedence when set.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Print single-line JSON.
    #[arg(long, default_value_t = false, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Card {
        #[command(subcommand)]
        command: CardCommand,
    },
    Crystal {
        #[command(subcommand)]
        command: CrystalCommand,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Debug, Subcommand)]
enum CardCommand {
    Show(CardShowArgs),
    List(CardListArgs),
    Find(CardFindArgs),
}

#[derive(Debug, Args)]
struct CardShowArgs {
    #[arg(long, allow_negative_numbers = true)]
    index: i64,
}

#[derive(Debug, Args)]
struct CardListArgs {
    #[arg(long, value_enum)]
    arcana: Option<ArcanaArg>,
    #[arg(long, value_enum)]
    suit: Option<SuitArg>,
}

#[derive(Debug, Args)]
struct CardFindArgs {
    #[arg(long)]
    name: String,
}

#[derive(Debug, Subcommand)]
enum CrystalCommand {
    Show(CrystalShowArgs),
    List,
}

#[derive(Debug, Args)]
struct CrystalShowArgs {
    #[arg(long)]
    crystal: String,
}

#[derive(Debug, Subcommand)]
enum CatalogCommand {
    Verify,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArcanaArg {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SuitArg {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl From<SuitArg> for Suit {
    fn from(value: SuitArg) -> Self {
        match value {
            SuitArg::Wands => Self::Wands,
            SuitArg::Cups => Self::Cups,
            SuitArg::Swords => Self::Swords,
            SuitArg::Pentacles => Self::Pentacles,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Output {
    compact: bool,
}

impl Output {
    fn emit(self, mut document: Map<String, Value>) -> Result<()> {
        document.insert(
            "contract_version".to_string(),
            Value::String(CLI_CONTRACT_VERSION.to_string()),
        );
        let document = Value::Object(document);
        let rendered = if self.compact {
            serde_json::to_string(&document)
        } else {
            serde_json::to_string_pretty(&document)
        }
        .context("failed to render JSON output")?;
        println!("{rendered}");
        Ok(())
    }
}

fn fields<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

/// `Rose Quartz` and `rose-quartz` both become `rose_quartz`.
fn normalize_crystal(input: &str) -> String {
    input
        .split(|ch: char| ch.is_whitespace() || ch == '_' || ch == '-')
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn initialize_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    // stdout carries JSON documents only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let service = LookupService::standard().context("tarot catalog failed its integrity check")?;
    tracing::debug!(size = service.len(), "catalog ready");

    let output = Output { compact: cli.compact };
    match cli.command {
        Command::Card { command } => run_card(command, &service, output),
        Command::Crystal { command } => run_crystal(command, &service, output),
        Command::Catalog { command } => run_catalog(&command, &service, output),
    }
}

fn run_card(command: CardCommand, service: &LookupService, output: Output) -> Result<()> {
    match command {
        CardCommand::Show(args) => run_card_show(&args, service, output),
        CardCommand::List(args) => run_card_list(&args, service, output),
        CardCommand::Find(args) => run_card_find(&args, service, output),
    }
}

fn card_document(index: usize, record: &CardRecord) -> Result<Map<String, Value>> {
    let arcana = record.arcana();
    Ok(fields([
        ("index", json!(index)),
        ("arcana", json!(arcana.as_str())),
        ("suit", json!(arcana.suit().map(Suit::as_str))),
        ("crystal_display_name", json!(record.crystal_display_name())),
        ("card", serde_json::to_value(record).context("failed to serialize card record")?),
    ]))
}

fn run_card_show(args: &CardShowArgs, service: &LookupService, output: Output) -> Result<()> {
    tracing::info!(index = args.index, "resolving card by index");
    let record = service.get_record(args.index).with_context(|| {
        format!("no card at index {}; valid indexes are 0..={}", args.index, CATALOG_SIZE - 1)
    })?;
    let index = usize::try_from(args.index).context("resolved index should be non-negative")?;
    output.emit(card_document(index, record)?)
}

fn run_card_find(args: &CardFindArgs, service: &LookupService, output: Output) -> Result<()> {
    tracing::info!(name = %args.name, "resolving card by name");
    let (index, record) = service
        .find_by_name(&args.name)
        .ok_or_else(|| anyhow!("no card named `{}`", args.name.trim()))?;
    output.emit(card_document(index, record)?)
}

fn matches_filter(record: &CardRecord, args: &CardListArgs) -> bool {
    let arcana = record.arcana();
    let arcana_ok = match args.arcana {
        None => true,
        Some(ArcanaArg::Major) => arcana == Arcana::Major,
        Some(ArcanaArg::Minor) => arcana != Arcana::Major,
    };
    let suit_ok = args.suit.map_or(true, |suit| arcana.suit() == Some(Suit::from(suit)));
    arcana_ok && suit_ok
}

fn run_card_list(args: &CardListArgs, service: &LookupService, output: Output) -> Result<()> {
    let cards = service
        .iter()
        .filter(|(_, record)| matches_filter(record, args))
        .map(|(index, record)| {
            let arcana = record.arcana();
            json!({
                "index": index,
                "name": record.name,
                "arcana": arcana.as_str(),
                "suit": arcana.suit().map(Suit::as_str),
                "crystal": record.crystal
            })
        })
        .collect::<Vec<_>>();
    tracing::info!(count = cards.len(), "listed cards");

    output.emit(fields([("count", json!(cards.len())), ("cards", Value::Array(cards))]))
}

fn run_crystal(command: CrystalCommand, service: &LookupService, output: Output) -> Result<()> {
    match command {
        CrystalCommand::Show(args) => run_crystal_show(&args, service, output),
        CrystalCommand::List => run_crystal_list(service, output),
    }
}

fn run_crystal_show(args: &CrystalShowArgs, service: &LookupService, output: Output) -> Result<()> {
    let crystal = normalize_crystal(&args.crystal);
    let records = service.records_with_crystal(&crystal);
    let Some((_, first)) = records.first() else {
        return Err(anyhow!("no card is paired with crystal `{crystal}`"));
    };

    let cards = records
        .iter()
        .map(|(index, record)| json!({ "index": index, "name": record.name }))
        .collect::<Vec<_>>();
    output.emit(fields([
        ("crystal", Value::String(crystal)),
        ("display_name", json!(first.crystal_display_name())),
        ("count", json!(records.len())),
        ("cards", Value::Array(cards)),
    ]))
}

fn run_crystal_list(service: &LookupService, output: Output) -> Result<()> {
    let crystals = service.crystals();
    output.emit(fields([("count", json!(crystals.len())), ("crystals", json!(crystals))]))
}

fn run_catalog(command: &CatalogCommand, service: &LookupService, output: Output) -> Result<()> {
    match command {
        CatalogCommand::Verify => {
            let major_count =
                service.iter().filter(|(_, record)| record.arcana() == Arcana::Major).count();
            output.emit(fields([
                ("status", json!("ok")),
                ("size", json!(service.len())),
                ("major_count", json!(major_count)),
                ("minor_count", json!(service.len() - major_count)),
            ]))
        }
    }
}
