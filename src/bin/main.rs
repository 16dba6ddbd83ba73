//! Space-Track CLI - query catalog classes from the command line
//!
//! Usage:
//!   spacetrack classes
//!   spacetrack query <class> [--where FIELD/VALUE]... [--order-by FIELD[:desc]]... [--limit N [--offset M]]
//!   spacetrack modeldef <class>
//!   spacetrack check <class>
//!
//! Examples:
//!   spacetrack query tle --where NORAD_CAT_ID/25544 --order-by EPOCH:desc --limit 1
//!   spacetrack query satcat --where 'LAUNCH/>now-7' --dry-run
//!   spacetrack check launch_site

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use spacetrack::auth::{CredentialProvider, PasswordCredentials};
use spacetrack::classes::{
    CountryBoxScore, LaunchSite, OrbitMeanElements, SatCat, SatCatChange, TipMessage, Tle,
};
use spacetrack::config::{Settings, SettingsError};
use spacetrack::query::{
    Limit, Predicate, Query, QueryField, RawPredicate, Sort, SortDir, SpaceTrackClass,
};
use spacetrack::schema::{self, ConformanceError};
use spacetrack::ClientError;

#[derive(Parser)]
#[command(name = "spacetrack")]
#[command(about = "Query the Space-Track.org catalog")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $SPACETRACK_CONFIG, ./spacetrack.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported classes and their fields
    Classes,

    /// Run a query and print the records as JSON
    Query {
        class: ClassArg,

        /// Predicate as FIELD/VALUE, e.g. NORAD_CAT_ID/<>25544 (repeatable, ANDed)
        #[arg(short = 'w', long = "where")]
        predicates: Vec<String>,

        /// Sort key as FIELD or FIELD:desc (repeatable, first is primary)
        #[arg(short, long)]
        order_by: Vec<String>,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<u64>,

        /// Rows to skip (requires --limit)
        #[arg(long, requires = "limit")]
        offset: Option<u64>,

        /// Restrict to a favorites list (repeatable)
        #[arg(short, long)]
        favorite: Vec<String>,

        /// Print the request URL instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the server's description of a class
    Modeldef { class: ClassArg },

    /// Check a class's field tables against the server's description
    Check { class: ClassArg },
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    Boxscore,
    #[value(name = "launch_site")]
    LaunchSite,
    Omm,
    Satcat,
    #[value(name = "satcat_change")]
    SatcatChange,
    Tip,
    Tle,
}

/// Run a generic function for the record type selected by a [`ClassArg`].
macro_rules! with_class {
    ($class:expr, $func:ident($($arg:expr),*)) => {
        match $class {
            ClassArg::Boxscore => $func::<CountryBoxScore>($($arg),*).await,
            ClassArg::LaunchSite => $func::<LaunchSite>($($arg),*).await,
            ClassArg::Omm => $func::<OrbitMeanElements>($($arg),*).await,
            ClassArg::Satcat => $func::<SatCat>($($arg),*).await,
            ClassArg::SatcatChange => $func::<SatCatChange>($($arg),*).await,
            ClassArg::Tip => $func::<TipMessage>($($arg),*).await,
            ClassArg::Tle => $func::<Tle>($($arg),*).await,
        }
    };
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Conformance(#[from] ConformanceError),

    #[error("failed to print output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

/// Query arguments shared by every class.
struct QueryArgs {
    predicates: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    favorites: Vec<String>,
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Classes => {
            cmd_classes();
            Ok(())
        }
        Commands::Query {
            class,
            predicates,
            order_by,
            limit,
            offset,
            favorite,
            dry_run,
        } => {
            let args = QueryArgs {
                predicates,
                order_by,
                limit,
                offset,
                favorites: favorite,
                dry_run,
            };
            with_class!(class, cmd_query(&settings, args))
        }
        Commands::Modeldef { class } => with_class!(class, cmd_modeldef(&settings)),
        Commands::Check { class } => with_class!(class, cmd_check(&settings)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&std::path::Path>) -> Result<Settings, SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

fn cmd_classes() {
    print_class::<CountryBoxScore>();
    print_class::<LaunchSite>();
    print_class::<OrbitMeanElements>();
    print_class::<SatCat>();
    print_class::<SatCatChange>();
    print_class::<TipMessage>();
    print_class::<Tle>();
}

fn print_class<C: SpaceTrackClass>() {
    let fields: Vec<_> = <C::Field as QueryField>::ALL
        .iter()
        .map(|f| f.wire_name())
        .collect();
    println!("{}:", C::CLASS);
    println!("  {}", fields.join(", "));
}

async fn cmd_query<C>(settings: &Settings, args: QueryArgs) -> Result<(), CliError>
where
    C: SpaceTrackClass + Serialize,
{
    // dry runs never authenticate
    let provider = if args.dry_run {
        PasswordCredentials::new("", "").with_base_url(&settings.client.resolved_base_url()?)?
    } else {
        settings.provider()?
    };
    let base = provider.base_url().clone();
    let credentials: Arc<dyn CredentialProvider> = Arc::new(provider);

    let mut builder = Query::<C>::builder()
        .credentials(credentials)
        .favorites(args.favorites);

    for text in &args.predicates {
        builder = builder.predicate(Predicate::from_raw(RawPredicate::parse(text)?)?);
    }
    for text in &args.order_by {
        builder = builder.sort(parse_sort::<C::Field>(text)?);
    }
    let limit = match (args.limit, args.offset) {
        (Some(rows), Some(offset)) => Some(Limit::with_offset(rows, offset)?),
        (Some(rows), None) => Some(Limit::rows(rows)?),
        (None, _) => None,
    };
    let query = builder.limit(limit).build()?;

    if args.dry_run {
        println!("{}", query.url(&base)?);
        return Ok(());
    }

    let records = query.execute().await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

async fn cmd_modeldef<C: SpaceTrackClass>(settings: &Settings) -> Result<(), CliError> {
    let session = settings.provider()?.authenticate().await?;
    let model = schema::fetch_modeldef(session.as_ref(), C::CLASS).await?;
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

async fn cmd_check<C: SpaceTrackClass>(settings: &Settings) -> Result<(), CliError> {
    let session = settings.provider()?.authenticate().await?;
    schema::check_class::<C>(session.as_ref()).await?;
    println!("OK: {} matches the server's modeldef", C::CLASS);
    Ok(())
}

/// Parse `FIELD`, `FIELD:asc` or `FIELD:desc`.
fn parse_sort<F: QueryField>(text: &str) -> Result<Sort<F>, CliError> {
    let (name, dir) = match text.rsplit_once(':') {
        Some((name, "desc")) => (name, SortDir::Desc),
        Some((name, "asc")) => (name, SortDir::Asc),
        Some(_) => {
            return Err(CliError::Usage(format!(
                "sort direction must be asc or desc: {text}"
            )))
        }
        None => (text, SortDir::Asc),
    };
    let field = F::from_wire_name(name)
        .ok_or_else(|| CliError::Usage(format!("unknown sort field: {name}")))?;
    Ok(Sort::new(field, dir))
}
