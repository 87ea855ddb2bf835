use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tanzil::api::{self, Reply};
use tanzil::config::{self, AppConfig};
use tanzil::params::{SurahListParams, VerseListParams};
use tanzil::store::Store;
use tanzil::{check, output, seed};

#[derive(Parser)]
#[command(name = "tanzil")]
#[command(about = "Quran corpus queries in canonical or chronological order")]
#[command(long_about = "\
Quran corpus queries in canonical or chronological order

A local SQLite database holds the 114 surahs, their verses, and attached
material (translations, tafsir summaries, revelation contexts). Query
commands print JSON replies shaped like a web API: an envelope with
success and data, a count for surah lists, pagination for verse lists.

  tanzil seed                                  # build tanzil.db
  tanzil surahs --sort-by chronological        # all 114, revelation order
  tanzil surahs --revelation-type Meccan
  tanzil surah 96                              # detail with verses
  tanzil verses --surah-id 1 --limit 3 --translations
  tanzil verse 96:1                            # full related material

Value-taking flags mirror the HTTP query parameters one-for-one, so an
invalid value produces the same 400 reply the API would return.

Run 'tanzil gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and, by default, the database
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct SurahsArgs {
    /// Sort order: standard or chronological
    #[arg(long)]
    sort_by: Option<String>,

    /// Filter by revelation category: all, Meccan, or Medinan
    #[arg(long)]
    revelation_type: Option<String>,
}

#[derive(clap::Args)]
struct VersesArgs {
    /// Restrict to one surah (1-114)
    #[arg(long)]
    surah_id: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    page: Option<String>,

    /// Verses per page, up to the configured maximum
    #[arg(long)]
    limit: Option<String>,

    /// Include translations with each verse
    #[arg(long)]
    translations: bool,

    /// Include tafsir entries with each verse
    #[arg(long)]
    tafsir: bool,

    /// Include the revelation context with each verse
    #[arg(long)]
    context: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all 114 surahs
    Surahs(SurahsArgs),
    /// Show one surah with its verses
    Surah {
        /// Surah number (1-114)
        id: String,
    },
    /// List verses in reading order, paginated
    Verses(VersesArgs),
    /// Show one verse by its key, with all related material
    Verse {
        /// Verse key like 1:1 or 96:5
        key: String,
    },
    /// Build the database from the built-in catalog and sample verses
    Seed,
    /// Verify database completeness and consistency
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Surahs(args) => {
            let (config, store) = open_query_store(&cli.config_dir)?;
            let reply = api::surah_list(
                &store,
                SurahListParams {
                    sort_by: args.sort_by.as_deref(),
                    revelation_type: args.revelation_type.as_deref(),
                },
            );
            output::print_reply(&reply, config.output.pretty);
            Ok(reply_exit(&reply))
        }
        Command::Surah { id } => {
            let (config, store) = open_query_store(&cli.config_dir)?;
            let reply = api::surah_detail(&store, &id);
            output::print_reply(&reply, config.output.pretty);
            Ok(reply_exit(&reply))
        }
        Command::Verses(args) => {
            let (config, store) = open_query_store(&cli.config_dir)?;
            let reply = api::verse_list(
                &store,
                VerseListParams {
                    surah_id: args.surah_id.as_deref(),
                    page: args.page.as_deref(),
                    limit: args.limit.as_deref(),
                    translations: args.translations.then_some("true"),
                    tafsir: args.tafsir.then_some("true"),
                    context: args.context.then_some("true"),
                },
                &config.limits,
            );
            output::print_reply(&reply, config.output.pretty);
            Ok(reply_exit(&reply))
        }
        Command::Verse { key } => {
            let (config, store) = open_query_store(&cli.config_dir)?;
            let reply = api::verse_detail(&store, &key);
            output::print_reply(&reply, config.output.pretty);
            Ok(reply_exit(&reply))
        }
        Command::Seed => {
            let config = config::load_config(&cli.config_dir)?;
            let mut store = Store::create(database_path(&cli.config_dir, &config))?;
            seed::run(&mut store)?;
            output::print_seed_summary(&store.counts()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let (_, store) = open_query_store(&cli.config_dir)?;
            let report = check::run(&store)?;
            output::print_check_report(&report);
            Ok(if report.has_faults() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load config and open the database read-only for a query command.
fn open_query_store(config_dir: &Path) -> Result<(AppConfig, Store), Box<dyn std::error::Error>> {
    let config = config::load_config(config_dir)?;
    let store = Store::open(database_path(config_dir, &config))?;
    Ok((config, store))
}

/// A relative `database` setting resolves against the config directory;
/// an absolute one is used as-is.
fn database_path(config_dir: &Path, config: &AppConfig) -> PathBuf {
    config_dir.join(&config.database)
}

/// Replies carry their HTTP-shaped status; anything but 200 exits nonzero.
fn reply_exit(reply: &Reply) -> ExitCode {
    if reply.status == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
