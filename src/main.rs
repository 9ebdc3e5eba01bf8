//! Entity List Viewer - Entry Point

use clap::Parser;
use exlv::config::{CliOverrides, KeyBindings, ResolvedConfig};
use exlv::model::{AppError, ClauseError, Record};
use exlv::state::{AppState, ClauseDraft, SortOrder};
use exlv::view::{ColorConfig, ListStyles};
use std::path::PathBuf;
use tracing::info;

/// Entity List Viewer - filter, sort and select entity collections
#[derive(Parser, Debug)]
#[command(name = "exlv")]
#[command(version)]
#[command(about = "Terminal list viewer for entity collections with filtering, sorting and drag selection")]
pub struct Args {
    /// Path to a JSON array or JSON Lines file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Attribute holding each entity's id
    #[arg(long)]
    pub id_field: Option<String>,

    /// Initial sort field
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Initial filter as field:operation:value (repeatable)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<ClauseDraft>,

    /// Write the surviving entities to this file on exit
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn parse_filter(raw: &str) -> Result<ClauseDraft, ClauseError> {
    ClauseDraft::parse_spec(raw)
}

/// Build the initial state: fields, sort and filters from configuration.
fn build_state(
    records: Vec<Record>,
    config: &ResolvedConfig,
    filters: Vec<ClauseDraft>,
) -> Result<AppState, AppError> {
    let fields = config.list_fields(&records);
    let mut state = AppState::new(records, fields);

    let order = if config.sort_descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    match &config.sort_field {
        Some(field) => state.list_mut().set_sort(field, order)?,
        None if config.sort_descending => {
            state.list_mut().toggle_sort_order();
        }
        None => {}
    }

    for draft in filters {
        state.list_mut().add_filter(draft)?;
    }
    state.refresh();
    Ok(state)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = exlv::config::load_config_with_precedence(args.config.clone())?;
        let merged = exlv::config::merge_config(config_file);
        let with_env = exlv::config::apply_env_overrides(merged);
        exlv::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                id_field: args.id_field.clone(),
                sort_field: args.sort.clone(),
                descending: args.desc,
            },
        )
    };

    exlv::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let report = exlv::source::load_records(args.file.clone(), &config.id_field)?;
    let app_state = build_state(report.records, &config, args.filters)?;

    let styles = ListStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let final_state = exlv::view::run_with_state(app_state, KeyBindings::default(), styles)?;

    if let Some(output) = &args.output {
        exlv::source::write_records(output, final_state.records())?;
        info!(path = %output.display(), count = final_state.records().len(), "Entities written");
    }

    Ok(())
}
