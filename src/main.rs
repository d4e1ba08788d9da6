mod error;
mod render;
mod roster;
mod telemetry;

use std::io::Write as _;
use std::path::PathBuf;

use table_seating_config::{get_config, OutputFormat};
use table_seating_generator::{generate, generate_with, CapacitySummary, RngSource};
use tracing::{info, warn};

use crate::error::AppError;
use crate::render::{render_json, render_text};
use crate::roster::Roster;
use crate::telemetry::setup_logging;

fn main() -> Result<(), AppError> {
    setup_logging();

    let config = get_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    let roster = Roster::load(&config.roster)?;

    let capacity = CapacitySummary::of(&roster.tables, roster.members.len());
    info!(
        seats = capacity.total_seats,
        members = capacity.member_count,
        "seating {}",
        config.roster.display()
    );
    if !capacity.fits() {
        warn!("{} seats missing", capacity.missing_seats());
    }

    let seating = match config.seed {
        Some(seed) => generate_with(&roster.members, &roster.tables, &mut RngSource::seeded(seed)),
        None => generate(&roster.members, &roster.tables),
    };

    let mut out = std::io::stdout().lock();
    match config.format {
        OutputFormat::Text => render_text(&mut out, &seating, &roster)?,
        OutputFormat::Json => render_json(&mut out, &seating)?,
    }
    out.flush()?;

    Ok(())
}
