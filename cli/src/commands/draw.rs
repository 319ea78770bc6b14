use std::io::Write;

use anyhow::Context;
use loto_common::{GameCategory, LotoError, info, registry, success};
use loto_core::{DrawEngine, DrawResult};

use crate::terminal::{format, prompt, table::Table};

/// Draws `length` distinct tickets for `game` and prints them as a table.
///
/// When no game is given the user picks one interactively.
pub fn draw<W: Write>(game: Option<String>, length: i64, out: &mut W) -> anyhow::Result<()> {
    // An explicit game is checked before the count; a bad count never opens the prompt
    let (id, count) = match game {
        Some(id) => {
            registry::validate(&id)?;
            (id, draw_count(length)?)
        }
        None => {
            let count = draw_count(length)?;
            (prompt::select_game()?, count)
        }
    };
    let config = registry::validate(&id)?;

    let mut engine =
        DrawEngine::for_game(&id).ok_or_else(|| LotoError::EngineConstruction(id.clone()))?;
    info!("Drawing {count} candidates for {id}");

    let results = engine
        .try_draw_many(count)
        .with_context(|| format!("drawing {count} candidates for {id}"))?;

    results_table(config.category, &results).render(out)?;

    let unit = if results.len() == 1 { "candidate" } else { "candidates" };
    success!("{} {unit} picked for {id}", results.len());
    Ok(())
}

/// Normalizes the requested number of draws: the sign is dropped and zero is rejected.
pub fn draw_count(length: i64) -> Result<i64, LotoError> {
    let count = length.saturating_abs();
    if count <= 0 {
        return Err(LotoError::NonPositiveDrawCount);
    }
    Ok(count)
}

pub fn results_table(category: GameCategory, results: &[DrawResult]) -> Table {
    let mut table = Table::new(["No", "Result"]);
    for (idx, result) in results.iter().enumerate() {
        table.push_row([(idx + 1).to_string(), format::numbers(category, result)]);
    }
    table
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
