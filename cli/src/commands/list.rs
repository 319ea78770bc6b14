use std::io::Write;

use loto_common::{GameConfiguration, LotoError, Registry};

use crate::terminal::table::Table;

/// Prints every registered game with its draw rules.
pub fn list<W: Write>(out: &mut W) -> Result<(), LotoError> {
    games_table(Registry::global()).render(out)
}

pub fn games_table(registry: &Registry) -> Table {
    let mut table = Table::new(["Name", "Count", "Min", "Max", "Allow Duplicates"]);
    for (id, config) in registry.entries() {
        table.push_row(game_row(id, config));
    }
    table
}

fn game_row(id: &str, config: &GameConfiguration) -> [String; 5] {
    let allow_dup = if config.allow_duplicates { "Yes" } else { "No" };
    [
        id.to_string(),
        config.count.to_string(),
        config.min.to_string(),
        config.max.to_string(),
        allow_dup.to_string(),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_table_rows() {
        let table = games_table(Registry::global());
        let rows = table.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ["loto6", "6", "1", "43", "No"]);
        assert_eq!(rows[1], ["loto7", "7", "1", "37", "No"]);
        assert_eq!(rows[2], ["miniloto", "5", "1", "31", "No"]);
        assert_eq!(rows[3], ["numbers3", "3", "0", "9", "Yes"]);
        assert_eq!(rows[4], ["numbers4", "4", "0", "9", "Yes"]);
    }

    #[test]
    fn test_list_renders_header() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ALLOW DUPLICATES"));
        assert!(text.contains("miniloto"));
    }
}
