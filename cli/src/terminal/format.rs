use loto_common::GameCategory;

/// Renders one ticket the way it is written on a lottery slip.
///
/// Loto numbers are zero-padded to two digits and comma separated
/// (`01, 07, 38`); Numbers digits are written back to back (`833`).
pub fn numbers(category: GameCategory, values: &[i32]) -> String {
    match category {
        GameCategory::Loto => values
            .iter()
            .map(|n| format!("{n:02}"))
            .collect::<Vec<_>>()
            .join(", "),
        GameCategory::Numbers => values.iter().map(|n| n.to_string()).collect(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
