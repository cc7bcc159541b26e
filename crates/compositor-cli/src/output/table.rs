//! Table formatting for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use compositor::namespace::EnumTable;

/// One row of the variable listing.
pub struct VariableRow {
    pub name: &'static str,
    pub type_name: String,
    pub id: u64,
}

/// Format declared variables as a table.
pub fn format_variables_table(rows: &[VariableRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Variable", "Type", "Id"]);

    for row in rows {
        table.add_row(vec![
            row.name.to_string(),
            row.type_name.clone(),
            format!("{:016x}", row.id),
        ]);
    }

    table
}

/// Format one enum table as `ordinal | label` rows.
pub fn format_enum_table(enum_table: &EnumTable) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ordinal", enum_table.name]);

    for (ordinal, label) in &enum_table.entries {
        table.add_row(vec![ordinal.to_string(), (*label).to_string()]);
    }

    table
}
