//! Table rendering for `show --long`

use prettytable::{Cell, Row, Table};
use ziplist_core::Record;

use crate::utils::{format_record_size, truncate_path};

const PATH_WIDTH: usize = 60;

/// Build a table of records with a human-readable size column
pub fn records_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(
        ["Name", "Size", "Path"]
            .into_iter()
            .map(|title| Cell::new(title).style_spec("b"))
            .collect(),
    ));

    for record in records {
        table.add_row(Row::new(vec![
            Cell::new(&record.name).style_spec("r"),
            Cell::new(&format_record_size(record.size())).style_spec("r"),
            Cell::new(&truncate_path(&record.path, PATH_WIDTH)),
        ]));
    }

    table
}
