use super::export::{ExportRow, HEADER};
use super::shift::ShiftRow;
use prettytable::{row, Row, Table};

pub struct View {}

impl View {
    pub fn rows_table(rows: &[ShiftRow]) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::from(HEADER));
        for record in rows.iter().map(ExportRow::from) {
            table.add_row(row![
                record.employee_id,
                record.log_in,
                record.log_out,
                record.log_in_venue,
                record.log_out_venue,
                record.shift_date,
                record.edit_type
            ]);
        }
        table
    }

    pub fn rows(rows: &[ShiftRow]) {
        Self::rows_table(rows).printstd();
    }
}
