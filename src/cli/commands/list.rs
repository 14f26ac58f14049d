use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::format_encoded;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, color_for_hours, colorize, colorize_time};
use crate::utils::table::{Column, Table};

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = open_store(cfg)?;

        header("Tyme - Work Hours");
        print!("{}", render_entries(store.entries(), &cfg.separator_char));
        println!();
        println!(
            "Total Work Hours: {}",
            colorize(&store.total_display(), CYAN)
        );
    }
    Ok(())
}

/// Entry table, one row per entry in collection order.
pub fn render_entries(entries: &[TimeEntry], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Employee"),
        Column::left("In-Time"),
        Column::left("Out-Time"),
        Column::right("Total Hours"),
    ])
    .with_separator(separator);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.employee.clone(),
            colorize_time(&e.in_time),
            colorize_time(&e.out_time),
            colorize(&format_encoded(e.total_hours), color_for_hours(e.total_hours)),
        ]);
    }

    table.render()
}
