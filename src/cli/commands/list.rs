use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{filter_window, pay_period_from_config};
use crate::db::pool::DbPool;
use crate::db::queries::load_sheet;
use crate::errors::AppResult;
use crate::models::entry::{COLUMNS, WorkEntry};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let sheet = load_sheet(&mut pool)?;

        let mut entries = if *period {
            let (start, end) = pay_period_from_config(cfg)?;
            println!("Pay period: {} to {}\n", start, end);
            filter_window(sheet.entries, start, end)
        } else {
            sheet.entries
        };

        if entries.is_empty() {
            println!("No entries logged.");
            return Ok(());
        }

        // Newest first
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        print_table(&entries);
    }
    Ok(())
}

fn print_table(entries: &[WorkEntry]) {
    println!(
        "{:<12} {:<11} {:<9} {:<12} {:<10} {}",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5]
    );

    for e in entries {
        println!(
            "{:<12} {:<11} {:<9} {:<12} {:<10} {}",
            e.date_str(),
            e.start_str(),
            e.end_str(),
            e.break_start_str(),
            e.break_end_str(),
            e.duration_str()
        );
    }
}
