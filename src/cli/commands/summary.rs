use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{
    PeriodSummary, build_summary, completed_periods, filter_window, pay_period_from_config,
};
use crate::db::pool::DbPool;
use crate::db::queries::load_sheet;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::format_hours_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        period,
        all_periods,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let sheet = load_sheet(&mut pool)?;

        if *all_periods {
            print_completed_periods(&sheet.entries, cfg)?;
        }

        let entries = if *period {
            let (start, end) = pay_period_from_config(cfg)?;
            println!("Pay period: {} to {}\n", start, end);
            filter_window(sheet.entries, start, end)
        } else {
            sheet.entries
        };

        let summary = build_summary(&entries, cfg.target_hours);

        println!("Entries logged: {}", summary.entry_count);
        println!("Total logged: {:.2} hrs", summary.total_hours);
        println!(
            "Remaining to reach {} hrs target: {}",
            cfg.target_hours,
            format_hours_minutes(summary.remaining_hours)
        );
    }
    Ok(())
}

fn print_completed_periods(
    entries: &[crate::models::entry::WorkEntry],
    cfg: &Config,
) -> AppResult<()> {
    let anchor = date::parse_date(&cfg.pay_period_start).ok_or_else(|| {
        AppError::Config(format!(
            "Invalid pay_period_start: {}",
            cfg.pay_period_start
        ))
    })?;

    let periods = completed_periods(
        entries,
        date::today(),
        anchor,
        cfg.pay_period_days,
        cfg.target_hours,
    );

    if periods.is_empty() {
        println!("No completed pay periods.\n");
        return Ok(());
    }

    println!("Completed pay periods:");
    for p in &periods {
        print_period_line(p);
    }
    println!();
    Ok(())
}

fn print_period_line(p: &PeriodSummary) {
    println!(
        "{} to {}  Total: {}  Overtime: {}",
        p.start,
        p.end,
        format_hours_minutes(p.total_hours),
        format_hours_minutes(p.overtime_hours)
    );
}
