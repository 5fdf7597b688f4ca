use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log_entry::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time_or_err;

/// Log a new work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        date: date_arg,
        start,
        end,
        break_start,
        break_end,
    } = cmd
    {
        // Date defaults to today, like the form's date input
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let start_t = parse_time_or_err(start)?;
        let end_t = parse_time_or_err(end)?;
        let break_start_t = parse_time_or_err(break_start)?;
        let break_end_t = parse_time_or_err(break_end)?;

        let mut pool = DbPool::new(&cfg.database)?;

        LogLogic::apply(&mut pool, cfg, d, start_t, end_t, break_start_t, break_end_t)?;
    }

    Ok(())
}
