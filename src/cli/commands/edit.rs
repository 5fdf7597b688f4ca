use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_time_or_err;
use chrono::NaiveTime;

/// Rewrite the entries of a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date: date_str,
        start,
        end,
        break_start,
        break_end,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let start_t = parse_optional(start)?;
        let end_t = parse_optional(end)?;
        let break_start_t = parse_optional(break_start)?;
        let break_end_t = parse_optional(break_end)?;

        let mut pool = DbPool::new(&cfg.database)?;

        EditLogic::apply(&mut pool, d, start_t, end_t, break_start_t, break_end_t)?;
    }

    Ok(())
}

fn parse_optional(input: &Option<String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) => Ok(Some(parse_time_or_err(s)?)),
        None => Ok(None),
    }
}
