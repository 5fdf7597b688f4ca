use crate::config::Config;
use crate::db::audit::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print the internal audit log, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let lines = load_audit(&mut pool)?;

    if lines.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    println!("📜 Internal log:\n");
    for line in lines {
        let op_target = if line.target.is_empty() {
            line.operation
        } else {
            format!("{} ({})", line.operation, line.target)
        };
        println!("{:>4}  {}  {:<30} {}", line.id, line.date, op_target, line.message);
    }
    Ok(())
}
