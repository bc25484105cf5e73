use crate::config::{Config, OutputFormat};
use crate::core::stats::DashboardStats;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, RESET};

pub fn handle(cfg: &Config, store: &Store) -> AppResult<()> {
    let stats = DashboardStats::compute(store);

    if cfg.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    header("Dashboard");
    println!("{CYAN}• Active events:{RESET}    {GREEN}{}{RESET}", stats.active_events);
    println!("{CYAN}• Total volunteers:{RESET} {GREEN}{}{RESET}", stats.total_volunteers);
    println!("{CYAN}• Hours scheduled:{RESET}  {GREEN}{:.1}{RESET}", stats.hours_scheduled);
    println!("{CYAN}• Attendance rate:{RESET}  {GREEN}{}%{RESET}", stats.attendance_rate);
    Ok(())
}
