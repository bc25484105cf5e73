use crate::config::{Config, OutputFormat};
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::Store;

pub fn handle(cfg: &Config, store: &Store) -> AppResult<()> {
    match cfg.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.log())?),
        OutputFormat::Table => LogLogic::print_log(store.log()),
    }
    Ok(())
}
