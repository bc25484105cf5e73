use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config, store: &mut Store) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(store, *format, file, *force, &cfg.date_format)?;
    }
    Ok(())
}
