use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        long,
        force,
    } = cmd
    {
        let analysis = Pipeline::run(Path::new(&cfg.input_file), cfg)?;
        ExportLogic::export(&analysis, *format, file, *long, *force)?;
    }
    Ok(())
}
