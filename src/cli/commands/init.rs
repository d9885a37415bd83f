//! Init command implementation

use crate::cli::args::InitArgs;
use crate::cli::logging::{log, LogLevel};
use crate::error::{Error, Result};
use crate::metadata::{render_metadata, save_metadata, TrainerMetadata};

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<()> {
    let metadata = TrainerMetadata::happydb();

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(Error::OutputExists { path: path.clone() });
            }
            let written = save_metadata(&metadata, path)?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote starter metadata to {}", written.display()),
            );
        }
        None => println!("{}", render_metadata(&metadata, args.format)?.trim_end()),
    }

    Ok(())
}
