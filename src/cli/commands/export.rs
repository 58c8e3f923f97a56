use clap::Args;
use std::path::PathBuf;

use crate::cli::i18n::texts;
use crate::cli::ui::{info, success};
use crate::cli::CatalogSource;
use crate::error::AppError;
use crate::storage::{save_table_as, Format};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Locale table to export
    #[arg(short, long)]
    pub locale: String,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format (taken from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: ExportArgs, source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let table = catalog.require_table(&args.locale)?;
    let format = match args.format {
        Some(format) => format,
        None => Format::from_path(&args.output)?,
    };

    if args.output.exists() && !args.force {
        let confirm = inquire::Confirm::new(&texts::confirm_overwrite(
            &args.output.display().to_string(),
        ))
        .with_default(false)
        .prompt()
        .map_err(|e| AppError::Message(texts::prompt_failed(&e.to_string())))?;

        if !confirm {
            println!("{}", info(texts::cancelled()));
            return Ok(());
        }
    }

    save_table_as(table, &args.output, format)?;
    println!(
        "{}",
        success(&texts::exported(
            table.locale(),
            table.len(),
            &args.output.display().to_string()
        ))
    );
    Ok(())
}
