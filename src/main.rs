mod cli;
mod commands;
mod error;
mod page_index;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input_dir,
            page_number,
            output_dir,
            output_prefix,
        } => {
            commands::extract::run(&input_dir, page_number, &output_dir, &output_prefix)?;
        }
        Commands::Combine {
            input_dir,
            output_dir,
            output_name,
        } => {
            commands::combine::run(&input_dir, &output_dir, &output_name)?;
        }
        Commands::Slice {
            input_file,
            start_page,
            end_page,
            output_dir,
            output_name,
        } => {
            commands::slice::run(&input_file, start_page, end_page, &output_dir, &output_name)?;
        }
        Commands::CombineList {
            input_files,
            output_dir,
            output_name,
        } => {
            let input_refs: Vec<_> = input_files.iter().collect();
            commands::combine_list::run(&input_refs, &output_dir, &output_name)?;
        }
        Commands::CompileFinal {
            clean_oa,
            signed_dir,
            investor_sig_page,
            manager_sig_page,
            output_name,
        } => {
            commands::compile_final::run(
                &clean_oa,
                &signed_dir,
                investor_sig_page,
                manager_sig_page,
                output_name.as_deref(),
            )?;
        }
    }

    Ok(())
}
