use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oapdf")]
#[command(about = "PDF page extraction and assembly for operating-agreement workflows")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a single page from each PDF in a directory
    Extract {
        /// Directory containing PDFs to extract from
        input_dir: PathBuf,

        /// Zero-indexed page to extract (negative counts from the end)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        page_number: i64,

        /// Directory to save the extracted pages to
        #[arg(short, long, default_value = "Sig Pages")]
        output_dir: PathBuf,

        /// Prefix for output file names
        #[arg(long, default_value = "Sig Page - ")]
        output_prefix: String,
    },

    /// Combine all PDFs in a directory into a single PDF
    Combine {
        /// Directory containing PDFs to combine
        input_dir: PathBuf,

        /// Directory to save the combined PDF to
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Name of the combined PDF
        #[arg(long, default_value = "Sig Pages Combined.pdf")]
        output_name: String,
    },

    /// Copy a page range from a PDF into a new PDF
    Slice {
        /// PDF file to slice
        input_file: PathBuf,

        /// Zero-indexed first page of the range
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        start_page: i64,

        /// Zero-indexed end of the range, exclusive (-1 for through the last page)
        #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
        end_page: i64,

        /// Directory to save the sliced PDF to
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Name of the sliced PDF
        #[arg(long, default_value = "Sliced.pdf")]
        output_name: String,
    },

    /// Combine an explicit list of PDFs into a single PDF
    CombineList {
        /// PDF files to combine, in output order
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Directory to save the combined PDF to
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Name of the combined PDF
        #[arg(long, default_value = "Combined.pdf")]
        output_name: String,
    },

    /// Compile a final signed operating agreement from a clean OA and signed copies
    CompileFinal {
        /// Clean (unsigned) operating agreement PDF
        clean_oa: PathBuf,

        /// Directory containing the individually signed copies
        signed_dir: PathBuf,

        /// Zero-indexed investor signature page in the operating agreement
        #[arg(allow_negative_numbers = true)]
        investor_sig_page: i64,

        /// Zero-indexed manager signature page in the operating agreement
        #[arg(allow_negative_numbers = true)]
        manager_sig_page: i64,

        /// Output file name (default: "<clean OA name> FINAL COMBINED.pdf")
        #[arg(long)]
        output_name: Option<String>,
    },
}
