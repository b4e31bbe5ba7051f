use clap::{Parser, Subcommand, ValueEnum};
use pricelist::commands::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricelist", bin_name = "pricelist", version)]
#[command(about = "Keep a product price list in a delimited text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Price list file, instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Code,
    Price,
}

impl From<SortBy> for SortKey {
    fn from(by: SortBy) -> Self {
        match by {
            SortBy::Code => SortKey::Code,
            SortBy::Price => SortKey::SalePrice,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu
    #[command(alias = "m")]
    Menu,

    /// Show every product
    #[command(alias = "ls")]
    List,

    /// Add a product
    #[command(allow_negative_numbers = true)]
    Add {
        code: u32,
        name: String,
        #[arg(value_name = "TYPE")]
        kind: String,
        base_price: f64,
        /// Discount in percent
        #[arg(default_value_t = 0.0)]
        discount: f64,
    },

    /// Delete the product with the given code
    #[command(alias = "rm")]
    Delete { code: u32 },

    /// Reorder the file
    Sort {
        #[arg(value_enum, default_value_t = SortBy::Code)]
        by: SortBy,
    },

    /// Show the product with the given code
    Find { code: u32 },

    /// Products whose name or type contains the text (case-sensitive)
    Search { term: String },

    /// Set the discount of every product of the given types
    #[command(allow_negative_numbers = true)]
    Discount {
        percent: f64,
        #[arg(value_name = "TYPE", required = true)]
        types: Vec<String>,
    },

    /// Delete every product whose sale price is below the threshold
    #[command(allow_negative_numbers = true)]
    Prune { threshold: f64 },

    /// Report what loading the file would skip, without changing it
    Check,

    /// Show or set configuration (data-file)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}
