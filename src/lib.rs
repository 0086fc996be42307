pub mod analyzer;
pub mod config;
pub mod entropy;
pub mod error;
pub mod export;
pub mod generator;
pub mod leet;
pub mod tokenize;
pub mod years;

pub use analyzer::{Analysis, Analyzer, analyze_password};
pub use config::{DEFAULT_MAX_OUTPUT, Rules, parse_max_output};
pub use entropy::simple_entropy;
pub use error::{Error, Result};
pub use export::export;
pub use generator::{GenerateOptions, generate};
pub use leet::leet_variants;
pub use tokenize::{collect_seeds, tokenize};
pub use years::{YearRange, parse_year_range};
