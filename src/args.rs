use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tumble::investigation::diagnostics::DiagnosticsMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "tumble")]
#[command(about = "Torque-free rigid-body rotation integrated with explicit Euler", long_about = None)]
pub struct Args {
    /// RON run configuration; the demonstration box is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the stop time [s]
    #[arg(long)]
    pub stop: Option<f64>,
    /// Override the internal time step [s]
    #[arg(long)]
    pub dt: Option<f64>,
    /// Override the emission stride
    #[arg(long)]
    pub store_every: Option<u64>,
    /// Override the diagnostics mode
    #[arg(long, value_enum)]
    pub diagnostics: Option<DiagnosticsArg>,
    /// Log progress every n emitted records
    #[arg(long, default_value_t = 0)]
    pub progress_every: u64,
    /// Print the summary as RON instead of text
    #[arg(long, default_value_t = false)]
    pub ron: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsArg {
    None,
    SignChange,
    Flip,
}

impl From<DiagnosticsArg> for DiagnosticsMode {
    fn from(arg: DiagnosticsArg) -> Self {
        match arg {
            DiagnosticsArg::None => DiagnosticsMode::None,
            DiagnosticsArg::SignChange => DiagnosticsMode::SignChange,
            DiagnosticsArg::Flip => DiagnosticsMode::IntermediateAxisFlip,
        }
    }
}
