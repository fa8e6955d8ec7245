use tracing::level_filters::LevelFilter;

/// How much the search logs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only errors
    Silent,
    /// Search start and end, and periodic statistics
    #[default]
    Normal,
    /// Also every expanded node
    Verbose,
    /// Also every pruned or skipped node
    Debug,
}

impl From<Verbosity> for LevelFilter {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Debug => LevelFilter::TRACE,
        }
    }
}
