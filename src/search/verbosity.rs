use tracing::level_filters::LevelFilter;

/// How much the search reports while it runs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Nothing at all
    Silent,
    /// Start, periodic status and final statistics
    Normal,
    /// Also the details of the goal node
    Verbose,
    Debug,
}

impl Verbosity {
    /// Whether the final status line is printed.
    pub fn shows_status(self) -> bool {
        self != Verbosity::Silent
    }
}

impl From<Verbosity> for LevelFilter {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Debug => LevelFilter::TRACE,
        }
    }
}
