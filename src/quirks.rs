use clap::ValueEnum;

/// Chooses how a sample index picks the sketch column it reads during
/// synthesis. The two modes only differ on sketches that vary horizontally.
#[derive(Debug, Clone, PartialEq, ValueEnum, Default)]
pub enum ColumnScanQuirk {
    /// Sweep every column of the sketch across one period.
    #[default]
    Sweep,
    /// Read the leftmost column for every sample, collapsing the period to a
    /// single level.
    FirstColumn,
}
