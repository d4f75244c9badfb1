use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Every entry, then the total and the daily target.
    Long,
    /// Only the total.
    Short,
    /// Machine readable result.
    Json,
}
