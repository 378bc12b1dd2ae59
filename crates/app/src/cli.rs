use clap::{Parser, ValueEnum};
use newsdesk_core::domain::filters::{FilterState, SearchState};
use newsdesk_core::types::date_range::DateRange;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(long, default_value = "api")]
    pub mode: Mode,
    /// Initial search keyword (browse mode).
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "en")]
    pub language: String,
    /// today, week or month; anything else means week.
    #[arg(long, default_value = "week")]
    pub date_range: String,
    #[arg(long, default_value = "all")]
    pub source: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    Api,
    Browse,
}

impl Cli {
    pub fn initial_search(&self) -> SearchState {
        SearchState::new(
            self.query.clone(),
            FilterState {
                language: self.language.clone(),
                date_range: DateRange::parse(&self.date_range),
                source: self.source.clone(),
            },
        )
    }
}
