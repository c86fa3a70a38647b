pub mod calrep;
pub mod config;
pub mod event;
pub mod extract;
pub mod months;
pub mod parse_events;
pub mod render;
pub mod report;

#[cfg(test)]
mod tests;

pub use calrep::Calrep;
pub use config::Config;
pub use event::{DateRange, Event, Locale};
pub use parse_events::{SkipReason, SkippedBlock};
pub use report::ParseResult;
