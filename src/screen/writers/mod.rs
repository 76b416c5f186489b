mod write_history;
mod write_report;

pub use write_history::HistoryWriter;
pub use write_report::write_report;
