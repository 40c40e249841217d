pub mod canned;
pub mod command;
pub mod model;
pub mod serializer;
pub mod service;

pub use canned::CannedReport;
pub use model::SavedReport;
pub use serializer::DecodeError;
pub use service::{LoadedReport, SavedReportRepo};
