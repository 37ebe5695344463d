mod csv_report_store;
mod local_store;

pub use csv_report_store::{CsvReportStore, render_csv};
pub use local_store::LocalStagingStore;
