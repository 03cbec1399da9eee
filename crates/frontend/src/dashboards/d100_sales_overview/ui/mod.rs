pub mod chart;
pub mod dashboard;
pub mod disputed_table;

pub use dashboard::SalesOverviewDashboard;
