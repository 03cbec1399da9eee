pub mod d100_sales_overview;

pub use d100_sales_overview::ui::SalesOverviewDashboard;
