mod dashboard;

pub use dashboard::DailySummaryDashboard;
