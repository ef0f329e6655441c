pub mod format;
pub mod report;


pub use report::{
    all_reports, biggest_costs, biggest_revenue, expenses_by_month, expenses_by_year,
    income_by_year, Report, ReportRow,
};
