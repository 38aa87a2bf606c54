mod dashboard;

pub use dashboard::{
    Dashboard, DashboardConfig, DashboardData, DashboardReport, PipelineOutcome,
};
