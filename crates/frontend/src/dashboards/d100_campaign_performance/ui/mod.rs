pub mod dashboard;

pub use dashboard::CampaignDashboard;
