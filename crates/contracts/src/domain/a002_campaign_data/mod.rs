pub mod aggregate;

pub use aggregate::CampaignRow;
