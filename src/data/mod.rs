//! Sample datasets shown by the dashboard pages

pub mod campaign;
pub mod report;

pub use campaign::{
    Campaign, CampaignStatus, CampaignSummary, NewCampaign, managed_campaigns, sample_campaigns,
};
pub use report::{Report, sample_reports};
