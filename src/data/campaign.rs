//! Campaign records for the campaign performance table

use crate::core::{FieldValue, Record, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
    Scheduled,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 5] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
        CampaignStatus::Draft,
        CampaignStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Scheduled => "Scheduled",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown campaign status: {}", s))
    }
}

/// A marketing campaign with its delivery metrics
///
/// `campaign_type`, `target` and `revenue` are empty for datasets that do not
/// track them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub campaign_type: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub target: String,
    pub budget: f64,
    pub spent: f64,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    #[serde(default)]
    pub revenue: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Campaign {
    /// Share of the budget already spent, in percent
    pub fn spend_ratio(&self) -> f64 {
        if self.budget > 0.0 {
            self.spent / self.budget * 100.0
        } else {
            0.0
        }
    }
}

impl Record for Campaign {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::from(self.name.as_str()),
            "type" => FieldValue::from(self.campaign_type.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            "target" => FieldValue::from(self.target.as_str()),
            "budget" => FieldValue::Float(self.budget),
            "spent" => FieldValue::Float(self.spent),
            "impressions" => FieldValue::Integer(self.impressions),
            "clicks" => FieldValue::Integer(self.clicks),
            "conversions" => FieldValue::Integer(self.conversions),
            "revenue" => FieldValue::Float(self.revenue),
            "ctr" => FieldValue::Float(self.ctr),
            "cpc" => FieldValue::Float(self.cpc),
            "roas" => FieldValue::Float(self.roas),
            "start_date" => FieldValue::Date(self.start_date),
            "end_date" => FieldValue::Date(self.end_date),
            _ => return None,
        };
        Some(value)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category(&self) -> Option<&str> {
        (!self.campaign_type.is_empty()).then_some(self.campaign_type.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.target]
    }
}

/// Input of the create-campaign form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub budget: Option<f64>,
    pub target: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Default for NewCampaign {
    fn default() -> Self {
        Self {
            name: String::new(),
            campaign_type: "Email Marketing".to_string(),
            budget: None,
            target: String::new(),
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MIN,
        }
    }
}

impl NewCampaign {
    /// Build the `Draft` campaign appended after `existing`
    ///
    /// Name, budget and target are required. The new id is
    /// `existing.len() + 1` and every delivery metric starts at zero.
    pub fn create(self, existing: &[Campaign]) -> Result<Campaign, ValidationError> {
        let required = |field: &str| ValidationError::RequiredField {
            field: field.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(required("name"));
        }
        let budget = self.budget.ok_or_else(|| required("budget"))?;
        if self.target.trim().is_empty() {
            return Err(required("target"));
        }

        let id = existing.len() as i64 + 1;
        tracing::debug!(id, name = %self.name, "campaign created");

        Ok(Campaign {
            id,
            name: self.name,
            campaign_type: self.campaign_type,
            status: CampaignStatus::Draft,
            target: self.target,
            budget,
            spent: 0.0,
            impressions: 0,
            clicks: 0,
            conversions: 0,
            revenue: 0.0,
            ctr: 0.0,
            cpc: 0.0,
            roas: 0.0,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Aggregates shown above the campaign list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub total_revenue: f64,
    /// Spent over budget, in percent
    pub spend_ratio: f64,
    /// Revenue over spent, in percent
    pub return_on_spend: f64,
    pub active_campaigns: usize,
    pub total_campaigns: usize,
}

impl CampaignSummary {
    pub fn from_campaigns<'a>(campaigns: impl IntoIterator<Item = &'a Campaign>) -> Self {
        let mut summary = Self {
            total_budget: 0.0,
            total_spent: 0.0,
            total_revenue: 0.0,
            spend_ratio: 0.0,
            return_on_spend: 0.0,
            active_campaigns: 0,
            total_campaigns: 0,
        };

        for campaign in campaigns {
            summary.total_budget += campaign.budget;
            summary.total_spent += campaign.spent;
            summary.total_revenue += campaign.revenue;
            summary.total_campaigns += 1;
            if campaign.status == CampaignStatus::Active {
                summary.active_campaigns += 1;
            }
        }

        if summary.total_budget > 0.0 {
            summary.spend_ratio = summary.total_spent / summary.total_budget * 100.0;
        }
        if summary.total_spent > 0.0 {
            summary.return_on_spend = summary.total_revenue / summary.total_spent * 100.0;
        }
        summary
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn campaign(
    id: i64,
    name: &str,
    status: CampaignStatus,
    (budget, spent): (f64, f64),
    (impressions, clicks, conversions): (i64, i64, i64),
    (ctr, cpc, roas): (f64, f64, f64),
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Campaign {
    Campaign {
        id,
        name: name.to_string(),
        campaign_type: String::new(),
        status,
        target: String::new(),
        budget,
        spent,
        impressions,
        clicks,
        conversions,
        revenue: 0.0,
        ctr,
        cpc,
        roas,
        start_date,
        end_date,
    }
}

/// The campaign management page's campaigns, with type, audience and revenue
pub fn managed_campaigns() -> Vec<Campaign> {
    use CampaignStatus::*;

    let rows = [
        (
            "Summer Sale 2024",
            "Email Marketing",
            Active,
            "Women 25-45, Fashion Interest",
            (15000.0, 12300.0, 45600.0),
            (245_000, 8940, 342),
            (3.65, 1.38, 3.71),
            (date(2024, 7, 1), date(2024, 8, 31)),
        ),
        (
            "Brand Awareness Q3",
            "Social Media",
            Active,
            "All Demographics, Brand Keywords",
            (25000.0, 18700.0, 32000.0),
            (890_000, 15_600, 128),
            (1.75, 1.2, 1.71),
            (date(2024, 7, 1), date(2024, 9, 30)),
        ),
        (
            "Product Launch - Smart Watch",
            "Google Ads",
            Completed,
            "Tech Enthusiasts, 25-55",
            (8000.0, 7850.0, 28500.0),
            (156_000, 4200, 189),
            (2.69, 1.87, 3.63),
            (date(2024, 6, 15), date(2024, 7, 15)),
        ),
        (
            "Back to School Campaign",
            "Display Ads",
            Paused,
            "Parents, Students 18-25",
            (12000.0, 3400.0, 6700.0),
            (78_000, 1200, 45),
            (1.54, 2.83, 1.97),
            (date(2024, 8, 1), date(2024, 9, 15)),
        ),
        (
            "Retargeting Campaign",
            "Facebook Ads",
            Active,
            "Website Visitors, Cart Abandoners",
            (5000.0, 2100.0, 18900.0),
            (125_000, 3800, 267),
            (3.04, 0.55, 9.0),
            (date(2024, 7, 15), date(2024, 8, 15)),
        ),
        (
            "Holiday Preview 2024",
            "Email Marketing",
            Draft,
            "Newsletter Subscribers, VIP Customers",
            (20000.0, 0.0, 0.0),
            (0, 0, 0),
            (0.0, 0.0, 0.0),
            (date(2024, 11, 1), date(2024, 12, 31)),
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let (name, campaign_type, status, target, money, delivery, rates, dates) = row;
            Campaign {
                id: i as i64 + 1,
                name: name.to_string(),
                campaign_type: campaign_type.to_string(),
                status,
                target: target.to_string(),
                budget: money.0,
                spent: money.1,
                impressions: delivery.0,
                clicks: delivery.1,
                conversions: delivery.2,
                revenue: money.2,
                ctr: rates.0,
                cpc: rates.1,
                roas: rates.2,
                start_date: dates.0,
                end_date: dates.1,
            }
        })
        .collect()
}

/// The dashboard's campaign performance dataset
pub fn sample_campaigns() -> Vec<Campaign> {
    use CampaignStatus::*;

    vec![
        campaign(
            1,
            "Summer Sale 2024",
            Active,
            (50000.0, 42350.0),
            (2_450_000, 98_400, 2340),
            (4.02, 0.43, 5.8),
            date(2024, 6, 1),
            date(2024, 8, 31),
        ),
        campaign(
            2,
            "Brand Awareness Q3",
            Active,
            (75000.0, 68200.0),
            (5_670_000, 145_600, 1890),
            (2.57, 0.47, 4.2),
            date(2024, 7, 1),
            date(2024, 9, 30),
        ),
        campaign(
            3,
            "Holiday Shopping",
            Scheduled,
            (120000.0, 0.0),
            (0, 0, 0),
            (0.0, 0.0, 0.0),
            date(2024, 11, 15),
            date(2024, 12, 31),
        ),
        campaign(
            4,
            "Product Launch",
            Active,
            (30000.0, 28750.0),
            (1_230_000, 67_800, 1650),
            (5.51, 0.42, 6.7),
            date(2024, 8, 15),
            date(2024, 10, 15),
        ),
        campaign(
            5,
            "Retargeting Campaign",
            Paused,
            (25000.0, 19340.0),
            (890_000, 34_500, 890),
            (3.88, 0.56, 3.9),
            date(2024, 5, 1),
            date(2024, 7, 31),
        ),
        campaign(
            6,
            "Local Market Expansion",
            Active,
            (45000.0, 38900.0),
            (1_780_000, 89_200, 1560),
            (5.01, 0.44, 5.1),
            date(2024, 6, 15),
            date(2024, 9, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_ignores_case() {
        assert_eq!("active".parse::<CampaignStatus>(), Ok(CampaignStatus::Active));
        assert_eq!(" Draft ".parse::<CampaignStatus>(), Ok(CampaignStatus::Draft));
        assert!("archived".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_field_lookup() {
        let c = &sample_campaigns()[0];
        assert_eq!(c.field_value("name"), Some(FieldValue::from("Summer Sale 2024")));
        assert_eq!(c.field_value("budget"), Some(FieldValue::Float(50000.0)));
        assert_eq!(c.field_value("start_date"), Some(FieldValue::Date(date(2024, 6, 1))));
        assert_eq!(c.field_value("revenue"), None);
        assert_eq!(c.status(), Some("Active"));
    }

    #[test]
    fn test_summary() {
        let campaigns = sample_campaigns();
        let summary = CampaignSummary::from_campaigns(&campaigns);

        assert_eq!(summary.total_campaigns, 6);
        assert_eq!(summary.active_campaigns, 4);
        assert_eq!(summary.total_budget, 345000.0);
        assert_eq!(summary.total_spent, 197540.0);
        assert!((summary.spend_ratio - 57.26).abs() < 0.01);
    }

    #[test]
    fn test_managed_summary_includes_revenue() {
        let summary = CampaignSummary::from_campaigns(&managed_campaigns());

        assert_eq!(summary.total_budget, 85000.0);
        assert_eq!(summary.total_spent, 44350.0);
        assert_eq!(summary.total_revenue, 131700.0);
        assert_eq!(summary.active_campaigns, 3);
        assert!((summary.return_on_spend - 296.96).abs() < 0.01);
    }

    #[test]
    fn test_search_covers_name_and_target() {
        let c = &managed_campaigns()[4];
        assert_eq!(
            c.search_text(),
            vec!["Retargeting Campaign", "Website Visitors, Cart Abandoners"]
        );
        assert_eq!(c.category(), Some("Facebook Ads"));
        assert_eq!(sample_campaigns()[0].category(), None);
    }

    #[test]
    fn test_create_draft_campaign() {
        let existing = managed_campaigns();
        let new = NewCampaign {
            name: "Winter Clearance".to_string(),
            campaign_type: "Google Ads".to_string(),
            budget: Some(9000.0),
            target: "Bargain Hunters".to_string(),
            start_date: date(2025, 1, 2),
            end_date: date(2025, 1, 31),
        };

        let c = new.create(&existing).unwrap();
        assert_eq!(c.id, 7);
        assert_eq!(c.status, CampaignStatus::Draft);
        assert_eq!(c.budget, 9000.0);
        assert_eq!(c.spent, 0.0);
        assert_eq!(c.revenue, 0.0);
        assert_eq!(c.campaign_type, "Google Ads");
    }

    #[test]
    fn test_create_requires_name_budget_target() {
        let filled = NewCampaign {
            name: "Launch".to_string(),
            budget: Some(100.0),
            target: "Everyone".to_string(),
            ..NewCampaign::default()
        };
        assert!(filled.clone().create(&[]).is_ok());

        let missing = |new: NewCampaign| match new.create(&[]) {
            Err(ValidationError::RequiredField { field }) => field,
            other => panic!("unexpected result: {:?}", other),
        };
        let no_name = NewCampaign {
            name: "  ".to_string(),
            ..filled.clone()
        };
        let no_budget = NewCampaign {
            budget: None,
            ..filled.clone()
        };
        let no_target = NewCampaign {
            target: String::new(),
            ..filled
        };
        assert_eq!(missing(no_name), "name");
        assert_eq!(missing(no_budget), "budget");
        assert_eq!(missing(no_target), "target");
    }

    #[test]
    fn test_new_campaign_defaults_to_email() {
        assert_eq!(NewCampaign::default().campaign_type, "Email Marketing");
    }

    #[test]
    fn test_summary_empty() {
        let summary = CampaignSummary::from_campaigns(&Vec::<Campaign>::new());
        assert_eq!(summary.total_campaigns, 0);
        assert_eq!(summary.spend_ratio, 0.0);
    }

    #[test]
    fn test_spend_ratio_without_budget() {
        let mut c = sample_campaigns().remove(2);
        c.budget = 0.0;
        assert_eq!(c.spend_ratio(), 0.0);
    }

    #[test]
    fn test_serde_uses_camel_case_dates() {
        let c = &sample_campaigns()[0];
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["startDate"], "2024-06-01");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["type"], "");
    }
}
