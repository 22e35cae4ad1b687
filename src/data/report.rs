//! Report listings

use crate::config::ExportConfig;
use crate::core::{FieldValue, Record};
use crate::table::export::ExportFile;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A generated report available for download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub last_updated: NaiveDate,
    pub size: String,
    pub format: String,
    pub status: String,
}

impl Report {
    /// Placeholder download: a text body naming the report
    ///
    /// The file name is the title with whitespace runs replaced by `_`,
    /// suffixed with the lower-cased format.
    pub fn download(&self, generated_at: DateTime<Utc>) -> ExportFile {
        let stem = self.title.split_whitespace().collect::<Vec<_>>().join("_");
        let config = ExportConfig {
            file_name: format!("{}.{}", stem, self.format.to_lowercase()),
            content_type: "text/plain".to_string(),
            ..ExportConfig::default()
        };
        let body = format!(
            "Report: {}\nGenerated: {}",
            self.title,
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        ExportFile::new(&config, body, 0)
    }
}

impl Record for Report {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "title" => FieldValue::from(self.title.as_str()),
            "description" => FieldValue::from(self.description.as_str()),
            "type" => FieldValue::from(self.report_type.as_str()),
            "last_updated" => FieldValue::Date(self.last_updated),
            "size" => FieldValue::from(self.size.as_str()),
            "format" => FieldValue::from(self.format.as_str()),
            "status" => FieldValue::from(self.status.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.report_type)
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: i64,
    title: &str,
    description: &str,
    report_type: &str,
    last_updated: (i32, u32, u32),
    size: &str,
    format: &str,
    status: &str,
) -> Report {
    let (y, m, d) = last_updated;
    Report {
        id,
        title: title.to_string(),
        description: description.to_string(),
        report_type: report_type.to_string(),
        last_updated: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        size: size.to_string(),
        format: format.to_string(),
        status: status.to_string(),
    }
}

/// The dashboard's report listing
pub fn sample_reports() -> Vec<Report> {
    vec![
        report(
            1,
            "Monthly Revenue Report",
            "Comprehensive revenue analysis for the current month",
            "Financial",
            (2025, 8, 4),
            "2.4 MB",
            "PDF",
            "Ready",
        ),
        report(
            2,
            "User Acquisition Analysis",
            "Detailed breakdown of user acquisition channels and costs",
            "Marketing",
            (2025, 8, 3),
            "1.8 MB",
            "Excel",
            "Ready",
        ),
        report(
            3,
            "Campaign Performance Q3",
            "Quarterly review of all marketing campaigns and ROI",
            "Marketing",
            (2025, 8, 2),
            "3.1 MB",
            "PDF",
            "Generating",
        ),
        report(
            4,
            "Website Analytics Deep Dive",
            "In-depth analysis of website traffic and user behavior",
            "Analytics",
            (2025, 8, 1),
            "4.2 MB",
            "PDF",
            "Ready",
        ),
        report(
            5,
            "Social Media Engagement",
            "Cross-platform social media performance and engagement metrics",
            "Social",
            (2025, 7, 31),
            "1.5 MB",
            "Excel",
            "Ready",
        ),
        report(
            6,
            "Email Marketing Performance",
            "Email campaign effectiveness and subscriber growth analysis",
            "Email",
            (2025, 7, 30),
            "900 KB",
            "PDF",
            "Ready",
        ),
    ]
}
