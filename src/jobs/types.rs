//! Wire types for `/jobs` and `/applications`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Number of applications received; only the dashboard listing sends it.
    #[serde(default)]
    pub applications: u32,
}

/// Review state of an application. Unknown values are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Other(value) => value,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => ApplicationStatus::Pending,
            "Shortlisted" => ApplicationStatus::Shortlisted,
            "Rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Other(value),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: ApplicationStatus,
    /// Server-relative path of the uploaded resume.
    #[serde(default)]
    pub resume: String,
    #[serde(rename = "currentCTC", default, deserialize_with = "amount")]
    pub current_ctc: Option<f64>,
    #[serde(rename = "expectedCTC", default, deserialize_with = "amount")]
    pub expected_ctc: Option<f64>,
    #[serde(rename = "applicationDate", default)]
    pub application_date: Option<String>,
    #[serde(rename = "otherDetails", default)]
    pub other_details: Option<String>,
    #[serde(rename = "coverLetter", default)]
    pub cover_letter: Option<String>,
}

/// Body of `PATCH /applications/:id`.
#[derive(Clone, Debug, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

// Applications are submitted as multipart text, so amounts come back as
// either JSON numbers or numeric strings.
fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Some(value),
        Raw::Text(text) => text.trim().replace(',', "").parse::<f64>().ok(),
        Raw::Missing(()) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_reads_mongo_id_and_defaults_optional_fields() {
        let job: Job = serde_json::from_str(
            r#"{"_id":"j1","title":"Rust Engineer","company":"Acme","location":"Remote"}"#,
        )
        .expect("job");
        assert_eq!(job.id, "j1");
        assert!(job.responsibilities.is_empty());
        assert_eq!(job.applications, 0);
    }

    #[test]
    fn application_accepts_numeric_and_text_amounts() {
        let application: Application = serde_json::from_str(
            r#"{
                "_id": "a1",
                "name": "Ada",
                "email": "ada@example.com",
                "status": "Shortlisted",
                "resume": "/uploads/ada.pdf",
                "currentCTC": "1,200,000",
                "expectedCTC": 1500000,
                "applicationDate": "2025-02-01T10:00:00.000Z"
            }"#,
        )
        .expect("application");

        assert_eq!(application.id, "a1");
        assert_eq!(application.status, ApplicationStatus::Shortlisted);
        assert_eq!(application.current_ctc, Some(1_200_000.0));
        assert_eq!(application.expected_ctc, Some(1_500_000.0));
        assert_eq!(application.other_details, None);
    }

    #[test]
    fn application_tolerates_unparseable_or_null_amounts() {
        let application: Application = serde_json::from_str(
            r#"{"id":"a2","name":"Bo","email":"bo@example.com","status":"Pending","currentCTC":"n/a","expectedCTC":null}"#,
        )
        .expect("application");
        assert_eq!(application.id, "a2");
        assert_eq!(application.current_ctc, None);
        assert_eq!(application.expected_ctc, None);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: ApplicationStatus = serde_json::from_str(r#""Accepted""#).expect("status");
        assert_eq!(status, ApplicationStatus::Other("Accepted".to_string()));
        assert_eq!(serde_json::to_string(&status).expect("json"), r#""Accepted""#);
    }

    #[test]
    fn status_update_serializes_plain_string() {
        let body = StatusUpdate {
            status: ApplicationStatus::Rejected,
        };
        assert_eq!(
            serde_json::to_string(&body).expect("json"),
            r#"{"status":"Rejected"}"#
        );
    }
}
