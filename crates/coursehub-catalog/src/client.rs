//! # Catalog Client
//!
//! Fetches the course list and maps the API's record shape into
//! [`Course`].
//!
//! ```text
//! GET <base_url>/api/courses
//!
//! [ { "_id": "65f..", "name": "C++", "institute": "IIT", "image": "https://.." } ]
//!                 │                          │                    │
//!                 ▼                          ▼                    ▼
//!          Course { id,      name,     institution,          icon }
//! ```

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use coursehub_core::Course;

use crate::config::CatalogSettings;
use crate::error::{CatalogError, CatalogResult};

/// Message used when a failed response carries no `message` of its own.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch courses";

/// One course as the API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub institute: String,
    pub image: String,
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Course {
            id: record.id,
            name: record.name,
            institution: record.institute,
            icon: record.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the course API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    settings: CatalogSettings,
}

impl CatalogClient {
    pub fn new(settings: CatalogSettings) -> CatalogResult<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Fetches every course in catalog order.
    ///
    /// ## Errors
    /// - [`CatalogError::Http`] if the request could not be made
    /// - [`CatalogError::Status`] on a non-2xx answer, carrying the body's
    ///   `message` or [`DEFAULT_FETCH_ERROR`]
    /// - [`CatalogError::Decode`] if the body is not a course array
    pub async fn fetch_courses(&self) -> CatalogResult<Vec<Course>> {
        let url = self.settings.courses_url();
        debug!(url = %url, "Fetching course catalog");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = %status, bytes = body.len(), "Catalog response received");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string());
            warn!(status = status.as_u16(), message = %message, "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let records: Vec<CourseRecord> = serde_json::from_slice(&body)?;
        Ok(records.into_iter().map(Course::from).collect())
    }
}
