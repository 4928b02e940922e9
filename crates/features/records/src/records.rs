//! Reading and searching records.

use crate::client::{ShareClient, hits_total};
use crate::error::ShareError;
use eshare_domain::constants::endpoints;
use eshare_kernel::validation::require_argument;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{info, instrument};

impl ShareClient {
    /// Lists published records, `size` per page (the configured page size by default).
    ///
    /// # Errors
    /// Any [`ShareError`] from the transport or a non-success status.
    #[instrument(skip(self))]
    pub fn list_all_records(&self, size: Option<u32>) -> Result<Value, ShareError> {
        let size = size.unwrap_or(self.page_size);
        let request = self
            .http
            .get(self.endpoint(endpoints::RECORDS_LISTING, &[])?)
            .query(&[("size", size), ("page", 1)]);
        self.execute_json(request, "Listing records")
    }

    /// Fetches one record, its draft version when `draft` is set.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] if the record does not exist.
    #[instrument(skip(self))]
    pub fn get_record(&self, record_id: &str, draft: bool) -> Result<Value, ShareError> {
        let record_id = require_argument("record_id", record_id)?;
        let url = if draft {
            self.endpoint(endpoints::RECORDS_LISTING, &[record_id, "draft"])?
        } else {
            self.endpoint(endpoints::RECORDS_LISTING, &[record_id])?
        };
        let request = self.http.get(url).header(CONTENT_TYPE, "application/json");
        self.execute_json(self.authorized(request)?, "Fetching record")
    }

    /// The `ePIC_PID` assigned to a draft.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] if the draft is unknown or has no PID yet.
    #[instrument(skip(self))]
    pub fn get_record_pid(&self, record_id: &str) -> Result<String, ShareError> {
        let record = self.get_record(record_id, true)?;
        record
            .pointer("/metadata/ePIC_PID")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ShareError::unavailable(format!("record {record_id} has no ePIC_PID")))
    }

    /// Id of the file bucket behind a draft: the last segment of `links.files`.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] if the draft is unknown or has no files link.
    #[instrument(skip(self))]
    pub fn filebucket_id(&self, record_id: &str) -> Result<String, ShareError> {
        let record = self.get_record(record_id, true)?;
        record
            .pointer("/links/files")
            .and_then(Value::as_str)
            .and_then(|link| link.rsplit('/').next())
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                ShareError::unavailable(format!("record {record_id} has no links.files"))
            })
    }

    /// Every record visible to the token owner.
    ///
    /// # Errors
    /// Any [`ShareError`] from the token file, the transport or a non-success status.
    #[instrument(skip(self))]
    pub fn search_records(&self) -> Result<Value, ShareError> {
        let request = self.http.get(self.endpoint(endpoints::RECORDS_LISTING, &[])?);
        self.execute_json(self.authorized(request)?, "Searching records")
    }

    /// Drafts owned by the token owner.
    ///
    /// # Errors
    /// As [`Self::search_records`].
    #[instrument(skip(self))]
    pub fn search_drafts(&self) -> Result<Value, ShareError> {
        let request =
            self.http.get(self.endpoint(endpoints::RECORDS, &[])?).query(&[("drafts", 1)]);
        let drafts = self.execute_json(self.authorized(request)?, "Searching drafts")?;
        if let Some(total) = hits_total(&drafts) {
            info!(total, "Drafts found");
        }
        Ok(drafts)
    }

    /// Free-text search over published records.
    ///
    /// # Errors
    /// Any [`ShareError`] from the transport or a non-success status.
    #[instrument(skip(self))]
    pub fn search_specific_record(&self, query: &str) -> Result<Value, ShareError> {
        let request =
            self.http.get(self.endpoint(endpoints::RECORDS_LISTING, &[])?).query(&[("q", query)]);
        self.execute_json(request, "Searching records")
    }

    /// Deletes a published record. Only repository administrators may do this.
    ///
    /// # Errors
    /// [`ShareError::Status`] (typically 403) when the token owner is not an administrator.
    #[instrument(skip(self))]
    pub fn delete_published_record(&self, record_id: &str) -> Result<StatusCode, ShareError> {
        let record_id = require_argument("record_id", record_id)?;
        let request = self.http.delete(self.endpoint(endpoints::RECORDS_LISTING, &[record_id])?);
        let status = self.execute_status(self.authorized(request)?, "Deleting record")?;
        info!(record_id, %status, "Published record deleted");
        Ok(status)
    }
}
