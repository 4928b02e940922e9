//! Draft lifecycle: create, submit, discard.

use crate::client::ShareClient;
use crate::error::ShareError;
use eshare_domain::constants::{JSON_PATCH_CONTENT_TYPE, endpoints};
use eshare_domain::record::{DraftMetadata, DraftRecord, PatchOperation, RelatedIdentifier};
use eshare_kernel::validation::{
    check_pid_syntax, check_related_identifiers, require_argument, validate_metadata_file,
};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Where the metadata of a PID-linked draft comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftSource {
    /// Minimal metadata derived from an existing handle, under the configured community.
    Handle { title: String, original_pid: String },
    /// A complete metadata document on disk.
    MetadataFile(PathBuf),
}

impl ShareClient {
    /// Creates an open-access draft with a single title.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] if the response lacks the new `id` or its files link.
    #[instrument(skip(self))]
    pub fn create_draft_record(
        &self,
        community_id: &str,
        title: &str,
    ) -> Result<DraftRecord, ShareError> {
        let community_id = require_argument("community_id", community_id)?;
        let metadata = serde_json::to_value(DraftMetadata::new(community_id, title))
            .map_err(|e| ShareError::from(e.to_string()))?;
        self.post_draft(&metadata)
    }

    /// Creates a draft that records where its data was derived from.
    ///
    /// All validation happens before the first request.
    ///
    /// # Errors
    /// * [`ShareError::Validation`] for a malformed PID or incomplete metadata file.
    /// * Otherwise as [`Self::create_draft_record`].
    #[instrument(skip(self))]
    pub fn create_draft_record_with_pid(
        &self,
        source: &DraftSource,
    ) -> Result<DraftRecord, ShareError> {
        let metadata = match source {
            DraftSource::Handle { title, original_pid } => {
                check_pid_syntax(Some(original_pid.as_str()))?;
                let metadata = DraftMetadata::new(&self.community_id, title)
                    .with_related(RelatedIdentifier::derived_from_handle(original_pid));
                serde_json::to_value(metadata).map_err(|e| ShareError::from(e.to_string()))?
            }
            DraftSource::MetadataFile(path) => {
                let metadata = validate_metadata_file(path)?;
                check_related_identifiers(&metadata)?;
                metadata
            }
        };

        self.post_draft(&metadata)
    }

    /// Asks for a draft to be published.
    ///
    /// # Errors
    /// [`ShareError::Status`] if the repository refuses the transition (e.g. invalid metadata).
    #[instrument(skip(self))]
    pub fn submit_draft_for_publication(&self, record_id: &str) -> Result<StatusCode, ShareError> {
        let record_id = require_argument("record_id", record_id)?;
        let patch = serde_json::to_string(&[PatchOperation::submit_for_publication()])
            .map_err(|e| ShareError::from(e.to_string()))?;

        let request = self
            .http
            .patch(self.endpoint(endpoints::RECORDS_LISTING, &[record_id, "draft"])?)
            .header(CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .body(patch);

        let status = self.execute_status(self.authorized(request)?, "Submitting draft")?;
        info!(record_id, %status, "Draft submitted for publication");
        Ok(status)
    }

    /// Discards a draft.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] if no such draft exists.
    #[instrument(skip(self))]
    pub fn delete_draft_record(&self, record_id: &str) -> Result<StatusCode, ShareError> {
        let record_id = require_argument("record_id", record_id)?;
        let request =
            self.http.delete(self.endpoint(endpoints::RECORDS_LISTING, &[record_id, "draft"])?);
        let status = self.execute_status(self.authorized(request)?, "Deleting draft")?;
        info!(record_id, %status, "Draft deleted");
        Ok(status)
    }

    fn post_draft(&self, metadata: &Value) -> Result<DraftRecord, ShareError> {
        let request = self.http.post(self.endpoint(endpoints::RECORDS, &[])?).json(metadata);
        let created = self.execute_json(self.authorized(request)?, "Creating draft")?;

        let record_id = created
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ShareError::unavailable("created draft has no id"))?
            .to_owned();
        let filebucket_id = self.filebucket_id(&record_id)?;

        info!(%record_id, %filebucket_id, "Draft record created");
        Ok(DraftRecord { record_id, filebucket_id })
    }
}
