use crate::client::ShareClient;
use crate::error::{ShareError, ShareErrorExt};
use eshare_domain::constants::{OCTET_STREAM_CONTENT_TYPE, endpoints};
use eshare_kernel::ValidationError;
use eshare_kernel::validation::require_argument;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

impl ShareClient {
    /// Uploads a local file into a draft's bucket under its own file name.
    ///
    /// The body is the raw file content, not a multipart form.
    ///
    /// # Errors
    /// * [`ShareError::Validation`] if `file` has no UTF-8 file name or the bucket id is empty.
    /// * [`ShareError::Io`] if the file cannot be read.
    #[instrument(skip(self, file), fields(file = %file.as_ref().display()))]
    pub fn add_file_to_draft_record(
        &self,
        file: impl AsRef<Path>,
        filebucket_id: &str,
    ) -> Result<Value, ShareError> {
        let file = file.as_ref();
        let filebucket_id = require_argument("filebucket_id", filebucket_id)?;
        let name = file.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
            ShareError::from(ValidationError::EmptyArgument { name: "file".into(), context: None })
        })?;

        let content = fs::read(file).context(format!("Reading {}", file.display()))?;
        let size = content.len();

        let request = self
            .http
            .put(self.endpoint(endpoints::FILES, &[filebucket_id, name])?)
            .header(CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE)
            .body(content);

        let uploaded = self.execute_json(self.authorized(request)?, "Uploading file")?;
        info!(filebucket_id, name, size, "File added to draft");
        Ok(uploaded)
    }

    /// Lists the files stored in a bucket.
    ///
    /// # Errors
    /// [`ShareError::Validation`] for an empty bucket id, before any request is made.
    #[instrument(skip(self))]
    pub fn list_files_in_bucket(&self, filebucket_id: &str) -> Result<Value, ShareError> {
        let filebucket_id = require_argument("filebucket_id", filebucket_id)?;
        let request = self.http.get(self.endpoint(endpoints::FILES, &[filebucket_id])?);
        self.execute_json(self.authorized(request)?, "Listing bucket files")
    }
}
