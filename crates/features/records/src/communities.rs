use crate::client::{ShareClient, hits_total};
use crate::error::ShareError;
use eshare_domain::constants::{ACCESS_TOKEN_PARAM, endpoints};
use eshare_kernel::validation::require_argument;
use serde_json::Value;
use tracing::{info, instrument};

impl ShareClient {
    /// Lists every community. An explicit `token` is sent as-is; otherwise the call is anonymous.
    ///
    /// # Errors
    /// Any [`ShareError`] from the transport or a non-success status.
    #[instrument(skip(self, token))]
    pub fn list_communities(&self, token: Option<&str>) -> Result<Value, ShareError> {
        let mut request = self.http.get(self.endpoint(endpoints::COMMUNITIES, &[])?);
        if let Some(token) = token {
            request = request.query(&[(ACCESS_TOKEN_PARAM, token)]);
        }
        self.execute_json(request, "Listing communities")
    }

    /// Searches the records of one community.
    ///
    /// # Errors
    /// [`ShareError::Validation`] for an empty id, otherwise as [`Self::list_communities`].
    #[instrument(skip(self))]
    pub fn community_records(&self, community_id: &str) -> Result<Value, ShareError> {
        let community_id = require_argument("community_id", community_id)?;
        let request = self
            .http
            .get(self.endpoint(endpoints::RECORDS, &[])?)
            .query(&[("q", format!("community:{community_id}"))]);

        let records = self.execute_json(request, "Listing community records")?;
        match hits_total(&records) {
            Some(0) => info!(community_id, "No records in this community"),
            Some(total) => info!(community_id, total, "Community records found"),
            None => {}
        }
        Ok(records)
    }

    /// Fetches the latest metadata schema of a community.
    ///
    /// # Errors
    /// [`ShareError::EntityUnavailable`] for an unknown community.
    #[instrument(skip(self))]
    pub fn community_schema(&self, community_id: &str) -> Result<Value, ShareError> {
        let community_id = require_argument("community_id", community_id)?;
        let url = self.endpoint(endpoints::COMMUNITIES, &[community_id, "schemas", "last"])?;
        self.execute_json(self.http.get(url), "Fetching community schema")
    }
}
