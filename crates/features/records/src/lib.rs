//! # B2SHARE Records
//!
//! A blocking client for the records, communities and file bucket endpoints of a
//! B2SHARE instance.
//!
//! Every operation is one HTTP request (the create-draft flows add a lookup of the new
//! file bucket) and returns the decoded JSON body, a [`DraftRecord`] or a status code.
//! Authenticated calls read the token file and pass it as the `access_token` query
//! parameter.
//!
//! ## Example
//!
//! ```rust,no_run
//! use eshare_records::{DraftSource, ShareClient, ShareError};
//!
//! fn publish() -> Result<(), ShareError> {
//!     let client = ShareClient::builder()
//!         .base_url("https://eudat-b2share-test.csc.fi")
//!         .token_file("/home/jovyan/work/conf/token.txt")
//!         .build()?;
//!
//!     let draft = client.create_draft_record_with_pid(&DraftSource::Handle {
//!         title: "Heatwave indices 1981-2010".to_owned(),
//!         original_pid: "21.14106/3c5b5f9d".to_owned(),
//!     })?;
//!     client.add_file_to_draft_record("indices.nc", &draft.filebucket_id)?;
//!     client.submit_draft_for_publication(&draft.record_id)?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod communities;
mod drafts;
mod error;
mod files;
mod records;
mod token;

pub use client::{ShareClient, ShareClientBuilder};
pub use drafts::DraftSource;
pub use error::{ShareError, ShareErrorExt};
pub use eshare_domain::record::DraftRecord;
pub use reqwest::StatusCode;
pub use token::AccessToken;
