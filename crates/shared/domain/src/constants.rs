//! Fixed values of the B2SHARE deployment used from the ECAS workspace.

/// Training instance; use it for testing.
pub const DEFAULT_BASE_URL: &str = "https://eudat-b2share-test.csc.fi";
/// Token location inside the ECAS Jupyter container.
pub const DEFAULT_TOKEN_FILE: &str = "/home/jovyan/work/conf/token.txt";
/// The ECAS community on the repository.
pub const ECAS_COMMUNITY_ID: &str = "d2c6e694-0c0a-4884-ad15-ddf498008320";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameter carrying the token on authenticated calls.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Keys a metadata document must contain before the PID flow accepts it.
pub const REQUIRED_METADATA_FIELDS: [&str; 4] =
    ["titles", "related_identifiers", "community", "open_access"];

/// Shape reported to callers when a PID is rejected.
pub const PID_SYNTAX: &str = "prefix/suffix";

pub const RELATED_IDENTIFIER_TYPE_HANDLE: &str = "Handle";
pub const RELATION_IS_DERIVED_FROM: &str = "IsDerivedFrom";

pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// Relative endpoint paths, joined onto the configured base URL.
pub mod endpoints {
    pub const COMMUNITIES: &str = "api/communities";
    pub const RECORDS: &str = "api/records/";
    pub const RECORDS_LISTING: &str = "api/records";
    pub const FILES: &str = "api/files";
}
