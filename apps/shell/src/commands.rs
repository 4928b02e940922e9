use crate::cli::Command;
use anyhow::Context;
use eshare::domain::config::ClientConfig;
use eshare::kernel::metadata::load_metadata;
use eshare::records::StatusCode;
use eshare::{ShareClient, check_pid_syntax, validate_metadata_file};
use serde_json::{Value, json};
use tracing::debug;

/// Runs one subcommand and returns what should be printed.
///
/// Local commands never build a client, so they work without network or token.
pub(crate) fn run(command: Command, config: &ClientConfig) -> anyhow::Result<Value> {
    let output = match command {
        Command::LoadMetadata { file } => load_metadata(&file)?,
        Command::ValidateMetadata { file } => validate_metadata_file(&file)?,
        Command::CheckPid { pid } => {
            check_pid_syntax(Some(pid.as_str()))?;
            Value::Bool(true)
        }
        remote => run_remote(remote, &client(config)?)?,
    };
    Ok(output)
}

fn client(config: &ClientConfig) -> anyhow::Result<ShareClient> {
    debug!(base_url = %config.base_url, "Building repository client");
    ShareClient::from_config(config)
        .with_context(|| format!("Cannot use repository at {}", config.base_url))
}

fn run_remote(command: Command, client: &ShareClient) -> anyhow::Result<Value> {
    let output = match command {
        Command::Communities => client.list_communities(None)?,
        Command::CommunityRecords { community_id } => client.community_records(&community_id)?,
        Command::CommunitySchema { community_id } => client.community_schema(&community_id)?,
        Command::Records { size } => client.list_all_records(size)?,
        Command::Record { record_id, published } => client.get_record(&record_id, !published)?,
        Command::RecordPid { record_id } => Value::String(client.get_record_pid(&record_id)?),
        Command::Search { query } => client.search_specific_record(&query)?,
        Command::Drafts => client.search_drafts()?,
        Command::CreateDraft { title, community } => {
            let community = community.as_deref().unwrap_or_else(|| client.community_id());
            serde_json::to_value(client.create_draft_record(community, &title)?)?
        }
        Command::CreateDraftWithPid(args) => {
            serde_json::to_value(client.create_draft_record_with_pid(&args.into_source())?)?
        }
        Command::Upload { file, filebucket_id } => {
            client.add_file_to_draft_record(&file, &filebucket_id)?
        }
        Command::Files { filebucket_id } => client.list_files_in_bucket(&filebucket_id)?,
        Command::Submit { record_id } => status(client.submit_draft_for_publication(&record_id)?),
        Command::DeleteDraft { record_id } => status(client.delete_draft_record(&record_id)?),
        Command::DeleteRecord { record_id } => status(client.delete_published_record(&record_id)?),
        Command::LoadMetadata { .. }
        | Command::ValidateMetadata { .. }
        | Command::CheckPid { .. } => anyhow::bail!("local command routed to the repository client"),
    };
    Ok(output)
}

fn status(code: StatusCode) -> Value {
    json!({ "status": code.as_u16() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn local_commands_ignore_an_unreachable_repository() {
        let config = ClientConfig { base_url: "not a url".to_owned(), ..ClientConfig::default() };

        let output = run(Command::CheckPid { pid: "11304/0d5e".to_owned() }, &config).unwrap();
        assert_eq!(output, Value::Bool(true));
    }

    #[test]
    fn remote_commands_report_a_bad_base_url() {
        let config = ClientConfig { base_url: "not a url".to_owned(), ..ClientConfig::default() };

        let err = run(Command::Drafts, &config).unwrap_err();
        assert!(err.to_string().contains("Cannot use repository at not a url"));
    }

    #[test]
    fn missing_metadata_file_fails() {
        let command = Command::LoadMetadata { file: PathBuf::from("/no/such/metadata.json") };
        assert!(run(command, &ClientConfig::default()).is_err());
    }

    #[test]
    fn status_is_reported_as_json() {
        assert_eq!(status(StatusCode::NO_CONTENT), json!({ "status": 204 }));
    }
}
