use clap::{ArgAction, Args, Parser, Subcommand};
use eshare::DraftSource;
use eshare::domain::config::ShellConfig;
use std::path::PathBuf;

/// Command-line access to a B2SHARE repository from the ECAS workspace.
#[derive(Parser, Debug)]
#[command(name = "eshare", version, long_about = None)]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long, global = true, env = "ESHARE_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Repository base URL (overrides config)
    #[arg(long, global = true)]
    pub(crate) url: Option<String>,

    /// File holding the access token (overrides config)
    #[arg(long, global = true)]
    pub(crate) token_file: Option<PathBuf>,

    /// Raise log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Cli {
    /// Applies flag overrides on top of the loaded configuration.
    pub(crate) fn apply_overrides(&self, config: &mut ShellConfig) {
        if let Some(url) = &self.url {
            config.client.base_url.clone_from(url);
        }
        if let Some(path) = &self.token_file {
            config.client.token_file.clone_from(path);
        }
        let level = match self.verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut config.logging.level);
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Load a JSON metadata file and print it
    LoadMetadata { file: PathBuf },

    /// Check that a metadata file has every key the PID flow needs
    ValidateMetadata { file: PathBuf },

    /// Check that an identifier has the form prefix/suffix
    CheckPid { pid: String },

    /// List all communities
    Communities,

    /// Records of one community
    CommunityRecords { community_id: String },

    /// Latest metadata schema of a community
    CommunitySchema { community_id: String },

    /// List published records
    Records {
        /// Records per page (defaults to client.page_size)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Show one record (the draft version unless --published)
    Record {
        record_id: String,
        #[arg(long)]
        published: bool,
    },

    /// Print the ePIC PID of a draft
    RecordPid { record_id: String },

    /// Free-text search over published records
    Search { query: String },

    /// List your drafts
    Drafts,

    /// Create a draft with a single title
    CreateDraft {
        #[arg(long)]
        title: String,
        /// Community id (defaults to client.community_id)
        #[arg(long)]
        community: Option<String>,
    },

    /// Create a draft linked to an existing PID
    CreateDraftWithPid(CreateWithPidArgs),

    /// Upload a file into a draft's file bucket
    Upload { file: PathBuf, filebucket_id: String },

    /// List the files in a bucket
    Files { filebucket_id: String },

    /// Submit a draft for publication
    Submit { record_id: String },

    /// Delete a draft
    DeleteDraft { record_id: String },

    /// Delete a published record (administrators only)
    DeleteRecord { record_id: String },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CreateWithPidArgs {
    /// Complete metadata document
    #[arg(long, conflicts_with_all = ["title", "pid"], required_unless_present_all = ["title", "pid"])]
    pub(crate) metadata: Option<PathBuf>,

    /// Title of the new draft
    #[arg(long, requires = "pid")]
    pub(crate) title: Option<String>,

    /// PID of the dataset the draft is derived from
    #[arg(long, requires = "title")]
    pub(crate) pid: Option<String>,
}

impl CreateWithPidArgs {
    pub(crate) fn into_source(self) -> DraftSource {
        match self.metadata {
            Some(path) => DraftSource::MetadataFile(path),
            None => DraftSource::Handle {
                title: self.title.unwrap_or_default(),
                original_pid: self.pid.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("eshare").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&["record", "abc", "--published", "--url", "http://localhost", "-vv"])
            .unwrap();

        assert_eq!(
            cli.command,
            Command::Record { record_id: "abc".to_owned(), published: true }
        );
        assert_eq!(cli.url.as_deref(), Some("http://localhost"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let cli = parse(&["--token-file", "/tmp/t.txt", "-v", "drafts"]).unwrap();
        let mut config = ShellConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.client.token_file, PathBuf::from("/tmp/t.txt"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.client.base_url, eshare::domain::constants::DEFAULT_BASE_URL);
    }

    #[test]
    fn no_verbosity_keeps_the_configured_level() {
        let cli = parse(&["drafts"]).unwrap();
        let mut config = ShellConfig::default();
        config.logging.level = "error".to_owned();
        cli.apply_overrides(&mut config);
        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn pid_flow_takes_a_file_or_a_handle() {
        let Command::CreateDraftWithPid(args) =
            parse(&["create-draft-with-pid", "--metadata", "m.json"]).unwrap().command
        else {
            panic!("wrong subcommand");
        };
        assert_eq!(args.into_source(), DraftSource::MetadataFile(PathBuf::from("m.json")));

        let Command::CreateDraftWithPid(args) =
            parse(&["create-draft-with-pid", "--title", "T", "--pid", "1/2"]).unwrap().command
        else {
            panic!("wrong subcommand");
        };
        assert_eq!(
            args.into_source(),
            DraftSource::Handle { title: "T".to_owned(), original_pid: "1/2".to_owned() }
        );
    }

    #[test]
    fn pid_flow_rejects_mixed_or_partial_input() {
        assert!(parse(&["create-draft-with-pid"]).is_err());
        assert!(parse(&["create-draft-with-pid", "--title", "T"]).is_err());
        assert!(
            parse(&["create-draft-with-pid", "--metadata", "m.json", "--title", "T", "--pid", "1/2"])
                .is_err()
        );
    }
}
