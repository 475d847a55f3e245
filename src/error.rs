use std::path::PathBuf;

/// Failures that end a run before (or instead of) doing its work.
///
/// Plumbing code wraps these in [`anyhow::Error`]; callers that need to
/// branch on the condition can `downcast_ref::<BuddyError>()`.
#[derive(Debug, thiserror::Error)]
pub enum BuddyError {
    /// One or more required executables are not on the search path.
    #[error("missing required dependencies: {}", .0.join(", "))]
    MissingDependencies(Vec<String>),

    #[error("not inside a git working tree: {}", .0.display())]
    NotAWorkTree(PathBuf),

    /// The source directory is absent or holds no installable scripts.
    #[error("no scripts found in {}", .0.display())]
    NoScripts(PathBuf),

    #[error("destination is not writable: {}", path.display())]
    DestinationNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Install would overwrite existing files and `--force` was not given.
    #[error(
        "refusing to overwrite existing file(s) without --force: {}",
        .0.join(", ")
    )]
    Conflicts(Vec<String>),

    #[error("cannot determine absolute path to user's home directory")]
    NoWayHome,

    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external query (not a per-file format) returned a failure.
    #[error("`{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },
}
