/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `dfsgraph` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The graph file could not be read,
///   parsed, or turned into a graph at all.
/// - Exit code **1**: query failure. The graph was built but the requested
///   vertex does not exist or the requested path is not in the DFS tree.
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `dfsgraph` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes. `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed graph file.
    ParseFailed {
        /// Parser message including line and column.
        detail: String,
    },

    /// The graph file parsed but declares an unusable vertex count.
    InvalidGraph {
        /// The underlying construction error.
        detail: String,
    },

    // --- Exit code 1: query failures ---
    /// A vertex argument is outside `0 .. vertex_count`.
    VertexNotFound {
        /// The requested vertex.
        vertex: usize,
    },

    /// The target vertex is not in the DFS tree rooted at the start vertex.
    NoPath {
        /// Start vertex.
        from: usize,
        /// Target vertex.
        to: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidGraph { .. } => 2,

            Self::VertexNotFound { .. } | Self::NoPath { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: invalid graph file: {detail}"),
            Self::InvalidGraph { detail } => format!("error: cannot build graph: {detail}"),
            Self::VertexNotFound { vertex } => format!("error: vertex {vertex} not found"),
            Self::NoPath { from, to } => {
                format!("error: path not found from {from} to {to}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<dfsgraph_core::QueryError> for CliError {
    fn from(e: dfsgraph_core::QueryError) -> Self {
        match e {
            dfsgraph_core::QueryError::VertexNotFound(vertex) => Self::VertexNotFound { vertex },
            dfsgraph_core::QueryError::PathNotFound { from, to } => Self::NoPath { from, to },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use dfsgraph_core::QueryError;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("g.json"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/g.json"),
            },
            CliError::FileTooLarge {
                source: "big.json".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.json".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "g.json".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::ParseFailed {
                detail: "line 1, column 2: expected value".to_owned(),
            },
            CliError::InvalidGraph {
                detail: "invalid vertex count 0".to_owned(),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "{e}");
        }
    }

    #[test]
    fn vertex_not_found_is_exit_1() {
        assert_eq!(CliError::VertexNotFound { vertex: 9 }.exit_code(), 1);
    }

    #[test]
    fn no_path_is_exit_1() {
        assert_eq!(CliError::NoPath { from: 0, to: 3 }.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("network.json"),
        };
        let msg = e.message();
        assert!(msg.contains("network.json"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn no_path_message_names_both_vertices() {
        let msg = CliError::NoPath { from: 1, to: 4 }.message();
        assert!(msg.contains("path not found"), "message: {msg}");
        assert!(msg.contains('1') && msg.contains('4'), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::VertexNotFound { vertex: 7 };
        assert_eq!(format!("{e}"), e.message());
    }

    // ── QueryError conversion ────────────────────────────────────────────────

    #[test]
    fn query_errors_map_to_exit_1_variants() {
        let e = CliError::from(QueryError::VertexNotFound(5));
        assert!(matches!(e, CliError::VertexNotFound { vertex: 5 }));

        let e = CliError::from(QueryError::PathNotFound { from: 0, to: 2 });
        assert!(matches!(e, CliError::NoPath { from: 0, to: 2 }));
    }
}
