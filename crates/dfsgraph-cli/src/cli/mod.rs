//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// All top-level subcommands exposed by the `dfsgraph` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print the adjacency list of every vertex.
    Show {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print vertex and edge counts, rejected edges, and whether the graph is acyclic.
    Inspect {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List the vertices reachable from a start vertex in depth-first order.
    Dfs {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The start vertex.
        #[arg(value_name = "START")]
        start: usize,
    },

    /// Print the depth-first tree path between two vertices and its length.
    Path {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Start vertex (root of the depth-first search).
        #[arg(value_name = "FROM")]
        from: usize,
        /// Target vertex.
        #[arg(value_name = "TO")]
        to: usize,
    },

    /// Find a cycle and print it starting at the vertex that closes it.
    Cycle {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

impl Command {
    /// The input source of the subcommand.
    pub fn input(&self) -> &PathOrStdin {
        match self {
            Self::Show { file }
            | Self::Inspect { file }
            | Self::Dfs { file, .. }
            | Self::Path { file, .. }
            | Self::Cycle { file } => file,
        }
    }
}

/// Root CLI struct for the `dfsgraph` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "dfsgraph",
    version,
    about = "Depth-first traversal, path and cycle tool",
    long_about = "Builds a graph from a JSON graph file and runs depth-first\n\
                  traversal, path reconstruction, or cycle detection over it."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log traversal details and timing to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `DFSGRAPH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "DFSGRAPH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Maximum vertex count a graph file may declare.
    ///
    /// Vertices are allocated before any edge is read, so this bounds memory
    /// independently of the file size. Can also be set via the
    /// `DFSGRAPH_MAX_VERTICES` environment variable.
    /// Default: 16777216.
    #[arg(
        long,
        global = true,
        env = "DFSGRAPH_MAX_VERTICES",
        default_value = "16777216"
    )]
    pub max_vertices: usize,
}
