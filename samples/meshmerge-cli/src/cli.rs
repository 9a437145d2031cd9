use std::path::PathBuf;

use clap::ValueHint;
use meshmerge::store::FileMeshStore;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,meshmerge=info,meshmerge_cli=info",
        env = "MESHMERGE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Where to write the merged mesh; `.ron` files are written as text
    #[arg(short, long = "output", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub outputs: Vec<String>,
    /// Extra directories to search for skeletons
    #[arg(short, long = "skeleton-path", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub skeleton_paths: Vec<PathBuf>,
    /// Meshes to merge, in order
    #[arg(value_hint = ValueHint::FilePath)]
    pub inputs: Vec<String>,
}

impl Cli {
    /// A store looking up skeletons next to the inputs, then in any directory given explicitly.
    pub fn store(&self) -> FileMeshStore {
        let input_dirs = self
            .inputs
            .iter()
            .filter_map(|i| std::path::Path::new(i).parent())
            // `a.mesh` has an empty parent
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    dir.to_owned()
                }
            });
        let mut res = FileMeshStore::new();
        for dir in input_dirs.chain(self.skeleton_paths.iter().cloned()) {
            res.add_search_path(dir);
        }
        res
    }
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_target(false)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
