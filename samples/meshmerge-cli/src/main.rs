use std::process::ExitCode;

use clap::Parser;
use meshmerge::{Context, ErrorKind, MergeTool};

mod cli;
use cli::*;

pub fn main() -> ExitCode {
    let args = Cli::parse();
    initialize_tracing(&args.log_filter, args.log_format);

    let mut store = args.store();
    let mut ctx = Context::new();
    match MergeTool::invoke(&mut ctx, &mut store, &args.inputs, &args.outputs) {
        Ok(summary) => {
            tracing::info!(
                merged = summary.merged.len(),
                skipped = summary.skipped.len(),
                submeshes = summary.submeshes,
                skeleton = summary.skeleton.as_deref(),
                "wrote {}",
                summary.output
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            match e.kind() {
                ErrorKind::Usage => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
