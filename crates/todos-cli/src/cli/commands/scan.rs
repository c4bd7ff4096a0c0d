//! `todos scan [DIRECTORY]...` – search comments and write the reports.

use anyhow::Result;
use todos_core::config::TodosConfig;
use todos_core::output::{OutputOptions, OutputWriter, RunInfo};
use todos_core::scan::{ScanParameters, Scanner};

use crate::cli::ScanArgs;

fn dump_parameters(params: &ScanParameters, options: &OutputOptions) {
    tracing::info!("command line arguments: {}", std::env::args().collect::<Vec<_>>().join(" "));
    for (name, value) in params.describe().into_iter().chain(options.describe()) {
        tracing::info!("{}: {}", name.to_lowercase(), value);
    }
}

pub fn run_scan(args: &ScanArgs, cfg: &TodosConfig) -> Result<()> {
    let scan_cfg = args.merge(&cfg.scan);
    let params = ScanParameters::from_config(&scan_cfg, args.directories.clone());
    let options = args.output_options();
    dump_parameters(&params, &options);

    let scanner = Scanner::new(params)?;
    let report = scanner.scan();
    tracing::info!(
        matches = report.summary.total_matches(),
        files = report.summary.total_files,
        directories = report.summary.total_directories,
        "scan finished"
    );

    let run = RunInfo::capture();
    OutputWriter::new(scanner.parameters(), &options, &run).output(&report)
}
