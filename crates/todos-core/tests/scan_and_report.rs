//! Integration test: scan a small project tree and write all report formats.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use todos_core::config::ScanConfig;
use todos_core::output::{OutputOptions, OutputWriter, RunInfo};
use todos_core::scan::{ScanParameters, Scanner};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    write(&root, "src/main.rs", "fn main() {\n    // TODO: arguments\n    run();\n}\n");
    write(&root, "src/util.py", "# FIXME: slow\ndef f():\n    pass  # todo lowercase\n");
    write(&root, "README", "TODO without a comment marker\n");
    write(&root, ".svn/entries", "# TODO inside svn metadata\n");
    fs::write(root.join("image.bin"), b"\x89PNG\0\0# TODO").unwrap();
    dir
}

fn run_info(working_dir: PathBuf) -> RunInfo {
    RunInfo {
        hostname: "ci".into(),
        user: "builder".into(),
        working_dir,
        command_line: "todos scan project".into(),
        generated: "2014-01-01 00:00:00".into(),
    }
}

#[test]
fn scan_counts_files_directories_and_matches() {
    let dir = project();
    let params =
        ScanParameters::from_config(&ScanConfig::default(), vec![dir.path().join("project")]);
    let report = Scanner::new(params).unwrap().scan();

    assert_eq!(report.comments.len(), 2);
    assert!(report.comments[0].path.ends_with("src/main.rs"));
    assert_eq!(report.comments[0].position, 2);
    assert!(report.comments[1].path.ends_with("src/util.py"));
    assert_eq!(report.comments[1].position, 1);

    // README, main.rs, util.py; image.bin is binary and .svn is suppressed.
    assert_eq!(report.summary.total_files, 3);
    // project, src
    assert_eq!(report.summary.total_directories, 2);
    assert_eq!(report.summary.files_with_matches(), 2);
}

#[test]
fn ignore_case_finds_lowercase_markers() {
    let dir = project();
    let cfg = ScanConfig {
        ignore_case: true,
        extensions: Some(vec!["py".into()]),
        ..ScanConfig::default()
    };
    let params = ScanParameters::from_config(&cfg, vec![dir.path().join("project")]);
    let report = Scanner::new(params).unwrap().scan();

    let positions: Vec<_> = report.comments.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![1, 3]);
    assert_eq!(report.summary.total_files, 1);
}

#[test]
fn reports_are_written_in_every_format() {
    let dir = project();
    let out = tempdir().unwrap();
    let params = ScanParameters::from_config(
        &ScanConfig {
            num_lines: 2,
            ..ScanConfig::default()
        },
        vec![dir.path().join("project")],
    );
    let options = OutputOptions {
        txt: Some(out.path().join("todos.txt")),
        xml: Some(out.path().join("todos.xml")),
        html: Some(out.path().join("todos.html")),
        force: false,
    };

    let report = Scanner::new(params.clone()).unwrap().scan();
    let run = run_info(dir.path().to_path_buf());
    OutputWriter::new(&params, &options, &run).output(&report).unwrap();

    let txt = fs::read_to_string(out.path().join("todos.txt")).unwrap();
    assert!(txt.starts_with("--\n"));
    assert!(txt.contains("src/main.rs:2:     // TODO: arguments\n"));
    assert!(txt.contains("src/main.rs:3:     run();\n"));

    let xml = fs::read_to_string(out.path().join("todos.xml")).unwrap();
    assert!(xml.contains("line=\"2\">"));
    assert!(xml.trim_end().ends_with("</todos>"));

    let html = fs::read_to_string(out.path().join("todos.html")).unwrap();
    assert!(html.contains("<td>Number of Lines</td>\n<td>2</td>"));
    assert!(html.contains("<td>Total Files</td>\n<td>3</td>"));
}
