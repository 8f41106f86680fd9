//! Category routing tests for the single-log split routine

use crate::models::Category;
use crate::processor::splitter::split_log_file;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn split(temp_dir: &TempDir, content: &str) -> (PathBuf, crate::models::SplitStats) {
    let input = temp_dir.path().join("run.playback");
    fs::write(&input, content).unwrap();
    let output_root = temp_dir.path().join("out");
    let stats = split_log_file(&input, &output_root, ".playback").unwrap();
    (output_root, stats)
}

fn read_category(output_root: &Path, category: Category) -> String {
    fs::read_to_string(category.output_path(output_root, "run")).unwrap()
}

#[test]
fn test_line_written_to_every_matching_category() {
    let temp_dir = TempDir::new().unwrap();
    let (out, stats) = split(&temp_dir, "t0 SRC ATO.TrackCircuit.12 Occupied Train 9\n");

    assert_eq!(
        stats.active_categories(),
        vec![Category::Train, Category::TrackCircuit]
    );
    let row = "t0,SRC,ATO,TrackCircuit,12,Occupied,Train,9\r\n";
    assert!(read_category(&out, Category::Train).ends_with(row));
    assert_eq!(read_category(&out, Category::TrackCircuit), row);
    assert_eq!(stats.lines_routed, 1);
    assert_eq!(stats.total_rows(), 2);
}

#[test]
fn test_file_level_activation_line_level_routing() {
    let temp_dir = TempDir::new().unwrap();
    // "ATO" and "Station" only co-occur across lines
    let content = "t0 SRC ATO.Gate.1 Open\nt1 SRC HMI.Station.4 Dwell\n";
    let (out, stats) = split(&temp_dir, content);

    assert_eq!(
        stats.active_categories(),
        vec![Category::Gate, Category::Station]
    );
    // Station file exists but no line carries both keywords
    assert_eq!(read_category(&out, Category::Station), "");
    assert_eq!(stats.outputs[&Category::Station].rows_written, 0);
    assert_eq!(read_category(&out, Category::Gate), "t0,SRC,ATO,Gate,1,Open\r\n");
}

#[test]
fn test_train_file_with_no_rows_keeps_header() {
    let temp_dir = TempDir::new().unwrap();
    // Only matching Train line is a route line and gets discarded
    let content = "t0 SRC ATO.Train.1 route_name R4\nt1 SRC ATO.Gate.1 Open\n";
    let (out, _) = split(&temp_dir, content);

    assert_eq!(
        read_category(&out, Category::Train),
        "Timestamp,Source,System,Component,ID,Action,Attribute,Value,Code\r\n"
    );
}

#[test]
fn test_discarded_lines_never_routed() {
    let temp_dir = TempDir::new().unwrap();
    let content = "Version ATO Train Switch\n\
                   t0 SRC ATO.Train.1 next_route_name R1\n\
                   t1 SRC ATO.Switch.2 dsp_tdn 77\n\
                   t2 SRC ATO.Train.1 Move 5\n";
    let (out, stats) = split(&temp_dir, content);

    assert_eq!(stats.lines_discarded, 3);
    let train = read_category(&out, Category::Train);
    assert!(!train.contains("route_name"));
    assert!(train.ends_with("t2,SRC,ATO,Train,1,Move,5\r\n"));
    assert_eq!(train.lines().count(), 2);

    let switch = read_category(&out, Category::Switch);
    assert_eq!(switch.lines().count(), 1);
}

#[test]
fn test_no_sentinel_survives() {
    let temp_dir = TempDir::new().unwrap();
    let content = "??? SRC ATO.Panel.??? ??? ??? x\nt1 ??? ATO.Panel.3 ??? ok ???\n";
    let (out, _) = split(&temp_dir, content);

    let panel = read_category(&out, Category::Panel);
    assert!(!panel.contains("???"));
    assert_eq!(panel, ",SRC,ATO,Panel,,,,x\r\nt1,,ATO,Panel,3,,ok,\r\n");
}

#[test]
fn test_rato_lines_need_no_separate_ato_token() {
    let temp_dir = TempDir::new().unwrap();
    let (out, stats) = split(&temp_dir, "t0 SRC RATO.Cmd.1 Go\n");

    assert_eq!(stats.active_categories(), vec![Category::Rato]);
    assert_eq!(read_category(&out, Category::Rato), "t0,SRC,RATO,Cmd,1,Go\r\n");
}

#[test]
fn test_no_categories_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let (out, stats) = split(&temp_dir, "t0 SRC HMI.Train.1 Move\n");

    assert!(stats.outputs.is_empty());
    assert_eq!(stats.lines_routed, 0);
    assert!(!out.exists());
}
