// Read-back through LogReader against files produced by the service.
use logbook::{LogConfig, LogReader, LogService, NoopEcho, Severity};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn quiet_service(destination: &std::path::Path, level: Severity) -> LogService {
    LogService::with_echo(LogConfig::new(destination, level), Arc::new(NoopEcho))
}

#[test]
fn test_filter_returns_matching_lines_in_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("mixed.log");
    let service = quiet_service(&destination, Severity::Info);

    let script = [
        (Severity::Info, "i1"),
        (Severity::Warning, "w1"),
        (Severity::Error, "e1"),
        (Severity::Warning, "w2"),
        (Severity::Info, "i2"),
        (Severity::Warning, "w3"),
    ];
    for (level, message) in script {
        service.log(message, level).unwrap();
    }

    let reader = LogReader::new(&destination);
    let warnings = reader.read_logs(Some(Severity::Warning)).unwrap().into_lines();
    let messages: Vec<_> = warnings
        .iter()
        .map(|line| line.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(messages, vec!["w1", "w2", "w3"]);
    assert!(warnings.iter().all(|line| line.contains("[WARNING]")));

    let everything = reader.read_logs(None).unwrap();
    assert_eq!(everything.lines().len(), script.len());
}

#[test]
fn test_reader_path_is_independent_of_writer() {
    let temp_dir = TempDir::new().unwrap();
    let written = temp_dir.path().join("written.log");
    let other = temp_dir.path().join("other.log");
    fs::write(&other, "01:02:03 [ERROR] from elsewhere\n").unwrap();

    let service = quiet_service(&written, Severity::Info);
    service.log("here", Severity::Error).unwrap();

    let lines = LogReader::new(&other)
        .read_logs(Some(Severity::Error))
        .unwrap()
        .into_lines();
    assert_eq!(lines, vec!["01:02:03 [ERROR] from elsewhere"]);
}

#[test]
fn test_missing_destination_is_benign() {
    let temp_dir = TempDir::new().unwrap();
    let reader = LogReader::new(temp_dir.path().join("never-written.log"));

    let read = reader.read_logs(None).unwrap();
    assert!(read.is_not_found());
    assert!(read.lines().is_empty());
    assert_eq!(read.notice(), Some("No logs found."));
}

#[test]
fn test_round_trip_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("round_trip.log");
    let service = quiet_service(&destination, Severity::Info);

    service.set_log_level(Severity::Warning);
    service.log("a", Severity::Info).unwrap();
    assert!(!destination.exists());

    service.log("b", Severity::Error).unwrap();
    let all = service.reader().read_logs(None).unwrap().into_lines();
    assert_eq!(all.len(), 1);
    assert!(all[0].contains("[ERROR] b"));

    let errors = service
        .reader()
        .read_logs(Some(Severity::Error))
        .unwrap()
        .into_lines();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains('b'));
}

#[test]
fn test_parsed_entries_match_written_records() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("parsed.log");
    let service = quiet_service(&destination, Severity::Info);

    service.log("plain", Severity::Info).unwrap();
    service.log("mentions [ERROR] in text", Severity::Warning).unwrap();
    service.log("actual failure", Severity::Error).unwrap();

    let reader = service.reader();
    let by_tag = reader.read_logs(Some(Severity::Error)).unwrap();
    assert_eq!(by_tag.lines().len(), 2);

    let parsed = reader.read_entries(Some(Severity::Error)).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].message, "actual failure");
}

#[test]
fn test_multiline_message_stays_one_record() {
    let temp_dir = TempDir::new().unwrap();
    let destination = temp_dir.path().join("multiline.log");
    let service = quiet_service(&destination, Severity::Info);

    service.log("a\nb", Severity::Info).unwrap();
    service
        .log("hello\n12:00:00 [ERROR] forged", Severity::Info)
        .unwrap();

    let reader = service.reader();
    let all = reader.read_logs(None).unwrap().into_lines();
    assert_eq!(all.len(), 2);
    assert!(all[0].ends_with("[INFO] a\\nb"));

    let errors = reader.read_logs(Some(Severity::Error)).unwrap().into_lines();
    assert!(errors.iter().all(|line| !line.starts_with("12:00:00 [ERROR]")));
    assert!(reader.read_entries(Some(Severity::Error)).unwrap().is_empty());
}
