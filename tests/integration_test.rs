//! 통합 테스트 모듈
//!
//! jextract의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 테스트용 JSONL 파일 생성 헬퍼
fn create_jsonl_file(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 유효/무효 줄이 섞인 테스트 입력 생성
fn setup_mixed_input() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = create_jsonl_file(
        temp_dir.path(),
        "mixed.jsonl",
        "{\"a\":1}\n\nnot json\n{\"a\":2}\n",
    );
    (temp_dir, path)
}

/// completion 레코드 입력 생성
fn setup_completion_input() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = create_jsonl_file(
        temp_dir.path(),
        "wiki.jsonl",
        concat!(
            "{\"source\":\"wiki\",\"completion\":\"x\"}\n",
            "{\"source\":\"wiki\",\"completion\":\"y\"}\n",
        ),
    );
    (temp_dir, path)
}

mod reader_tests {
    use super::*;
    use jextract::reader::{collect_all, collect_filtered, records};
    use serde_json::json;

    #[test]
    fn test_collect_all_preserves_line_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl_file(
            temp_dir.path(),
            "ordered.jsonl",
            "{\"id\":1}\n{\"id\":2}\n{\"id\":3}\n",
        );

        let records = collect_all(&path).unwrap();

        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.get("id"), Some(&json!(i + 1)));
        }
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl_file(
            temp_dir.path(),
            "blanks.jsonl",
            "\n   \n{\"id\":1}\n\t\n\n{\"id\":2}\n  \n",
        );

        let mut iter = records(&path).unwrap();
        let collected: Vec<_> = iter.by_ref().collect();

        assert_eq!(collected.len(), 2);
        assert!(iter.skipped_lines().is_empty());
    }

    #[test]
    fn test_invalid_line_skipped_and_diagnosed() {
        let (_temp_dir, path) = setup_mixed_input();

        let mut iter = records(&path).unwrap();
        let collected: Vec<_> = iter.by_ref().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].get("a"), Some(&json!(1)));
        assert_eq!(collected[1].get("a"), Some(&json!(2)));
        // 3행에 대해 정확히 하나의 진단
        assert_eq!(iter.skipped_lines(), &[3]);
    }

    #[test]
    fn test_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl_file(temp_dir.path(), "empty.jsonl", "");

        let mut iter = records(&path).unwrap();
        let collected: Vec<_> = iter.by_ref().collect();

        assert!(collected.is_empty());
        assert!(iter.skipped_lines().is_empty());
    }

    #[test]
    fn test_collect_filtered_matches_manual_filter() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_jsonl_file(
            temp_dir.path(),
            "data.jsonl",
            "{\"n\":1}\n{\"n\":2}\n{\"n\":3}\n{\"n\":4}\n",
        );

        let even = |r: &jextract::Record| {
            r.get("n").and_then(|v| v.as_i64()).map_or(false, |n| n % 2 == 0)
        };

        let filtered = collect_filtered(&path, even).unwrap();
        let manual: Vec<_> = collect_all(&path).unwrap().into_iter().filter(even).collect();

        assert_eq!(filtered, manual);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].get("n"), Some(&json!(2)));
        assert_eq!(filtered[1].get("n"), Some(&json!(4)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = collect_all("/nonexistent/missing.jsonl");
        assert!(result.is_err());
    }
}

mod extract_tests {
    use super::*;
    use jextract::extract::{extract_records, ExtractOptions};
    use jextract::reader::records;

    #[test]
    fn test_end_to_end_numbered_output() {
        let (_input_dir, input) = setup_completion_input();
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let options = ExtractOptions::new().with_start_id(100);
        let report = extract_records(reader, output_dir.path(), &options).unwrap();

        assert_eq!(report.files_written, 2);
        assert_eq!(report.first_id, Some(100));
        assert_eq!(report.last_id, Some(101));
        assert_eq!(
            fs::read_to_string(output_dir.path().join("record_100.txt")).unwrap(),
            "x"
        );
        assert_eq!(
            fs::read_to_string(output_dir.path().join("record_101.txt")).unwrap(),
            "y"
        );
    }

    #[test]
    fn test_invalid_lines_do_not_consume_ids() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_jsonl_file(
            temp_dir.path(),
            "mixed.jsonl",
            concat!(
                "{\"completion\":\"first\"}\n",
                "broken line\n",
                "{\"completion\":\"second\"}\n",
            ),
        );
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let options = ExtractOptions::new().with_start_id(0);
        let report = extract_records(reader, output_dir.path(), &options).unwrap();

        assert_eq!(report.files_written, 2);
        assert_eq!(
            fs::read_to_string(output_dir.path().join("record_1.txt")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_missing_field_is_counted_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_jsonl_file(
            temp_dir.path(),
            "partial.jsonl",
            concat!(
                "{\"completion\":\"keep\"}\n",
                "{\"other\":\"skip me\"}\n",
                "{\"completion\":123}\n",
            ),
        );
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let report =
            extract_records(reader, output_dir.path(), &ExtractOptions::new()).unwrap();

        assert_eq!(report.records_seen, 3);
        assert_eq!(report.files_written, 1);
        assert_eq!(report.field_skipped, 2);
    }

    #[test]
    fn test_custom_prefix_and_field() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_jsonl_file(
            temp_dir.path(),
            "texts.jsonl",
            "{\"text\":\"hello\"}\n",
        );
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let options = ExtractOptions::new()
            .with_field("text")
            .with_prefix("wiki_")
            .with_start_id(100);
        extract_records(reader, output_dir.path(), &options).unwrap();

        assert_eq!(
            fs::read_to_string(output_dir.path().join("wiki_100.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_limit_stops_pulling() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_jsonl_file(
            temp_dir.path(),
            "many.jsonl",
            concat!(
                "{\"completion\":\"1\"}\n",
                "{\"completion\":\"2\"}\n",
                "{\"completion\":\"3\"}\n",
                "{\"completion\":\"4\"}\n",
            ),
        );
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let options = ExtractOptions::new().with_limit(Some(2)).with_start_id(100);
        let report = extract_records(reader, output_dir.path(), &options).unwrap();

        assert_eq!(report.files_written, 2);
        assert_eq!(report.last_id, Some(101));
        assert!(!output_dir.path().join("record_102.txt").exists());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = create_jsonl_file(temp_dir.path(), "empty.jsonl", "");
        let output_dir = TempDir::new().unwrap();

        let reader = records(&input).unwrap();
        let report =
            extract_records(reader, output_dir.path(), &ExtractOptions::new()).unwrap();

        assert_eq!(report.records_seen, 0);
        assert_eq!(report.files_written, 0);
        assert_eq!(report.first_id, None);
        assert!(fs::read_dir(output_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_output_directory_created() {
        let (_input_dir, input) = setup_completion_input();
        let base = TempDir::new().unwrap();
        let nested = base.path().join("out").join("txts");

        let reader = records(&input).unwrap();
        extract_records(reader, &nested, &ExtractOptions::new()).unwrap();

        assert!(nested.join("record_100.txt").exists());
    }
}

mod stats_tests {
    use jextract::stats::{format_bytes, Statistics};

    #[test]
    fn test_statistics_tracking() {
        let stats = Statistics::new();

        stats.increment_parsed();
        stats.increment_parsed();
        stats.add_parse_skipped(1);
        stats.add_field_skipped(1);
        stats.add_files_written(2);
        stats.add_bytes_written(512);

        assert_eq!(stats.get_records_parsed(), 2);
        assert_eq!(stats.get_parse_skipped(), 1);
        assert_eq!(stats.get_field_skipped(), 1);
        assert_eq!(stats.get_files_written(), 2);
    }

    #[test]
    fn test_format_bytes_boundaries() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
    }
}

mod error_tests {
    use jextract::error::JExtractError;
    use std::path::PathBuf;

    #[test]
    fn test_file_open_error_display() {
        let error = JExtractError::FileOpenError {
            file: PathBuf::from("missing.jsonl"),
            reason: "No such file".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("파일을 열 수 없습니다"));
        assert!(msg.contains("missing.jsonl"));
    }

    #[test]
    fn test_missing_field_error_display() {
        let error = JExtractError::MissingField {
            ordinal: 3,
            field: "completion".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("레코드 #3"));
        assert!(msg.contains("'completion'"));
    }
}

mod cli_tests {
    use clap::Parser;
    use jextract::cli::Args;
    use std::path::PathBuf;

    #[test]
    fn test_positional_input_and_output_flag() {
        let args = Args::parse_from(["jextract", "wiki.jsonl", "-o", "./txts"]);

        assert_eq!(args.input, PathBuf::from("wiki.jsonl"));
        assert_eq!(args.output, PathBuf::from("./txts"));
    }

    #[test]
    fn test_debug_is_a_structured_flag() {
        let with_debug = Args::parse_from(["jextract", "wiki.jsonl", "--debug"]);
        let without_debug = Args::parse_from(["jextract", "wiki.jsonl"]);

        assert!(with_debug.debug);
        assert!(!without_debug.debug);
    }
}
