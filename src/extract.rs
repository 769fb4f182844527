//! 텍스트 추출 모듈
//!
//! 파싱된 레코드에서 대상 필드(기본값 `completion`)를 꺼내
//! 번호가 매겨진 텍스트 파일로 저장하는 쓰기 단계를 담당합니다.

use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{JExtractError, Result};
use crate::reader::Record;

/// 기본 추출 대상 필드 이름
pub const DEFAULT_FIELD: &str = "completion";

/// 기본 시작 번호
pub const DEFAULT_START_ID: usize = 100;

/// 기본 출력 파일 이름 접두사
pub const DEFAULT_PREFIX: &str = "record_";

/// 추출 옵션
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// 추출할 필드 이름
    pub field: String,
    /// 출력 파일 번호의 시작값
    pub start_id: usize,
    /// 출력 파일 이름 접두사
    pub prefix: String,
    /// 최대 저장 파일 수 (None이면 무제한)
    pub limit: Option<usize>,
    /// 저장된 파일마다 한 줄씩 출력
    pub verbose: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            start_id: DEFAULT_START_ID,
            prefix: DEFAULT_PREFIX.to_string(),
            limit: None,
            verbose: false,
        }
    }
}

impl ExtractOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 추출 대상 필드 설정
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// 시작 번호 설정
    pub fn with_start_id(mut self, start_id: usize) -> Self {
        self.start_id = start_id;
        self
    }

    /// 파일 이름 접두사 설정
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 최대 저장 파일 수 설정
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// 추출 결과 요약
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// 읽어들인 레코드 수
    pub records_seen: usize,
    /// 저장한 파일 수
    pub files_written: usize,
    /// 필드 누락/타입 불일치로 건너뛴 레코드 수
    pub field_skipped: usize,
    /// 저장한 총 바이트
    pub bytes_written: u64,
    /// 처음 부여된 파일 번호
    pub first_id: Option<usize>,
    /// 마지막으로 부여된 파일 번호
    pub last_id: Option<usize>,
}

/// 레코드 시퀀스에서 대상 필드를 추출하여 파일로 저장
///
/// 출력 폴더가 없으면 생성합니다. 파일 번호는 `start_id`부터 시작해
/// 실제로 저장된 파일에만 1씩 증가하며 부여되므로 번호에 빈틈이 없습니다.
/// 대상 필드가 없거나 문자열이 아닌 레코드는 진단을 출력하고 건너뜁니다.
///
/// # Arguments
/// * `records` - 추출할 레코드 시퀀스
/// * `output_dir` - 출력 폴더 경로
/// * `options` - 추출 옵션
///
/// # Returns
/// 처리 건수를 담은 `ExtractReport`
pub fn extract_records<I>(
    records: I,
    output_dir: &Path,
    options: &ExtractOptions,
) -> Result<ExtractReport>
where
    I: IntoIterator<Item = Record>,
{
    fs::create_dir_all(output_dir).map_err(|e| JExtractError::OutputDirError {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut report = ExtractReport::default();
    let mut next_id = options.start_id;

    for record in records {
        if let Some(limit) = options.limit {
            if report.files_written >= limit {
                break;
            }
        }
        report.records_seen += 1;

        let text = match record.get(&options.field) {
            Some(Value::String(text)) => text,
            Some(_) => {
                let error = JExtractError::FieldNotString {
                    ordinal: report.records_seen,
                    field: options.field.clone(),
                };
                skip_record(&mut report, error);
                continue;
            }
            None => {
                let error = JExtractError::MissingField {
                    ordinal: report.records_seen,
                    field: options.field.clone(),
                };
                skip_record(&mut report, error);
                continue;
            }
        };

        let file_name = format!("{}{}.txt", options.prefix, next_id);
        let path = output_dir.join(&file_name);
        fs::write(&path, text).map_err(|e| JExtractError::WriteError {
            file: path.clone(),
            reason: e.to_string(),
        })?;

        if options.verbose {
            println!("  {} {}", "✓".green(), file_name);
        }

        report.bytes_written += text.len() as u64;
        report.files_written += 1;
        report.first_id.get_or_insert(next_id);
        report.last_id = Some(next_id);
        next_id += 1;
    }

    Ok(report)
}

/// 필드 누락 레코드 건너뛰기: 진단 출력 후 카운트만 증가
fn skip_record(report: &mut ExtractReport, error: JExtractError) {
    eprintln!("{} {}", "⚠️".bright_yellow(), error.to_string().yellow());
    report.field_skipped += 1;
}
