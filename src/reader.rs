//! JSONL 레코드 리더 모듈
//!
//! 텍스트 소스를 한 줄씩 읽어 JSON 객체 레코드의 지연(lazy) 시퀀스로 변환합니다.
//! 빈 줄은 조용히 건너뛰고, 파싱에 실패한 줄은 진단 메시지를 출력한 뒤 건너뜁니다.

use colored::Colorize;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{JExtractError, Result};

/// 한 줄에서 파싱된 JSON 객체 레코드
pub type Record = Map<String, Value>;

/// JSONL 레코드 이터레이터
///
/// 소스를 소유하며, 소비자가 요청할 때마다 다음 레코드를 생성합니다.
/// 이터레이터가 드롭되면 소스도 함께 해제됩니다 (조기 종료 포함).
pub struct RecordIter<R: BufRead> {
    lines: Lines<R>,
    /// 진단용 1-기반 줄 번호
    line_num: usize,
    /// 파싱 실패로 건너뛴 줄 번호 목록
    skipped: Vec<usize>,
}

impl<R: BufRead> RecordIter<R> {
    /// 임의의 버퍼 리더로부터 레코드 이터레이터 생성
    ///
    /// # Arguments
    /// * `reader` - 줄 단위로 읽을 소스
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use jextract::reader::RecordIter;
    ///
    /// let source = Cursor::new("{\"a\":1}\n{\"a\":2}\n");
    /// let records: Vec<_> = RecordIter::from_reader(source).collect();
    /// assert_eq!(records.len(), 2);
    /// ```
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
            skipped: Vec::new(),
        }
    }

    /// 파싱 실패로 건너뛴 줄 번호 목록 반환 (1-기반)
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped
    }

    /// 지금까지 읽은 줄 수 반환
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}

impl RecordIter<BufReader<File>> {
    /// JSONL 파일을 열어 레코드 이터레이터 생성
    ///
    /// 파일을 열 수 없으면 에러를 반환합니다. 열린 뒤의 줄 단위
    /// 파싱 실패는 에러가 아니라 건너뛰기로 처리됩니다.
    ///
    /// # Arguments
    /// * `path` - JSONL 파일 경로
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| JExtractError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for RecordIter<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                // 스트림 중간의 I/O 에러는 복구 대상이 아니므로 여기서 종료
                Err(e) => {
                    eprintln!("{} 파일 읽기 실패: {}", "❌".bright_red(), e);
                    return None;
                }
            };
            self.line_num += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str::<Record>(trimmed) {
                Ok(record) => return Some(record),
                Err(_) => {
                    eprintln!(
                        "{} {} 행: 잘못된 JSON을 건너뜁니다",
                        "⚠️".bright_yellow(),
                        self.line_num.to_string().yellow()
                    );
                    self.skipped.push(self.line_num);
                    continue;
                }
            }
        }
    }
}

/// JSONL 파일 경로로부터 레코드 이터레이터 생성
///
/// `RecordIter::open`의 함수형 별칭입니다.
pub fn records<P: AsRef<Path>>(path: P) -> Result<RecordIter<BufReader<File>>> {
    RecordIter::open(path)
}

/// JSONL 파일 전체를 메모리에 적재
///
/// 원본 줄 순서를 유지합니다. 작은 입력에만 사용하세요.
///
/// # Arguments
/// * `path` - JSONL 파일 경로
///
/// # Returns
/// 파싱에 성공한 레코드들의 벡터
pub fn collect_all<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    Ok(records(path)?.collect())
}

/// 조건을 만족하는 레코드만 메모리에 적재
///
/// `collect_all`의 결과를 동일한 조건으로 필터링한 것과 원소와 순서가 같습니다.
///
/// # Arguments
/// * `path` - JSONL 파일 경로
/// * `predicate` - 레코드 포함 여부를 판정하는 조건
pub fn collect_filtered<P, F>(path: P, predicate: F) -> Result<Vec<Record>>
where
    P: AsRef<Path>,
    F: FnMut(&Record) -> bool,
{
    Ok(records(path)?.filter(predicate).collect())
}
