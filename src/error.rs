//! 에러 타입 정의 모듈
//!
//! jextract에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// jextract에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum JExtractError {
    /// 입력 파일이 존재하지 않음
    #[error("입력 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력이 파일이 아님
    #[error("입력 경로가 파일이 아닙니다: {path}")]
    NotAFile { path: PathBuf },

    /// 입력 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 입력 스트림 읽기 실패
    #[error("파일 읽기 실패: {reason}")]
    ReadError { reason: String },

    /// 출력 폴더 생성 실패
    #[error("출력 폴더를 생성할 수 없습니다 ({path}): {reason}")]
    OutputDirError { path: PathBuf, reason: String },

    /// 레코드에 추출 대상 필드가 없음
    #[error("레코드 #{ordinal}에 '{field}' 필드가 없습니다")]
    MissingField { ordinal: usize, field: String },

    /// 추출 대상 필드가 문자열이 아님
    #[error("레코드 #{ordinal}의 '{field}' 필드가 문자열이 아닙니다")]
    FieldNotString { ordinal: usize, field: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

/// jextract 결과 타입 별칭
pub type Result<T> = std::result::Result<T, JExtractError>;
