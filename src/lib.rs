//! jextract - JSONL COMPLETION EXTRACTOR
//!
//! JSONL (JSON Lines) 파일의 각 레코드에서 completion 필드를 추출하여
//! 번호가 매겨진 텍스트 파일로 저장하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🚀 **지연 스트리밍**: 한 줄씩 읽는 lazy 이터레이터로 대용량 파일 처리
//! - 🛡️ **줄 단위 복구**: 잘못된 JSON 줄은 진단 출력 후 건너뛰고 계속 진행
//! - 🔢 **번호 매기기**: 시작 번호부터 빈틈 없이 증가하는 출력 파일 이름
//! - 🎯 **필드 선택**: completion 외 임의의 문자열 필드 추출 가능
//! - 📈 **상세 통계**: 파싱/건너뛰기/저장 건수와 처리 시간 표시
//! - 🎨 **컬러 출력**: 가독성 높은 컬러 터미널 출력
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! jextract wiki.jsonl -o ./txts
//!
//! # 시작 번호와 접두사 지정
//! jextract wiki.jsonl -o ./txts --start-id 100 --prefix wiki_
//!
//! # 다른 필드 추출
//! jextract data.jsonl --field text
//! ```

pub mod cli;
pub mod error;
pub mod extract;
pub mod reader;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{JExtractError, Result};
pub use extract::{extract_records, ExtractOptions, ExtractReport};
pub use reader::{collect_all, collect_filtered, records, Record, RecordIter};
pub use stats::{format_bytes, Statistics};
