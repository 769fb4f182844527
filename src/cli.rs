//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// jextract CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jextract",
    author = "YourName <your@email.com>",
    version,
    about = "JSONL COMPLETION EXTRACTOR - JSONL 파일의 completion 필드를 번호가 매겨진 텍스트 파일로 추출하는 CLI 도구",
    long_about = r#"
JSONL COMPLETION EXTRACTOR
==========================

JSONL 파일을 한 줄씩 읽어 각 레코드의 completion 필드를
번호가 매겨진 텍스트 파일로 출력 폴더에 저장합니다.

특징:
  • 지연(lazy) 스트리밍 파싱으로 대용량 파일 처리
  • 잘못된 줄은 진단 출력 후 건너뛰기
  • 시작 번호/접두사/필드 이름 지정 가능
  • 상세한 처리 통계

예제:
  jextract wiki.jsonl -o ./txts
  jextract wiki.jsonl -o ./txts --start-id 100 --prefix wiki_
  jextract data.jsonl --field text --limit 10
  jextract data.jsonl --log errors.log --debug
"#
)]
pub struct Args {
    /// 입력 JSONL 파일 경로
    pub input: PathBuf,

    /// 텍스트 파일이 저장될 출력 폴더 (기본값: ./output)
    #[arg(short, long, default_value = "./output")]
    pub output: PathBuf,

    /// 추출할 필드 이름
    #[arg(long, default_value = "completion")]
    pub field: String,

    /// 출력 파일 번호의 시작값
    #[arg(long, default_value_t = 100)]
    pub start_id: usize,

    /// 출력 파일 이름 접두사
    #[arg(long, default_value = "record_")]
    pub prefix: String,

    /// 최대 저장 파일 수
    #[arg(long)]
    pub limit: Option<usize>,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실패 시 전체 에러 체인 출력
    #[arg(long)]
    pub debug: bool,
}
