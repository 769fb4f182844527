//! jextract - JSONL COMPLETION EXTRACTOR
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use jextract::{
    cli::Args,
    extract::{extract_records, ExtractOptions},
    reader::RecordIter,
    stats::Statistics,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("\n{} 에러: {}", "❌".bright_red(), e);
        if args.debug {
            eprintln!("\n{}", "🔍 에러 상세:".bright_cyan());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // 입력 파일 확인
    validate_input(args)?;

    // 헤더 출력
    print_header(args);

    // 통계 초기화
    let stats = Statistics::new();

    // 입력 파일 열기 (열기 실패만 치명적, 줄 단위 실패는 건너뜀)
    let mut reader = RecordIter::open(&args.input)
        .with_context(|| format!("입력 파일을 열 수 없습니다: {:?}", args.input))?;

    // 진행률 스피너 설정 (전체 줄 수를 미리 알 수 없음)
    let pb = create_spinner();

    println!("\n{}", "⚡ 레코드 처리 중...".bright_cyan());

    let options = ExtractOptions::new()
        .with_field(&args.field)
        .with_start_id(args.start_id)
        .with_prefix(&args.prefix)
        .with_limit(args.limit)
        .with_verbose(args.verbose);

    let report = extract_records(
        reader.by_ref().inspect(|_| {
            pb.inc(1);
            stats.increment_parsed();
        }),
        &args.output,
        &options,
    )?;

    pb.finish_with_message("완료!");

    // 통계 반영
    let skipped_lines = reader.skipped_lines().to_vec();
    stats.add_parse_skipped(skipped_lines.len());
    stats.add_field_skipped(report.field_skipped);
    stats.add_files_written(report.files_written);
    stats.add_bytes_written(report.bytes_written);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &skipped_lines, report.field_skipped)?;
    }

    // 통계 출력
    stats.print_summary();

    match (report.first_id, report.last_id) {
        (Some(first), Some(last)) => println!(
            "\n{} 저장 완료: {:?} ({}{}.txt ~ {}{}.txt)\n",
            "✅".bright_green(),
            args.output,
            args.prefix,
            first,
            args.prefix,
            last
        ),
        _ => println!(
            "\n{} {}",
            "⚠️".bright_yellow(),
            "저장된 파일이 없습니다.\n".yellow()
        ),
    }

    Ok(())
}

/// 입력 경로 유효성 검사
fn validate_input(args: &Args) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("입력 파일이 존재하지 않습니다: {:?}", args.input);
    }

    if !args.input.is_file() {
        anyhow::bail!("입력 경로가 파일이 아닙니다: {:?}", args.input);
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🚀 JSONL COMPLETION EXTRACTOR".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 파일: {:?}", "📂".bright_cyan(), args.input);
    println!("  {} 출력 폴더: {:?}", "📄".bright_green(), args.output);
    println!("  {} 추출 필드: {}", "🎯".bright_cyan(), args.field);
    println!(
        "  {} 파일 이름: {}{}.txt 부터",
        "🔢".bright_yellow(),
        args.prefix,
        args.start_id
    );

    if let Some(limit) = args.limit {
        println!("  {} 최대 저장 수: {}", "📏".bright_white(), limit);
    }

    if args.debug {
        println!("  {} {}", "🔍".bright_cyan(), "디버그 모드".cyan());
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 진행률 스피너 생성
fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} 레코드 {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 에러 로그 파일 작성
fn write_error_log(
    log_path: &PathBuf,
    skipped_lines: &[usize],
    field_skipped: usize,
) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "jextract 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", chrono_now())?;
    writeln!(log_file, "잘못된 줄 수: {}", skipped_lines.len())?;
    writeln!(log_file, "필드 누락 레코드 수: {}", field_skipped)?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for line_num in skipped_lines {
        writeln!(log_file, "잘못된 JSON: {} 행", line_num)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn chrono_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now();
    let duration = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
