//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 파싱에 성공한 레코드 수
    pub records_parsed: AtomicUsize,
    /// 파싱 실패로 건너뛴 줄 수
    pub parse_skipped: AtomicUsize,
    /// 필드 누락으로 건너뛴 레코드 수
    pub field_skipped: AtomicUsize,
    /// 저장한 파일 수
    pub files_written: AtomicUsize,
    /// 쓴 총 바이트
    pub total_bytes_written: AtomicU64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파싱 성공 카운트 증가
    pub fn increment_parsed(&self) {
        self.records_parsed.fetch_add(1, Ordering::Relaxed);
    }

    /// 파싱 실패 줄 수 추가
    pub fn add_parse_skipped(&self, count: usize) {
        self.parse_skipped.fetch_add(count, Ordering::Relaxed);
    }

    /// 필드 누락 건너뛰기 수 추가
    pub fn add_field_skipped(&self, count: usize) {
        self.field_skipped.fetch_add(count, Ordering::Relaxed);
    }

    /// 저장 파일 수 추가
    pub fn add_files_written(&self, count: usize) {
        self.files_written.fetch_add(count, Ordering::Relaxed);
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&self, bytes: u64) {
        self.total_bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// 파싱 성공 수 반환
    pub fn get_records_parsed(&self) -> usize {
        self.records_parsed.load(Ordering::Relaxed)
    }

    /// 파싱 실패 줄 수 반환
    pub fn get_parse_skipped(&self) -> usize {
        self.parse_skipped.load(Ordering::Relaxed)
    }

    /// 필드 누락 건너뛰기 수 반환
    pub fn get_field_skipped(&self) -> usize {
        self.field_skipped.load(Ordering::Relaxed)
    }

    /// 저장 파일 수 반환
    pub fn get_files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        let parsed = self.get_records_parsed();
        let parse_skipped = self.get_parse_skipped();
        let field_skipped = self.get_field_skipped();
        let written = self.get_files_written();
        let bytes_written = self.total_bytes_written.load(Ordering::Relaxed);
        let elapsed = self.elapsed();

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 파싱 레코드:  {}",
            "📋".bright_cyan(),
            parsed.to_string().green()
        );

        if parse_skipped > 0 {
            println!(
                "  {} 잘못된 줄:    {}",
                "⚠️".bright_yellow(),
                parse_skipped.to_string().yellow()
            );
        } else {
            println!("  {} 잘못된 줄:    {}", "✅".bright_green(), "0".green());
        }

        if field_skipped > 0 {
            println!(
                "  {} 필드 누락:    {}",
                "⚠️".bright_yellow(),
                field_skipped.to_string().yellow()
            );
        } else {
            println!("  {} 필드 누락:    {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 저장 파일:    {}",
            "💾".bright_green(),
            written.to_string().green()
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(bytes_written)
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(elapsed)
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use jextract::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
