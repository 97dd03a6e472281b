//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정(리포지토리 인덱스 생성, 서비스 조립)을 단계별로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🔄 INITIALIZING REPOSITORIES            ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Repositories initialized (2 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ entry: ✓ Ready (entries)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 시작 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 JOURNAL SERVICE READY              ║
/// ╚══════════════════════════════════════════════════╝
///    💾 Storage: MongoDB
///    📦 Repositories: 2
///    🔧 Services: 5
/// ```
pub fn print_final_summary(storage: &str, repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 JOURNAL SERVICE READY");
    println!("   💾 Storage: {}", storage);
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!();
}
