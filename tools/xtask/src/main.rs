//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-core`: 运行 button-core 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `theme-check`: 检查主题 JSON 文件

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use button_core::{DiagnosticLevel, DiagnosticResult, StyleTable};
use clap::{Parser, Subcommand};
use walkdir::WalkDir;
use xshell::{Shell, cmd};

#[derive(Parser)]
#[command(name = "xtask", about = "开发辅助工具")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// 运行 fmt、clippy、test 门禁检查
    CheckAll,
    /// 运行 button-core 覆盖率报告
    CovCore,
    /// 运行 workspace 覆盖率报告
    CovWorkspace,
    /// 检查主题 JSON 文件
    ///
    /// 不带参数：检查 button-dioxus/themes/ 下所有 .json 文件
    ThemeCheck {
        /// 指定文件或目录
        path: Option<PathBuf>,
        /// 同时输出 INFO 级别诊断
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Task::CheckAll => {
            step("cargo fmt --all -- --check");
            cmd!(sh, "cargo fmt --all -- --check").run()?;

            step("cargo clippy --workspace --all-targets");
            cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

            step("cargo test --workspace");
            cmd!(sh, "cargo test --workspace").run()?;
        }
        Task::CovCore => {
            ensure_cargo_llvm_cov_available(&sh)?;

            step("cargo llvm-cov -p button-core --all-features --html");
            cmd!(sh, "cargo llvm-cov -p button-core --all-features --html").run()?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Task::CovWorkspace => {
            ensure_cargo_llvm_cov_available(&sh)?;

            // 排除 xtask，避免稀释信号
            step("cargo llvm-cov --workspace --exclude xtask --html");
            cmd!(sh, "cargo llvm-cov --workspace --exclude xtask --html").run()?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        Task::ThemeCheck { path, verbose } => {
            theme_check(path.as_deref(), verbose)?;
        }
    }

    Ok(())
}

fn step(name: &str) {
    eprintln!("\n==> {name}");
}

fn ensure_cargo_llvm_cov_available(sh: &Shell) -> anyhow::Result<()> {
    if cmd!(sh, "cargo llvm-cov --version").quiet().ignore_stdout().run().is_err() {
        anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        );
    }
    Ok(())
}

//=============================================================================
// theme-check 命令实现
//=============================================================================

/// 默认主题目录（相对于 workspace root）
const DEFAULT_THEMES_DIR: &str = "button-dioxus/themes";

/// 主题检查结果
#[derive(Default)]
struct ThemeCheckResult {
    /// 检查的主题数量
    themes_checked: usize,
    /// 加载失败数量（JSON 错误、未知 key）
    load_errors: usize,
    /// 诊断结果
    diagnostics: DiagnosticResult,
}

/// 执行主题检查
fn theme_check(path: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
    let files = match path {
        Some(p) if p.is_file() => vec![p.to_path_buf()],
        Some(p) if p.is_dir() => collect_theme_files(p),
        Some(p) => anyhow::bail!("路径不存在: {}", p.display()),
        None => {
            let dir = Path::new(DEFAULT_THEMES_DIR);
            if !dir.exists() {
                anyhow::bail!(
                    "默认主题目录不存在: {}\n请在 workspace 根目录运行，或指定主题路径",
                    dir.display()
                );
            }
            collect_theme_files(dir)
        }
    };

    if files.is_empty() {
        eprintln!("未找到主题文件（.json）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个主题文件...\n", files.len());

    let mut result = ThemeCheckResult::default();
    for file in &files {
        check_theme_file(file, &mut result);
    }

    print_check_result(&result, verbose);

    if result.load_errors > 0 || result.diagnostics.has_errors() {
        anyhow::bail!("主题检查发现错误");
    }

    Ok(())
}

/// 收集目录下的所有主题文件
fn collect_theme_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                eprintln!("[WARN] 无法访问: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// 检查单个主题文件
fn check_theme_file(file: &Path, result: &mut ThemeCheckResult) {
    let source = file.display().to_string();
    result.themes_checked += 1;

    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ERROR] {source}: 无法读取文件 - {e}");
            result.load_errors += 1;
            return;
        }
    };

    match StyleTable::from_json(&content) {
        Ok(table) => result.diagnostics.merge(table.check(&source)),
        Err(e) => {
            eprintln!("[ERROR] {source}: {e}");
            result.load_errors += 1;
        }
    }
}

/// 输出检查结果
fn print_check_result(result: &ThemeCheckResult, verbose: bool) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个主题", result.themes_checked);
    eprintln!();

    let min_level = if verbose {
        DiagnosticLevel::Info
    } else {
        DiagnosticLevel::Warn
    };
    for diag in result.diagnostics.filter_by_level(min_level) {
        eprintln!("{diag}");
    }

    let error_count = result.load_errors + result.diagnostics.error_count();
    let warn_count = result.diagnostics.warn_count();

    eprintln!();
    if error_count > 0 {
        eprintln!("❌ {error_count} 个错误, {warn_count} 个警告");
    } else if warn_count > 0 {
        eprintln!("⚠️  0 个错误, {warn_count} 个警告");
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}
