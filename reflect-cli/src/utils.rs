use anyhow::{Context, Result};
use reflect_core::constants::logging::LOG_FILE_ENV;
use std::io::Read;
use std::path::Path;

/// # 日志系统说明
///
/// 库代码只使用 `tracing` 宏，日志配置由 `main.rs` 调用 `setup_logging()` 完成。
/// 标准输出只留给 JSON 结果，日志一律写到标准错误或文件。
///
/// - `-v, --verbose`：DEBUG 级别，会打印每一行的分类结果
/// - `RUST_LOG`：优先于 `--verbose`
/// - `REFLECT_LOG_FILE`：日志追加写入该文件而非终端
///
/// ```bash
/// RUST_LOG=reflect_core::reflection=debug reflect-cli parse users.sql
/// REFLECT_LOG_FILE=reflect.log reflect-cli -v parse users.sql
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("无法打开日志文件 {path}: {e}，改为输出到终端");
                None
            }
        }
    });

    if let Some(file) = log_file {
        // 输出到文件 - 使用详细格式便于调试
        fmt()
            .with_env_filter(env_filter)
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true)
            .with_line_number(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .init();
    }
}

/// 读取输入文本，`None` 或 `-` 表示标准输入
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("读取输入文件失败: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("读取标准输入失败")?;
            Ok(buffer)
        }
    }
}
