use super::emit_report;
use crate::app::CliApp;
use crate::cli::OutputArgs;
use crate::utils::read_input;
use anyhow::{Context, Result};
use reflect_core::reflection::parse_describe_rows;
use std::path::Path;
use tracing::info;

/// 将 DESCRIBE 输出合成为 CREATE TABLE 后再解析
pub fn run_describe(
    app: &CliApp,
    file: &Path,
    table: &str,
    show_ddl: bool,
    output: &OutputArgs,
) -> Result<()> {
    let text = read_input(Some(file))?;
    let rows = parse_describe_rows(&text).context("解析 DESCRIBE 输出失败")?;
    info!("读取到 {} 行 DESCRIBE 结果", rows.len());

    let ddl = app.parser.describe_to_create(table, &rows);
    if show_ddl {
        println!("{ddl}");
        return Ok(());
    }

    let mut warnings = Vec::new();
    let state = app.parser.parse(
        &ddl,
        app.charset(output.charset.as_deref()),
        &mut warnings,
    );

    emit_report(&state, &warnings, output)
}
