use super::emit_report;
use crate::app::CliApp;
use crate::cli::OutputArgs;
use crate::utils::read_input;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// 解析 SHOW CREATE TABLE 输出并打印结果
pub fn run_parse(
    app: &CliApp,
    file: Option<&Path>,
    ansi_quotes: bool,
    output: &OutputArgs,
) -> Result<()> {
    let show_create = read_input(file)?;

    let ansi_parser;
    let parser = if ansi_quotes {
        ansi_parser = app.ansi_parser()?;
        &ansi_parser
    } else {
        &app.parser
    };

    let mut warnings = Vec::new();
    let state = parser.parse(
        &show_create,
        app.charset(output.charset.as_deref()),
        &mut warnings,
    );

    if !warnings.is_empty() {
        info!("⚠️ 共 {} 条警告", warnings.len());
    }

    emit_report(&state, &warnings, output)
}
