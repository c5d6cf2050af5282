pub mod describe;
pub mod init_config;
pub mod parse;

pub use describe::run_describe;
pub use init_config::run_init_config;
pub use parse::run_parse;

use crate::cli::OutputArgs;
use anyhow::{Result, bail};
use reflect_core::{ReflectedState, ReflectionWarning};
use serde::Serialize;

/// 命令输出：解析结果加上过程中收集的警告
#[derive(Debug, Serialize)]
pub struct ParseReport<'a> {
    pub table: &'a ReflectedState,
    pub warnings: &'a [ReflectionWarning],
}

/// 打印 JSON 结果；`--strict` 时有警告则返回错误
pub(crate) fn emit_report(
    state: &ReflectedState,
    warnings: &[ReflectionWarning],
    output: &OutputArgs,
) -> Result<()> {
    let report = ParseReport {
        table: state,
        warnings,
    };

    let json = if output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    if output.strict && !warnings.is_empty() {
        bail!("解析产生了 {} 条警告（--strict）", warnings.len());
    }
    Ok(())
}
