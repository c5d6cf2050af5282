use super::parser::TableDefinitionParser;
use super::types::DescribeRow;
use crate::error::{ReflectError, Result};

impl TableDefinitionParser {
    /// 将 DESCRIBE 的结果格式化为最简的 SHOW CREATE TABLE 文本
    ///
    /// 只包含列定义，不包含索引。主要用于视图等只能拿到 DESCRIBE 输出的场景，
    /// 生成的文本可以直接交给 [`TableDefinitionParser::parse`]。
    pub fn describe_to_create(&self, table_name: &str, rows: &[DescribeRow]) -> String {
        let quoting = self.quoting();
        let mut buffer = Vec::with_capacity(rows.len());

        for row in rows {
            let mut line = vec![
                " ".to_string(),
                quoting.quote_identifier(&row.name),
                row.col_type.clone(),
            ];

            if !row.nullable {
                line.push("NOT NULL".to_string());
            }

            if let Some(default) = row.default.as_deref().filter(|d| !d.is_empty()) {
                if default.to_lowercase().contains("auto_increment") {
                    // 自增列没有默认值
                } else if is_timestamp_family(&row.col_type) && default.starts_with(['C', 'c']) {
                    line.push("DEFAULT".to_string());
                    line.push(default.to_string());
                } else if default == "NULL" {
                    line.push("DEFAULT".to_string());
                    line.push(default.to_string());
                } else {
                    line.push("DEFAULT".to_string());
                    line.push(format!("'{}'", default.replace('\'', "''")));
                }
            }

            if let Some(extra) = row.extra.as_deref().filter(|e| !e.is_empty()) {
                line.push(extra.to_string());
            }

            buffer.push(line.join(" "));
        }

        format!(
            "CREATE TABLE {} (\n{}\n) ",
            quoting.quote_identifier(table_name),
            buffer.join(",\n")
        )
    }
}

fn is_timestamp_family(col_type: &str) -> bool {
    let lowered = col_type.to_lowercase();
    lowered.starts_with("timestamp") || lowered.starts_with("datetime")
}

/// 解析制表符分隔的 DESCRIBE 输出（`mysql -B -e "DESCRIBE t"`）
///
/// 列依次为 Field、Type、Null、Key、Default、Extra，首行表头可有可无。
/// Default 单元格里的 `NULL` 原样保留为字面量 NULL。
pub fn parse_describe_rows(text: &str) -> Result<Vec<DescribeRow>> {
    let mut rows = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(ReflectError::describe_row(format!(
                "第 {} 行至少需要 Field、Type、Null 三列: {:?}",
                idx + 1,
                line
            )));
        }

        if fields[0].eq_ignore_ascii_case("Field") && fields[1].eq_ignore_ascii_case("Type") {
            continue;
        }

        let nullable = match fields[2].to_uppercase().as_str() {
            "YES" => true,
            "NO" => false,
            other => {
                return Err(ReflectError::describe_row(format!(
                    "第 {} 行 Null 列只能是 YES 或 NO: {:?}",
                    idx + 1,
                    other
                )));
            }
        };

        let cell = |i: usize| {
            fields
                .get(i)
                .map(|v| v.to_string())
                .filter(|v| !v.is_empty())
        };

        rows.push(DescribeRow {
            name: fields[0].to_string(),
            col_type: fields[1].to_string(),
            nullable,
            default: cell(4),
            extra: cell(5),
        });
    }

    Ok(rows)
}
