use super::patterns::Patterns;
use super::quoting::IdentifierQuoting;
use super::type_registry::{TypeKind, TypeRegistry};
use super::types::{ColumnSpec, ColumnType, ComputedSpec, TypeArg};
use super::warning::{ReflectionWarning, record};
use regex::Captures;

fn group<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

/// 解析一行列定义
///
/// 完整语法失败时退回宽松语法并标记为 degraded；两者都失败时记录警告并跳过该行。
pub(crate) fn parse_column(
    patterns: &Patterns,
    quoting: &IdentifierQuoting,
    registry: &TypeRegistry,
    line: &str,
    warnings: &mut Vec<ReflectionWarning>,
) -> Option<ColumnSpec> {
    let (caps, full) = match patterns.column.captures(line) {
        Some(caps) => (caps, true),
        None => match patterns.column_loose.captures(line) {
            Some(caps) => (caps, false),
            None => {
                record(
                    warnings,
                    ReflectionWarning::UnknownColumnDefinition {
                        line: line.to_string(),
                    },
                );
                return None;
            }
        },
    };

    if !full {
        record(
            warnings,
            ReflectionWarning::IncompleteColumnReflection {
                line: line.to_string(),
            },
        );
    }

    let name = quoting.unescape_identifier(group(&caps, "name").unwrap_or_default());
    let type_name = group(&caps, "coltype").unwrap_or_default();

    let kind = match registry.resolve(type_name) {
        Some(kind) => kind,
        None => {
            record(
                warnings,
                ReflectionWarning::UnrecognizedType {
                    column: name.clone(),
                    type_name: type_name.to_string(),
                },
            );
            TypeKind::Null
        }
    };

    let mut column_type = ColumnType::new(type_name.to_lowercase(), kind);
    let mut type_args = patterns.parse_type_args(group(&caps, "arg"));

    if kind.is_fractional_time() {
        if let Some(TypeArg::Int(fsp)) = type_args.first() {
            column_type.fsp = Some(*fsp);
            type_args.remove(0);
        }
    }

    column_type.unsigned = group(&caps, "unsigned").is_some();
    column_type.zerofill = group(&caps, "zerofill").is_some();
    column_type.charset = group(&caps, "charset").map(str::to_string);
    column_type.collation = group(&caps, "collate").map(str::to_string);

    if kind.is_enumerated() {
        type_args = strip_values(type_args);

        if kind.is_set()
            && type_args
                .iter()
                .any(|arg| matches!(arg, TypeArg::Str(v) if v.is_empty()))
        {
            column_type.retrieve_as_bitwise = true;
        }
    }
    column_type.args = type_args;

    // TIMESTAMP 列这里可能是单独的 "NULL"，此时仍然可空
    let nullable = !group(&caps, "notnull").is_some_and(|n| n.eq_ignore_ascii_case("NOT NULL"));

    let autoincrement = if group(&caps, "autoincr").is_some() {
        Some(true)
    } else if kind.is_integer() {
        Some(false)
    } else {
        None
    };

    let default = group(&caps, "default")
        .filter(|d| !d.eq_ignore_ascii_case("NULL"))
        .map(str::to_string);

    let comment = group(&caps, "comment").map(|c| c.replace("\\\\", "\\").replace("''", "'"));

    let computed = group(&caps, "generated").map(|sqltext| ComputedSpec {
        sqltext: sqltext.to_string(),
        persisted: group(&caps, "persistence").map(|p| p.eq_ignore_ascii_case("STORED")),
    });

    Some(ColumnSpec {
        name,
        column_type,
        nullable,
        autoincrement,
        default,
        comment,
        computed,
        column_format: group(&caps, "colfmt").map(str::to_string),
        storage: group(&caps, "storage").map(str::to_string),
        extra: group(&caps, "extra")
            .map(|e| e.trim_end_matches(','))
            .filter(|e| !e.is_empty())
            .map(str::to_string),
        degraded: !full,
    })
}

/// 去掉 ENUM/SET 取值两侧的引号，并还原内部重复的引号
fn strip_values(values: Vec<TypeArg>) -> Vec<TypeArg> {
    values
        .into_iter()
        .map(|arg| match arg {
            TypeArg::Str(value) => TypeArg::Str(strip_value(&value)),
            other => other,
        })
        .collect()
}

fn strip_value(value: &str) -> String {
    let quote = match value.chars().next() {
        Some(q @ ('\'' | '"')) => q,
        _ => return value.to_string(),
    };

    let inner = value
        .strip_prefix(quote)
        .and_then(|v| v.strip_suffix(quote))
        .unwrap_or("");
    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}
