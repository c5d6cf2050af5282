use super::patterns::Patterns;
use super::quoting::IdentifierQuoting;
use super::types::{
    CheckConstraintSpec, ForeignKeySpec, KeyKind, KeySpec, ReferencedTable, ReferentialAction,
};
use regex::Captures;

/// 非列行的解析结果
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Constraint {
    Key(KeySpec),
    ForeignKey(ForeignKeySpec),
    Check(CheckConstraintSpec),
    /// PARTITION / SUBPARTITION，原文保留
    Partition(String),
}

fn owned(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

/// 依次尝试 KEY、外键、CHECK、分区规则，全部失败返回 None
pub(crate) fn parse_constraint(
    patterns: &Patterns,
    quoting: &IdentifierQuoting,
    line: &str,
) -> Option<Constraint> {
    if let Some(caps) = patterns.key.captures(line) {
        return Some(Constraint::Key(build_key(patterns, quoting, &caps)));
    }

    if let Some(caps) = patterns.fk_constraint.captures(line) {
        return Some(Constraint::ForeignKey(build_foreign_key(
            patterns, quoting, &caps,
        )));
    }

    if let Some(caps) = patterns.ck_constraint.captures(line) {
        return Some(Constraint::Check(CheckConstraintSpec {
            name: quoting.unescape_identifier(&caps["name"]),
            sqltext: caps["sqltext"].to_string(),
        }));
    }

    if patterns.partition.is_match(line) {
        return Some(Constraint::Partition(line.to_string()));
    }

    None
}

fn build_key(patterns: &Patterns, quoting: &IdentifierQuoting, caps: &Captures<'_>) -> KeySpec {
    let columns = patterns.parse_keyexprs(quoting, &caps["columns"]);
    let version_sql = owned(caps, "version_sql");

    // 版本注释里的 WITH PARSER 优先于直接写出的
    let hidden_parser = version_sql.as_deref().and_then(|sql| {
        patterns
            .key_version_sql
            .captures(sql)
            .and_then(|m| owned(&m, "parser"))
    });
    let parser = hidden_parser
        .or_else(|| owned(caps, "parser"))
        .and_then(|p| quoting.unformat_identifiers(&p).into_iter().next());

    KeySpec {
        kind: caps.name("type").map(|m| KeyKind::parse(m.as_str())),
        name: caps
            .name("name")
            .map(|m| quoting.unescape_identifier(m.as_str())),
        using_pre: owned(caps, "using_pre"),
        using_post: owned(caps, "using_post"),
        columns,
        key_block_size: owned(caps, "keyblock"),
        parser,
        comment: caps.name("comment").map(|m| unquote_comment(m.as_str())),
        version_sql,
    }
}

fn build_foreign_key(
    patterns: &Patterns,
    quoting: &IdentifierQuoting,
    caps: &Captures<'_>,
) -> ForeignKeySpec {
    let mut parts = quoting.unformat_identifiers(&caps["table"]);
    let name = parts.pop().unwrap_or_default();
    let table = ReferencedTable {
        schema: parts.pop(),
        name,
    };

    // 外键列表里的长度和方向没有意义，只保留列名
    let column_names = |text: &str| {
        patterns
            .parse_keyexprs(quoting, text)
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
    };

    ForeignKeySpec {
        name: quoting.unescape_identifier(&caps["name"]),
        local: column_names(&caps["local"]),
        table,
        foreign: column_names(&caps["foreign"]),
        match_mode: owned(caps, "match"),
        on_delete: caps
            .name("ondelete")
            .and_then(|m| ReferentialAction::parse(m.as_str())),
        on_update: caps
            .name("onupdate")
            .and_then(|m| ReferentialAction::parse(m.as_str())),
    }
}

/// `'a'` / `'it''s'` => 去掉外层引号并还原重复引号
fn unquote_comment(raw: &str) -> String {
    let inner = raw
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(raw);
    inner.replace("''", "'")
}
