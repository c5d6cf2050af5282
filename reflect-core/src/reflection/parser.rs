use super::column::parse_column;
use super::constraint::{Constraint, parse_constraint};
use super::options::TableOptionScanner;
use super::patterns::Patterns;
use super::quoting::IdentifierQuoting;
use super::type_registry::TypeRegistry;
use super::types::{
    CheckConstraintSpec, ColumnSpec, ForeignKeySpec, KeySpec, ReflectedState,
};
use super::warning::{ReflectionWarning, record};
use crate::constants::dialect::DEFAULT_DIALECT_NAME;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// 行分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Column,
    TableOptions,
    /// ANSI 模式下单独的 `)`
    Terminator,
    TableName,
    Empty,
    Constraint,
}

/// 解析结果的构建器，只提供追加操作，结束时通过 `finish` 产出结果
#[derive(Debug, Default)]
pub struct ReflectedStateBuilder {
    state: ReflectedState,
}

impl ReflectedStateBuilder {
    pub fn new(charset: &str) -> Self {
        Self {
            state: ReflectedState {
                charset: charset.to_string(),
                ..Default::default()
            },
        }
    }

    /// 多个 CREATE 行时以最后一个为准
    pub fn set_table_name(&mut self, name: String) {
        if let Some(previous) = self.state.table_name.replace(name) {
            debug!("表名被后出现的 CREATE 行覆盖 (原为 {})", previous);
        }
    }

    pub fn push_column(&mut self, column: ColumnSpec) {
        self.state.columns.push(column);
    }

    pub fn extend_table_options(&mut self, dialect: &str, options: BTreeMap<String, String>) {
        for (option, value) in options {
            self.state
                .table_options
                .insert(format!("{dialect}_{option}"), value);
        }
    }

    pub fn push_key(&mut self, key: KeySpec) {
        self.state.keys.push(key);
    }

    pub fn push_fk_constraint(&mut self, fk: ForeignKeySpec) {
        self.state.fk_constraints.push(fk);
    }

    pub fn push_ck_constraint(&mut self, ck: CheckConstraintSpec) {
        self.state.ck_constraints.push(ck);
    }

    pub fn push_partition(&mut self, line: String) {
        self.state.partitions.push(line);
    }

    pub fn finish(self) -> ReflectedState {
        self.state
    }
}

/// SHOW CREATE TABLE 输出解析器
///
/// 正则在构造时按引号约定编译一次，之后只读。`parse` 不保留任何调用间状态，
/// 同一个解析器可以在多个线程里并发使用。
#[derive(Debug, Clone)]
pub struct TableDefinitionParser {
    dialect: String,
    quoting: IdentifierQuoting,
    registry: TypeRegistry,
    patterns: Patterns,
    options: TableOptionScanner,
}

impl TableDefinitionParser {
    pub fn new(dialect: impl Into<String>, quoting: IdentifierQuoting) -> Result<Self> {
        Self::with_registry(dialect, quoting, TypeRegistry::mysql())
    }

    pub fn with_registry(
        dialect: impl Into<String>,
        quoting: IdentifierQuoting,
        registry: TypeRegistry,
    ) -> Result<Self> {
        let patterns = Patterns::new(&quoting)?;
        let options = TableOptionScanner::new()?;

        Ok(Self {
            dialect: dialect.into(),
            quoting,
            registry,
            patterns,
            options,
        })
    }

    /// MySQL 方言、反引号约定
    pub fn mysql() -> Result<Self> {
        Self::new(DEFAULT_DIALECT_NAME, IdentifierQuoting::backtick())
    }

    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    pub fn quoting(&self) -> &IdentifierQuoting {
        &self.quoting
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// 判断一行属于哪种结构
    pub fn classify(&self, line: &str) -> LineKind {
        if line
            .strip_prefix("  ")
            .is_some_and(|rest| rest.starts_with(self.quoting.initial_quote()))
        {
            LineKind::Column
        } else if line.starts_with(") ") {
            LineKind::TableOptions
        } else if line == ")" {
            LineKind::Terminator
        } else if line.starts_with("CREATE ") {
            LineKind::TableName
        } else if line.is_empty() {
            // 真实的反射输出不会有空行，从文件加载时可能出现
            LineKind::Empty
        } else {
            LineKind::Constraint
        }
    }

    /// 解析 SHOW CREATE TABLE 的输出
    ///
    /// 任何一行无法识别都只会记录到 `warnings`，不会中断整个解析。
    pub fn parse(
        &self,
        show_create: &str,
        charset: &str,
        warnings: &mut Vec<ReflectionWarning>,
    ) -> ReflectedState {
        let mut builder = ReflectedStateBuilder::new(charset);

        for line in show_create.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let kind = self.classify(line);
            debug!("{:?}: {}", kind, line);

            match kind {
                LineKind::Column => {
                    if let Some(column) =
                        parse_column(&self.patterns, &self.quoting, &self.registry, line, warnings)
                    {
                        builder.push_column(column);
                    }
                }
                LineKind::TableOptions => {
                    builder.extend_table_options(&self.dialect, self.options.scan(line));
                }
                LineKind::TableName => {
                    if let Some(caps) = self.patterns.table_name.captures(line) {
                        builder.set_table_name(self.quoting.unescape_identifier(&caps["name"]));
                    }
                }
                LineKind::Terminator | LineKind::Empty => {}
                LineKind::Constraint => {
                    match parse_constraint(&self.patterns, &self.quoting, line) {
                        Some(Constraint::Key(key)) => builder.push_key(key),
                        Some(Constraint::ForeignKey(fk)) => builder.push_fk_constraint(fk),
                        Some(Constraint::Check(ck)) => builder.push_ck_constraint(ck),
                        Some(Constraint::Partition(text)) => builder.push_partition(text),
                        None => record(
                            warnings,
                            ReflectionWarning::UnknownSchemaContent {
                                line: line.to_string(),
                            },
                        ),
                    }
                }
            }
        }

        let state = builder.finish();
        info!(
            "解析表 {}: {} 列, {} 个索引, {} 个外键, {} 个 CHECK 约束",
            state.table_name.as_deref().unwrap_or("<unknown>"),
            state.columns.len(),
            state.keys.len(),
            state.fk_constraints.len(),
            state.ck_constraints.len()
        );
        state
    }
}
