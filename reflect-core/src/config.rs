use crate::constants::{config, dialect};
use crate::error::{ReflectError, Result};
use crate::reflection::{IdentifierQuoting, TableDefinitionParser, TypeKind, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 解析器配置
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReflectConfig {
    /// 方言名称，用作表选项键的前缀
    pub dialect: String,
    /// 未指定 --charset 时使用的字符集
    pub default_charset: String,
    pub quoting: QuotingConfig,
    /// 追加到内置 MySQL 类型表的类型：类型名 => 类型族
    pub types: BTreeMap<String, TypeKind>,
}

/// 标识符引号风格
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    Backtick,
    Ansi,
    Custom,
}

/// 标识符引号配置，`custom` 时三个记号必须全部给出
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuotingConfig {
    pub style: QuoteStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    #[serde(default, rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escaped_final: Option<String>,
}

impl Default for QuotingConfig {
    fn default() -> Self {
        Self {
            style: QuoteStyle::Backtick,
            initial: None,
            final_quote: None,
            escaped_final: None,
        }
    }
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            dialect: dialect::DEFAULT_DIALECT_NAME.to_string(),
            default_charset: dialect::DEFAULT_CHARSET.to_string(),
            quoting: QuotingConfig::default(),
            types: BTreeMap::new(),
        }
    }
}

const CONFIG_HEADER: &str = "\
# reflect-cli 配置文件
#
# dialect         表选项键的前缀，例如 mysql_engine
# default_charset 未指定 --charset 时使用的字符集
# [quoting]       style = \"backtick\" | \"ansi\" | \"custom\"
#                 custom 时需要 initial / final / escaped_final
# [types]         额外的类型名 => 类型族，例如 serial = \"integer\"

";

impl ReflectConfig {
    /// 按优先级查找配置文件：reflect.toml -> .reflect.toml，都不存在时使用默认配置
    pub fn find_and_load_config() -> Result<Self> {
        for config_file in config::CONFIG_FILE_CANDIDATES {
            if Path::new(config_file).exists() {
                tracing::info!("找到配置文件: {}", config_file);
                return Self::load_from_file(config_file);
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReflectConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = format!("{CONFIG_HEADER}{}", toml::to_string_pretty(self)?);
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn identifier_quoting(&self) -> Result<IdentifierQuoting> {
        match self.quoting.style {
            QuoteStyle::Backtick => Ok(IdentifierQuoting::backtick()),
            QuoteStyle::Ansi => Ok(IdentifierQuoting::ansi()),
            QuoteStyle::Custom => {
                let (Some(initial), Some(final_quote), Some(escaped)) = (
                    &self.quoting.initial,
                    &self.quoting.final_quote,
                    &self.quoting.escaped_final,
                ) else {
                    return Err(ReflectError::invalid_quoting(
                        "custom 风格需要同时配置 initial、final 和 escaped_final",
                    ));
                };
                IdentifierQuoting::new(initial.as_str(), final_quote.as_str(), escaped.as_str())
            }
        }
    }

    pub fn type_registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::mysql();
        for (name, kind) in &self.types {
            registry.register(name, *kind);
        }
        registry
    }

    /// 按配置编译解析器
    pub fn build_parser(&self) -> Result<TableDefinitionParser> {
        TableDefinitionParser::with_registry(
            self.dialect.clone(),
            self.identifier_quoting()?,
            self.type_registry(),
        )
    }
}
