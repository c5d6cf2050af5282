use anyhow::{Context, Result};
use reflect_core::config::ReflectConfig;
use reflect_core::reflection::{IdentifierQuoting, TableDefinitionParser};
use std::path::Path;
use tracing::debug;

use crate::cli::Commands;
use crate::commands;

/// 已加载配置并编译好解析器的 CLI 应用
pub struct CliApp {
    pub config: ReflectConfig,
    pub parser: TableDefinitionParser,
}

impl CliApp {
    /// 指定了配置文件路径时只读取该文件，否则按默认顺序查找
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ReflectConfig::load_from_file(path)
                .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
            None => ReflectConfig::find_and_load_config().context("加载配置文件失败")?,
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ReflectConfig) -> Result<Self> {
        let parser = config.build_parser().context("初始化解析器失败")?;
        debug!(
            "解析器已就绪: dialect={}, 引号={}{}, 已注册 {} 个类型",
            parser.dialect(),
            parser.quoting().initial_quote(),
            parser.quoting().final_quote(),
            parser.registry().len()
        );
        Ok(Self { config, parser })
    }

    /// 使用 ANSI 引号重新编译解析器，其余配置保持不变
    pub fn ansi_parser(&self) -> Result<TableDefinitionParser> {
        TableDefinitionParser::with_registry(
            self.config.dialect.clone(),
            IdentifierQuoting::ansi(),
            self.config.type_registry(),
        )
        .context("初始化 ANSI 解析器失败")
    }

    /// 未指定 --charset 时使用配置中的默认字符集
    pub fn charset<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.default_charset)
    }

    /// 运行应用命令
    pub fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Parse {
                file,
                ansi_quotes,
                output,
            } => commands::run_parse(self, file.as_deref(), ansi_quotes, &output),
            Commands::Describe {
                file,
                table,
                show_ddl,
                output,
            } => commands::run_describe(self, &file, &table, show_ddl, &output),
            Commands::InitConfig { .. } => unreachable!(), // 已经在 main.rs 中处理
        }
    }
}
