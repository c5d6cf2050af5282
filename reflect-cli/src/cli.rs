use crate::project_info::{metadata, version_info};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reflect CLI - SHOW CREATE TABLE 解析工具
#[derive(Parser, Debug)]
#[command(name = "reflect-cli")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径（不指定时依次查找 reflect.toml、.reflect.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 输出相关的公共参数
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// 连接字符集，写入结果的 charset 字段
    #[arg(long)]
    pub charset: Option<String>,

    /// 存在任何警告时以非零状态退出
    #[arg(long)]
    pub strict: bool,

    /// 格式化 JSON 输出
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 解析 SHOW CREATE TABLE 输出
    Parse {
        /// 输入文件，省略或为 "-" 时读取标准输入
        file: Option<PathBuf>,

        /// 使用 ANSI 双引号标识符，覆盖配置文件中的 quoting
        #[arg(long)]
        ansi_quotes: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// 将制表符分隔的 DESCRIBE 输出转换为表定义
    Describe {
        /// DESCRIBE 输出文件，"-" 表示标准输入
        file: PathBuf,

        /// 表（或视图）名称
        #[arg(long)]
        table: String,

        /// 只打印生成的 CREATE TABLE 文本，不解析
        #[arg(long)]
        show_ddl: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// 生成带注释的默认配置文件
    InitConfig {
        /// 如果配置文件已存在，强制覆盖
        #[arg(long)]
        force: bool,
    },
}
