use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReflectError>;

#[derive(Error, Debug)]
pub enum ReflectError {
    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("正则表达式编译失败: {0}")]
    Pattern(#[from] regex::Error),

    #[error("标识符引号配置无效: {0}")]
    InvalidQuoting(String),

    #[error("DESCRIBE 行格式无效: {0}")]
    DescribeRow(String),
}

impl ReflectError {
    pub fn invalid_quoting(msg: impl Into<String>) -> Self {
        Self::InvalidQuoting(msg.into())
    }

    pub fn describe_row(msg: impl Into<String>) -> Self {
        Self::DescribeRow(msg.into())
    }
}
