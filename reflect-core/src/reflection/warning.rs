use serde::Serialize;
use thiserror::Error;

/// 解析过程中的非致命异常
///
/// 出现这些情况时解析会继续，调用方自行决定是否视为失败。
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReflectionWarning {
    #[error("未知的表结构内容: {line:?}")]
    UnknownSchemaContent { line: String },

    #[error("未知的列定义: {line:?}")]
    UnknownColumnDefinition { line: String },

    #[error("列定义反射不完整: {line:?}")]
    IncompleteColumnReflection { line: String },

    #[error("无法识别列 '{column}' 的类型 '{type_name}'")]
    UnrecognizedType { column: String, type_name: String },
}

impl ReflectionWarning {
    /// 触发该警告的原始行（类型警告返回 None）
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::UnknownSchemaContent { line }
            | Self::UnknownColumnDefinition { line }
            | Self::IncompleteColumnReflection { line } => Some(line),
            Self::UnrecognizedType { .. } => None,
        }
    }
}

/// 记录警告，并同步输出到 tracing
pub(crate) fn record(warnings: &mut Vec<ReflectionWarning>, warning: ReflectionWarning) {
    tracing::warn!("{}", warning);
    warnings.push(warning);
}
