use super::type_registry::TypeKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// 类型的位置参数，例如 `varchar(32)` 的 32 或 `enum('a','b')` 的 'a'
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeArg {
    Int(u64),
    Str(String),
}

/// 解析后的列类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnType {
    /// 小写类型名，未识别时保留原始记号
    pub name: String,
    pub kind: TypeKind,
    pub args: Vec<TypeArg>,
    pub unsigned: bool,
    pub zerofill: bool,
    pub charset: Option<String>,
    pub collation: Option<String>,
    /// 小数秒精度
    pub fsp: Option<u64>,
    pub retrieve_as_bitwise: bool,
}

impl ColumnType {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            args: Vec::new(),
            unsigned: false,
            zerofill: false,
            charset: None,
            collation: None,
            fsp: None,
            retrieve_as_bitwise: false,
        }
    }
}

/// 生成列定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedSpec {
    pub sqltext: String,
    /// STORED 为 true，VIRTUAL 为 false，未声明时为 None
    pub persisted: Option<bool>,
}

/// 表列定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// 三态：显式 AUTO_INCREMENT、整数列未声明、非整数列未声明
    pub autoincrement: Option<bool>,
    pub default: Option<String>,
    pub comment: Option<String>,
    pub computed: Option<ComputedSpec>,
    pub column_format: Option<String>,
    pub storage: Option<String>,
    pub extra: Option<String>,
    /// 使用宽松语法匹配，部分信息可能丢失
    pub degraded: bool,
}

/// 索引列：列名、前缀长度、排序方向
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyColumn {
    pub name: String,
    pub length: Option<u64>,
    pub direction: Option<String>,
}

/// 索引类型前缀，未知的前缀按大写原样保留
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyKind {
    Primary,
    Unique,
    Fulltext,
    Spatial,
    Other(String),
}

impl KeyKind {
    pub fn parse(token: &str) -> Self {
        let upper = token.to_uppercase();
        match upper.as_str() {
            "PRIMARY" => Self::Primary,
            "UNIQUE" => Self::Unique,
            "FULLTEXT" => Self::Fulltext,
            "SPATIAL" => Self::Spatial,
            _ => Self::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Unique => "UNIQUE",
            Self::Fulltext => "FULLTEXT",
            Self::Spatial => "SPATIAL",
            Self::Other(token) => token,
        }
    }
}

impl Serialize for KeyKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 表索引定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySpec {
    /// 普通索引为 None
    pub kind: Option<KeyKind>,
    pub name: Option<String>,
    pub using_pre: Option<String>,
    pub using_post: Option<String>,
    pub columns: Vec<KeyColumn>,
    pub key_block_size: Option<String>,
    pub parser: Option<String>,
    pub comment: Option<String>,
    pub version_sql: Option<String>,
}

/// 外键动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferentialAction {
    #[serde(rename = "RESTRICT")]
    Restrict,
    #[serde(rename = "CASCADE")]
    Cascade,
    #[serde(rename = "SET NULL")]
    SetNull,
    #[serde(rename = "NO ACTION")]
    NoAction,
}

impl ReferentialAction {
    /// 只接受四种动作，大小写不敏感，空白按单个空格处理
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        match normalized.as_str() {
            "RESTRICT" => Some(Self::Restrict),
            "CASCADE" => Some(Self::Cascade),
            "SET NULL" => Some(Self::SetNull),
            "NO ACTION" => Some(Self::NoAction),
            _ => None,
        }
    }
}

/// 外键引用的表，schema 可选
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferencedTable {
    pub schema: Option<String>,
    pub name: String,
}

/// 外键约束定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeySpec {
    pub name: String,
    pub local: Vec<String>,
    pub table: ReferencedTable,
    pub foreign: Vec<String>,
    pub match_mode: Option<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

/// CHECK 约束定义，表达式不做进一步解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckConstraintSpec {
    pub name: String,
    pub sqltext: String,
}

/// 一次 SHOW CREATE TABLE 解析的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReflectedState {
    pub table_name: Option<String>,
    pub charset: String,
    pub columns: Vec<ColumnSpec>,
    pub table_options: BTreeMap<String, String>,
    pub keys: Vec<KeySpec>,
    pub fk_constraints: Vec<ForeignKeySpec>,
    pub ck_constraints: Vec<CheckConstraintSpec>,
    /// PARTITION / SUBPARTITION 行原文，不做结构化解析
    pub partitions: Vec<String>,
}

impl ReflectedState {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Option<&KeySpec> {
        self.keys
            .iter()
            .find(|k| k.kind == Some(KeyKind::Primary))
    }
}

/// DESCRIBE / SHOW COLUMNS 的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRow {
    pub name: String,
    pub col_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    pub extra: Option<String>,
}
