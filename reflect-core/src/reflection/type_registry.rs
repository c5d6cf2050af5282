use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 列类型所属的类型族
///
/// 列构建器只关心少数几个族（整数、带小数秒精度的时间、ENUM/SET），
/// 其余变体用于让调用方区分类型的大类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Integer,
    Numeric,
    Float,
    Bit,
    Boolean,
    String,
    Text,
    Binary,
    Blob,
    Date,
    DateTime,
    Time,
    Timestamp,
    Year,
    Enum,
    Set,
    Json,
    Spatial,
    /// 未识别的类型
    Null,
}

impl TypeKind {
    /// DATETIME / TIME / TIMESTAMP：第一个位置参数是小数秒精度
    pub fn is_fractional_time(self) -> bool {
        matches!(self, TypeKind::DateTime | TypeKind::Time | TypeKind::Timestamp)
    }

    pub fn is_enumerated(self) -> bool {
        matches!(self, TypeKind::Enum | TypeKind::Set)
    }

    pub fn is_set(self) -> bool {
        self == TypeKind::Set
    }

    pub fn is_integer(self) -> bool {
        self == TypeKind::Integer
    }
}

/// MySQL 内置类型名到类型族的映射
const MYSQL_TYPES: &[(&str, TypeKind)] = &[
    ("bigint", TypeKind::Integer),
    ("binary", TypeKind::Binary),
    ("bit", TypeKind::Bit),
    ("blob", TypeKind::Blob),
    ("boolean", TypeKind::Boolean),
    ("char", TypeKind::String),
    ("date", TypeKind::Date),
    ("datetime", TypeKind::DateTime),
    ("decimal", TypeKind::Numeric),
    ("double", TypeKind::Float),
    ("enum", TypeKind::Enum),
    ("fixed", TypeKind::Numeric),
    ("float", TypeKind::Float),
    ("int", TypeKind::Integer),
    ("integer", TypeKind::Integer),
    ("json", TypeKind::Json),
    ("longblob", TypeKind::Blob),
    ("longtext", TypeKind::Text),
    ("mediumblob", TypeKind::Blob),
    ("mediumint", TypeKind::Integer),
    ("mediumtext", TypeKind::Text),
    ("nchar", TypeKind::String),
    ("nvarchar", TypeKind::String),
    ("numeric", TypeKind::Numeric),
    ("set", TypeKind::Set),
    ("smallint", TypeKind::Integer),
    ("text", TypeKind::Text),
    ("time", TypeKind::Time),
    ("timestamp", TypeKind::Timestamp),
    ("tinyblob", TypeKind::Blob),
    ("tinyint", TypeKind::Integer),
    ("tinytext", TypeKind::Text),
    ("varbinary", TypeKind::Binary),
    ("varchar", TypeKind::String),
    ("year", TypeKind::Year),
    ("geometry", TypeKind::Spatial),
    ("point", TypeKind::Spatial),
    ("linestring", TypeKind::Spatial),
    ("polygon", TypeKind::Spatial),
    ("multipoint", TypeKind::Spatial),
    ("multilinestring", TypeKind::Spatial),
    ("multipolygon", TypeKind::Spatial),
    ("geometrycollection", TypeKind::Spatial),
];

/// 类型注册表：类型名（不区分大小写）到类型族
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeKind>,
}

impl TypeRegistry {
    /// 空注册表
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// 包含全部 MySQL 内置类型的注册表
    pub fn mysql() -> Self {
        let mut registry = Self::empty();
        for (name, kind) in MYSQL_TYPES {
            registry.register(name, *kind);
        }
        registry
    }

    /// 注册或覆盖一个类型名
    pub fn register(&mut self, name: &str, kind: TypeKind) {
        self.types.insert(name.to_lowercase(), kind);
    }

    pub fn resolve(&self, name: &str) -> Option<TypeKind> {
        self.types.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::mysql()
    }
}
