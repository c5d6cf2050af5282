mod column;
mod constraint;
mod describe;
mod options;
mod parser;
mod patterns;
mod quoting;
mod type_registry;
mod types;
mod warning;

#[cfg(test)]
mod tests;

// 重新导出公共接口
pub use describe::parse_describe_rows;
pub use parser::{LineKind, ReflectedStateBuilder, TableDefinitionParser};
pub use quoting::IdentifierQuoting;
pub use type_registry::{TypeKind, TypeRegistry};
pub use types::{
    CheckConstraintSpec, ColumnSpec, ColumnType, ComputedSpec, DescribeRow, ForeignKeySpec,
    KeyColumn, KeyKind, KeySpec, ReferencedTable, ReferentialAction, ReflectedState, TypeArg,
};
pub use warning::ReflectionWarning;
