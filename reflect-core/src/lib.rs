pub mod config;
pub mod constants;
pub mod error;
pub mod reflection;

pub use error::{ReflectError, Result};
pub use reflection::{ReflectedState, ReflectionWarning, TableDefinitionParser};
