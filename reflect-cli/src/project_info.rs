/// reflect-cli 项目信息模块
///
/// reflect-cli 是面向用户的入口，项目元数据统一在这里定义，
/// reflect-core 只提供技术性常量

/// 项目元数据（自动从 reflect-cli 的 Cargo.toml 同步）
pub mod metadata {
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 用户友好的显示名称（手动维护）
    pub mod display {
        pub const FRIENDLY_NAME: &str = "Reflect CLI";

        /// 比 Cargo.toml 中的描述更详细
        pub const DESCRIPTION_LONG: &str = "读取 MySQL 的 SHOW CREATE TABLE 输出（或 DESCRIBE 输出），解析出列、索引、外键、CHECK 约束、分区和表选项，以 JSON 形式输出";
    }
}

/// 版本信息
pub mod version_info {
    /// CLI 版本（自动从 Cargo.toml 同步）
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// 核心库版本（从 reflect-core 获取）
    pub const CORE_VERSION: &str = reflect_core::constants::version::CORE_VERSION;
}

/// 获取版本信息字符串
pub fn get_version_string() -> String {
    format!(
        "{} v{} (core v{})",
        metadata::display::FRIENDLY_NAME,
        version_info::CLI_VERSION,
        version_info::CORE_VERSION
    )
}
