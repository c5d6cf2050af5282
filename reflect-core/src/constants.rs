/// 方言相关常量
pub mod dialect {
    /// 默认方言名称，用作表选项键的前缀
    pub const DEFAULT_DIALECT_NAME: &str = "mysql";

    /// 默认字符集（调用方未显式提供时使用）
    pub const DEFAULT_CHARSET: &str = "utf8mb4";
}

/// 配置文件相关常量
pub mod config {
    /// 默认配置文件名
    pub const DEFAULT_CONFIG_FILE: &str = "reflect.toml";

    /// 按优先级查找的配置文件列表
    pub const CONFIG_FILE_CANDIDATES: &[&str] = &["reflect.toml", ".reflect.toml"];
}

/// 日志相关常量
pub mod logging {
    /// 设置后日志写入该文件而非终端
    pub const LOG_FILE_ENV: &str = "REFLECT_LOG_FILE";
}

/// 表选项指令
///
/// 注册顺序即匹配顺序：字符串值先行，因为引号内的内容可能干扰后面的匹配。
pub mod table_options {
    /// 值为单引号字符串的指令
    pub const STRING_DIRECTIVES: &[&str] = &[
        "COMMENT",
        "DATA DIRECTORY",
        "INDEX DIRECTORY",
        "PASSWORD",
        "CONNECTION",
    ];

    /// 值为单个单词的指令
    pub const WORD_DIRECTIVES: &[&str] = &[
        "ENGINE",
        "TYPE",
        "AUTO_INCREMENT",
        "AVG_ROW_LENGTH",
        "CHARACTER SET",
        "DEFAULT CHARSET",
        "CHECKSUM",
        "COLLATE",
        "DELAY_KEY_WRITE",
        "INSERT_METHOD",
        "MAX_ROWS",
        "MIN_ROWS",
        "PACK_KEYS",
        "ROW_FORMAT",
        "KEY_BLOCK_SIZE",
    ];

    /// 值需要自定义正则的指令: (指令, 值的正则)
    pub const REGEX_DIRECTIVES: &[(&str, &str)] = &[
        ("UNION", r"\([^\)]+\)"),
        ("TABLESPACE", r".*? STORAGE DISK"),
        (
            "RAID_TYPE",
            r"\w+\s+RAID_CHUNKS\s*\=\s*\w+RAID_CHUNKSIZE\s*=\s*\w+",
        ),
    ];

    /// 不作为通用表选项保留的指令（小写）
    pub const DISCARDED: &[&str] = &["auto_increment", "data directory", "index directory"];
}

/// 版本信息
pub mod version {
    /// 核心库版本（自动从 Cargo.toml 同步）
    pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
