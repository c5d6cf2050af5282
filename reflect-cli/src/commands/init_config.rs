use anyhow::{Context, Result, bail};
use reflect_core::config::ReflectConfig;
use reflect_core::constants::config::DEFAULT_CONFIG_FILE;
use std::path::{Path, PathBuf};
use tracing::info;

/// 生成默认配置文件
///
/// 未指定路径时写入当前目录的 reflect.toml。
pub fn run_init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        bail!(
            "配置文件 '{}' 已存在，使用 --force 覆盖",
            path.display()
        );
    }

    ReflectConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("写入配置文件失败: {}", path.display()))?;

    info!("✅ 已生成配置文件: {}", path.display());
    Ok(path)
}
