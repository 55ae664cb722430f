use std::path::{Path, PathBuf};
use swatch_core::{BuildConfig, Result};

/// 项目根目录下默认的配置文件名
pub const CONFIG_FILE: &str = "swatch.config.json";

/// 一次构建的输入：项目根目录 + 配置
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: BuildConfig,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: BuildConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// 加载项目配置
    ///
    /// 优先使用显式给出的配置文件；否则读取根目录下的 `swatch.config.json`，
    /// 不存在时使用默认配置。
    pub fn load(root: impl Into<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let root = root.into();

        let config = match config_path {
            Some(path) => BuildConfig::from_file(path)?,
            None => {
                let default_path = root.join(CONFIG_FILE);
                if default_path.is_file() {
                    BuildConfig::from_file(&default_path)?
                } else {
                    BuildConfig::default()
                }
            }
        };

        Ok(Self { root, config })
    }

    /// 输出目录
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.config.build_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use swatch_core::{NameCase, TokenError};

    #[test]
    fn test_load_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::load(dir.path(), None).unwrap();

        assert_eq!(project.config, BuildConfig::default());
        assert_eq!(project.build_dir(), dir.path().join("build/css"));
    }

    #[test]
    fn test_load_config_file_from_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "buildPath": "dist", "nameCase": "kebab" }"#,
        )
        .unwrap();

        let project = Project::load(dir.path(), None).unwrap();

        assert_eq!(project.config.name_case, NameCase::Kebab);
        assert_eq!(project.build_dir(), dir.path().join("dist"));
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = Project::load(dir.path(), Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(TokenError::Io { .. })));
    }
}
