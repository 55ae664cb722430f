use crate::error::{Result, TokenError};
use crate::format::FormatterRegistry;
use crate::naming::NameCase;
use crate::types::TokenType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 生成 Tailwind 片段的 token 类型（固定 14 种）
///
/// 新增类型需要显式加入此列表。
pub static TAILWIND_TYPES: &[TokenType] = &[
    TokenType::Spacing,
    TokenType::Sizing,
    TokenType::BorderRadius,
    TokenType::BorderWidth,
    TokenType::Color,
    TokenType::Opacity,
    TokenType::FontFamilies,
    TokenType::LineHeights,
    TokenType::LetterSpacing,
    TokenType::ParagraphSpacing,
    TokenType::FontWeights,
    TokenType::FontSizes,
    TokenType::TextCase,
    TokenType::TextDecoration,
];

/// 四类 token 文件的 glob 模式（相对于项目根目录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Patterns {
    /// 只参与引用解析、不单独输出的文件
    pub config: String,
    pub source: String,
    pub themes: String,
    pub semantic: String,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            config: "tokens/config/**/*.json".to_string(),
            source: "tokens/source/**/*.json".to_string(),
            themes: "tokens/themes/**/*.json".to_string(),
            semantic: "tokens/semantic/**/*.json".to_string(),
        }
    }
}

/// 字面量格式化策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormattingMode {
    /// 规范化设计工具导出的写法
    #[default]
    Standard,
    /// 全部原样输出
    Identity,
}

impl FormattingMode {
    pub fn registry(self) -> FormatterRegistry {
        match self {
            FormattingMode::Standard => FormatterRegistry::standard(),
            FormattingMode::Identity => FormatterRegistry::identity(),
        }
    }
}

/// 构建配置
///
/// 启动时构建一次，之后只读。JSON 配置文件中所有字段都可省略：
/// ```json
/// {
///   "patterns": { "source": "design/source/*.json" },
///   "buildPath": "dist/css",
///   "rootTheme": "root",
///   "nameCase": "kebab"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    pub patterns: Patterns,
    /// 输出目录（相对于项目根目录）
    pub build_path: PathBuf,
    /// 根主题的文件名（不含扩展名）。未设置时使用文档中的 `"$root": true` 标记
    pub root_theme: Option<String>,
    /// 根主题输出文件名
    pub root_theme_output: String,
    pub name_case: NameCase,
    pub formatting: FormattingMode,
    /// 是否生成 Tailwind 片段
    pub tailwind: bool,
    /// typography 类文件的输出位置（相对于 build_path）
    pub typography_output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            patterns: Patterns::default(),
            build_path: PathBuf::from("build/css"),
            root_theme: None,
            root_theme_output: "dark".to_string(),
            name_case: NameCase::default(),
            formatting: FormattingMode::default(),
            tailwind: true,
            typography_output: PathBuf::from("source/typography-classes.css"),
        }
    }
}

impl BuildConfig {
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: BuildConfig =
            serde_json::from_str(json_str).map_err(|e| TokenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TokenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.root_theme_output.trim().is_empty() {
            return Err(TokenError::Config(
                "rootThemeOutput must not be empty".to_string(),
            ));
        }
        if self.typography_output.is_absolute() || self.build_path.as_os_str().is_empty() {
            return Err(TokenError::Config(
                "buildPath must be set and typographyOutput must be relative".to_string(),
            ));
        }
        Ok(())
    }
}
