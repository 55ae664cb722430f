use std::fmt;
use std::path::PathBuf;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `css/variables`
    CssVariables,
    /// `tw/css-variables`
    TailwindVariables,
    /// `css/typographyClasses`
    TypographyClasses,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::CssVariables => "css/variables",
            Format::TailwindVariables => "tw/css-variables",
            Format::TypographyClasses => "css/typographyClasses",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 渲染完成、等待写入的输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// 相对于 build_path 的路径
    pub destination: PathBuf,
    pub format: Format,
    pub contents: String,
}

impl Artifact {
    pub fn new(destination: impl Into<PathBuf>, format: Format, contents: String) -> Self {
        Self {
            destination: destination.into(),
            format,
            contents,
        }
    }

    /// 内容摘要，用于跳过未变化的文件和 `--check`
    pub fn digest(&self) -> blake3::Hash {
        blake3::hash(self.contents.as_bytes())
    }
}
