use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use swatch_core::naming::output_name;
use swatch_core::{parse_document, Patterns, Result, TokenDocument, TokenError};

/// token 文件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 只参与引用解析
    Config,
    Source,
    Themes,
    Semantic,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Config,
        Category::Source,
        Category::Themes,
        Category::Semantic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Config => "config",
            Category::Source => "source",
            Category::Themes => "themes",
            Category::Semantic => "semantic",
        }
    }

    fn pattern(self, patterns: &Patterns) -> &str {
        match self {
            Category::Config => &patterns.config,
            Category::Source => &patterns.source,
            Category::Themes => &patterns.themes,
            Category::Semantic => &patterns.semantic,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 各类别匹配到的文件（按路径字典序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub config: Vec<PathBuf>,
    pub source: Vec<PathBuf>,
    pub themes: Vec<PathBuf>,
    pub semantic: Vec<PathBuf>,
}

impl Discovery {
    pub fn files(&self, category: Category) -> &[PathBuf] {
        match category {
            Category::Config => &self.config,
            Category::Source => &self.source,
            Category::Themes => &self.themes,
            Category::Semantic => &self.semantic,
        }
    }

    fn files_mut(&mut self, category: Category) -> &mut Vec<PathBuf> {
        match category {
            Category::Config => &mut self.config,
            Category::Source => &mut self.source,
            Category::Themes => &mut self.themes,
            Category::Semantic => &mut self.semantic,
        }
    }
}

/// 展开单个 glob 模式（相对于 root），结果排序
///
/// 没有匹配时返回空列表，不视为错误。root 中的 `[` `*` `?` 按字面量匹配。
pub fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&root.to_string_lossy());
    let full = format!("{}/{}", root.trim_end_matches('/'), pattern);

    let entries = glob::glob(&full).map_err(|e| TokenError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| TokenError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// 发现四个类别的 token 文件
pub fn discover(root: &Path, patterns: &Patterns) -> Result<Discovery> {
    let mut discovery = Discovery::default();

    for category in Category::ALL {
        let pattern = category.pattern(patterns);
        let files = expand_pattern(root, pattern)?;

        if files.is_empty() {
            tracing::warn!(category = %category, pattern = %pattern, "pattern matched no files");
        } else {
            tracing::debug!(category = %category, count = files.len(), "discovered token files");
        }

        *discovery.files_mut(category) = files;
    }

    Ok(discovery)
}

/// 读取并解析单个文档
pub fn read_document(path: &Path) -> Result<TokenDocument> {
    let source = std::fs::read_to_string(path).map_err(|source| TokenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &source)
}

/// 读取一个类别的全部文档
///
/// 同一类别中输出名（文件名去扩展名）重复是致命错误，否则输出会互相覆盖。
pub fn load_category(category: Category, paths: &[PathBuf]) -> Result<Vec<TokenDocument>> {
    let mut seen: HashMap<String, &PathBuf> = HashMap::new();
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        let name = output_name(path);
        if let Some(first) = seen.insert(name.clone(), path) {
            return Err(TokenError::DuplicateOutputName {
                category: category.to_string(),
                name,
                first: first.clone(),
                second: path.clone(),
            });
        }

        let document = read_document(path)?;
        tracing::debug!(
            category = %category,
            file = %path.display(),
            tokens = document.tokens.len(),
            "loaded token document"
        );
        documents.push(document);
    }

    Ok(documents)
}

/// 全部已加载的文档
#[derive(Debug, Clone, Default)]
pub struct Documents {
    pub config: Vec<TokenDocument>,
    pub source: Vec<TokenDocument>,
    pub themes: Vec<TokenDocument>,
    pub semantic: Vec<TokenDocument>,
}

pub fn load_documents(discovery: &Discovery) -> Result<Documents> {
    Ok(Documents {
        config: load_category(Category::Config, &discovery.config)?,
        source: load_category(Category::Source, &discovery.source)?,
        themes: load_category(Category::Themes, &discovery.themes)?,
        semantic: load_category(Category::Semantic, &discovery.semantic)?,
    })
}
