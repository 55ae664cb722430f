use serde::{Deserialize, Serialize};
use std::path::Path;

/// 变量命名风格
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameCase {
    /// 路径段原样用 `-` 连接（如 "color-textDefault"）
    #[default]
    Dashed,
    /// 每段转为 kebab-case 后连接（如 "color-text-default"）
    Kebab,
}

/// 命名策略 trait
///
/// CSS 变量名、Tailwind 键名和 typography 类名都通过同一个策略生成，
/// 保证 `var(--xxx)` 引用与变量定义一致。
pub trait NamingStrategy {
    fn segment(&self, segment: &str) -> String;

    /// 由 token 路径生成名称
    fn name(&self, path: &[String]) -> String {
        path.iter()
            .map(|s| self.segment(s))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// 由引用表达式中的点分路径生成名称
    fn reference_name(&self, reference: &str) -> String {
        reference
            .split('.')
            .map(|s| self.segment(s))
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// 原样连接
pub struct DashedNaming;

impl NamingStrategy for DashedNaming {
    fn segment(&self, segment: &str) -> String {
        segment.to_string()
    }
}

/// kebab-case 连接
pub struct KebabNaming;

impl KebabNaming {
    /// 拆分驼峰和非字母数字字符
    ///
    /// 例如：
    /// - "textDefault" → "text-default"
    /// - "Heading 1" → "heading-1"
    /// - "primary_500" → "primary-500"
    fn kebab(segment: &str) -> String {
        let mut words: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut prev_lower = false;

        for c in segment.chars() {
            if !c.is_alphanumeric() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                prev_lower = false;
                continue;
            }
            if c.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
            current.extend(c.to_lowercase());
        }

        if !current.is_empty() {
            words.push(current);
        }

        words.join("-")
    }
}

impl NamingStrategy for KebabNaming {
    fn segment(&self, segment: &str) -> String {
        Self::kebab(segment)
    }
}

/// 根据 NameCase 创建对应的策略
pub fn create_naming_strategy(case: NameCase) -> Box<dyn NamingStrategy> {
    match case {
        NameCase::Dashed => Box::new(DashedNaming),
        NameCase::Kebab => Box::new(KebabNaming),
    }
}

/// 输出文件名：去掉目录和 `.json` 扩展名
pub fn output_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.strip_suffix(".json") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
