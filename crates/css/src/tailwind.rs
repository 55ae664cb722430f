use indexmap::IndexMap;
use std::path::PathBuf;
use swatch_core::{is_renderable, Resolver, Result, TokenSet, TokenType};

/// Tailwind 片段的输出目录（相对于 build_path）
pub const TAILWIND_DIR: &str = "tw-extend";

/// `tw/css-variables` 格式：一个 token 类型对应的 Tailwind 配置片段
///
/// 键是 token 名称，值是带最终字面量兜底的 `var()` 引用，Tailwind 可以直接
/// 使用而不需要自己解析引用：
/// ```js
/// module.exports = {
/// "brand": "var(--brand, #006239);"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailwindFragment {
    entries: IndexMap<String, String>,
}

impl TailwindFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// 收集集合中指定类型的 token
    pub fn from_tokens(
        tokens: &TokenSet,
        token_type: &TokenType,
        resolver: &mut Resolver<'_>,
    ) -> Result<Self> {
        let mut fragment = Self::new();

        for token in tokens.of_type(token_type) {
            if !is_renderable(&token.token_type, &token.value) {
                tracing::warn!(
                    token = %token.key(),
                    token_type = %token.token_type,
                    "skipping composite token without a CSS shorthand"
                );
                continue;
            }
            let name = resolver.variable_name(token);
            let literal = resolver.resolved_literal(token)?;
            fragment.insert(name.clone(), format!("var(--{}, {});", name, literal));
        }

        Ok(fragment)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    /// 合并另一个片段，同名键以后者为准
    pub fn merge(&mut self, other: TailwindFragment) {
        for (key, value) in other.entries {
            self.entries.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 生成 JS 模块源码
    pub fn render(&self) -> String {
        let body = self
            .entries
            .iter()
            .map(|(key, value)| format!("{}: {}", js_string(key), js_string(value)))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("module.exports = {{\n{}\n}}\n", body)
    }
}

/// 片段的输出路径：`tw-extend/<type>.js`
pub fn fragment_destination(token_type: &TokenType) -> PathBuf {
    PathBuf::from(TAILWIND_DIR).join(format!("{}.js", token_type.as_str()))
}

/// 为每个类型生成一个片段（没有 token 的类型生成空对象）
pub fn tailwind_fragments(
    tokens: &TokenSet,
    types: &[TokenType],
    resolver: &mut Resolver<'_>,
) -> Result<Vec<(TokenType, TailwindFragment)>> {
    types
        .iter()
        .map(|token_type| {
            TailwindFragment::from_tokens(tokens, token_type, resolver)
                .map(|fragment| (token_type.clone(), fragment))
        })
        .collect()
}

/// 双引号 JS 字符串字面量
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
