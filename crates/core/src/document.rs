use crate::error::{Result, TokenError};
use crate::types::{Token, TokenType, TokenValue};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// 一个 token JSON 文档
#[derive(Debug, Clone)]
pub struct TokenDocument {
    pub path: PathBuf,
    /// 按文档顺序展开的 token
    pub tokens: Vec<Token>,
    /// 顶层 `"$root": true` 标记
    pub root: bool,
}

/// 顶层根主题标记
pub const ROOT_MARKER: &str = "$root";

/// 解析 token 文档
///
/// 文档格式示例：
/// ```json
/// {
///   "$root": true,
///   "color": {
///     "$type": "color",
///     "brand": { "value": "#006239" },
///     "border": { "value": "{color.brand}", "type": "color" }
///   }
/// }
/// ```
///
/// - 含 `value` / `$value` 的对象是 token
/// - 其他对象是分组，键名作为路径段
/// - 分组上的 `type` / `$type` 由没有声明类型的后代继承
/// - 分组中以 `$` 开头的键是元数据，不参与路径
pub fn parse_document(path: &Path, source: &str) -> Result<TokenDocument> {
    let root: Value = serde_json::from_str(source).map_err(|source| TokenError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(map) = root else {
        return Err(TokenError::InvalidValue {
            token: String::new(),
            path: path.to_path_buf(),
            message: "token document must be a JSON object".to_string(),
        });
    };

    let is_root = match map.get(ROOT_MARKER) {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(TokenError::InvalidValue {
                token: ROOT_MARKER.to_string(),
                path: path.to_path_buf(),
                message: format!("expected a boolean, got {}", other),
            })
        }
    };

    let mut tokens = Vec::new();
    let mut prefix = Vec::new();
    walk_group(&map, &mut prefix, None, path, &mut tokens)?;

    Ok(TokenDocument {
        path: path.to_path_buf(),
        tokens,
        root: is_root,
    })
}

fn is_token(node: &Map<String, Value>) -> bool {
    node.contains_key("value") || node.contains_key("$value")
}

fn string_field<'a>(node: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    node.get(name)
        .or_else(|| node.get(&format!("${}", name)))
        .and_then(Value::as_str)
}

fn walk_group(
    group: &Map<String, Value>,
    prefix: &mut Vec<String>,
    inherited: Option<&TokenType>,
    file: &Path,
    out: &mut Vec<Token>,
) -> Result<()> {
    let group_type = string_field(group, "type").map(TokenType::parse);
    let inherited = group_type.as_ref().or(inherited);

    for (key, child) in group {
        if key.starts_with('$') {
            continue;
        }

        let Value::Object(node) = child else {
            // 分组上的 type / description 等普通字段
            if !matches!(key.as_str(), "type" | "description") {
                tracing::warn!(
                    file = %file.display(),
                    key = %key,
                    "ignoring non-object entry in token group"
                );
            }
            continue;
        };

        prefix.push(key.clone());
        if is_token(node) {
            out.push(build_token(node, prefix, inherited, file)?);
        } else {
            walk_group(node, prefix, inherited, file, out)?;
        }
        prefix.pop();
    }

    Ok(())
}

fn build_token(
    node: &Map<String, Value>,
    path: &[String],
    inherited: Option<&TokenType>,
    file: &Path,
) -> Result<Token> {
    let raw = node
        .get("value")
        .or_else(|| node.get("$value"))
        .unwrap_or(&Value::Null);

    let value = TokenValue::from_json(raw).ok_or_else(|| TokenError::InvalidValue {
        token: path.join("."),
        path: file.to_path_buf(),
        message: "null is not a valid token value".to_string(),
    })?;

    let token_type = string_field(node, "type")
        .map(TokenType::parse)
        .or_else(|| inherited.cloned())
        .unwrap_or_else(|| TokenType::Other(String::new()));

    let mut token = Token::new(path.to_vec(), token_type, value, file);
    token.description = string_field(node, "description").map(str::to_string);

    Ok(token)
}
