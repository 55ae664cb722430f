use indexmap::IndexMap;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Token 类型
///
/// 前 14 种是可以生成 Tailwind 片段的类型，见 [`crate::config::TAILWIND_TYPES`]。
/// 未知类型原样保存在 `Other` 中（缺省类型为空字符串）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Spacing,
    Sizing,
    BorderRadius,
    BorderWidth,
    Color,
    Opacity,
    FontFamilies,
    LineHeights,
    LetterSpacing,
    ParagraphSpacing,
    FontWeights,
    FontSizes,
    TextCase,
    TextDecoration,
    /// 复合值：fontFamily / fontWeight / fontSize / lineHeight ...
    Typography,
    /// 复合值：x / y / blur / spread / color / type
    BoxShadow,
    /// 复合值：width / style / color
    Border,
    Dimension,
    Other(String),
}

/// 文档中的类型名 → TokenType
static TYPE_NAMES: phf::Map<&'static str, TokenType> = phf_map! {
    "spacing" => TokenType::Spacing,
    "sizing" => TokenType::Sizing,
    "borderRadius" => TokenType::BorderRadius,
    "borderWidth" => TokenType::BorderWidth,
    "color" => TokenType::Color,
    "opacity" => TokenType::Opacity,
    "fontFamilies" => TokenType::FontFamilies,
    "lineHeights" => TokenType::LineHeights,
    "letterSpacing" => TokenType::LetterSpacing,
    "paragraphSpacing" => TokenType::ParagraphSpacing,
    "fontWeights" => TokenType::FontWeights,
    "fontSizes" => TokenType::FontSizes,
    "textCase" => TokenType::TextCase,
    "textDecoration" => TokenType::TextDecoration,
    "typography" => TokenType::Typography,
    "boxShadow" => TokenType::BoxShadow,
    "border" => TokenType::Border,
    "dimension" => TokenType::Dimension,
};

impl TokenType {
    pub fn parse(name: &str) -> Self {
        TYPE_NAMES
            .get(name)
            .cloned()
            .unwrap_or_else(|| TokenType::Other(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Spacing => "spacing",
            TokenType::Sizing => "sizing",
            TokenType::BorderRadius => "borderRadius",
            TokenType::BorderWidth => "borderWidth",
            TokenType::Color => "color",
            TokenType::Opacity => "opacity",
            TokenType::FontFamilies => "fontFamilies",
            TokenType::LineHeights => "lineHeights",
            TokenType::LetterSpacing => "letterSpacing",
            TokenType::ParagraphSpacing => "paragraphSpacing",
            TokenType::FontWeights => "fontWeights",
            TokenType::FontSizes => "fontSizes",
            TokenType::TextCase => "textCase",
            TokenType::TextDecoration => "textDecoration",
            TokenType::Typography => "typography",
            TokenType::BoxShadow => "boxShadow",
            TokenType::Border => "border",
            TokenType::Dimension => "dimension",
            TokenType::Other(name) => name,
        }
    }

    /// 是否为需要展开成 CSS 简写的复合类型
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TokenType::Typography | TokenType::BoxShadow | TokenType::Border
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token 的原始值
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// 字符串 / 数字 / 布尔值，可能包含 `{a.b}` 引用
    Literal(String),
    /// 数组（字体栈、多层阴影）
    List(Vec<TokenValue>),
    /// 对象（typography、boxShadow、border）
    Composite(IndexMap<String, TokenValue>),
}

impl TokenValue {
    /// 从 JSON 值构造，`null` 返回 None
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::Bool(b) => Some(TokenValue::Literal(b.to_string())),
            Value::Number(n) => Some(TokenValue::Literal(n.to_string())),
            Value::String(s) => Some(TokenValue::Literal(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(TokenValue::from_json)
                .collect::<Option<Vec<_>>>()
                .map(TokenValue::List),
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| TokenValue::from_json(v).map(|v| (k.clone(), v)))
                .collect::<Option<IndexMap<_, _>>>()
                .map(TokenValue::Composite),
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TokenValue::Literal(s) => Some(s),
            _ => None,
        }
    }

    /// 复合值的子字段
    pub fn field(&self, name: &str) -> Option<&TokenValue> {
        match self {
            TokenValue::Composite(fields) => fields.get(name),
            _ => None,
        }
    }
}

/// 单个设计 token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// 层级路径，如 ["color", "border", "default"]
    pub path: Vec<String>,
    pub token_type: TokenType,
    pub value: TokenValue,
    pub description: Option<String>,
    /// 来源文件
    pub file: PathBuf,
}

impl Token {
    pub fn new(
        path: Vec<String>,
        token_type: TokenType,
        value: TokenValue,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            path,
            token_type,
            value,
            description: None,
            file: file.into(),
        }
    }

    /// 点分路径，也是引用表达式里使用的写法
    pub fn key(&self) -> String {
        self.path.join(".")
    }
}

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "--color-brand"）
    pub property: String,
    /// CSS 属性值（如 "#006239"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_type_round_trip_names() {
        assert_eq!(TokenType::parse("borderRadius"), TokenType::BorderRadius);
        assert_eq!(TokenType::parse("typography").as_str(), "typography");
        assert_eq!(
            TokenType::parse("composition"),
            TokenType::Other("composition".to_string())
        );
    }

    #[test]
    fn test_value_from_json_number() {
        let value = TokenValue::from_json(&json!(4)).unwrap();
        assert_eq!(value, TokenValue::Literal("4".to_string()));
    }

    #[test]
    fn test_value_from_json_composite_keeps_order() {
        let value = TokenValue::from_json(&json!({
            "fontWeight": "700",
            "fontSize": "{font.size.lg}",
            "fontFamily": "Inter"
        }))
        .unwrap();

        match value {
            TokenValue::Composite(fields) => {
                let keys: Vec<&str> = fields.keys().map(|k| k.as_str()).collect();
                assert_eq!(keys, vec!["fontWeight", "fontSize", "fontFamily"]);
            }
            other => panic!("Expected composite, got {:?}", other),
        }
    }

    #[test]
    fn test_value_from_json_null() {
        assert!(TokenValue::from_json(&json!(null)).is_none());
        assert!(TokenValue::from_json(&json!(["a", null])).is_none());
    }

    #[test]
    fn test_token_key() {
        let token = Token::new(
            vec!["color".into(), "border".into(), "default".into()],
            TokenType::Color,
            TokenValue::Literal("#000".into()),
            "color.json",
        );
        assert_eq!(token.key(), "color.border.default");
    }
}
