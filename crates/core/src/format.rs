//! 按 token 类型格式化字面量
//!
//! 每种类型可以注册自己的 [`ValueFormatter`]。标准注册表对已经是规范 CSS
//! 的字面量保持原样，只规范化设计工具导出的写法（无单位数字、百分比字距、
//! 字重名称等）。

use crate::types::TokenType;
use phf::phf_map;
use std::collections::HashMap;

/// 单个类型的格式化策略
pub trait ValueFormatter {
    fn format(&self, literal: &str) -> String;
}

/// 原样输出
pub struct Identity;

impl ValueFormatter for Identity {
    fn format(&self, literal: &str) -> String {
        literal.to_string()
    }
}

/// 无单位的非零数字补 `px`
pub struct Dimension;

impl ValueFormatter for Dimension {
    fn format(&self, literal: &str) -> String {
        let trimmed = literal.trim();
        match parse_number(trimmed) {
            Some(n) if n != 0.0 => format!("{}px", trimmed),
            _ => literal.to_string(),
        }
    }
}

/// `10%` → `0.1em`，无单位数字补 `px`
pub struct LetterSpacing;

impl ValueFormatter for LetterSpacing {
    fn format(&self, literal: &str) -> String {
        match percent(literal) {
            Some(p) => format!("{}em", format_number(p / 100.0)),
            None => Dimension.format(literal),
        }
    }
}

/// `150%` → `1.5`（无单位行高）
pub struct LineHeight;

impl ValueFormatter for LineHeight {
    fn format(&self, literal: &str) -> String {
        match percent(literal) {
            Some(p) => format_number(p / 100.0),
            None => literal.to_string(),
        }
    }
}

/// `50%` → `0.5`
pub struct Opacity;

impl ValueFormatter for Opacity {
    fn format(&self, literal: &str) -> String {
        match percent(literal) {
            Some(p) => format_number(p / 100.0),
            None => literal.to_string(),
        }
    }
}

/// 字重名称 → 数值
static FONT_WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "hairline" => "100",
    "extralight" => "200",
    "ultralight" => "200",
    "light" => "300",
    "regular" => "400",
    "normal" => "400",
    "book" => "400",
    "medium" => "500",
    "semibold" => "600",
    "demibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "ultrabold" => "800",
    "black" => "900",
    "heavy" => "900",
};

/// `Semi Bold` → `600`，`Bold Italic` → `700`
pub struct FontWeight;

impl ValueFormatter for FontWeight {
    fn format(&self, literal: &str) -> String {
        let normalized: String = literal
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        let normalized = normalized.strip_suffix("italic").unwrap_or(&normalized);
        let normalized = if normalized.is_empty() {
            "regular"
        } else {
            normalized
        };

        match FONT_WEIGHTS.get(normalized) {
            Some(weight) => weight.to_string(),
            None => literal.to_string(),
        }
    }
}

/// 含空白的字体名加引号
pub struct FontFamily;

impl ValueFormatter for FontFamily {
    fn format(&self, literal: &str) -> String {
        if literal.contains("var(") {
            return literal.to_string();
        }

        literal
            .split(',')
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .map(|family| {
                let quoted = family.starts_with('"') || family.starts_with('\'');
                if !quoted && family.contains(char::is_whitespace) {
                    format!("\"{}\"", family)
                } else {
                    family.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// 类型 → 格式化策略
pub struct FormatterRegistry {
    formatters: HashMap<TokenType, Box<dyn ValueFormatter>>,
    fallback: Box<dyn ValueFormatter>,
}

impl FormatterRegistry {
    /// 所有类型都原样输出
    pub fn identity() -> Self {
        Self {
            formatters: HashMap::new(),
            fallback: Box::new(Identity),
        }
    }

    /// 标准策略
    pub fn standard() -> Self {
        let mut registry = Self::identity();

        for token_type in [
            TokenType::Spacing,
            TokenType::Sizing,
            TokenType::BorderRadius,
            TokenType::BorderWidth,
            TokenType::FontSizes,
            TokenType::ParagraphSpacing,
            TokenType::Dimension,
        ] {
            registry.register(token_type, Dimension);
        }
        registry.register(TokenType::LetterSpacing, LetterSpacing);
        registry.register(TokenType::LineHeights, LineHeight);
        registry.register(TokenType::Opacity, Opacity);
        registry.register(TokenType::FontWeights, FontWeight);
        registry.register(TokenType::FontFamilies, FontFamily);

        registry
    }

    /// 注册（或替换）某个类型的格式化策略
    pub fn register(&mut self, token_type: TokenType, formatter: impl ValueFormatter + 'static) {
        self.formatters.insert(token_type, Box::new(formatter));
    }

    pub fn format(&self, token_type: &TokenType, literal: &str) -> String {
        self.formatters
            .get(token_type)
            .unwrap_or(&self.fallback)
            .format(literal)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// 复合值子字段 → 对应的原子类型
static SUB_FIELD_TYPES: phf::Map<&'static str, TokenType> = phf_map! {
    "fontFamily" => TokenType::FontFamilies,
    "fontWeight" => TokenType::FontWeights,
    "fontSize" => TokenType::FontSizes,
    "fontStyle" => TokenType::Other(String::new()),
    "lineHeight" => TokenType::LineHeights,
    "letterSpacing" => TokenType::LetterSpacing,
    "paragraphSpacing" => TokenType::ParagraphSpacing,
    "textCase" => TokenType::TextCase,
    "textDecoration" => TokenType::TextDecoration,
    "x" => TokenType::Dimension,
    "y" => TokenType::Dimension,
    "blur" => TokenType::Dimension,
    "spread" => TokenType::Dimension,
    "color" => TokenType::Color,
    "width" => TokenType::BorderWidth,
};

pub fn sub_field_type(field: &str) -> TokenType {
    SUB_FIELD_TYPES
        .get(field)
        .cloned()
        .unwrap_or_else(|| TokenType::Other(field.to_string()))
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return None;
    }
    s.parse::<f64>().ok()
}

fn percent(literal: &str) -> Option<f64> {
    literal.trim().strip_suffix('%').and_then(parse_number)
}

/// 保留四位小数，去掉多余的零
fn format_number(n: f64) -> String {
    let rounded = (n * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}
