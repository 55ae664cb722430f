use crate::ir::{create_class_rule, create_stylesheet, Stylesheet};
use swatch_core::reference::as_reference;
use swatch_core::{Declaration, NamingStrategy, TokenSet, TokenType, TokenValue};

/// 子字段 → CSS 属性
const CLASS_PROPERTIES: &[(&str, &str)] = &[
    ("letterSpacing", "letter-spacing"),
    ("textCase", "text-transform"),
    ("textDecoration", "text-decoration"),
];

/// 子字段原始值 → CSS 值
///
/// `{a.b.c}` 转为 `var(--a-b-c)`（不带兜底值），其余原样输出。
fn convert_to_variable_if_needed(value: &TokenValue, naming: &dyn NamingStrategy) -> Option<String> {
    match value {
        TokenValue::Literal(literal) => Some(match as_reference(literal) {
            Some(reference) => format!("var(--{})", naming.reference_name(reference)),
            None => literal.clone(),
        }),
        TokenValue::List(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|item| convert_to_variable_if_needed(item, naming))
                .collect();
            parts.map(|parts| parts.join(", "))
        }
        TokenValue::Composite(_) => None,
    }
}

/// `css/typographyClasses` 格式
///
/// 只处理 `typography` 类型的 token，每个生成一个与主题无关的类：
/// ```css
/// .heading-1 {
///   font: var(--heading-1);
///   letter-spacing: var(--letter-spacing-tight);
///   text-transform: none;
///   text-decoration: none;
/// }
/// ```
/// 字体简写本身通过 `var()` 引用对应的 CSS 变量；缺失的子字段不输出声明。
pub fn typography_classes(tokens: &TokenSet, naming: &dyn NamingStrategy) -> Stylesheet {
    let mut rules = Vec::new();

    for token in tokens.of_type(&TokenType::Typography) {
        let name = naming.name(&token.path);
        let mut declarations = vec![Declaration::new("font", format!("var(--{})", name))];

        if let TokenValue::Composite(fields) = &token.value {
            for (field, property) in CLASS_PROPERTIES {
                let Some(value) = fields.get(*field) else {
                    continue;
                };
                match convert_to_variable_if_needed(value, naming) {
                    Some(css_value) => declarations.push(Declaration::new(*property, css_value)),
                    None => tracing::warn!(
                        token = %token.key(),
                        field = %field,
                        "nested composite in typography field has no CSS form"
                    ),
                }
            }
        } else {
            tracing::debug!(
                token = %token.key(),
                "typography alias, emitting font declaration only"
            );
        }

        rules.push(create_class_rule(&name, declarations));
    }

    create_stylesheet(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::emit_css;
    use pretty_assertions::assert_eq;
    use swatch_core::naming::{DashedNaming, KebabNaming};
    use swatch_core::Token;

    fn token(path: &str, token_type: TokenType, json: serde_json::Value) -> Token {
        Token::new(
            path.split('.').map(str::to_string).collect(),
            token_type,
            TokenValue::from_json(&json).unwrap(),
            "tokens/semantic/typography.json",
        )
    }

    #[test]
    fn test_typography_class() {
        let set: TokenSet = vec![token(
            "heading.1",
            TokenType::Typography,
            serde_json::json!({
                "fontFamily": "{font.family.sans}",
                "fontSize": "{font.size.xl}",
                "letterSpacing": "{letterSpacing.tight}",
                "textCase": "none",
                "textDecoration": "underline"
            }),
        )]
        .into_iter()
        .collect();

        let css = emit_css(&typography_classes(&set, &DashedNaming));

        assert!(css.contains(
            ".heading-1 {\n  font: var(--heading-1);\n  letter-spacing: var(--letterSpacing-tight);\n  text-transform: none;\n  text-decoration: underline;\n}\n"
        ));
    }

    #[test]
    fn test_non_typography_tokens_produce_no_class() {
        let set: TokenSet = vec![
            token("brand", TokenType::Color, serde_json::json!("#006239")),
            token(
                "body",
                TokenType::Typography,
                serde_json::json!({ "fontFamily": "Inter" }),
            ),
        ]
        .into_iter()
        .collect();

        let stylesheet = typography_classes(&set, &DashedNaming);

        assert_eq!(stylesheet.rules.len(), 1);
        assert_eq!(stylesheet.rules[0].selector, ".body");
        // 缺失的子字段不输出
        assert_eq!(
            stylesheet.rules[0].declarations,
            vec![Declaration::new("font", "var(--body)")]
        );
    }

    #[test]
    fn test_kebab_naming() {
        let set: TokenSet = vec![token(
            "textStyles.bodyLarge",
            TokenType::Typography,
            serde_json::json!({ "letterSpacing": "{tracking.wideX}" }),
        )]
        .into_iter()
        .collect();

        let stylesheet = typography_classes(&set, &KebabNaming);
        let rule = &stylesheet.rules[0];

        assert_eq!(rule.selector, ".text-styles-body-large");
        assert_eq!(
            rule.declarations[1],
            Declaration::new("letter-spacing", "var(--tracking-wide-x)")
        );
    }

    #[test]
    fn test_alias_emits_font_only() {
        let set: TokenSet = vec![token(
            "title",
            TokenType::Typography,
            serde_json::json!("{heading.1}"),
        )]
        .into_iter()
        .collect();

        let stylesheet = typography_classes(&set, &DashedNaming);
        assert_eq!(
            stylesheet.rules[0].declarations,
            vec![Declaration::new("font", "var(--title)")]
        );
    }
}
