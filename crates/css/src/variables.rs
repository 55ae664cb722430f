use crate::ir::{create_rule, create_stylesheet, Stylesheet};
use swatch_core::{is_renderable, Declaration, Resolver, Result, TokenSet};

/// `css/variables` 格式
///
/// 输出一条规则，集合中每个 token 一个自定义属性：
/// ```css
/// :root {
///   --color-brand: var(--green-500, #3ecf8e);
/// }
/// ```
/// 没有 CSS 简写形式的复合值会被跳过。
pub fn css_variables(
    tokens: &TokenSet,
    resolver: &mut Resolver<'_>,
    selector: &str,
) -> Result<Stylesheet> {
    let mut declarations = Vec::with_capacity(tokens.len());

    for token in tokens.iter() {
        if !is_renderable(&token.token_type, &token.value) {
            tracing::warn!(
                token = %token.key(),
                token_type = %token.token_type,
                "skipping composite token without a CSS shorthand"
            );
            continue;
        }

        let name = resolver.variable_name(token);
        let value = resolver.output_expression(token)?;
        declarations.push(Declaration::new(format!("--{}", name), value));
    }

    Ok(create_stylesheet(vec![create_rule(selector, declarations)]))
}
