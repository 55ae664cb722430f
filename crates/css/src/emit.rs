use crate::ir::Stylesheet;

/// 缩进
const INDENT: &str = "  ";

/// 生成 CSS 字符串
///
/// 保证：
/// - 规则和声明按输入顺序输出
/// - 相同输入产生逐字节相同的输出（不写时间戳）
pub fn emit_css(stylesheet: &Stylesheet) -> String {
    let mut css = String::new();

    if let Some(header) = &stylesheet.header {
        css.push_str(header);
        css.push_str("\n\n");
    }

    for (i, rule) in stylesheet.rules.iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        css.push_str(&format!("{} {{\n", rule.selector));
        for decl in &rule.declarations {
            css.push_str(&format!("{}{}: {};\n", INDENT, decl.property, decl.value));
        }
        css.push_str("}\n");
    }

    css
}
