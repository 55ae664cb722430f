use swatch_core::Declaration;

/// 生成文件顶部的注释
pub const GENERATED_HEADER: &str = "/**\n * Do not edit directly, this file was auto-generated.\n */";

/// 一条 CSS 规则：选择器 + 声明列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// 样式表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub header: Option<String>,
    pub rules: Vec<Rule>,
}

/// 从选择器和声明列表创建 CSS 规则
pub fn create_rule(selector: impl Into<String>, declarations: Vec<Declaration>) -> Rule {
    Rule {
        selector: selector.into(),
        declarations,
    }
}

/// 创建类选择器规则（`.name { ... }`）
pub fn create_class_rule(class_name: &str, declarations: Vec<Declaration>) -> Rule {
    create_rule(format!(".{}", class_name), declarations)
}

/// 创建带生成注释的样式表
pub fn create_stylesheet(rules: Vec<Rule>) -> Stylesheet {
    Stylesheet {
        header: Some(GENERATED_HEADER.to_string()),
        rules,
    }
}
