use crate::error::{Result, TokenError};
use crate::format::{sub_field_type, FormatterRegistry};
use crate::naming::NamingStrategy;
use crate::reference::{segments, Segment};
use crate::set::TokenSet;
use crate::types::{Token, TokenType, TokenValue};
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// 引用全部替换为最终字面量
    Literal,
    /// 引用输出为 `var(--name, fallback)`
    Output,
}

/// 引用解析器
///
/// 在一个上下文集合内解析 token 的值：
/// - `resolved_literal`: 递归替换所有引用，再按类型格式化
/// - `output_expression`: 保留间接性，每个引用输出为
///   `var(--<name>, <被引用 token 的最终字面量>)`
///
/// 引用不存在或形成环都是致命错误。
pub struct Resolver<'a> {
    context: &'a TokenSet,
    formatters: &'a FormatterRegistry,
    naming: &'a dyn NamingStrategy,
    /// key → 已解析的字面量
    literals: HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        context: &'a TokenSet,
        formatters: &'a FormatterRegistry,
        naming: &'a dyn NamingStrategy,
    ) -> Self {
        Self {
            context,
            formatters,
            naming,
            literals: HashMap::new(),
        }
    }

    pub fn naming(&self) -> &'a dyn NamingStrategy {
        self.naming
    }

    /// token 的 CSS 变量名（不含 `--`）
    pub fn variable_name(&self, token: &Token) -> String {
        self.naming.name(&token.path)
    }

    pub fn resolved_literal(&mut self, token: &Token) -> Result<String> {
        let mut stack = Vec::new();
        self.literal_of(token, &mut stack)
    }

    pub fn output_expression(&mut self, token: &Token) -> Result<String> {
        let mut stack = vec![token.key()];
        self.render(token, &token.token_type, &token.value, Mode::Output, &mut stack)
    }

    /// 解析上下文中的全部 token，报告第一个错误
    pub fn validate(&mut self) -> Result<()> {
        let context = self.context;
        for token in context.iter() {
            if is_renderable(&token.token_type, &token.value) {
                self.resolved_literal(token)?;
            }
            // 复合值中不参与简写的字段（如 letterSpacing）也必须能解析
            self.check_references(token, &token.value)?;
        }
        Ok(())
    }

    fn literal_of(&mut self, token: &Token, stack: &mut Vec<String>) -> Result<String> {
        let key = token.key();
        if let Some(hit) = self.literals.get(&key) {
            return Ok(hit.clone());
        }
        if stack.contains(&key) {
            let mut chain = stack.clone();
            chain.push(key);
            return Err(TokenError::CircularReference { chain });
        }

        stack.push(key.clone());
        let literal = self.render(token, &token.token_type, &token.value, Mode::Literal, stack)?;
        stack.pop();

        self.literals.insert(key, literal.clone());
        Ok(literal)
    }

    fn lookup(&self, owner: &Token, reference: &str) -> Result<&'a Token> {
        let context = self.context;
        context
            .lookup_reference(reference)
            .ok_or_else(|| TokenError::UnresolvedReference {
                reference: reference.to_string(),
                token: owner.key(),
                path: owner.file.clone(),
            })
    }

    fn render(
        &mut self,
        owner: &Token,
        token_type: &TokenType,
        value: &TokenValue,
        mode: Mode,
        stack: &mut Vec<String>,
    ) -> Result<String> {
        match value {
            TokenValue::Literal(literal) => {
                self.render_literal(owner, token_type, literal, mode, stack)
            }
            TokenValue::List(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(self.render(owner, token_type, item, mode, stack)?);
                }
                Ok(parts.join(", "))
            }
            TokenValue::Composite(fields) => {
                self.render_composite(owner, token_type, fields, mode, stack)
            }
        }
    }

    fn render_literal(
        &mut self,
        owner: &Token,
        token_type: &TokenType,
        literal: &str,
        mode: Mode,
        stack: &mut Vec<String>,
    ) -> Result<String> {
        let parts = segments(literal);
        if !parts.iter().any(|s| matches!(s, Segment::Reference(_))) {
            return Ok(self.formatters.format(token_type, literal));
        }

        let mut out = String::new();
        for part in parts {
            match part {
                Segment::Text(text) => out.push_str(text),
                Segment::Reference(reference) => {
                    let target = self.lookup(owner, reference)?;
                    let resolved = self.literal_of(target, stack)?;
                    match mode {
                        Mode::Literal => out.push_str(&resolved),
                        Mode::Output => {
                            out.push_str(&format!(
                                "var(--{}, {})",
                                self.variable_name(target),
                                resolved
                            ));
                        }
                    }
                }
            }
        }

        Ok(match mode {
            Mode::Literal => self.formatters.format(token_type, &out),
            Mode::Output => out,
        })
    }

    fn sub_field(
        &mut self,
        owner: &Token,
        fields: &IndexMap<String, TokenValue>,
        name: &str,
        mode: Mode,
        stack: &mut Vec<String>,
    ) -> Result<Option<String>> {
        match fields.get(name) {
            Some(value) => self
                .render(owner, &sub_field_type(name), value, mode, stack)
                .map(Some),
            None => Ok(None),
        }
    }

    /// 复合值 → CSS 简写
    fn render_composite(
        &mut self,
        owner: &Token,
        token_type: &TokenType,
        fields: &IndexMap<String, TokenValue>,
        mode: Mode,
        stack: &mut Vec<String>,
    ) -> Result<String> {
        match token_type {
            // [<style>] <weight> <size>/<line-height> <family>
            TokenType::Typography => {
                let style = self.sub_field(owner, fields, "fontStyle", mode, stack)?;
                let weight = self.sub_field(owner, fields, "fontWeight", mode, stack)?;
                let size = self.sub_field(owner, fields, "fontSize", mode, stack)?;
                let line_height = self.sub_field(owner, fields, "lineHeight", mode, stack)?;
                let family = self.sub_field(owner, fields, "fontFamily", mode, stack)?;

                let shorthand = format!(
                    "{} {}/{} {}",
                    weight.as_deref().unwrap_or("400"),
                    size.as_deref().unwrap_or("16px"),
                    line_height.as_deref().unwrap_or("1"),
                    family.as_deref().unwrap_or("sans-serif"),
                );
                Ok(match style.as_deref() {
                    Some(style) if !style.is_empty() && style != "normal" => {
                        format!("{} {}", style, shorthand)
                    }
                    _ => shorthand,
                })
            }
            // [inset] <x> <y> <blur> <spread> <color>
            TokenType::BoxShadow => {
                let mut parts = Vec::new();
                let inset = fields.get("type").and_then(TokenValue::as_literal) == Some("innerShadow");
                if inset {
                    parts.push("inset".to_string());
                }
                for name in ["x", "y", "blur", "spread"] {
                    let part = self.sub_field(owner, fields, name, mode, stack)?;
                    parts.push(part.unwrap_or_else(|| "0".to_string()));
                }
                if let Some(color) = self.sub_field(owner, fields, "color", mode, stack)? {
                    parts.push(color);
                }
                Ok(parts.join(" "))
            }
            // <width> <style> <color>
            TokenType::Border => {
                let mut parts = Vec::new();
                for name in ["width", "style", "color"] {
                    if let Some(part) = self.sub_field(owner, fields, name, mode, stack)? {
                        parts.push(part);
                    }
                }
                Ok(parts.join(" "))
            }
            other => Err(TokenError::InvalidValue {
                token: owner.key(),
                path: owner.file.clone(),
                message: format!("composite value of type `{}` has no CSS form", other),
            }),
        }
    }

    fn check_references(&mut self, owner: &Token, value: &TokenValue) -> Result<()> {
        match value {
            TokenValue::Literal(literal) => {
                for part in segments(literal) {
                    if let Segment::Reference(reference) = part {
                        let target = self.lookup(owner, reference)?;
                        let mut stack = vec![owner.key()];
                        self.literal_of(target, &mut stack)?;
                    }
                }
                Ok(())
            }
            TokenValue::List(items) => items
                .iter()
                .try_for_each(|item| self.check_references(owner, item)),
            TokenValue::Composite(fields) => fields
                .values()
                .try_for_each(|field| self.check_references(owner, field)),
        }
    }
}

/// 值能否输出为单个 CSS 值
///
/// 复合值只有 typography / boxShadow / border 有对应的简写。
pub fn is_renderable(token_type: &TokenType, value: &TokenValue) -> bool {
    match value {
        TokenValue::Literal(_) => true,
        TokenValue::List(items) => items.iter().all(|item| is_renderable(token_type, item)),
        TokenValue::Composite(_) => token_type.is_composite(),
    }
}
