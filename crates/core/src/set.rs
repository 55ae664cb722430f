use crate::types::{Token, TokenType};
use indexmap::IndexMap;

/// 有序的 token 集合，以点分路径为键
///
/// 后插入的同名 token 覆盖前者，但保留首次插入的位置（IndexMap 语义），
/// 所以 "root + theme" 合并后变量顺序与根主题一致。
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: IndexMap<String, Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入 token，返回被覆盖的旧值
    pub fn insert(&mut self, token: Token) -> Option<Token> {
        self.tokens.insert(token.key(), token)
    }

    pub fn get(&self, key: &str) -> Option<&Token> {
        self.tokens.get(key)
    }

    /// 按引用路径查找 token
    ///
    /// 兼容旧写法 `{color.base.value}`：找不到时去掉末尾的 `.value` 再查一次。
    pub fn lookup_reference(&self, reference: &str) -> Option<&Token> {
        self.tokens.get(reference).or_else(|| {
            reference
                .strip_suffix(".value")
                .and_then(|key| self.tokens.get(key))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// 指定类型的 token
    pub fn of_type<'a>(&'a self, token_type: &'a TokenType) -> impl Iterator<Item = &'a Token> {
        self.tokens
            .values()
            .filter(move |token| &token.token_type == token_type)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Extend<Token> for TokenSet {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        set.extend(iter);
        set
    }
}

/// 按顺序合并多个集合，后者覆盖前者
pub fn merge_sets<I>(sets: I) -> TokenSet
where
    I: IntoIterator<Item = TokenSet>,
{
    let mut merged = TokenSet::new();
    for set in sets {
        merged.extend(set.tokens.into_values());
    }
    merged
}
