//! 引用表达式 `{a.b.c}` 的解析
//!
//! 一个字面量可以整体就是一个引用（`{color.brand}`），也可以把引用嵌在
//! 其他文本中（`rgba({color.black}, 0.5)`）。

/// 表达式片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// 花括号内的点分路径
    Reference(&'a str),
}

/// 合法的引用路径：非空、不含空白和花括号、每段非空
fn is_reference_path(inner: &str) -> bool {
    !inner.is_empty()
        && !inner.contains(|c: char| c.is_whitespace() || c == '{' || c == '}')
        && inner.split('.').all(|segment| !segment.is_empty())
}

/// 将字面量拆分为文本和引用片段
///
/// 不构成合法引用的花括号按普通文本处理。
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(offset) = input[cursor..].find('{') {
        let open = cursor + offset;
        let after = open + 1;

        match input[after..].find('}') {
            Some(len) if is_reference_path(&input[after..after + len]) => {
                if open > text_start {
                    out.push(Segment::Text(&input[text_start..open]));
                }
                out.push(Segment::Reference(&input[after..after + len]));
                cursor = after + len + 1;
                text_start = cursor;
            }
            _ => cursor = after,
        }
    }

    if text_start < input.len() {
        out.push(Segment::Text(&input[text_start..]));
    }

    out
}

/// 整个字面量恰好是一个引用时返回其路径
pub fn as_reference(input: &str) -> Option<&str> {
    match segments(input.trim()).as_slice() {
        [Segment::Reference(path)] => Some(path),
        _ => None,
    }
}

/// 字面量是否包含引用
pub fn has_references(input: &str) -> bool {
    segments(input)
        .iter()
        .any(|s| matches!(s, Segment::Reference(_)))
}
