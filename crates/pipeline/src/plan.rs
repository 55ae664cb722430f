use std::path::PathBuf;
use swatch_core::naming::output_name;
use swatch_core::{merge_sets, BuildConfig, Result, TokenDocument, TokenError, TokenSet};

/// 根主题输出使用 `:root`，其余主题使用 `.<name>`
pub const ROOT_SELECTOR: &str = ":root";

/// 单个 CSS 变量文件的构建配置
#[derive(Debug, Clone)]
pub struct BuildTarget {
    /// 日志用名称，如 "source/color"
    pub label: String,
    /// 参与构建的源文件
    pub sources: Vec<PathBuf>,
    /// 输出到该文件的 token
    pub tokens: TokenSet,
    /// 相对于 build_path 的输出路径
    pub destination: PathBuf,
    pub selector: String,
    /// 是否生成 Tailwind 片段
    pub tailwind: bool,
}

fn document_set(document: &TokenDocument) -> TokenSet {
    document.tokens.iter().cloned().collect()
}

/// 每个 source 文件一个目标：`source/<name>.css`，`:root` 选择器
pub fn source_targets(documents: &[TokenDocument], config: &BuildConfig) -> Vec<BuildTarget> {
    documents
        .iter()
        .map(|document| {
            let name = output_name(&document.path);
            BuildTarget {
                label: format!("source/{}", name),
                sources: vec![document.path.clone()],
                tokens: document_set(document),
                destination: PathBuf::from("source").join(format!("{}.css", name)),
                selector: ROOT_SELECTOR.to_string(),
                tailwind: config.tailwind,
            }
        })
        .collect()
}

/// 找出根主题的下标
///
/// 配置了 `rootTheme` 时按文件名匹配，否则要求恰好一个文档带 `"$root": true`。
pub fn find_root_theme(documents: &[TokenDocument], config: &BuildConfig) -> Result<usize> {
    if let Some(name) = &config.root_theme {
        return documents
            .iter()
            .position(|document| &output_name(&document.path) == name)
            .ok_or_else(|| {
                TokenError::RootTheme(format!("configured root theme `{}` was not found", name))
            });
    }

    let marked: Vec<usize> = documents
        .iter()
        .enumerate()
        .filter(|(_, document)| document.root)
        .map(|(i, _)| i)
        .collect();

    match marked.as_slice() {
        [index] => Ok(*index),
        [] => Err(TokenError::RootTheme(
            "no theme document is marked with \"$root\": true".to_string(),
        )),
        several => Err(TokenError::RootTheme(format!(
            "{} theme documents are marked as root: {}",
            several.len(),
            several
                .iter()
                .map(|&i| documents[i].path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// 每个主题文件一个目标
///
/// - 根主题：只用自身的 token，输出 `themes/<rootThemeOutput>.css`，`:root`，生成 Tailwind 片段
/// - 其他主题：根主题在前、本主题在后合并（本主题覆盖同名 token），
///   输出 `themes/<name>.css`，`.<name>`，不生成 Tailwind 片段
pub fn theme_targets(documents: &[TokenDocument], config: &BuildConfig) -> Result<Vec<BuildTarget>> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }

    let root_index = find_root_theme(documents, config)?;
    let root = &documents[root_index];

    let targets = documents
        .iter()
        .enumerate()
        .map(|(i, document)| {
            if i == root_index {
                let name = &config.root_theme_output;
                BuildTarget {
                    label: format!("themes/{} (root)", name),
                    sources: vec![document.path.clone()],
                    tokens: document_set(document),
                    destination: PathBuf::from("themes").join(format!("{}.css", name)),
                    selector: ROOT_SELECTOR.to_string(),
                    tailwind: config.tailwind,
                }
            } else {
                let name = output_name(&document.path);
                BuildTarget {
                    label: format!("themes/{}", name),
                    sources: vec![root.path.clone(), document.path.clone()],
                    tokens: merge_sets([document_set(root), document_set(document)]),
                    destination: PathBuf::from("themes").join(format!("{}.css", name)),
                    selector: format!(".{}", name),
                    tailwind: false,
                }
            }
        })
        .collect();

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use swatch_core::parse_document;

    fn doc(path: &str, json: &str) -> TokenDocument {
        parse_document(Path::new(path), json).unwrap()
    }

    fn themes() -> Vec<TokenDocument> {
        vec![
            doc(
                "tokens/themes/light.json",
                r##"{ "bg": { "value": "#fff", "type": "color" } }"##,
            ),
            doc(
                "tokens/themes/root.json",
                r##"{ "$root": true, "bg": { "value": "#000", "type": "color" }, "fg": { "value": "#eee", "type": "color" } }"##,
            ),
        ]
    }

    #[test]
    fn test_source_targets() {
        let documents = vec![doc(
            "tokens/source/color.json",
            r##"{ "brand": { "value": "#006239", "type": "color" } }"##,
        )];

        let targets = source_targets(&documents, &BuildConfig::default());

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].destination, PathBuf::from("source/color.css"));
        assert_eq!(targets[0].selector, ":root");
        assert!(targets[0].tailwind);
    }

    #[test]
    fn test_root_theme_by_marker() {
        let documents = themes();
        let targets = theme_targets(&documents, &BuildConfig::default()).unwrap();

        let light = &targets[0];
        assert_eq!(light.destination, PathBuf::from("themes/light.css"));
        assert_eq!(light.selector, ".light");
        assert!(!light.tailwind);
        // 根主题 token 在前，本主题覆盖同名 token
        let keys: Vec<String> = light.tokens.iter().map(|t| t.key()).collect();
        assert_eq!(keys, vec!["bg", "fg"]);
        assert_eq!(
            light.tokens.get("bg").unwrap().value.as_literal(),
            Some("#fff")
        );

        let root = &targets[1];
        assert_eq!(root.destination, PathBuf::from("themes/dark.css"));
        assert_eq!(root.selector, ":root");
        assert!(root.tailwind);
        assert_eq!(root.tokens.len(), 2);
    }

    #[test]
    fn test_root_theme_by_config() {
        let documents = vec![
            doc("tokens/themes/base.json", r#"{}"#),
            doc("tokens/themes/light.json", r#"{}"#),
        ];
        let config = BuildConfig {
            root_theme: Some("base".to_string()),
            ..BuildConfig::default()
        };

        assert_eq!(find_root_theme(&documents, &config).unwrap(), 0);

        let missing = BuildConfig {
            root_theme: Some("nope".to_string()),
            ..BuildConfig::default()
        };
        assert!(matches!(
            find_root_theme(&documents, &missing),
            Err(TokenError::RootTheme(_))
        ));
    }

    #[test]
    fn test_root_theme_must_be_unique() {
        let none = vec![doc("tokens/themes/light.json", r#"{}"#)];
        assert!(matches!(
            theme_targets(&none, &BuildConfig::default()),
            Err(TokenError::RootTheme(_))
        ));

        let several = vec![
            doc("tokens/themes/a.json", r#"{ "$root": true }"#),
            doc("tokens/themes/b.json", r#"{ "$root": true }"#),
        ];
        assert!(matches!(
            theme_targets(&several, &BuildConfig::default()),
            Err(TokenError::RootTheme(_))
        ));
    }

    #[test]
    fn test_file_named_root_is_not_implicitly_root() {
        let documents = vec![doc("tokens/themes/root.json", r#"{}"#)];
        assert!(find_root_theme(&documents, &BuildConfig::default()).is_err());
    }

    #[test]
    fn test_no_themes() {
        assert!(theme_targets(&[], &BuildConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_tailwind_disabled() {
        let config = BuildConfig {
            tailwind: false,
            ..BuildConfig::default()
        };
        let targets = theme_targets(&themes(), &config).unwrap();
        assert!(targets.iter().all(|t| !t.tailwind));
    }
}
