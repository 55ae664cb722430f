use crate::artifact::{Artifact, Format};
use crate::loader::{discover, load_documents, Documents};
use crate::plan::{source_targets, theme_targets, BuildTarget};
use crate::project::Project;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::PathBuf;
use swatch_core::{
    create_naming_strategy, merge_sets, FormatterRegistry, NamingStrategy, Resolver, Result,
    TokenError, TokenSet, TokenType, TAILWIND_TYPES,
};
use swatch_css::{
    css_variables, emit_css, fragment_destination, tailwind_fragments, typography_classes,
    TailwindFragment,
};

/// 构建结果：全部产物（尚未写入磁盘）
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub artifacts: Vec<Artifact>,
}

impl BuildOutput {
    pub fn get(&self, destination: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.destination == PathBuf::from(destination))
    }
}

/// 单次构建共享的只读状态
struct Builder<'a> {
    includes: TokenSet,
    formatters: FormatterRegistry,
    naming: Box<dyn NamingStrategy>,
    /// 目标 → 产生它的源文件，用于检测输出冲突
    destinations: HashMap<PathBuf, PathBuf>,
    /// 按类型合并的 Tailwind 片段
    fragments: IndexMap<TokenType, TailwindFragment>,
    project: &'a Project,
}

impl<'a> Builder<'a> {
    fn new(project: &'a Project, documents: &Documents) -> Self {
        let includes = documents
            .config
            .iter()
            .flat_map(|document| document.tokens.iter().cloned())
            .collect();

        Self {
            includes,
            formatters: project.config.formatting.registry(),
            naming: create_naming_strategy(project.config.name_case),
            destinations: HashMap::new(),
            fragments: IndexMap::new(),
            project,
        }
    }

    /// 引用解析上下文：include 文件在前，输出 token 在后
    fn context(&self, tokens: &TokenSet) -> TokenSet {
        merge_sets([self.includes.clone(), tokens.clone()])
    }

    fn claim(&mut self, destination: &PathBuf, source: &PathBuf) -> Result<()> {
        if let Some(first) = self.destinations.insert(destination.clone(), source.clone()) {
            return Err(TokenError::DuplicateOutputName {
                category: "output".to_string(),
                name: destination.display().to_string(),
                first,
                second: source.clone(),
            });
        }
        Ok(())
    }

    fn build_target(&mut self, target: &BuildTarget) -> Result<Artifact> {
        tracing::info!(
            target = %target.label,
            selector = %target.selector,
            tokens = target.tokens.len(),
            "building"
        );

        let source = target.sources.last().cloned().unwrap_or_default();
        self.claim(&target.destination, &source)?;

        let context = self.context(&target.tokens);
        let mut resolver = Resolver::new(&context, &self.formatters, self.naming.as_ref());
        resolver.validate()?;

        let stylesheet = css_variables(&target.tokens, &mut resolver, &target.selector)?;

        if target.tailwind {
            tracing::info!(target = %target.label, "generating tailwind fragments");
            let fragments = tailwind_fragments(&target.tokens, TAILWIND_TYPES, &mut resolver)?;
            for (token_type, fragment) in fragments {
                self.fragments.entry(token_type).or_default().merge(fragment);
            }
        }

        Ok(Artifact::new(
            target.destination.clone(),
            Format::CssVariables,
            emit_css(&stylesheet),
        ))
    }

    /// semantic + source 合并后生成 typography 类
    fn build_typography(&mut self, documents: &Documents) -> Result<Artifact> {
        tracing::info!("building typography classes");

        let tokens: TokenSet = documents
            .semantic
            .iter()
            .chain(documents.source.iter())
            .flat_map(|document| document.tokens.iter().cloned())
            .collect();

        let destination = self.project.config.typography_output.clone();
        self.claim(&destination, &PathBuf::from("typography"))?;

        let context = self.context(&tokens);
        let mut resolver = Resolver::new(&context, &self.formatters, self.naming.as_ref());
        resolver.validate()?;

        let stylesheet = typography_classes(&tokens, self.naming.as_ref());
        tracing::debug!(classes = stylesheet.rules.len(), "typography classes");

        Ok(Artifact::new(
            destination,
            Format::TypographyClasses,
            emit_css(&stylesheet),
        ))
    }

    fn tailwind_artifacts(&mut self) -> Vec<Artifact> {
        std::mem::take(&mut self.fragments)
            .into_iter()
            .map(|(token_type, fragment)| {
                Artifact::new(
                    fragment_destination(&token_type),
                    Format::TailwindVariables,
                    fragment.render(),
                )
            })
            .collect()
    }
}

/// 渲染全部产物
///
/// 顺序：source 文件 → 主题 → typography 类 → Tailwind 片段。
/// 任何错误都会中止，且此时尚未写入任何文件。
pub fn build_documents(project: &Project, documents: &Documents) -> Result<BuildOutput> {
    let config = &project.config;
    let mut builder = Builder::new(project, documents);
    let mut artifacts = Vec::new();

    for target in source_targets(&documents.source, config) {
        artifacts.push(builder.build_target(&target)?);
    }

    for target in theme_targets(&documents.themes, config)? {
        artifacts.push(builder.build_target(&target)?);
    }

    artifacts.push(builder.build_typography(documents)?);
    artifacts.extend(builder.tailwind_artifacts());

    Ok(BuildOutput { artifacts })
}

/// 发现、加载并渲染项目
pub fn build(project: &Project) -> Result<BuildOutput> {
    let discovery = discover(&project.root, &project.config.patterns)?;
    let documents = load_documents(&discovery)?;
    build_documents(project, &documents)
}
