use crate::artifact::Artifact;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use swatch_core::{Result, TokenError};

/// 写入结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    /// 内容未变化而跳过的文件
    pub unchanged: Vec<PathBuf>,
}

/// 过期原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Missing,
    Changed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleArtifact {
    pub destination: PathBuf,
    pub reason: Staleness,
}

fn io_error(path: &Path, source: std::io::Error) -> TokenError {
    TokenError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// 磁盘上已有文件的摘要，不存在时返回 None
fn existing_digest(path: &Path) -> Result<Option<blake3::Hash>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(blake3::hash(&bytes))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, e)),
    }
}

/// 将全部产物写入 build 目录
///
/// 内容摘要与磁盘上一致的文件不重写。
pub fn write_artifacts(build_dir: &Path, artifacts: &[Artifact]) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    for artifact in artifacts {
        let path = build_dir.join(&artifact.destination);

        if existing_digest(&path)? == Some(artifact.digest()) {
            tracing::debug!(file = %path.display(), "unchanged, skipping");
            report.unchanged.push(artifact.destination.clone());
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        fs::write(&path, &artifact.contents).map_err(|e| io_error(&path, e))?;

        tracing::info!(file = %path.display(), format = %artifact.format, "wrote artifact");
        report.written.push(artifact.destination.clone());
    }

    Ok(report)
}

/// 比较产物与磁盘内容，返回缺失或过期的文件
pub fn check_artifacts(build_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<StaleArtifact>> {
    let mut stale = Vec::new();

    for artifact in artifacts {
        let path = build_dir.join(&artifact.destination);
        let reason = match existing_digest(&path)? {
            None => Some(Staleness::Missing),
            Some(digest) if digest != artifact.digest() => Some(Staleness::Changed),
            Some(_) => None,
        };

        if let Some(reason) = reason {
            stale.push(StaleArtifact {
                destination: artifact.destination.clone(),
                reason,
            });
        }
    }

    Ok(stale)
}
