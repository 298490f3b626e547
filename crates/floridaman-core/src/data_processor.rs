use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::HeadlineRecord;

/// Loads headline datasets into memory.
///
/// Accepted shapes, detected per file:
/// - a JSON array of records (`[...]`)
/// - JSON lines, one record per line
/// - a script wrapper such as `const floridaManData = [...];`
///
/// A directory is walked recursively and every `.json`, `.jsonl` and `.js`
/// file is loaded in sorted path order.
#[derive(Default)]
pub struct DataProcessor {
    limit: Option<usize>,
}

impl DataProcessor {
    pub fn new() -> Self { Self::default() }

    /// Stop after `limit` records.
    pub fn with_limit(limit: usize) -> Self { Self { limit: Some(limit) } }

    pub fn load(&self, path: &Path) -> Result<Vec<HeadlineRecord>> {
        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let files = if path.is_dir() { self.list_data_files(path) } else { vec![path.to_path_buf()] };
        if files.is_empty() {
            warn!(dir = %path.display(), "no dataset files found");
            return Ok(vec![]);
        }
        let mut records = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            debug!(file = %file_path.display(), "loading file {}/{}", file_index + 1, files.len());
            let content = self.read_file_content(file_path)?;
            records.extend(parse_records(&content)?);
            if let Some(limit) = self.limit {
                if records.len() >= limit {
                    records.truncate(limit);
                    info!(limit, "record limit reached");
                    break;
                }
            }
        }
        info!(files = files.len(), records = records.len(), "dataset loaded");
        Ok(records)
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }

    fn list_data_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl" | "js")))
            .collect();
        files.sort();
        files
    }
}

/// Parse one dataset file body into records.
pub fn parse_records(content: &str) -> Result<Vec<HeadlineRecord>> {
    let trimmed = content.trim().trim_start_matches('\u{feff}');
    if trimmed.is_empty() {
        return Ok(vec![]);
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    if !trimmed.starts_with('{') {
        return match script_array(trimmed) {
            Some(body) => Ok(serde_json::from_str(body)?),
            None => Err(Error::Operation("unrecognised dataset layout".into())),
        };
    }
    trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<HeadlineRecord>(line).map_err(Error::from))
        .collect()
}

/// Slice the array literal out of `<ident> = [ ... ];`.
fn script_array(content: &str) -> Option<&str> {
    let eq = content.find('=')?;
    let start = eq + content[eq..].find('[')?;
    let end = content.rfind(']')?;
    (end > start).then(|| &content[start..=end])
}
