//! JSON token definitions
//!
//! Token files are nested JSON groups. Any object carrying a `value` (or
//! `$value`) key is a token; the keys leading to it form its dotted name.
//!
//! ```json
//! {
//!   "primitive": {
//!     "color": {
//!       "blue": {
//!         "500": { "value": "#2563eb", "type": "color", "attributes": { "themable": true } }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Values may alias another token with `{dotted.name}`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use tokio::fs;

use crate::error::{IoContext, JsonContext, TokensError, TokensResult};
use crate::tokens::name::{css_var_name_from_token, TokenLevel, TOKEN_SEPARATOR};

const VALUE_KEYS: [&str; 2] = ["value", "$value"];
const TYPE_KEYS: [&str; 2] = ["type", "$type"];
const TOKEN_FILE_EXTENSION: &str = "json";

/// A single token flattened out of a token file
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDefinition {
    /// Dotted token name, e.g. `primitive.color.blue.500`
    pub path: String,
    /// Raw JSON value
    pub value: Value,
    /// Declared type, if any
    pub token_type: Option<String>,
    /// Declared themable attribute, if any
    pub themable: Option<bool>,
    /// File the token was defined in
    pub file: PathBuf,
}

fn alias_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\{([A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)*)\}$").expect("Failed to compile alias regex"))
}

impl TokenDefinition {
    pub fn level(&self) -> TokenLevel {
        TokenLevel::from_token_name(&self.path)
    }

    /// Second path segment, e.g. `color` for `primitive.color.blue.500`
    pub fn category(&self) -> Option<&str> {
        self.path.split(TOKEN_SEPARATOR).nth(1)
    }

    /// Declared type, falling back to the category segment
    pub fn effective_type(&self) -> Option<&str> {
        self.token_type.as_deref().or_else(|| self.category())
    }

    pub fn css_var_name(&self) -> String {
        css_var_name_from_token(&self.path)
    }

    /// Target of a `{dotted.name}` alias value
    pub fn alias_target(&self) -> Option<&str> {
        let text = self.value.as_str()?.trim();
        alias_regex().captures(text).and_then(|captures| captures.get(1)).map(|m| m.as_str())
    }
}

/// Flatten a parsed token tree into definitions, in document order.
pub fn flatten_tokens(root: &Value, file: &Path) -> TokensResult<Vec<TokenDefinition>> {
    let Value::Object(groups) = root else {
        return Err(TokensError::InvalidTokenFile {
            file: file.to_path_buf(),
            message: "top level must be a JSON object".to_string(),
        });
    };

    let mut definitions = Vec::new();
    let mut path = Vec::new();
    collect_tokens(groups, &mut path, file, &mut definitions);
    Ok(definitions)
}

/// Parse token file content.
pub fn parse_token_json(content: &str, file: &Path) -> TokensResult<Vec<TokenDefinition>> {
    let root: Value = serde_json::from_str(content)
        .with_json_context(&format!("Failed to parse token file {}", file.display()))?;
    flatten_tokens(&root, file)
}

/// Read and flatten one token file.
pub async fn load_token_file(path: &Path) -> TokensResult<Vec<TokenDefinition>> {
    let content = fs::read_to_string(path)
        .await
        .with_io_context(&format!("Failed to read token file {}", path.display()))?;
    let definitions = parse_token_json(&content, path)?;
    log::debug!("Loaded {} tokens from {}", definitions.len(), path.display());
    Ok(definitions)
}

/// Read every `*.json` file under `dir` (recursively, in sorted path order).
pub async fn load_token_dir(dir: &Path) -> TokensResult<Vec<TokenDefinition>> {
    let files = find_token_files(dir).await?;
    log::info!("Found {} token files in {}", files.len(), dir.display());

    let mut definitions = Vec::new();
    for file in files {
        definitions.extend(load_token_file(&file).await?);
    }
    Ok(definitions)
}

async fn find_token_files(dir: &Path) -> TokensResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let mut entries = fs::read_dir(&current)
            .await
            .with_io_context(&format!("Failed to read token directory {}", current.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_dir() {
                pending.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some(TOKEN_FILE_EXTENSION) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn collect_tokens(group: &Map<String, Value>, path: &mut Vec<String>, file: &Path, out: &mut Vec<TokenDefinition>) {
    for (key, child) in group {
        // `$schema`, `$description` and friends are metadata, not groups
        if key.starts_with('$') {
            continue;
        }
        let Value::Object(child) = child else {
            continue;
        };

        path.push(key.clone());
        match token_value(child) {
            Some(value) => out.push(TokenDefinition {
                path: path.join("."),
                value: value.clone(),
                token_type: first_string(child, &TYPE_KEYS),
                themable: themable_attribute(child),
                file: file.to_path_buf(),
            }),
            None => collect_tokens(child, path, file, out),
        }
        path.pop();
    }
}

fn token_value(node: &Map<String, Value>) -> Option<&Value> {
    VALUE_KEYS.iter().find_map(|key| node.get(*key))
}

fn first_string(node: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| node.get(*key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `attributes.themable` wins over a top-level `themable`
fn themable_attribute(node: &Map<String, Value>) -> Option<bool> {
    node.get("attributes")
        .and_then(|attributes| attributes.get("themable"))
        .or_else(|| node.get("themable"))
        .and_then(Value::as_bool)
}
