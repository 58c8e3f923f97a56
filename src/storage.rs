//! Reading and writing locale tables on disk.
//!
//! Tables are written nested by key segment (`{"nav": {"basic": "Basic"}}`),
//! the same shape the console ships its dictionaries in. Flat dotted keys are
//! accepted when reading, so both of these load to the same table:
//!
//! ```text
//! {"nav": {"basic": "Basic"}}
//! {"nav.basic": "Basic"}
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::table::LocaleTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        ext.parse()
            .map_err(|_| AppError::UnsupportedFormat(path.display().to_string()))
    }
}

impl FromStr for Format {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One level of a nested table document.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Node {
    Text(String),
    Group(IndexMap<String, Node>),
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or a table of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Node, E> {
        Ok(Node::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Node, E> {
        Ok(Node::Text(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Node, A::Error> {
        let mut group = IndexMap::new();
        while let Some((key, value)) = map.next_entry::<String, Node>()? {
            if group.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key `{key}`")));
            }
            group.insert(key, value);
        }
        Ok(Node::Group(group))
    }
}

fn flatten(table: &mut LocaleTable, prefix: &str, group: IndexMap<String, Node>) -> Result<()> {
    for (segment, node) in group {
        let key = if prefix.is_empty() {
            segment
        } else {
            format!("{prefix}.{segment}")
        };
        match node {
            Node::Text(text) => table.insert(&key, text)?,
            Node::Group(children) => flatten(table, &key, children)?,
        }
    }
    Ok(())
}

fn nest(table: &LocaleTable) -> Result<IndexMap<String, Node>> {
    let mut root = IndexMap::new();
    for (key, value) in table.iter() {
        let mut segments: Vec<&str> = key.split('.').collect();
        let leaf = segments.pop().unwrap_or_default();
        let mut group = &mut root;
        for segment in segments {
            let node = group
                .entry(segment.to_string())
                .or_insert_with(|| Node::Group(IndexMap::new()));
            group = match node {
                Node::Group(children) => children,
                Node::Text(_) => {
                    return Err(AppError::KeyConflict {
                        locale: table.locale().to_string(),
                        key: key.to_string(),
                        other: segment.to_string(),
                    })
                }
            };
        }
        group.insert(leaf.to_string(), Node::Text(value.to_string()));
    }
    Ok(root)
}

fn parse_with_origin(
    text: &str,
    format: Format,
    locale: &str,
    origin: &Path,
) -> Result<LocaleTable> {
    let root: IndexMap<String, Node> = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| AppError::json(origin, e))?,
        Format::Toml => toml::from_str(text).map_err(|e| AppError::toml(origin, e))?,
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| AppError::yaml(origin, e))?,
    };
    let mut table = LocaleTable::new(locale);
    flatten(&mut table, "", root)?;
    Ok(table)
}

pub fn parse_table(text: &str, format: Format, locale: &str) -> Result<LocaleTable> {
    parse_with_origin(text, format, locale, Path::new(locale))
}

/// One `[namespace]` table per namespace with deeper paths as quoted dotted
/// keys. TOML puts a table's values ahead of its sub-tables, so nesting past
/// the namespace would reorder `form.limit.max` behind `form.name`.
fn toml_sections(root: IndexMap<String, Node>) -> IndexMap<String, Node> {
    fn dotted(prefix: &str, group: IndexMap<String, Node>, out: &mut IndexMap<String, Node>) {
        for (segment, node) in group {
            let key = if prefix.is_empty() {
                segment
            } else {
                format!("{prefix}.{segment}")
            };
            match node {
                Node::Text(_) => {
                    out.insert(key, node);
                }
                Node::Group(children) => dotted(&key, children, out),
            }
        }
    }

    root.into_iter()
        .map(|(namespace, node)| match node {
            Node::Group(children) => {
                let mut fields = IndexMap::new();
                dotted("", children, &mut fields);
                (namespace, Node::Group(fields))
            }
            text => (namespace, text),
        })
        .collect()
}

/// Render `table` nested by key prefix. Keys sharing a prefix are written
/// together, so a table already in that order (every loaded table is) reads
/// back with the same order in every format.
pub fn render_table(table: &LocaleTable, format: Format) -> Result<String> {
    let root = nest(table)?;
    let text = match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&root)
                .map_err(|e| AppError::JsonSerialize { source: e })?;
            json.push('\n');
            json
        }
        Format::Toml => toml::to_string(&toml_sections(root))
            .map_err(|e| AppError::TomlSerialize { source: e })?,
        Format::Yaml => {
            serde_yaml::to_string(&root).map_err(|e| AppError::yaml(table.locale(), e))?
        }
    };
    Ok(text)
}

pub fn load_table(path: &Path, locale: &str) -> Result<LocaleTable> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let table = parse_with_origin(&text, format, locale, path)?;
    log::debug!(
        "loaded {} keys for '{locale}' from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Write `table` to `path`, format taken from the extension.
///
/// The file is written to a temporary sibling first and renamed into place.
pub fn save_table(table: &LocaleTable, path: &Path) -> Result<()> {
    save_table_as(table, path, Format::from_path(path)?)
}

pub fn save_table_as(table: &LocaleTable, path: &Path, format: Format) -> Result<()> {
    let text = render_table(table, format)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| AppError::io(parent, e))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| AppError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| AppError::io(path, e.error))?;
    Ok(())
}

/// Build a catalog from every table file in `dir`; the file stem names the
/// locale (`zh.json` is `zh`).
pub fn load_dir(dir: &Path, default_locale: &str) -> Result<Catalog> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::io(dir, e))?;
    let mut files: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && Format::from_path(path).is_ok())
        .collect();
    files.sort();

    let mut catalog = Catalog::new(default_locale);
    for path in files {
        let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
            log::warn!("skip locale file with non UTF-8 name: {}", path.display());
            continue;
        };
        let table = load_table(&path, locale)?;
        catalog.add_table(table)?;
    }

    if catalog.locales().next().is_none() {
        return Err(AppError::localized(
            "storage.empty_dir",
            format!("目录中没有语言表: {}", dir.display()),
            format!("No locale tables found in {}", dir.display()),
        ));
    }
    log::info!(
        "loaded {} locale table(s) from {}",
        catalog.locales().count(),
        dir.display()
    );
    Ok(catalog)
}
