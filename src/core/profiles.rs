//! Profile store: loads and validates named ocrmypdf argument profiles from
//! a YAML document. Validation is all-or-nothing, so a malformed entry never
//! yields a partially usable set, and every schema error names the profile
//! it came from.
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Default profiles document, relative to the working directory.
pub const DEFAULT_PROFILES_PATH: &str = "config/ocr_profiles.yaml";

/// Profile applied when none is selected.
pub const DEFAULT_PROFILE: &str = "balanced";

/// A named, validated bundle of ocrmypdf argument tokens. Immutable once
/// loaded; tokens are passed to the tool verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
    pub ocrmypdf_args: Vec<String>,
}

/// All profiles from one document, keyed by name. Iteration order is
/// sorted by name regardless of document order.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileSet {
    /// Load and validate every profile in the document at `path`.
    ///
    /// A missing file, an unparseable document, a top-level value that is
    /// not a mapping, or any malformed entry fails the whole load. An
    /// empty document yields an empty set.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let doc: Value = serde_yaml::from_str(&text).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mapping = match &doc {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(Error::ConfigParse {
                    path: path.to_path_buf(),
                    reason: "top-level document must be a mapping of profile names".to_string(),
                });
            }
        };

        let mut profiles = BTreeMap::new();
        for (key, body) in mapping {
            let name = key.as_str().ok_or_else(|| Error::ConfigParse {
                path: path.to_path_buf(),
                reason: format!("profile names must be strings, got: {key:?}"),
            })?;
            profiles.insert(name.to_string(), parse_profile(name, body)?);
        }

        debug!(path = %path.display(), profiles = profiles.len(), "loaded OCR profiles");
        Ok(Self { profiles })
    }

    /// Look up a profile by name. Unknown names are fatal; the error lists
    /// what is available.
    pub fn resolve(&self, name: &str) -> Result<&Profile> {
        self.profiles.get(name).ok_or_else(|| Error::UnknownProfile {
            profile: name.to_string(),
            available: self
                .profiles
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn parse_profile(name: &str, body: &Value) -> Result<Profile> {
    if !body.is_mapping() {
        return Err(schema_error(name, "profile body must be a mapping"));
    }

    let description = match body.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => {
            return Err(schema_error(
                name,
                &format!("'description' must be a scalar, got: {other:?}"),
            ));
        }
    };

    let ocrmypdf_args = match body.get("ocrmypdf_args") {
        None => return Err(schema_error(name, "missing required field 'ocrmypdf_args'")),
        Some(Value::Sequence(items)) => {
            let mut tokens = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(token) => tokens.push(token.to_string()),
                    None => {
                        return Err(schema_error(
                            name,
                            &format!("'ocrmypdf_args' entries must be strings, got: {item:?}"),
                        ));
                    }
                }
            }
            tokens
        }
        Some(_) => {
            return Err(schema_error(
                name,
                "'ocrmypdf_args' must be a list of strings, not a scalar",
            ));
        }
    };

    Ok(Profile {
        name: name.to_string(),
        description,
        ocrmypdf_args,
    })
}

fn schema_error(name: &str, reason: &str) -> Error {
    Error::ProfileSchema {
        profile: name.to_string(),
        reason: reason.to_string(),
    }
}
