//! Information sources configured for a project.
//!
//! The data source reports sources as loosely typed records
//! (`name`, `type`, free-form `attributes`). They are converted once, at the
//! boundary, into [`InformationSource`] whose [`SourceKind`] carries typed
//! fields per kind. Attributes that are missing or not strings become `None`
//! and are simply not rendered.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

// ===== RawSource =====

/// Source record exactly as the data source reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSource {
    /// Display name.
    pub name: String,
    /// Kind tag such as `github` or `notion`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific attributes.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl RawSource {
    /// Build a raw record from string attributes (used by the dummy backend and tests).
    pub fn new<'a>(
        name: impl Into<String>,
        kind: impl Into<String>,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                .collect(),
        }
    }
}

// ===== SourceKind =====

/// Typed attributes per source kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceKind {
    /// GitHub repository.
    GitHub {
        /// `owner/name` slug.
        repo: Option<String>,
        /// Browser URL.
        url: Option<String>,
    },
    /// Notion workspace.
    Notion {
        /// Workspace display name.
        workspace: Option<String>,
        /// Workspace identifier.
        workspace_id: Option<String>,
    },
    /// Linear team/project.
    Linear {
        /// Team name.
        team: Option<String>,
        /// Project name.
        project: Option<String>,
    },
    /// Google Docs folder/document.
    GoogleDocs {
        /// Folder name.
        folder: Option<String>,
        /// Document identifier.
        doc_id: Option<String>,
    },
    /// Any kind this client does not know yet.
    Unknown {
        /// Original kind tag.
        kind: String,
        /// Attributes as reported, ordered by key.
        attributes: BTreeMap<String, Value>,
    },
}

impl SourceKind {
    /// Kind tag as reported by the data source.
    pub fn tag(&self) -> &str {
        match self {
            SourceKind::GitHub { .. } => "github",
            SourceKind::Notion { .. } => "notion",
            SourceKind::Linear { .. } => "linear",
            SourceKind::GoogleDocs { .. } => "googledocs",
            SourceKind::Unknown { kind, .. } => kind,
        }
    }

    /// Icon shown next to the kind tag.
    pub fn icon(&self) -> &'static str {
        match self.tag() {
            "github" => "🐙",
            "notion" => "📝",
            "linear" => "📊",
            "googledocs" => "📄",
            "gitlab" => "🦊",
            "jira" => "🎫",
            "confluence" => "🌐",
            _ => "📦",
        }
    }

    /// Labelled attribute values to display, in display order.
    ///
    /// Missing typed fields are omitted. Unknown kinds list every attribute
    /// with strings shown raw and other values in their JSON form.
    pub fn display_fields(&self) -> Vec<(String, String)> {
        fn push(out: &mut Vec<(String, String)>, label: &str, value: &Option<String>) {
            if let Some(value) = value {
                out.push((label.to_string(), value.clone()));
            }
        }

        let mut out = Vec::new();
        match self {
            SourceKind::GitHub { repo, url } => {
                push(&mut out, "Repository", repo);
                push(&mut out, "URL", url);
            }
            SourceKind::Notion {
                workspace,
                workspace_id,
            } => {
                push(&mut out, "Workspace", workspace);
                push(&mut out, "Workspace ID", workspace_id);
            }
            SourceKind::Linear { team, project } => {
                push(&mut out, "Team", team);
                push(&mut out, "Project", project);
            }
            SourceKind::GoogleDocs { folder, doc_id } => {
                push(&mut out, "Folder", folder);
                push(&mut out, "Document ID", doc_id);
            }
            SourceKind::Unknown { attributes, .. } => {
                for (key, value) in attributes {
                    let shown = match value {
                        Value::String(s) => s.clone(),
                        Value::Null => continue,
                        other => other.to_string(),
                    };
                    out.push((key.clone(), shown));
                }
            }
        }
        out
    }
}

// ===== InformationSource =====

/// A project information source with typed attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct InformationSource {
    /// Display name.
    pub name: String,
    /// Kind with its typed attributes.
    pub kind: SourceKind,
}

impl From<RawSource> for InformationSource {
    fn from(raw: RawSource) -> Self {
        let RawSource {
            name,
            kind,
            mut attributes,
        } = raw;

        let kind = match kind.as_str() {
            "github" => SourceKind::GitHub {
                repo: take_string(&mut attributes, "repo"),
                url: take_string(&mut attributes, "url"),
            },
            "notion" => SourceKind::Notion {
                workspace: take_string(&mut attributes, "workspace"),
                workspace_id: take_string(&mut attributes, "workspace_id"),
            },
            "linear" => SourceKind::Linear {
                team: take_string(&mut attributes, "team"),
                project: take_string(&mut attributes, "project"),
            },
            "googledocs" => SourceKind::GoogleDocs {
                folder: take_string(&mut attributes, "folder"),
                doc_id: take_string(&mut attributes, "doc_id"),
            },
            other => SourceKind::Unknown {
                kind: other.to_string(),
                attributes,
            },
        };

        Self { name, kind }
    }
}

/// Remove `key` and keep it only if it holds a string.
fn take_string(attributes: &mut BTreeMap<String, Value>, key: &str) -> Option<String> {
    match attributes.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
