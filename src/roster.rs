use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Format, Json, Toml};
use figment::Figment;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Deserialize;
use table_seating_generator::{
    Member, MemberId, TableCapacity, TableDefinition, TableId, TagId,
};
use tracing::debug;

const ID_LENGTH: usize = 9;

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("could not read roster {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported roster format {0:?}, expected a .toml or .json file")]
    UnsupportedFormat(PathBuf),
    #[error("invalid roster: {0}")]
    Invalid(#[from] figment::Error),
}

#[derive(Deserialize, Debug)]
struct RosterDocument {
    #[serde(default)]
    tables: Vec<TableEntry>,
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

#[derive(Deserialize, Debug)]
struct TableEntry {
    capacity: i64,
    #[serde(default = "one")]
    count: usize,
}

const fn one() -> usize {
    1
}

/// Members entered together. Without a name they are untagged.
#[derive(Deserialize, Debug)]
struct GroupEntry {
    name: Option<String>,
    #[serde(default)]
    members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

/// Tables and members as collected before seating.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub tables: Vec<TableDefinition>,
    pub tags: Vec<Tag>,
    pub members: Vec<Member>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_owned(),
            source,
        })?;
        let figment = match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Figment::from(Toml::string(&contents)),
            Some("json") => Figment::from(Json::string(&contents)),
            _ => return Err(RosterError::UnsupportedFormat(path.to_owned())),
        };
        let document: RosterDocument = figment.extract()?;
        let roster = Self::from_document(document, &mut rand::thread_rng());
        debug!(
            tables = roster.tables.len(),
            tags = roster.tags.len(),
            members = roster.members.len(),
            "loaded roster from {}",
            path.display()
        );
        Ok(roster)
    }

    fn from_document<R: Rng>(document: RosterDocument, rng: &mut R) -> Self {
        let mut roster = Self::default();

        for entry in document.tables {
            for _ in 0..entry.count {
                roster.tables.push(TableDefinition {
                    id: TableId(random_id(rng)),
                    capacity: TableCapacity(entry.capacity),
                });
            }
        }

        let mut tags_by_label: HashMap<String, TagId> = HashMap::new();
        for group in document.groups {
            let tag_id = group
                .name
                .as_deref()
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(|label| {
                    tags_by_label
                        .entry(label.to_owned())
                        .or_insert_with(|| {
                            let tag = Tag {
                                id: TagId(random_id(rng)),
                                label: label.to_owned(),
                            };
                            let id = tag.id.clone();
                            roster.tags.push(tag);
                            id
                        })
                        .clone()
                });

            roster.members.extend(
                group
                    .members
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(|name| Member {
                        id: MemberId(random_id(rng)),
                        name: name.to_owned(),
                        tag_id: tag_id.clone(),
                    }),
            );
        }

        roster
    }

    #[must_use]
    pub fn tag_label(&self, tag_id: &TagId) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| &tag.id == tag_id)
            .map(|tag| tag.label.as_str())
    }
}

fn random_id<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(Alphanumeric)
        .take(ID_LENGTH)
        .map(|byte| char::from(byte.to_ascii_lowercase()))
        .collect()
}
