//! Roster members and roster files

mod entity;

use std::collections::HashSet;

use covey_chart::{EffectivenessTable, Type};
use serde::Deserialize;

pub use entity::Entity;

use crate::SearchError;

/// An ordered list of roster members
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Entity>,
}

/// On-disk shape of a roster file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterFile {
    #[serde(default)]
    member: Vec<MemberRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemberRecord {
    name: String,
    primary: String,
    #[serde(default)]
    secondary: Option<String>,
    overlay: String,
    weight: u32,
}

impl MemberRecord {
    fn parse_type(&self, name: &str) -> Result<Type, SearchError> {
        Type::from_name(name).ok_or_else(|| SearchError::UnknownTypeName {
            entity: self.name.clone(),
            name: name.to_string(),
        })
    }

    fn into_entity(self) -> Result<Entity, SearchError> {
        if self.name.trim().is_empty() {
            return Err(SearchError::InvalidEntity("member with an empty name".to_string()));
        }

        let primary_type = self.parse_type(&self.primary)?;
        let secondary_type = match self.secondary.as_deref() {
            Some(s) => Type::parse_optional(s).map_err(|_| SearchError::UnknownTypeName {
                entity: self.name.clone(),
                name: s.to_string(),
            })?,
            None => None,
        };
        let overlay_type = self.parse_type(&self.overlay)?;

        Ok(Entity::new(self.name, primary_type, secondary_type, overlay_type, self.weight))
    }
}

impl TryFrom<RosterFile> for Roster {
    type Error = SearchError;

    fn try_from(file: RosterFile) -> Result<Self, Self::Error> {
        let members = file
            .member
            .into_iter()
            .map(MemberRecord::into_entity)
            .collect::<Result<Vec<_>, _>>()?;
        Roster::new(members)
    }
}

impl Roster {
    /// Build a roster; member names must be unique
    pub fn new(members: Vec<Entity>) -> Result<Self, SearchError> {
        let mut names = HashSet::new();
        for member in &members {
            if !names.insert(member.name.as_str()) {
                return Err(SearchError::InvalidEntity(format!(
                    "duplicate member name '{}'",
                    member.name
                )));
            }
        }
        Ok(Self { members })
    }

    /// Parse a TOML roster document (`[[member]]` tables)
    pub fn from_toml_str(s: &str) -> Result<Self, SearchError> {
        let file: RosterFile = toml::from_str(s)?;
        file.try_into()
    }

    /// Parse a JSON roster document (`{"member": [...]}`)
    pub fn from_json_str(s: &str) -> Result<Self, SearchError> {
        let file: RosterFile = serde_json::from_str(s)?;
        file.try_into()
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look a member up by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Check that every member's types are in the table's catalog
    pub fn check_catalog(&self, table: &EffectivenessTable) -> Result<(), SearchError> {
        check_catalog(&self.members, table)
    }
}

pub(crate) fn check_catalog(members: &[Entity], table: &EffectivenessTable) -> Result<(), SearchError> {
    for member in members {
        if let Some(ty) = member.types().find(|t| !table.contains(*t)) {
            return Err(SearchError::UnknownType {
                entity: member.name.clone(),
                ty,
            });
        }
    }
    Ok(())
}
