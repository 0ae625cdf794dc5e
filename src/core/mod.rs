pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use errors::{AggregationError, Error, FormatError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person being grouped. The name is the aggregation key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MemberId>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    pub fn with_id(name: impl Into<String>, id: MemberId) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
        }
    }
}

/// Members seated together in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    members: Vec<Member>,
}

impl Group {
    pub fn new(id: GroupId, members: Vec<Member>) -> Self {
        Self { id, members }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One complete assignment of members to groups, keyed by group id.
///
/// Rounds are read-only; use [`RoundBuilder`] to assemble one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    groups: BTreeMap<GroupId, Group>,
}

impl Round {
    pub fn new(groups: impl IntoIterator<Item = Group>) -> Self {
        let mut builder = RoundBuilder::new();
        for group in groups {
            for member in group.members {
                builder.add_member(member, group.id);
            }
        }
        builder.build()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Groups in ascending id order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn member_count(&self) -> usize {
        self.groups.values().map(Group::len).sum()
    }
}

/// Accumulates members into groups while a round is being parsed.
#[derive(Debug, Default)]
pub struct RoundBuilder {
    groups: BTreeMap<GroupId, Vec<Member>>,
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member to a group, creating the group on first reference.
    pub fn add_member(&mut self, member: Member, id: GroupId) -> &mut Self {
        self.groups.entry(id).or_default().push(member);
        self
    }

    /// Place one member into each of the listed groups.
    pub fn add_to_groups(&mut self, member: &Member, ids: &[GroupId]) -> &mut Self {
        for &id in ids {
            self.add_member(member.clone(), id);
        }
        self
    }

    pub fn build(self) -> Round {
        Round {
            groups: self
                .groups
                .into_iter()
                .map(|(id, members)| (id, Group::new(id, members)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_group_on_first_reference() {
        let mut builder = RoundBuilder::new();
        builder
            .add_member(Member::new("alice"), GroupId(2))
            .add_member(Member::new("bob"), GroupId(1))
            .add_member(Member::new("carol"), GroupId(2));
        let round = builder.build();

        assert_eq!(round.group_count(), 2);
        assert_eq!(round.member_count(), 3);
        let names: Vec<_> = round
            .group(GroupId(2))
            .unwrap()
            .members()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["alice", "carol"]);
    }

    #[test]
    fn test_groups_iterate_in_id_order() {
        let round = Round::new(vec![
            Group::new(GroupId(5), vec![Member::new("e")]),
            Group::new(GroupId(-1), vec![Member::new("a")]),
            Group::new(GroupId(3), vec![Member::new("c")]),
        ]);
        let ids: Vec<_> = round.groups().map(Group::id).collect();
        assert_eq!(ids, vec![GroupId(-1), GroupId(3), GroupId(5)]);
    }

    #[test]
    fn test_add_to_groups_places_member_in_each() {
        let mut builder = RoundBuilder::new();
        builder.add_to_groups(&Member::new("dave"), &[GroupId(1), GroupId(4)]);
        let round = builder.build();
        assert_eq!(round.group(GroupId(1)).unwrap().len(), 1);
        assert_eq!(round.group(GroupId(4)).unwrap().len(), 1);
    }

    #[test]
    fn test_round_new_merges_groups_with_same_id() {
        let round = Round::new(vec![
            Group::new(GroupId(1), vec![Member::new("a")]),
            Group::new(GroupId(1), vec![Member::new("b")]),
        ]);
        assert_eq!(round.group_count(), 1);
        assert_eq!(round.group(GroupId(1)).unwrap().len(), 2);
    }
}
