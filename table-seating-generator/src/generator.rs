use std::collections::HashMap;

use itertools::{Either, Itertools as _};
use serde::Serialize;
use tracing::{debug, warn};

use crate::model::{Member, Table, TableDefinition, TagId};
use crate::naming::table_name;
use crate::random::{RandomSource, RngSource};

/// Result of one generation: every input member is either at exactly one table
/// or in `unassigned`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seating<'a> {
    pub tables: Vec<Table<'a>>,
    pub unassigned: Vec<&'a Member>,
}

/// Generates a fresh random arrangement using the thread-local generator.
#[must_use]
pub fn generate<'a>(members: &'a [Member], table_definitions: &[TableDefinition]) -> Seating<'a> {
    generate_with(
        members,
        table_definitions,
        &mut RngSource(rand::thread_rng()),
    )
}

/// Generates an arrangement with an injected source of randomness.
///
/// Tables are filled strictly in definition order, each one to capacity before
/// the next receives anyone. Members sharing a tag are interleaved with the
/// other tags before filling so that they end up spread over the tables.
pub fn generate_with<'a, S: RandomSource>(
    members: &'a [Member],
    table_definitions: &[TableDefinition],
    source: &mut S,
) -> Seating<'a> {
    let mut tables: Vec<Table<'a>> = table_definitions
        .iter()
        .enumerate()
        .map(|(index, definition)| Table {
            id: definition.id.clone(),
            name: table_name(index),
            capacity: definition.capacity,
            members: Vec::new(),
        })
        .collect();

    let placement = placement_list(members, source);

    let mut unassigned = Vec::new();
    let mut cursor = 0;
    for member in placement {
        while tables.get(cursor).is_some_and(|table| !table.has_room()) {
            cursor += 1;
        }
        match tables.get_mut(cursor) {
            Some(table) => table.members.push(member),
            None => unassigned.push(member),
        }
    }

    debug!(
        members = members.len(),
        tables = tables.len(),
        unassigned = unassigned.len(),
        "generated seating"
    );
    if !unassigned.is_empty() {
        warn!(
            "{} of {} members did not fit at any table",
            unassigned.len(),
            members.len()
        );
    }

    Seating { tables, unassigned }
}

/// Orders all members for sequential filling.
///
/// Each tag group and the untagged pool are shuffled on their own. The tag groups
/// are then taken round-robin, one member of every group per round, and the
/// untagged pool is appended at the end.
pub fn placement_list<'a, S: RandomSource>(
    members: &'a [Member],
    source: &mut S,
) -> Vec<&'a Member> {
    let (mut groups, mut untagged) = group_by_tag(members);

    for group in &mut groups {
        source.shuffle(group);
    }
    source.shuffle(&mut untagged);

    let rounds = groups.iter().map(Vec::len).max().unwrap_or(0);
    debug!(groups = groups.len(), rounds, untagged = untagged.len(), "interleaving");

    (0..rounds)
        .flat_map(|round| {
            groups
                .iter()
                .filter_map(move |group| group.get(round).copied())
        })
        .chain(untagged)
        .collect()
}

/// Tagged members grouped by tag in order of first occurrence, and the untagged ones.
fn group_by_tag(members: &[Member]) -> (Vec<Vec<&Member>>, Vec<&Member>) {
    let (tagged, untagged): (Vec<(&TagId, &Member)>, Vec<&Member>) =
        members.iter().partition_map(|member| match &member.tag_id {
            Some(tag_id) => Either::Left((tag_id, member)),
            None => Either::Right(member),
        });

    let mut positions: HashMap<&TagId, usize> = HashMap::new();
    let groups = tagged
        .into_iter()
        .fold(Vec::<Vec<&Member>>::new(), |mut acc, (tag_id, member)| {
            let position = *positions.entry(tag_id).or_insert_with(|| {
                acc.push(Vec::new());
                acc.len() - 1
            });
            acc[position].push(member);
            acc
        });

    (groups, untagged)
}
