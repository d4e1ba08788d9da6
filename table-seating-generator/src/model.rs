// ids are opaque to the generator, it only compares tag ids for equality

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub String);

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub String);

/// Number of seats at a table.
///
/// Kept signed so that a zero or negative capacity coming from the caller can be
/// represented; such a table never has room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableCapacity(pub i64);

impl TableCapacity {
    /// Seats actually usable, zero for non-positive capacities.
    #[must_use]
    pub fn seats(self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub tag_id: Option<TagId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub id: TableId,
    pub capacity: TableCapacity,
}

/// A table of the generated arrangement. Members are in assignment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table<'a> {
    pub id: TableId,
    pub name: String,
    pub capacity: TableCapacity,
    pub members: Vec<&'a Member>,
}

impl<'a> Table<'a> {
    #[must_use]
    pub fn has_room(&self) -> bool {
        self.members.len() < self.capacity.seats()
    }

    #[must_use]
    pub fn free_seats(&self) -> usize {
        self.capacity.seats().saturating_sub(self.members.len())
    }

    /// Splits the members into the two facing sides of the table, the first side
    /// getting the extra member when the count is odd.
    #[must_use]
    pub fn rows(&self) -> (&[&'a Member], &[&'a Member]) {
        self.members.split_at(self.members.len().div_ceil(2))
    }
}

#[cfg(test)]
mod tests {
    use super::{Member, MemberId, Table, TableCapacity, TableId};

    fn member(id: &str) -> Member {
        Member {
            id: MemberId(id.to_owned()),
            name: id.to_owned(),
            tag_id: None,
        }
    }

    #[test]
    fn non_positive_capacity_has_no_seats() {
        assert_eq!(TableCapacity(0).seats(), 0);
        assert_eq!(TableCapacity(-3).seats(), 0);
        assert_eq!(TableCapacity(4).seats(), 4);
    }

    #[test]
    fn rows_put_the_extra_member_first() {
        let members: Vec<Member> = ["a", "b", "c", "d", "e"].into_iter().map(member).collect();
        let table = Table {
            id: TableId("t".to_owned()),
            name: "Table A".to_owned(),
            capacity: TableCapacity(6),
            members: members.iter().collect(),
        };

        let (top, bottom) = table.rows();
        assert_eq!(top.len(), 3);
        assert_eq!(bottom.len(), 2);
        assert_eq!(top[0].id, MemberId("a".to_owned()));
        assert_eq!(bottom[0].id, MemberId("d".to_owned()));
        assert_eq!(table.free_seats(), 1);
        assert!(table.has_room());
    }

    #[test]
    fn rows_of_an_empty_table_are_empty() {
        let table = Table {
            id: TableId("t".to_owned()),
            name: "Table A".to_owned(),
            capacity: TableCapacity(2),
            members: Vec::new(),
        };

        let (top, bottom) = table.rows();
        assert!(top.is_empty());
        assert!(bottom.is_empty());
    }
}
