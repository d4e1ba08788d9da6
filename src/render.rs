use std::io::{self, Write};

use itertools::Itertools as _;
use table_seating_generator::{Member, Seating, SeatingSummary};

use crate::roster::Roster;

fn label(member: &Member, roster: &Roster) -> String {
    match member
        .tag_id
        .as_ref()
        .and_then(|tag_id| roster.tag_label(tag_id))
    {
        Some(tag) => format!("{} ({tag})", member.name),
        None => member.name.clone(),
    }
}

fn row(members: &[&Member], roster: &Roster) -> String {
    members.iter().map(|member| label(member, roster)).join(", ")
}

pub fn render_text<W: Write>(
    out: &mut W,
    seating: &Seating<'_>,
    roster: &Roster,
) -> io::Result<()> {
    for table in &seating.tables {
        writeln!(
            out,
            "{} {}/{}",
            table.name,
            table.members.len(),
            table.capacity.seats()
        )?;
        if table.members.is_empty() {
            writeln!(out, "  (empty)")?;
        } else {
            let (top, bottom) = table.rows();
            writeln!(out, "  | {}", row(top, roster))?;
            if !bottom.is_empty() {
                writeln!(out, "  | {}", row(bottom, roster))?;
            }
        }
    }

    if !seating.unassigned.is_empty() {
        writeln!(out, "Unassigned {}", seating.unassigned.len())?;
        for member in &seating.unassigned {
            writeln!(out, "  - {}", label(member, roster))?;
        }
    }

    let SeatingSummary {
        seated,
        unassigned,
        empty_tables,
    } = seating.summary();
    writeln!(
        out,
        "{seated} seated, {unassigned} unassigned, {empty_tables} empty tables"
    )
}

pub fn render_json<W: Write>(out: &mut W, seating: &Seating<'_>) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, seating)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use table_seating_generator::{
        generate_with, Member, MemberId, RandomSource, TableCapacity, TableDefinition, TableId,
        TagId,
    };

    use super::{render_json, render_text};
    use crate::roster::{Roster, Tag};

    struct KeepOrder;

    impl RandomSource for KeepOrder {
        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }

    fn roster() -> Roster {
        let tag = TagId("tennis".to_owned());
        let member = |name: &str, tag_id: Option<&TagId>| Member {
            id: MemberId(name.to_lowercase()),
            name: name.to_owned(),
            tag_id: tag_id.cloned(),
        };
        Roster {
            tables: vec![
                TableDefinition {
                    id: TableId("1".to_owned()),
                    capacity: TableCapacity(3),
                },
                TableDefinition {
                    id: TableId("2".to_owned()),
                    capacity: TableCapacity(2),
                },
            ],
            members: vec![
                member("Aiko", Some(&tag)),
                member("Ben", None),
                member("Chika", None),
                member("Dan", None),
                member("Eve", None),
                member("Finn", None),
            ],
            tags: vec![Tag {
                id: tag,
                label: "Tennis club".to_owned(),
            }],
        }
    }

    #[test]
    fn text_lists_tables_rows_and_overflow() {
        let roster = roster();
        let seating = generate_with(&roster.members, &roster.tables, &mut KeepOrder);
        let mut out = Vec::new();
        render_text(&mut out, &seating, &roster).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Table A 3/3\n  | Aiko (Tennis club), Ben\n  | Chika\nTable B 2/2\n  | Dan\n  | \
             Eve\nUnassigned 1\n  - Finn\n5 seated, 1 unassigned, 0 empty tables\n"
        );
    }

    #[test]
    fn json_has_tables_and_unassigned() {
        let roster = roster();
        let seating = generate_with(&roster.members, &roster.tables, &mut KeepOrder);
        let mut out = Vec::new();
        render_json(&mut out, &seating).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["tables"][0]["name"], "Table A");
        assert_eq!(value["tables"][0]["capacity"], 3);
        assert_eq!(value["tables"][0]["members"][0]["tag_id"], "tennis");
        assert_eq!(value["tables"][1]["members"][1]["name"], "Eve");
        assert_eq!(value["unassigned"][0]["id"], "finn");
    }
}
