use serde::Serialize;

use crate::generator::Seating;
use crate::model::TableDefinition;

/// Seats against members before generating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacitySummary {
    pub total_seats: usize,
    pub member_count: usize,
}

impl CapacitySummary {
    #[must_use]
    pub fn of(table_definitions: &[TableDefinition], member_count: usize) -> Self {
        Self {
            total_seats: table_definitions
                .iter()
                .map(|definition| definition.capacity.seats())
                .sum(),
            member_count,
        }
    }

    #[must_use]
    pub const fn fits(&self) -> bool {
        self.member_count <= self.total_seats
    }

    #[must_use]
    pub const fn missing_seats(&self) -> usize {
        self.member_count.saturating_sub(self.total_seats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatingSummary {
    pub seated: usize,
    pub unassigned: usize,
    pub empty_tables: usize,
}

impl Seating<'_> {
    #[must_use]
    pub fn summary(&self) -> SeatingSummary {
        SeatingSummary {
            seated: self.tables.iter().map(|table| table.members.len()).sum(),
            unassigned: self.unassigned.len(),
            empty_tables: self
                .tables
                .iter()
                .filter(|table| table.members.is_empty())
                .count(),
        }
    }
}
