//! Assigns members to capacity-bounded tables.
//!
//! Tables are filled one after another in the order they are defined, and members
//! sharing a tag are spread over the fill order. Every call shuffles anew, so
//! calling [`generate`] again is how an arrangement gets reshuffled.

pub mod generator;
pub mod model;
pub mod naming;
pub mod random;
pub mod summary;

pub use generator::{generate, generate_with, placement_list, Seating};
pub use model::{Member, MemberId, Table, TableCapacity, TableDefinition, TableId, TagId};
pub use random::{RandomSource, RngSource};
pub use summary::{CapacitySummary, SeatingSummary};
