//! Weekly timetable grid.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ScheduledSession, SlotClaim, TimeSlot};
use crate::store::ScheduleStore;

/// Restricts a grid to one faculty member, class-group or room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "by", content = "id", rename_all = "snake_case")]
pub enum GridFilter {
    /// Every session.
    #[default]
    All,
    /// Sessions taught by a faculty member.
    Faculty(String),
    /// Sessions attended by a class-group.
    ClassGroup(String),
    /// Sessions held in a room.
    Room(String),
}

impl GridFilter {
    /// The claim this filter selects on, if any.
    fn claim(&self) -> Option<SlotClaim<'_>> {
        match self {
            GridFilter::All => None,
            GridFilter::Faculty(id) => Some(SlotClaim::Faculty(id)),
            GridFilter::ClassGroup(id) => Some(SlotClaim::ClassGroup(id)),
            GridFilter::Room(id) => Some(SlotClaim::Room(id)),
        }
    }

    /// Returns true if the session passes the filter.
    pub fn matches(&self, session: &ScheduledSession) -> bool {
        self.claim().is_none_or(|claim| session.holds(claim))
    }
}

/// The sessions in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// The slot.
    pub slot: TimeSlot,
    /// Matching sessions, ordered by room.
    pub sessions: Vec<ScheduledSession>,
}

/// A full week of cells in grid order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGrid {
    /// The filter the grid was built with.
    pub filter: GridFilter,
    /// One cell per slot, Monday 09:00 first.
    pub cells: Vec<GridCell>,
}

impl WeeklyGrid {
    /// Returns the cell for a slot.
    pub fn cell(&self, slot: TimeSlot) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.slot == slot)
    }

    /// Number of sessions across all cells.
    pub fn session_count(&self) -> usize {
        self.cells.iter().map(|c| c.sessions.len()).sum()
    }
}

/// Lays the week's sessions out on the grid.
///
/// Every slot gets a cell, empty or not.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{SessionRequest, TimeSlot};
/// use timetable_engine::scheduling::{weekly_grid, GridFilter};
/// use timetable_engine::store::{MemoryScheduleStore, SessionWriter};
///
/// let mut schedule = MemoryScheduleStore::new();
/// let slot = TimeSlot::parse("Wednesday", "14:00").unwrap();
/// schedule.insert_session(&SessionRequest::new(slot, "F1", "S1", "C1", "R1")).unwrap();
///
/// let grid = weekly_grid(&schedule, &GridFilter::Room("R1".to_string())).unwrap();
/// assert_eq!(grid.cells.len(), 30);
/// assert_eq!(grid.cell(slot).unwrap().sessions.len(), 1);
/// ```
pub fn weekly_grid<S>(schedule: &S, filter: &GridFilter) -> EngineResult<WeeklyGrid>
where
    S: ScheduleStore + ?Sized,
{
    let mut sessions: Vec<ScheduledSession> = schedule
        .all_sessions()?
        .into_iter()
        .filter(|s| filter.matches(s))
        .collect();
    sessions.sort_by(|a, b| a.slot.cmp(&b.slot).then_with(|| a.room_id.cmp(&b.room_id)));

    let cells = TimeSlot::grid()
        .map(|slot| GridCell {
            slot,
            sessions: sessions.iter().filter(|s| s.slot == slot).cloned().collect(),
        })
        .collect();

    Ok(WeeklyGrid {
        filter: filter.clone(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SessionRequest, StartTime};
    use crate::store::{MemoryScheduleStore, SessionWriter};

    fn seeded() -> MemoryScheduleStore {
        let mut schedule = MemoryScheduleStore::new();
        for (slot, faculty, class_group, room) in [
            (TimeSlot::new(Day::Monday, StartTime::Nine), "F1", "C1", "R2"),
            (TimeSlot::new(Day::Monday, StartTime::Nine), "F2", "C2", "R1"),
            (TimeSlot::new(Day::Friday, StartTime::Fifteen), "F1", "C2", "R3"),
        ] {
            schedule
                .insert_session(&SessionRequest::new(slot, faculty, "SUB", class_group, room))
                .unwrap();
        }
        schedule
    }

    #[test]
    fn test_unfiltered_grid_has_every_cell() {
        let grid = weekly_grid(&seeded(), &GridFilter::All).unwrap();

        assert_eq!(grid.cells.len(), 30);
        assert_eq!(grid.session_count(), 3);
        assert_eq!(grid.cells[0].slot, TimeSlot::new(Day::Monday, StartTime::Nine));
        let rooms: Vec<&str> = grid.cells[0]
            .sessions
            .iter()
            .map(|s| s.room_id.as_str())
            .collect();
        assert_eq!(rooms, vec!["R1", "R2"]);
        assert_eq!(grid.cells[29].slot, TimeSlot::new(Day::Friday, StartTime::Fifteen));
    }

    #[test]
    fn test_each_filter_selects_its_entity() {
        let schedule = seeded();
        let cases = [
            (GridFilter::Faculty("F1".to_string()), 2),
            (GridFilter::ClassGroup("C2".to_string()), 2),
            (GridFilter::Room("R1".to_string()), 1),
            (GridFilter::Room("R9".to_string()), 0),
        ];
        for (filter, expected) in cases {
            let grid = weekly_grid(&schedule, &filter).unwrap();
            assert_eq!(grid.cells.len(), 30);
            assert_eq!(grid.session_count(), expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_filter_serialization() {
        let json = serde_json::to_value(GridFilter::ClassGroup("CSE-A".to_string())).unwrap();
        assert_eq!(json["by"], "class_group");
        assert_eq!(json["id"], "CSE-A");
    }
}
