use crate::models::{
    converted_checklist, new_id, CheckIn, Location, PlannedCheckIn, COLOR_PALETTE, DEFAULT_COLOR,
};

/// In-memory snapshot of the three storage slots. Handlers mutate this
/// behind the state mutex and then persist the touched slots, so every
/// multi-collection transition (notably [`StoreData::convert_planned`])
/// is applied atomically before anything is written out.
#[derive(Debug, Clone, Default)]
pub struct StoreData {
    pub locations: Vec<Location>,
    pub check_ins: Vec<CheckIn>,
    pub planned_check_ins: Vec<PlannedCheckIn>,
}

impl StoreData {
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    /// Display name for a location reference; dangling references resolve
    /// to "Unknown" rather than an error.
    pub fn location_name(&self, id: &str) -> String {
        self.location(id)
            .map(|location| location.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn location_color(&self, id: &str) -> &str {
        self.location(id)
            .map(|location| location.color.as_str())
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_COLOR)
    }

    pub fn add_location(&mut self, name: String, color: String) -> Location {
        let location = Location {
            id: new_id(),
            name,
            color,
        };
        self.locations.push(location.clone());
        location
    }

    pub fn update_location(&mut self, id: &str, name: String, color: String) -> bool {
        match self.locations.iter_mut().find(|location| location.id == id) {
            Some(location) => {
                location.name = name;
                location.color = color;
                true
            }
            None => false,
        }
    }

    /// Removes a location without touching records that reference it;
    /// those keep their id and display as "Unknown" from then on.
    pub fn remove_location(&mut self, id: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|location| location.id != id);
        self.locations.len() != before
    }

    /// Assign palette colors to locations stored before colors existed.
    pub fn backfill_colors(&mut self) {
        for (index, location) in self.locations.iter_mut().enumerate() {
            if location.color.is_empty() {
                location.color = COLOR_PALETTE[index % COLOR_PALETTE.len()].to_string();
            }
        }
    }

    pub fn add_check_in(&mut self, check_in: CheckIn) -> CheckIn {
        self.check_ins.push(check_in.clone());
        check_in
    }

    /// Edit of date/location/observations only; checklist items are
    /// toggled individually and creation invariants are not re-checked.
    pub fn update_check_in(
        &mut self,
        id: &str,
        date: String,
        location_id: String,
        observations: String,
    ) -> bool {
        match self.check_ins.iter_mut().find(|check_in| check_in.id == id) {
            Some(check_in) => {
                check_in.date = date;
                check_in.location_id = location_id;
                check_in.observations = observations;
                true
            }
            None => false,
        }
    }

    pub fn remove_check_in(&mut self, id: &str) -> bool {
        let before = self.check_ins.len();
        self.check_ins.retain(|check_in| check_in.id != id);
        self.check_ins.len() != before
    }

    pub fn set_checklist_item(&mut self, check_in_id: &str, item_id: &str, completed: bool) -> bool {
        self.check_ins
            .iter_mut()
            .find(|check_in| check_in.id == check_in_id)
            .and_then(|check_in| {
                check_in
                    .checklist_items
                    .iter_mut()
                    .find(|item| item.id == item_id)
            })
            .map(|item| {
                item.completed = completed;
                true
            })
            .unwrap_or(false)
    }

    pub fn add_planned(&mut self, planned: PlannedCheckIn) -> PlannedCheckIn {
        self.planned_check_ins.push(planned.clone());
        planned
    }

    pub fn remove_planned(&mut self, id: &str) -> bool {
        let before = self.planned_check_ins.len();
        self.planned_check_ins.retain(|planned| planned.id != id);
        self.planned_check_ins.len() != before
    }

    /// Converts a planned check-in into an actual one: copies date and
    /// location, moves notes into observations, attaches the default
    /// single-item checklist, appends to `check_ins`, and removes the
    /// planned record. Both collections change in this one call; the
    /// caller owns the durable commit of both slots.
    pub fn convert_planned(&mut self, id: &str) -> Option<CheckIn> {
        let index = self
            .planned_check_ins
            .iter()
            .position(|planned| planned.id == id)?;
        let planned = self.planned_check_ins.remove(index);
        let check_in = CheckIn {
            id: new_id(),
            date: planned.date,
            location_id: planned.location_id,
            observations: planned.notes,
            checklist_items: converted_checklist(),
        };
        self.check_ins.push(check_in.clone());
        Some(check_in)
    }
}
