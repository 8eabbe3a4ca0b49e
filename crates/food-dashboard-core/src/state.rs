//! Dashboard View State
//!
//! The whole screen state lives in one struct. Every change goes through
//! [`DashboardState::apply`], which takes the current snapshot and returns
//! the next one, so responses are always folded into the latest state
//! rather than the one a handler saw when it started.

use std::collections::BTreeSet;

use reactive_stores::Store;

use crate::model::{Food, FoodId};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Foods in server order
    pub items: Vec<Food>,
    /// Food shown in the edit dialog
    pub editing: Option<Food>,
    pub add_dialog_open: bool,
    pub edit_dialog_open: bool,
    /// Ids with an update or delete in flight
    pub pending: BTreeSet<FoodId>,
}

/// State transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Full collection fetched; replaces `items` verbatim
    Loaded(Vec<Food>),
    /// Server created a food; appended at the tail
    Added(Food),
    /// User asked to edit a food; opens the edit dialog
    EditRequested(Food),
    /// Server returned an updated food; replaces entries with the same id
    Updated(Food),
    /// Removes every entry with this id
    Removed(FoodId),
    ToggleAddDialog,
    ToggleEditDialog,
    /// Request for this id issued
    Began(FoodId),
    /// Request for this id settled, either way
    Settled(FoodId),
}

/// Top-level fields of [`DashboardState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateField {
    Items,
    Editing,
    AddDialog,
    EditDialog,
    Pending,
}

impl Action {
    /// Fields this action may change; the rest are left as they are
    pub fn touches(&self) -> &'static [StateField] {
        match self {
            Action::Loaded(_) | Action::Added(_) | Action::Updated(_) | Action::Removed(_) => {
                &[StateField::Items]
            }
            Action::EditRequested(_) => &[StateField::Editing, StateField::EditDialog],
            Action::ToggleAddDialog => &[StateField::AddDialog],
            Action::ToggleEditDialog => &[StateField::EditDialog],
            Action::Began(_) | Action::Settled(_) => &[StateField::Pending],
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Loaded(items) => {
                self.items = items;
            }
            Action::Added(food) => {
                self.items.push(food);
            }
            Action::EditRequested(food) => {
                self.editing = Some(food);
                self.edit_dialog_open = true;
            }
            Action::Updated(updated) => {
                for food in self.items.iter_mut().filter(|food| food.id == updated.id) {
                    *food = updated.clone();
                }
            }
            Action::Removed(id) => {
                self.items.retain(|food| food.id != id);
            }
            Action::ToggleAddDialog => {
                self.add_dialog_open = !self.add_dialog_open;
            }
            Action::ToggleEditDialog => {
                self.edit_dialog_open = !self.edit_dialog_open;
            }
            Action::Began(id) => {
                self.pending.insert(id);
            }
            Action::Settled(id) => {
                self.pending.remove(&id);
            }
        }
        self
    }

    pub fn find(&self, id: FoodId) -> Option<&Food> {
        self.items.iter().find(|food| food.id == id)
    }

    pub fn is_pending(&self, id: FoodId) -> bool {
        self.pending.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_food(id: FoodId, name: &str) -> Food {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "description": format!("{} description", name),
            "price": "10.00",
            "available": true,
            "image": format!("{}.png", name),
        }))
        .unwrap()
    }

    fn loaded(ids: &[FoodId]) -> DashboardState {
        let foods = ids.iter().map(|id| make_food(*id, &format!("Food {}", id))).collect();
        DashboardState::new().apply(Action::Loaded(foods))
    }

    fn ids(state: &DashboardState) -> Vec<FoodId> {
        state.items.iter().map(|food| food.id).collect()
    }

    #[test]
    fn test_loaded_replaces_items_verbatim() {
        let state = loaded(&[1, 2]);
        let fresh = vec![make_food(9, "Soup"), make_food(3, "Pizza")];

        let state = state.apply(Action::Loaded(fresh.clone()));
        assert_eq!(state.items, fresh);
    }

    #[test]
    fn test_added_appends_at_tail() {
        let state = loaded(&[1, 2]).apply(Action::Added(make_food(3, "Pizza")));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_updated_replaces_matching_entry_in_place() {
        let state = loaded(&[1, 2, 3]);
        let mut updated = make_food(2, "Veggie");
        updated.price = crate::Price::parse("12");

        let next = state.clone().apply(Action::Updated(updated.clone()));
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next.items[1], updated);
        assert_eq!(next.items[0], state.items[0]);
        assert_eq!(next.items[2], state.items[2]);
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let state = loaded(&[1, 2]);
        let next = state.clone().apply(Action::Updated(make_food(5, "Ghost")));
        assert_eq!(next, state);
    }

    #[test]
    fn test_removed_keeps_relative_order() {
        let state = loaded(&[1, 2, 3, 4]).apply(Action::Removed(2));
        assert_eq!(ids(&state), vec![1, 3, 4]);

        let state = loaded(&[1, 2]).apply(Action::Removed(1));
        assert_eq!(ids(&state), vec![2]);
    }

    #[test]
    fn test_edit_requested_opens_edit_dialog() {
        let food = make_food(2, "Veggie");
        let state = loaded(&[1, 2]).apply(Action::EditRequested(food.clone()));

        assert_eq!(state.editing, Some(food));
        assert!(state.edit_dialog_open);
        assert!(!state.add_dialog_open);

        // Forces visible even when already open
        let state = state.apply(Action::EditRequested(make_food(1, "Food 1")));
        assert!(state.edit_dialog_open);
    }

    #[test]
    fn test_toggles_are_involutions_and_leave_items() {
        let state = loaded(&[1, 2]);

        let once = state.clone().apply(Action::ToggleAddDialog);
        assert!(once.add_dialog_open);
        assert!(!once.edit_dialog_open);
        let twice = once.apply(Action::ToggleAddDialog);
        assert_eq!(twice, state);

        let once = state.clone().apply(Action::ToggleEditDialog);
        assert!(once.edit_dialog_open);
        assert!(!once.add_dialog_open);
        let twice = once.apply(Action::ToggleEditDialog);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_pending_tracks_began_and_settled() {
        let state = loaded(&[1]).apply(Action::Began(1));
        assert!(state.is_pending(1));
        assert!(!state.is_pending(2));

        let state = state.apply(Action::Settled(1));
        assert!(!state.is_pending(1));
        assert_eq!(state.find(1).map(|food| food.id), Some(1));
    }

    #[test]
    fn test_find_sees_latest_update() {
        let mut renamed = make_food(2, "Veggie");
        renamed.extra.insert("spicy".to_string(), json!(true));
        let state = loaded(&[1, 2]).apply(Action::Updated(renamed.clone()));

        assert_eq!(state.find(2), Some(&renamed));
        assert_eq!(state.find(7), None);
    }

    #[test]
    fn test_actions_only_change_touched_fields() {
        let mut base = loaded(&[1, 2]);
        base.editing = Some(make_food(1, "Food 1"));
        base.pending.insert(1);

        let actions = vec![
            Action::Loaded(vec![make_food(4, "Soup")]),
            Action::Added(make_food(3, "Pizza")),
            Action::Updated(make_food(2, "Veggie")),
            Action::Removed(1),
            Action::EditRequested(make_food(2, "Food 2")),
            Action::ToggleAddDialog,
            Action::ToggleEditDialog,
            Action::Began(2),
            Action::Settled(1),
        ];

        for action in actions {
            let touched = action.touches();
            let next = base.clone().apply(action.clone());
            let changed = [
                (StateField::Items, next.items != base.items),
                (StateField::Editing, next.editing != base.editing),
                (StateField::AddDialog, next.add_dialog_open != base.add_dialog_open),
                (StateField::EditDialog, next.edit_dialog_open != base.edit_dialog_open),
                (StateField::Pending, next.pending != base.pending),
            ];
            for (field, did_change) in changed {
                if did_change {
                    assert!(touched.contains(&field), "{:?} changed {:?}", action, field);
                }
            }
        }
    }
}
