//! Puzzle state machine
//!
//! One `PropState` per layout prop, seeded at load. Interactions are
//! dispatched on the prop's `PropKind`; every transition is reported on the
//! event queue and most produce a prompt for the overlay.

use std::collections::BTreeSet;

use crate::world::{ItemId, Layout, PropId, PropKind};
use super::event::{EventQueue, GameEvent};

pub const MSG_WRONG_CODE: &str = "Incorrect code. Try again.";
pub const MSG_DOOR_LOCKED: &str = "The door is locked. Find the key!";
pub const MSG_ESCAPED: &str = "Congratulations! You escaped!";
pub const MSG_ACCESS_GRANTED: &str = "ACCESS GRANTED";

/// Mutable flags of a single prop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropState {
    /// Not drawn, not pickable, not solid
    pub hidden: bool,
    /// Containers and terminal-guarded doors
    pub locked: bool,
    /// Containers and doors
    pub open: bool,
    /// Terminals
    pub solved: bool,
    /// Items
    pub collected: bool,
}

/// Keys held by the player. Items are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeSet<ItemId>,
}

impl Inventory {
    /// Returns false if the item was already held
    pub fn add(&mut self, item: ItemId) -> bool {
        self.items.insert(item)
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    pub fn contains_all(&self, items: &[ItemId]) -> bool {
        items.iter().all(|i| self.contains(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the game should do after an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// Show this message on the overlay
    Prompt(String),
    /// Open the code entry panel for this terminal
    RequestCode { terminal: PropId },
}

#[derive(Debug)]
pub struct PuzzleState {
    props: Vec<PropState>,
    inventory: Inventory,
    escaped: bool,
    pub events: EventQueue<GameEvent>,
}

impl PuzzleState {
    pub fn new(layout: &Layout) -> Self {
        let mut props: Vec<PropState> = layout
            .props
            .iter()
            .map(|p| PropState {
                hidden: p.hidden,
                locked: matches!(p.kind, PropKind::Container { locked: true, .. }),
                ..Default::default()
            })
            .collect();

        // Doors guarded by a terminal start locked
        for prop in &layout.props {
            if let PropKind::Terminal { unlocks, .. } = &prop.kind {
                if let Some(i) = layout.prop_index(unlocks) {
                    if matches!(layout.props[i].kind, PropKind::Door { .. }) {
                        props[i].locked = true;
                    }
                }
            }
        }

        Self {
            props,
            inventory: Inventory::default(),
            escaped: false,
            events: EventQueue::new(),
        }
    }

    pub fn prop(&self, index: usize) -> Option<&PropState> {
        self.props.get(index)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn escaped(&self) -> bool {
        self.escaped
    }

    /// Drawn at all? Hidden until revealed.
    pub fn is_visible(&self, index: usize) -> bool {
        self.props.get(index).is_some_and(|s| !s.hidden)
    }

    /// Does this prop currently block movement?
    pub fn is_solid(&self, layout: &Layout, index: usize) -> bool {
        let (Some(prop), Some(state)) = (layout.props.get(index), self.props.get(index)) else {
            return false;
        };
        if state.hidden {
            return false;
        }
        match prop.kind {
            PropKind::Door { .. } => !state.open,
            _ => prop.solid,
        }
    }

    /// Can the crosshair land on this prop? Open inner doors and picked up
    /// items are out of the way.
    pub fn is_pickable(&self, layout: &Layout, index: usize) -> bool {
        let (Some(prop), Some(state)) = (layout.props.get(index), self.props.get(index)) else {
            return false;
        };
        if state.hidden || state.collected {
            return false;
        }
        !matches!(prop.kind, PropKind::Door { .. } if state.open)
    }

    /// Interact with a prop
    pub fn interact(&mut self, layout: &Layout, id: &PropId) -> Outcome {
        if self.escaped {
            return Outcome::None;
        }
        let Some(index) = layout.prop_index(id) else {
            return Outcome::None;
        };
        if self.props[index].hidden {
            return Outcome::None;
        }
        let prop = &layout.props[index];

        match &prop.kind {
            PropKind::Decor => Outcome::None,

            PropKind::Note { text } => Outcome::Prompt(text.clone()),

            PropKind::Terminal { .. } => {
                if self.props[index].solved {
                    Outcome::Prompt(MSG_ACCESS_GRANTED.to_string())
                } else {
                    Outcome::RequestCode { terminal: prop.id.clone() }
                }
            }

            PropKind::Container { reveals, .. } => self.use_container(layout, index, reveals),

            PropKind::Item { item } => {
                let state = &mut self.props[index];
                if state.collected {
                    return Outcome::None;
                }
                state.collected = true;
                state.hidden = true;

                if self.inventory.add(item.clone()) {
                    self.events.send(GameEvent::ItemCollected { item: item.clone() });
                    Outcome::Prompt(format!("{} added to inventory", prop.name))
                } else {
                    Outcome::Prompt(format!("You already have the {}.", prop.name.to_lowercase()))
                }
            }

            PropKind::Door { requires, exit } => {
                let state = &mut self.props[index];
                if state.open {
                    return Outcome::None;
                }
                if state.locked || !self.inventory.contains_all(requires) {
                    self.events.send(GameEvent::DoorLocked { door: prop.id.clone() });
                    return Outcome::Prompt(MSG_DOOR_LOCKED.to_string());
                }

                state.open = true;
                if *exit {
                    self.escaped = true;
                    self.events.send(GameEvent::Escaped { door: prop.id.clone() });
                    Outcome::Prompt(MSG_ESCAPED.to_string())
                } else {
                    self.events.send(GameEvent::DoorOpened { door: prop.id.clone() });
                    Outcome::Prompt(format!("The {} swings open.", prop.name.to_lowercase()))
                }
            }
        }
    }

    fn use_container(&mut self, layout: &Layout, index: usize, reveals: &[PropId]) -> Outcome {
        let prop = &layout.props[index];
        let name = prop.name.to_lowercase();

        if self.props[index].locked {
            return Outcome::Prompt(format!("The {} is locked.", name));
        }

        let revealed: Vec<usize> = reveals.iter().filter_map(|r| layout.prop_index(r)).collect();

        if self.props[index].open {
            let something_left = revealed
                .iter()
                .any(|&i| !self.props[i].hidden && !self.props[i].collected);
            return if something_left {
                Outcome::Prompt(format!("There is something inside the {}.", name))
            } else {
                Outcome::Prompt(format!("The {} is empty.", name))
            };
        }

        self.props[index].open = true;
        for &i in &revealed {
            self.props[i].hidden = false;
        }
        self.events.send(GameEvent::ContainerOpened { container: prop.id.clone() });

        match revealed.first() {
            Some(&i) => Outcome::Prompt(format!(
                "You found a {}!",
                layout.props[i].name.to_lowercase()
            )),
            None => Outcome::Prompt(format!("The {} is empty.", name)),
        }
    }

    /// Check a code typed into a terminal
    pub fn submit_code(&mut self, layout: &Layout, terminal: &PropId, code: &str) -> Outcome {
        let Some(index) = layout.prop_index(terminal) else {
            return Outcome::None;
        };
        let PropKind::Terminal { code: expected, unlocks } = &layout.props[index].kind else {
            return Outcome::None;
        };
        if self.props[index].solved {
            return Outcome::Prompt(MSG_ACCESS_GRANTED.to_string());
        }

        if !code.trim().eq_ignore_ascii_case(expected.trim()) {
            self.events.send(GameEvent::CodeRejected { terminal: terminal.clone() });
            return Outcome::Prompt(MSG_WRONG_CODE.to_string());
        }

        self.props[index].solved = true;
        let target_name = match layout.prop_index(unlocks) {
            Some(t) => {
                self.props[t].locked = false;
                layout.props[t].name.to_lowercase()
            }
            None => unlocks.to_string(),
        };
        self.events.send(GameEvent::CodeAccepted {
            terminal: terminal.clone(),
            target: unlocks.clone(),
        });
        Outcome::Prompt(format!("{}. The {} is unlocked.", MSG_ACCESS_GRANTED, target_name))
    }
}
