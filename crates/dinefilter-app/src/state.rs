// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Taxonomy;

/// The single system-wide selection slot. Selecting anywhere replaces
/// whatever was selected before, regardless of category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<Taxonomy>,
}

impl SelectionState {
    pub fn current(&self) -> Option<&Taxonomy> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, taxonomy: Taxonomy) {
        self.selected = Some(taxonomy);
    }

    /// Structural equality against the stored value, so reconstructed
    /// clones of the same source option still compare as selected.
    pub fn is_selected(&self, taxonomy: &Taxonomy) -> bool {
        self.selected.as_ref() == Some(taxonomy)
    }
}

/// Expanded/collapsed state for one category. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionFlag {
    expanded: bool,
}

impl ExpansionFlag {
    pub const fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    ToggleCategory(usize),
    Select(Taxonomy),
    DismissChip,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    CategoryToggled { index: usize, expanded: bool },
    SelectionChanged(Taxonomy),
    ChipDismissRequested,
    StatusUpdated(String),
    StatusCleared,
}

/// Screen-level state: one expansion flag per category, the shared
/// selection slot, and a transient status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterScreen {
    expansion: Vec<ExpansionFlag>,
    selection: SelectionState,
    pub status_line: Option<String>,
}

impl FilterScreen {
    pub fn new(category_count: usize) -> Self {
        Self {
            expansion: vec![ExpansionFlag::default(); category_count],
            selection: SelectionState::default(),
            status_line: None,
        }
    }

    pub fn with_all_expanded(category_count: usize) -> Self {
        Self {
            expansion: vec![ExpansionFlag::new(true); category_count],
            ..Self::new(category_count)
        }
    }

    pub fn category_count(&self) -> usize {
        self.expansion.len()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Out-of-range indices read as collapsed.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion
            .get(index)
            .is_some_and(|flag| flag.is_expanded())
    }

    pub fn dispatch(&mut self, command: FilterCommand) -> Vec<FilterEvent> {
        match command {
            FilterCommand::ToggleCategory(index) => {
                let Some(flag) = self.expansion.get_mut(index) else {
                    return Vec::new();
                };
                flag.toggle();
                vec![FilterEvent::CategoryToggled {
                    index,
                    expanded: flag.is_expanded(),
                }]
            }
            FilterCommand::Select(taxonomy) => {
                self.selection.select(taxonomy.clone());
                vec![FilterEvent::SelectionChanged(taxonomy)]
            }
            FilterCommand::DismissChip => {
                // Intent is surfaced but the selection is kept; there is
                // no user-facing deselect on this screen.
                if self.selection.current().is_none() {
                    return Vec::new();
                }
                vec![
                    FilterEvent::ChipDismissRequested,
                    self.set_status("dismiss requested; selection kept"),
                ]
            }
            FilterCommand::SetStatus(message) => vec![self.set_status(&message)],
            FilterCommand::ClearStatus => {
                self.status_line = None;
                vec![FilterEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: &str) -> FilterEvent {
        self.status_line = Some(message.to_owned());
        FilterEvent::StatusUpdated(message.to_owned())
    }
}
