//! Careers board state: role filtering, pagination, and multi-role
//! selection for the apply-once flow.

use crate::content::model::{CareerPosition, WorkMode};

pub const PAGE_SIZE: usize = 6;

/// Delimiter for multiple selected role titles in the application's
/// free-text `position` field.
pub const POSITION_DELIMITER: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkModeFilter {
    All,
    Only(WorkMode),
}

pub struct CareersBoard {
    positions: Vec<CareerPosition>,
    search: String,
    /// `None` means "all teams".
    team_filter: Option<String>,
    work_mode_filter: WorkModeFilter,
    current_page: usize,
    selected_role_ids: Vec<String>,
    active_apply_role_id: Option<String>,
}

impl CareersBoard {
    pub fn new(positions: Vec<CareerPosition>) -> Self {
        Self {
            positions,
            search: String::new(),
            team_filter: None,
            work_mode_filter: WorkModeFilter::All,
            current_page: 1,
            selected_role_ids: Vec::new(),
            active_apply_role_id: None,
        }
    }

    /// Positions matching the current search and filters, in document order.
    /// Search matches title, team, and location, case-insensitively.
    pub fn filtered(&self) -> Vec<&CareerPosition> {
        let q = self.search.to_lowercase();
        self.positions
            .iter()
            .filter(|p| {
                let matches_search = q.is_empty()
                    || p.title.to_lowercase().contains(&q)
                    || p.team.to_lowercase().contains(&q)
                    || p.location.to_lowercase().contains(&q);

                let matches_team = match &self.team_filter {
                    Some(team) => &p.team == team,
                    None => true,
                };

                let matches_mode = match self.work_mode_filter {
                    WorkModeFilter::All => true,
                    WorkModeFilter::Only(mode) => p.work_mode == mode,
                };

                matches_search && matches_team && matches_mode
            })
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The current page of filtered positions (1-based pages, fixed size).
    pub fn page(&self) -> Vec<&CareerPosition> {
        self.filtered()
            .into_iter()
            .skip((self.current_page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    // Changing any filter jumps back to the first page.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    pub fn set_team_filter(&mut self, team: Option<String>) {
        self.team_filter = team;
        self.current_page = 1;
    }

    pub fn set_work_mode_filter(&mut self, filter: WorkModeFilter) {
        self.work_mode_filter = filter;
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn selected_role_ids(&self) -> &[String] {
        &self.selected_role_ids
    }

    /// Selected positions in selection order.
    pub fn selected_roles(&self) -> Vec<&CareerPosition> {
        self.selected_role_ids
            .iter()
            .filter_map(|id| self.positions.iter().find(|p| &p.id == id))
            .collect()
    }

    pub fn toggle_role(&mut self, id: &str) {
        if let Some(pos) = self.selected_role_ids.iter().position(|r| r == id) {
            self.selected_role_ids.remove(pos);
        } else {
            self.selected_role_ids.push(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_role_ids.clear();
        self.active_apply_role_id = None;
    }

    /// Quick apply: selects the role if it is not already selected, and
    /// marks it active.
    pub fn open_quick_apply(&mut self, id: &str) {
        if !self.selected_role_ids.iter().any(|r| r == id) {
            self.selected_role_ids.push(id.to_string());
        }
        self.active_apply_role_id = Some(id.to_string());
    }

    pub fn close_quick_apply(&mut self) {
        self.active_apply_role_id = None;
    }

    pub fn active_apply_role_id(&self) -> Option<&str> {
        self.active_apply_role_id.as_deref()
    }

    /// The value submitted as the application's `position` field: all
    /// selected role titles joined with [`POSITION_DELIMITER`].
    pub fn position_field(&self) -> String {
        self.selected_roles()
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(POSITION_DELIMITER)
    }
}
