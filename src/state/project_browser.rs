//! Project list navigation and the information-source cache.
//!
//! Source fetches are tagged with a generation number taken from a single
//! counter. A fetch result only lands if no newer result for the same
//! project has landed before it, so a slow stale response can never replace
//! a fresher one.

use crate::model::{InformationSource, Project, ProjectId, RawSource};
use crate::state::dispatcher::Command;
use std::collections::HashMap;

// ===== SourceCache =====

/// Fetched information sources keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct SourceCache {
    entries: HashMap<ProjectId, Vec<InformationSource>>,
    // Generation of the newest result that landed per project. Survives
    // eviction so a refresh cannot be overwritten by an older fetch.
    landed: HashMap<ProjectId, u64>,
}

impl SourceCache {
    /// Cached sources for `id`.
    pub fn get(&self, id: &ProjectId) -> Option<&[InformationSource]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Whether `id` has a cached entry.
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.entries.contains_key(id)
    }

    /// Remove the entry for `id`.
    pub fn evict(&mut self, id: &ProjectId) {
        self.entries.remove(id);
    }

    /// Store `sources` fetched with `generation`.
    ///
    /// Returns `false` and leaves the cache alone when a newer result for
    /// the same id already landed.
    pub fn commit(
        &mut self,
        id: ProjectId,
        generation: u64,
        sources: Vec<InformationSource>,
    ) -> bool {
        if self.landed.get(&id).is_some_and(|&newest| newest > generation) {
            return false;
        }
        self.landed.insert(id.clone(), generation);
        self.entries.insert(id, sources);
        true
    }

    /// Number of cached projects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ===== SourcesOutcome =====

/// What happened to a completed source fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcesOutcome {
    /// Cached and shown, the project is selected.
    Shown,
    /// Cached only, another project is selected.
    Cached,
    /// Dropped, a newer result already landed.
    Stale,
}

// ===== ProjectBrowser =====

/// Project list with one selection and its visible sources.
#[derive(Debug, Clone, Default)]
pub struct ProjectBrowser {
    projects: Vec<Project>,
    selected: usize,
    cache: SourceCache,
    // Sources of the selected project, `None` while they are loading.
    visible: Option<Vec<InformationSource>>,
    next_generation: u64,
}

impl ProjectBrowser {
    /// Empty browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Known projects in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Index of the selected project.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected project, if any project is loaded.
    pub fn selected(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }

    /// Sources of the selected project, `None` while loading.
    pub fn visible_sources(&self) -> Option<&[InformationSource]> {
        self.visible.as_deref()
    }

    /// The source cache.
    pub fn cache(&self) -> &SourceCache {
        &self.cache
    }

    /// Replace the project list and select the first project.
    pub fn set_projects(&mut self, projects: Vec<Project>) -> Option<Command> {
        self.projects = projects;
        self.selected = 0;
        self.visible = None;
        self.load_selected()
    }

    /// Select the previous project (clamped).
    pub fn select_prev(&mut self) -> Option<Command> {
        if self.selected == 0 || self.projects.is_empty() {
            return None;
        }
        self.selected -= 1;
        self.load_selected()
    }

    /// Select the next project (clamped).
    pub fn select_next(&mut self) -> Option<Command> {
        if self.selected + 1 >= self.projects.len() {
            return None;
        }
        self.selected += 1;
        self.load_selected()
    }

    /// Evict the selected project's sources and fetch them again.
    pub fn refresh(&mut self) -> Option<Command> {
        let id = self.selected()?.id.clone();
        self.cache.evict(&id);
        self.visible = None;
        Some(self.fetch(id))
    }

    /// Apply a successful source fetch.
    pub fn apply_sources(
        &mut self,
        project_id: ProjectId,
        generation: u64,
        raw: Vec<RawSource>,
    ) -> SourcesOutcome {
        let sources: Vec<InformationSource> =
            raw.into_iter().map(InformationSource::from).collect();
        let is_selected = self.is_selected(&project_id);

        if !self
            .cache
            .commit(project_id.clone(), generation, sources.clone())
        {
            tracing::debug!(%project_id, generation, "Discarded stale sources");
            return SourcesOutcome::Stale;
        }

        if is_selected {
            self.visible = Some(sources);
            SourcesOutcome::Shown
        } else {
            SourcesOutcome::Cached
        }
    }

    /// Stop waiting for sources of `project_id` after a failed fetch.
    pub fn fail_sources(&mut self, project_id: &ProjectId) {
        if self.is_selected(project_id) && self.visible.is_none() {
            self.visible = Some(Vec::new());
        }
    }

    fn is_selected(&self, id: &ProjectId) -> bool {
        self.selected().is_some_and(|p| &p.id == id)
    }

    fn load_selected(&mut self) -> Option<Command> {
        let id = self.selected()?.id.clone();
        match self.cache.get(&id) {
            Some(sources) => {
                self.visible = Some(sources.to_vec());
                None
            }
            None => {
                self.visible = None;
                Some(self.fetch(id))
            }
        }
    }

    fn fetch(&mut self, project_id: ProjectId) -> Command {
        self.next_generation += 1;
        Command::FetchSources {
            project_id,
            generation: self.next_generation,
        }
    }
}

#[cfg(test)]
#[path = "project_browser_tests.rs"]
mod tests;
