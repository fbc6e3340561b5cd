use crate::content::projects::{find_project, Project, ProjectCategory, PROJECTS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Tabs offered in the UI. Only "all" is exposed for now.
    pub const EXPOSED: &'static [CategoryFilter] = &[CategoryFilter::All];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(ProjectCategory::Dev) => "Development",
            CategoryFilter::Only(ProjectCategory::Data) => "Data Science",
        }
    }

    fn admits(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewMode {
    List,
    Detail(&'static Project),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCatalog {
    projects: &'static [Project],
    filter: CategoryFilter,
    view: ViewMode,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

impl ProjectCatalog {
    pub fn new(projects: &'static [Project]) -> Self {
        Self {
            projects,
            filter: CategoryFilter::All,
            view: ViewMode::List,
        }
    }

    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn selected(&self) -> Option<&'static Project> {
        match self.view {
            ViewMode::Detail(project) => Some(project),
            ViewMode::List => None,
        }
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        let filter = self.filter;
        self.projects.iter().filter(|p| filter.admits(p)).collect()
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Switches to detail mode. Unknown ids leave the catalog as it was.
    pub fn select(&mut self, id: &str) -> bool {
        match find_project(self.projects, id) {
            Some(project) => {
                self.view = ViewMode::Detail(project);
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        self.view = ViewMode::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_back_returns_to_list() {
        let mut catalog = ProjectCatalog::default();
        assert!(catalog.select("ovault"));
        assert_eq!(catalog.selected().map(|p| p.id), Some("ovault"));
        assert!(matches!(catalog.view(), ViewMode::Detail(_)));

        catalog.back();
        assert_eq!(catalog.view(), &ViewMode::List);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn test_unknown_project_keeps_state() {
        let mut catalog = ProjectCatalog::default();
        assert!(!catalog.select("nope"));
        assert_eq!(catalog.view(), &ViewMode::List);

        catalog.select("bebapay");
        assert!(!catalog.select("nope"));
        assert_eq!(catalog.selected().map(|p| p.id), Some("bebapay"));
    }

    #[test]
    fn test_filters() {
        let mut catalog = ProjectCatalog::default();
        assert_eq!(catalog.visible().len(), PROJECTS.len());

        catalog.set_filter(CategoryFilter::Only(ProjectCategory::Dev));
        assert!(catalog.visible().iter().all(|p| p.category == ProjectCategory::Dev));

        catalog.set_filter(CategoryFilter::Only(ProjectCategory::Data));
        assert!(catalog.visible().is_empty());
        assert_eq!(CategoryFilter::EXPOSED, &[CategoryFilter::All]);
    }
}
