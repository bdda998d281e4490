//! Portfolio project records and the category filter that narrows them.

/// Filter categories for the project grid. `All` is the sentinel that
/// matches every project; it is never used as a project's own category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    All,
    Data,
    Creative,
    Web,
}

impl Category {
    /// Filter buttons in display order.
    pub const FILTERS: &'static [Category] =
        &[Category::All, Category::Data, Category::Creative, Category::Web];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Projects",
            Category::Data => "Data Analytics",
            Category::Creative => "Creative",
            Category::Web => "Web Projects",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::All => "🖥️",
            Category::Data => "📊",
            Category::Creative => "📷",
            Category::Web => "💻",
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// CSS gradient for the card's hover accent.
    pub color: &'static str,
    pub icon: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Student Registration Dashboard",
        category: Category::Data,
        description: "Interactive Power BI dashboard for tracking student registration statistics and trends",
        tags: &["Power BI", "Data Analytics", "Excel"],
        color: "linear-gradient(135deg, #3b82f6, #06b6d4)",
        icon: "📊",
    },
    Project {
        title: "Academic Performance Analytics",
        category: Category::Data,
        description: "Comprehensive analysis of academic performance using Looker Studio",
        tags: &["Looker Studio", "Data Visualization", "SQL"],
        color: "linear-gradient(135deg, #22c55e, #10b981)",
        icon: "📈",
    },
    Project {
        title: "University Logo Redesign",
        category: Category::Creative,
        description: "Modern logo designs for university departments and events",
        tags: &["Logo Design", "Canva", "Branding"],
        color: "linear-gradient(135deg, #a855f7, #ec4899)",
        icon: "🎨",
    },
    Project {
        title: "Event Photography Portfolio",
        category: Category::Creative,
        description: "Professional photography for university events and ceremonies",
        tags: &["Photography", "Photo Editing", "Adobe Photoshop"],
        color: "linear-gradient(135deg, #f97316, #ef4444)",
        icon: "📷",
    },
    Project {
        title: "Promotional Video Content",
        category: Category::Creative,
        description: "Engaging video content for social media and university promotions",
        tags: &["Videography", "Filmora", "Video Editing"],
        color: "linear-gradient(135deg, #6366f1, #a855f7)",
        icon: "🎬",
    },
    Project {
        title: "Course Management System",
        category: Category::Web,
        description: "Web-based system for managing course registrations and schedules",
        tags: &["Rust", "Yew", "UI/UX"],
        color: "linear-gradient(135deg, #2563eb, #4f46e5)",
        icon: "💻",
    },
    Project {
        title: "Educational Infographics",
        category: Category::Creative,
        description: "Informative and visually appealing infographics for student guides",
        tags: &["Infographic Design", "Canva", "Visual Design"],
        color: "linear-gradient(135deg, #14b8a6, #22c55e)",
        icon: "📋",
    },
    Project {
        title: "Data Automation Scripts",
        category: Category::Data,
        description: "Python scripts for automating data collection and reporting",
        tags: &["Python", "Automation", "Data Processing"],
        color: "linear-gradient(135deg, #eab308, #f97316)",
        icon: "🤖",
    },
];

/// Projects from `projects` matching the current filter. Total and
/// synchronous: an unpopulated category yields an empty grid, not an error.
pub fn filter_projects(projects: &[Project], filter: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter == Category::All || project.category == filter)
        .collect()
}

/// The site's project list narrowed to the current filter.
pub fn visible_projects(filter: Category) -> Vec<&'static Project> {
    filter_projects(PROJECTS, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_returns_every_project() {
        assert_eq!(visible_projects(Category::All).len(), PROJECTS.len());
        // Length-stable across repeated calls.
        assert_eq!(visible_projects(Category::All).len(), PROJECTS.len());
    }

    #[test]
    fn filters_return_only_matching_categories() {
        for &filter in Category::FILTERS {
            if filter == Category::All {
                continue;
            }
            let visible = visible_projects(filter);
            assert!(visible.iter().all(|p| p.category == filter));
        }
    }

    #[test]
    fn filtered_sets_partition_the_project_list() {
        let total: usize = [Category::Data, Category::Creative, Category::Web]
            .into_iter()
            .map(|c| visible_projects(c).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn empty_category_yields_empty_grid_not_error() {
        let creative_only = [Project {
            title: "Poster Series",
            category: Category::Creative,
            description: "Event posters",
            tags: &["Canva"],
            color: "linear-gradient(135deg, #a855f7, #ec4899)",
            icon: "🎨",
        }];
        assert!(filter_projects(&creative_only, Category::Web).is_empty());
        assert_eq!(filter_projects(&creative_only, Category::All).len(), 1);
    }

    #[test]
    fn no_project_uses_the_sentinel_category() {
        assert!(PROJECTS.iter().all(|p| p.category != Category::All));
    }

    #[test]
    fn every_filter_is_distinct_and_labelled() {
        for &filter in Category::FILTERS {
            assert!(!filter.label().is_empty());
            assert!(!filter.icon().is_empty());
        }
        assert_eq!(Category::FILTERS.len(), 4);
    }
}
