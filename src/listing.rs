//! Search, category filter and ordering for the project listing.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{Project, ProjectView};

/// Supported listing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `created_at` descending
    Newest,
    /// `deadline` ascending
    Deadline,
    /// `current_amount` descending
    MostFunded,
}

impl SortKey {
    /// Parse a `sort_by` value. Unknown keys yield `None` and leave the order untouched.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(SortKey::Newest),
            "deadline" => Some(SortKey::Deadline),
            "most_funded" => Some(SortKey::MostFunded),
            _ => None,
        }
    }
}

/// Query string of the listing route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
}

/// Case-insensitive substring match on the title
pub fn search_projects<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    query: &str,
) -> Vec<&'a Project> {
    let needle = query.to_lowercase();
    projects
        .into_iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_by_category<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    category_id: &str,
) -> Vec<&'a Project> {
    projects
        .into_iter()
        .filter(|p| p.category_id == category_id)
        .collect()
}

/// Stable sort in place; `None` keeps the incoming order
pub fn sort_projects(projects: &mut [&Project], key: Option<SortKey>) {
    match key {
        Some(SortKey::Newest) => projects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        Some(SortKey::Deadline) => projects.sort_by_key(|p| p.deadline),
        Some(SortKey::MostFunded) => {
            projects.sort_by(|a, b| b.current_amount.total_cmp(&a.current_amount))
        }
        None => {}
    }
}

/// Run the full pipeline: search, filter, sort, then attach display fields
pub fn list_projects(projects: &[Project], query: &ListingQuery, today: NaiveDate) -> Vec<ProjectView> {
    let mut selected: Vec<&Project> = projects.iter().collect();

    if let Some(q) = query.q.as_deref().filter(|q| !q.is_empty()) {
        selected = search_projects(selected, q);
    }

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        selected = filter_by_category(selected, category);
    }

    let sort_by = query
        .sort_by
        .as_deref()
        .unwrap_or(crate::constants::DEFAULT_SORT_KEY);
    sort_projects(&mut selected, SortKey::parse(sort_by));

    selected.into_iter().map(|p| p.view(today)).collect()
}
