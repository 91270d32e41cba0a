//! Template catalog
//!
//! Templates are declared in configuration (`[[templates]]`) and stay immutable
//! for the lifetime of the process.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Web,
    Mobile,
    #[serde(rename = "API")]
    Api,
    Data,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Api => "API",
            Category::Data => "Data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector used when browsing the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "web" => Ok(CategoryFilter::Only(Category::Web)),
            "mobile" => Ok(CategoryFilter::Only(Category::Mobile)),
            "api" => Ok(CategoryFilter::Only(Category::Api)),
            "data" => Ok(CategoryFilter::Only(Category::Data)),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// Starter template entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Technology tags shown on the template card
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub icon: String,
    /// Upstream repository the template is cloned from
    #[serde(default)]
    pub repo_url: String,
}

impl Template {
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Template id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err(format!("Template '{}' has an empty name", self.id));
        }
        Ok(())
    }
}

/// Ordered, read-only collection of templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&Template, CatalogError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::TemplateNotFound(id.to_string()))
    }

    /// Templates matching the filter, in declaration order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| filter.matches(t.category))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_template(id: &str, category: Category) -> Template {
    Template {
        id: id.to_string(),
        name: format!("{} Starter", id),
        description: "Test template".to_string(),
        tech_stack: vec!["Rust".to_string()],
        category,
        icon: "*".to_string(),
        repo_url: format!("github.com/hackpack/{}", id),
    }
}
