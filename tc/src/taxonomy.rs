//! Talk path taxonomy
//!
//! Turns a flat list of talk directories (`category/variant`) into a
//! category-ordered [`Catalog`].

use std::collections::HashMap;

use log::debug;

/// A talk path split into its category and variant label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkPath<'a> {
    /// First path segment
    pub category: &'a str,
    /// Remaining segments joined with `/`, empty for single-segment paths
    pub variant: &'a str,
}

impl<'a> TalkPath<'a> {
    /// Split a path on its first `/`
    pub fn parse(path: &'a str) -> Self {
        match path.split_once('/') {
            Some((category, variant)) => Self { category, variant },
            None => Self {
                category: path,
                variant: "",
            },
        }
    }
}

/// One category and the variants seen for it, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub variants: Vec<String>,
}

impl Category {
    /// True when the category renders as a single flat link
    pub fn is_singleton(&self) -> bool {
        self.variants.len() == 1
    }
}

/// Ordered category -> variants grouping
///
/// Category order is first-seen order. Variants keep input order, duplicates
/// included. Every category holds at least one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of talks across all categories
    pub fn talk_count(&self) -> usize {
        self.categories.iter().map(|c| c.variants.len()).sum()
    }
}

/// Group talk paths by category
///
/// Stable group-by on the first path segment: category order follows first
/// appearance and each category's variants follow input order.
pub fn group<I, S>(paths: I) -> Catalog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories: Vec<Category> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for path in paths {
        let talk = TalkPath::parse(path.as_ref());
        let slot = match index.get(talk.category) {
            Some(&slot) => slot,
            None => {
                debug!("group: new category {}", talk.category);
                categories.push(Category {
                    name: talk.category.to_string(),
                    variants: Vec::new(),
                });
                index.insert(talk.category.to_string(), categories.len() - 1);
                categories.len() - 1
            }
        };
        categories[slot].variants.push(talk.variant.to_string());
    }

    debug!("group: {} categories", categories.len());
    Catalog { categories }
}
