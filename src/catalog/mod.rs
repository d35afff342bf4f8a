//! Static catalog of integrations shown in the sidebar.

mod selection;

pub use selection::Selection;

use crate::bindings::{self, Binding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Data,
    Utility,
    Entertainment,
}

impl Category {
    /// Sidebar group order.
    pub const DISPLAY_ORDER: [Category; 3] =
        [Category::Data, Category::Utility, Category::Entertainment];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Data => "Data",
            Category::Utility => "Utility",
            Category::Entertainment => "Entertainment",
        }
    }
}

/// Symbolic icon; the TUI maps it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cat,
    Dog,
    Smile,
    Lightbulb,
    User,
    Users,
    Globe,
    MapPin,
}

#[derive(Debug, Clone, Copy)]
pub struct IntegrationDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub category: Category,
    pub binding: Binding,
}

static CATALOG: [IntegrationDescriptor; 8] = [
    IntegrationDescriptor {
        id: "cat",
        title: "Cat Facts",
        description: "Random facts about cats.",
        icon: Icon::Cat,
        category: Category::Entertainment,
        binding: bindings::cat::BINDING,
    },
    IntegrationDescriptor {
        id: "dog",
        title: "Dog Images",
        description: "Random adorable dog photos.",
        icon: Icon::Dog,
        category: Category::Entertainment,
        binding: bindings::dog::BINDING,
    },
    IntegrationDescriptor {
        id: "joke",
        title: "Official Jokes",
        description: "Random programming and general jokes.",
        icon: Icon::Smile,
        category: Category::Entertainment,
        binding: bindings::joke::BINDING,
    },
    IntegrationDescriptor {
        id: "advice",
        title: "Advice Slip",
        description: "Daily wisdom and life advice.",
        icon: Icon::Lightbulb,
        category: Category::Entertainment,
        binding: bindings::advice::BINDING,
    },
    IntegrationDescriptor {
        id: "agify",
        title: "Agify",
        description: "Predict age based on a name.",
        icon: Icon::User,
        category: Category::Data,
        binding: bindings::agify::BINDING,
    },
    IntegrationDescriptor {
        id: "genderize",
        title: "Genderize",
        description: "Predict gender based on a name.",
        icon: Icon::Users,
        category: Category::Data,
        binding: bindings::genderize::BINDING,
    },
    IntegrationDescriptor {
        id: "ip",
        title: "IP Address",
        description: "Get your current public IP address.",
        icon: Icon::Globe,
        category: Category::Utility,
        binding: bindings::ip::BINDING,
    },
    IntegrationDescriptor {
        id: "zip",
        title: "Zippopotamus",
        description: "US Zip code lookup and location info.",
        icon: Icon::MapPin,
        category: Category::Utility,
        binding: bindings::zip::BINDING,
    },
];

/// All integrations in declaration order.
pub fn all() -> &'static [IntegrationDescriptor] {
    &CATALOG
}

pub fn first() -> &'static IntegrationDescriptor {
    &CATALOG[0]
}

pub fn find(id: &str) -> Option<&'static IntegrationDescriptor> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Integrations grouped by category, groups in [`Category::DISPLAY_ORDER`].
pub fn grouped() -> Vec<(Category, Vec<&'static IntegrationDescriptor>)> {
    Category::DISPLAY_ORDER
        .iter()
        .map(|&category| {
            let items = CATALOG.iter().filter(|d| d.category == category).collect();
            (category, items)
        })
        .collect()
}

/// Integrations in the order the sidebar lists them.
pub fn display_order() -> Vec<&'static IntegrationDescriptor> {
    grouped().into_iter().flat_map(|(_, items)| items).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_first_is_cat_facts() {
        assert_eq!(first().id, "cat");
    }

    #[test]
    fn test_grouped_order_is_fixed() {
        let groups: Vec<_> = grouped().iter().map(|(c, _)| *c).collect();
        assert_eq!(
            groups,
            vec![Category::Data, Category::Utility, Category::Entertainment]
        );
    }

    #[test]
    fn test_grouping_keeps_declaration_order() {
        let ids: Vec<_> = display_order().iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec!["agify", "genderize", "ip", "zip", "cat", "dog", "joke", "advice"]
        );
    }

    #[test]
    fn test_find() {
        assert_eq!(find("zip").map(|d| d.title), Some("Zippopotamus"));
        assert!(find("weather").is_none());
    }
}
