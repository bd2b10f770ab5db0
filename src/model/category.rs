/// Selector value that passes every event.
pub const ALL: &str = "all";

/// A selectable category in the dashboard's filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Categories offered by the dashboard, in display order.
pub const CATEGORIES: [CategoryOption; 6] = [
    CategoryOption { value: ALL, label: "All Events" },
    CategoryOption { value: "airstrike", label: "Airstrikes" },
    CategoryOption { value: "drone_strike", label: "Drone Strikes" },
    CategoryOption { value: "humanitarian", label: "Blockades" },
    CategoryOption { value: "ground raid", label: "Ground Raids" },
    CategoryOption { value: "shooting/aid", label: "Mass Shootings" },
];

/// Display label for a category value, if it is one of the known ones.
pub fn label_for(value: &str) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.value == value).map(|c| c.label)
}

/// Category predicate of the filter engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `Event::category`.
    Only(String),
}

impl CategoryFilter {
    /// `"all"` selects everything; any other string is an exact category.
    pub fn from_selector(selector: &str) -> Self {
        if selector == ALL {
            Self::All
        } else {
            Self::Only(selector.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn as_selector(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(wanted) => wanted,
        }
    }
}
