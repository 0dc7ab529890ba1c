/// Supplies category auto-suggestions for the report form
pub trait SuggestionSource: Send + Sync {
    fn suggest(&self, prefix: &str) -> Vec<String>;
}

/// Suggestions from a fixed list, in list order
#[derive(Debug, Clone)]
pub struct FixedSuggestions {
    categories: Vec<String>,
}

impl FixedSuggestions {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }
}

impl SuggestionSource for FixedSuggestions {
    /// Case-insensitive prefix match; an empty prefix suggests nothing
    fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.categories
            .iter()
            .filter(|c| c.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> FixedSuggestions {
        FixedSuggestions::new(
            ["Pothole", "Streetlight", "Garbage", "Safety", "Streetlight Pole"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(source().suggest("pOt"), vec!["Pothole".to_string()]);
        assert_eq!(
            source().suggest("street"),
            vec!["Streetlight".to_string(), "Streetlight Pole".to_string()]
        );
    }

    #[test]
    fn test_empty_prefix_suggests_nothing() {
        assert!(source().suggest("").is_empty());
        assert!(source().suggest("   ").is_empty());
        assert!(source().suggest("xyz").is_empty());
    }
}
