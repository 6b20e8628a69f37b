//! Title-deduplicated label collection.

use std::collections::HashMap;

use crate::category::Category;
use crate::error::LabelError;
use crate::label::Label;

/// Labels deduplicated by title, with a secondary index by category.
///
/// Both indexes are last-write-wins:
/// - Adding a label whose title is already present replaces the stored
///   label but keeps the title's original position. Titles are compared
///   without regard to category, so two categories that normalize to the
///   same title collapse into one label.
/// - The category index holds only the most recently added label of each
///   category. Earlier labels of that category stay reachable by title.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: Vec<Label>,
    by_title: HashMap<String, usize>,
    by_category: HashMap<Category, Label>,
}

impl LabelSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, overwriting any label with the same title and the
    /// category index entry for its category.
    pub fn add(&mut self, label: Label) {
        self.by_category.insert(label.category, label.clone());
        match self.by_title.get(&label.title) {
            Some(&idx) => self.labels[idx] = label,
            None => {
                self.by_title.insert(label.title.clone(), self.labels.len());
                self.labels.push(label);
            }
        }
    }

    /// Add every label in order.
    pub fn add_many<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = Label>,
    {
        for label in labels {
            self.add(label);
        }
    }

    /// Distinct labels, in first-seen title order.
    pub fn values(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// Titles of all distinct labels.
    #[must_use]
    pub fn get_label_titles(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.title.clone()).collect()
    }

    /// Most recently added label of a category.
    pub fn get(&self, category: Category) -> Result<&Label, LabelError> {
        self.by_category
            .get(&category)
            .ok_or(LabelError::MissingCategory(category))
    }

    /// The ticket's status label.
    pub fn get_status_label(&self) -> Result<&Label, LabelError> {
        self.get(Category::Status)
    }

    /// Whether a label with this title is present.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Number of distinct titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_many(iter);
        set
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{COMPONENT, PRIORITY, STATUS, TYPE};
    use proptest::prelude::*;

    #[test]
    fn test_dedup_by_title() {
        let mut set = LabelSet::new();
        set.add_many([
            Label::new(&PRIORITY, "Major"),
            Label::new(&PRIORITY, "Minor"),
            Label::new(&PRIORITY, "Major"),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_label_titles(), vec!["P3", "P5"]);
    }

    #[test]
    fn test_category_index_is_last_write_wins() {
        let mut set = LabelSet::new();
        set.add(Label::new(&PRIORITY, "Fatal"));
        set.add(Label::new(&PRIORITY, "Minor"));
        assert_eq!(set.get(Category::Priority).unwrap().title, "P5");
        // The older label is still reachable by title
        assert!(set.contains_title("P1"));
    }

    #[test]
    fn test_title_collision_across_categories_collapses() {
        let mut set = LabelSet::new();
        set.add(Label::new(&COMPONENT, "closed"));
        set.add(Label::new(&STATUS, "fixed"));
        assert_eq!(set.len(), 1);
        let only = set.values().next().unwrap();
        assert_eq!(only.category, Category::Status);
        // Component index still points at the label it recorded
        assert_eq!(set.get(Category::Component).unwrap().color, COMPONENT.color);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut set = LabelSet::new();
        set.add(Label::new(&TYPE, "defect"));
        set.add(Label::new(&COMPONENT, "ui"));
        set.add(Label::new(&COMPONENT, "defect"));
        assert_eq!(set.get_label_titles(), vec!["defect", "ui"]);
        assert_eq!(set.values().next().unwrap().category, Category::Component);
    }

    #[test]
    fn test_get_status_label() {
        let mut set = LabelSet::new();
        assert!(matches!(
            set.get_status_label(),
            Err(LabelError::MissingCategory(Category::Status))
        ));
        set.add(Label::new(&STATUS, "reopened"));
        assert_eq!(set.get_status_label().unwrap().title, "opened");
    }

    #[test]
    fn test_missing_category_message() {
        let set = LabelSet::new();
        assert_eq!(
            set.get_status_label().unwrap_err().to_string(),
            "No status label recorded"
        );
    }

    #[test]
    fn test_collect_from_iterator() {
        let set: LabelSet = ["a", "b", "a"]
            .into_iter()
            .map(|t| Label::new(&COMPONENT, t))
            .collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!((&set).into_iter().count(), 2);
    }

    proptest! {
        #[test]
        fn prop_readding_identical_label_keeps_len(titles in proptest::collection::vec("[a-z]{1,4}", 1..20)) {
            let mut set: LabelSet = titles.iter().map(|t| Label::new(&COMPONENT, t)).collect();
            let before = set.len();
            for title in &titles {
                set.add(Label::new(&COMPONENT, title));
                prop_assert_eq!(set.len(), before);
            }
        }

        #[test]
        fn prop_len_is_distinct_title_count(titles in proptest::collection::vec("[a-c]{0,2}", 0..30)) {
            let set: LabelSet = titles.iter().map(|t| Label::new(&TYPE, t)).collect();
            let distinct: std::collections::HashSet<_> = titles.iter().collect();
            prop_assert_eq!(set.len(), distinct.len());
        }
    }
}
