//! Basic Analysis - bucketed items with derived statistics.

use serde::{Deserialize, Serialize};

use super::classifier::Classification;
use super::feedback::{build_feedback, CategorizationFeedback};
use super::item::{Category, Item, Priority};

/// Counts per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Bucket sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub todos: usize,
    pub termine: usize,
    pub knowledge: usize,
    pub risiken: usize,
    pub business: usize,
}

/// Summary statistics, always recomputed from the buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_items: usize,
    pub priority_distribution: PriorityDistribution,
    pub category_distribution: CategoryDistribution,
}

/// Items partitioned into five disjoint buckets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAnalysis {
    /// `GENERAL` items, including energy-only lines
    pub todos: Vec<Item>,
    pub termine: Vec<Item>,
    pub knowledge: Vec<Item>,
    pub risiken: Vec<Item>,
    pub business: Vec<Item>,
    pub insights: Insights,
    pub categorization_feedback: CategorizationFeedback,
}

impl BasicAnalysis {
    /// Build buckets, statistics and feedback from per-line classifications.
    pub fn aggregate(classifications: Vec<Classification>) -> Self {
        let total_items = classifications.len();
        let mut analysis = BasicAnalysis::default();
        let mut uncategorized = Vec::new();
        let mut low_confidence = Vec::new();

        for classification in classifications {
            if classification.is_uncategorized() {
                uncategorized.push(classification.raw_line.clone());
            }
            if classification.is_low_confidence() {
                low_confidence.push(classification.item.clone());
            }
            let item = classification.item;
            analysis.bucket_mut(item.category).push(item);
        }

        analysis.insights = analysis.compute_insights(total_items);
        analysis.categorization_feedback = build_feedback(uncategorized, low_confidence);
        analysis
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::General => &mut self.todos,
            Category::Termin => &mut self.termine,
            Category::Knowledge => &mut self.knowledge,
            Category::Risk => &mut self.risiken,
            Category::Business => &mut self.business,
        }
    }

    fn compute_insights(&self, total_items: usize) -> Insights {
        let count = |priority: Priority| self.all_items().filter(|i| i.priority == priority).count();
        Insights {
            total_items,
            priority_distribution: PriorityDistribution {
                high: count(Priority::High),
                medium: count(Priority::Medium),
                low: count(Priority::Low),
            },
            category_distribution: CategoryDistribution {
                todos: self.todos.len(),
                termine: self.termine.len(),
                knowledge: self.knowledge.len(),
                risiken: self.risiken.len(),
                business: self.business.len(),
            },
        }
    }

    /// Bucket holding the given category
    pub fn bucket(&self, category: Category) -> &[Item] {
        match category {
            Category::General => &self.todos,
            Category::Termin => &self.termine,
            Category::Knowledge => &self.knowledge,
            Category::Risk => &self.risiken,
            Category::Business => &self.business,
        }
    }

    /// todos, termine, knowledge, risiken, business - in that order
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.todos
            .iter()
            .chain(&self.termine)
            .chain(&self.knowledge)
            .chain(&self.risiken)
            .chain(&self.business)
    }

    /// High-priority todos followed by every risk item
    pub fn critical_items(&self) -> Vec<&Item> {
        self.todos
            .iter()
            .filter(|i| i.is_high_priority())
            .chain(&self.risiken)
            .collect()
    }

    pub fn total_items(&self) -> usize {
        self.insights.total_items
    }
}
