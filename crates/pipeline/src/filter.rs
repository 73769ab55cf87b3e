//! Multi-select set filtering over named identity columns, shared by all
//! three views.

use crate::pacing::PacingReport;
use crate::types::{DailyRecord, WideRow};
use adlens_core::{DashboardError, DashboardResult};
use std::collections::BTreeSet;

/// Row types that expose identity columns by name. Returns `None` for a
/// column the row type does not have, which the filter treats as an
/// input-shape error rather than silently matching nothing.
pub trait Filterable {
    fn field(&self, column: &str) -> Option<String>;
}

impl Filterable for DailyRecord {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "month" => Some(self.month.clone()),
            "campaign" => Some(self.campaign.clone()),
            "brand" => Some(self.brand.clone()),
            "category" => Some(self.category.clone()),
            "objective" => Some(self.objective.clone()),
            "platform" => Some(self.platform.clone()),
            _ => None,
        }
    }
}

impl Filterable for WideRow {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "week_start" => Some(self.context.week_start.format("%Y-%m-%d").to_string()),
            "month" => Some(self.context.month.clone()),
            "campaign" => Some(self.context.campaign.clone()),
            "brand" => Some(self.context.brand.clone()),
            "category" => Some(self.context.category.clone()),
            "objective" => Some(self.context.objective.clone()),
            "platform" => Some(self.context.platform.clone()),
            _ => None,
        }
    }
}

impl Filterable for PacingReport {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "month" => Some(self.record.month.clone()),
            "campaign" => Some(self.record.campaign.clone()),
            "brand" => Some(self.record.brand.clone()),
            "category" => Some(self.record.category.clone()),
            "objective" => Some(self.record.objective.clone()),
            "platform" => Some(self.record.platform.clone()),
            _ => None,
        }
    }
}

/// Set-membership filter: each column carries the set of selected values.
/// An empty selection for a column applies no constraint, which covers both
/// the daily view's "nothing selected" and the weekly/pacing views'
/// "default all" semantics.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    selections: Vec<(String, BTreeSet<String>)>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one selected value for a column.
    pub fn add(&mut self, column: &str, value: &str) {
        if let Some((_, set)) = self.selections.iter_mut().find(|(c, _)| c == column) {
            set.insert(value.to_string());
        } else {
            let mut set = BTreeSet::new();
            set.insert(value.to_string());
            self.selections.push((column.to_string(), set));
        }
    }

    /// Builder-style variant of [`add`](Self::add) for whole selections.
    pub fn select<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            self.add(column, &value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selections.iter().all(|(_, set)| set.is_empty())
    }

    /// Keep the rows whose value is in the selected set for every
    /// constrained column. Fails fast on a column the row type lacks.
    pub fn apply<T: Filterable + Clone>(&self, rows: &[T]) -> DashboardResult<Vec<T>> {
        let mut kept = Vec::with_capacity(rows.len());

        'rows: for row in rows {
            for (column, set) in &self.selections {
                if set.is_empty() {
                    continue;
                }
                let value = row
                    .field(column)
                    .ok_or_else(|| DashboardError::UnknownFilterColumn(column.clone()))?;
                if !set.contains(&value) {
                    continue 'rows;
                }
            }
            kept.push(row.clone());
        }

        Ok(kept)
    }
}
