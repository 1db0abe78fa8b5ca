//! Report snapshots
//!
//! Builds the filtered, sorted student lists and the dues totals that the
//! PDF exporter renders. Rendering itself lives outside this crate.

use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::models::{Document, Student, CLASS_LEVELS};
use crate::utils::helpers::matches_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

/// What the dues table currently shows
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub level: Option<String>,
    pub payment: PaymentFilter,
    pub search: Option<String>,
}

impl StudentFilter {
    pub fn matches(&self, student: &Student) -> bool {
        let level_ok = self.level.as_deref().map_or(true, |level| student.level == level);
        let payment_ok = match self.payment {
            PaymentFilter::All => true,
            PaymentFilter::Paid => student.has_paid,
            PaymentFilter::Unpaid => !student.has_paid,
        };
        let search_ok = self
            .search
            .as_deref()
            .map_or(true, |needle| matches_search(&student.name, needle));
        level_ok && payment_ok && search_ok
    }

    /// Matching students, in curriculum order of level then by name
    pub fn apply(&self, students: &[Document<Student>]) -> Vec<Document<Student>> {
        let mut selected: Vec<_> = students
            .iter()
            .filter(|student| self.matches(&student.fields))
            .cloned()
            .collect();
        selected.sort_by(|a, b| {
            level_rank(&a.fields.level)
                .cmp(&level_rank(&b.fields.level))
                .then_with(|| a.fields.name.cmp(&b.fields.name))
        });
        selected
    }
}

fn level_rank(level: &str) -> usize {
    CLASS_LEVELS
        .iter()
        .position(|known| *known == level)
        .unwrap_or(CLASS_LEVELS.len())
}

/// Paid/unpaid counts for one class level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub paid: usize,
    pub unpaid: usize,
    pub collected: u64,
}

/// Totals printed at the top of the dues report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuesSummary {
    pub total_students: usize,
    pub paid: usize,
    pub unpaid: usize,
    pub collected: u64,
    pub by_level: BTreeMap<String, LevelSummary>,
}

impl DuesSummary {
    pub fn from_students(students: &[Document<Student>]) -> Self {
        let mut summary = DuesSummary::default();
        for student in students {
            let level = summary.by_level.entry(student.fields.level.clone()).or_default();
            summary.total_students += 1;
            if student.fields.has_paid {
                let amount = u64::from(student.fields.amount.unwrap_or(0));
                summary.paid += 1;
                summary.collected += amount;
                level.paid += 1;
                level.collected += amount;
            } else {
                summary.unpaid += 1;
                level.unpaid += 1;
            }
        }
        summary
    }
}

/// Everything the exporter needs for one dues report
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub generated_at: DateTime<Utc>,
    pub students: Vec<Document<Student>>,
    pub summary: DuesSummary,
}

impl StudentReport {
    pub fn build(students: &[Document<Student>], filter: &StudentFilter) -> Self {
        let students = filter.apply(students);
        let summary = DuesSummary::from_students(&students);
        Self {
            generated_at: Utc::now(),
            students,
            summary,
        }
    }
}
