//! Student dues service
//!
//! Wraps the students collection with the payment workflow used by the
//! dues page.

use chrono::NaiveDate;
use tracing::info;
use crate::config::DuesConfig;
use crate::database::Collection;
use crate::models::{Document, Entity, Student};
use crate::utils::errors::{BdeError, Result};

#[derive(Debug, Clone)]
pub struct StudentService {
    students: Collection<Student>,
    dues: DuesConfig,
}

impl StudentService {
    pub fn new(students: Collection<Student>, dues: DuesConfig) -> Self {
        Self { students, dues }
    }

    pub async fn find(&self, id: &str) -> Result<Document<Student>> {
        self.students
            .list()
            .await?
            .into_iter()
            .find(|student| student.id == id)
            .ok_or_else(|| BdeError::not_found(Student::COLLECTION, id))
    }

    /// Switch a student between paid and unpaid and persist the result
    pub async fn toggle_payment(&self, id: &str, today: NaiveDate) -> Result<Document<Student>> {
        let mut student = self.find(id).await?;
        student.fields.toggle_payment(self.dues.amount, today);
        self.students.update(&student).await?;

        info!(
            student_id = %student.id,
            has_paid = student.fields.has_paid,
            amount = ?student.fields.amount,
            "Student payment toggled"
        );
        Ok(student)
    }

    /// Students of one class level, sorted by name
    pub async fn by_level(&self, level: &str) -> Result<Vec<Document<Student>>> {
        let mut students: Vec<_> = self
            .students
            .list()
            .await?
            .into_iter()
            .filter(|student| student.fields.level == level)
            .collect();
        students.sort_by(|a, b| a.fields.name.cmp(&b.fields.name));
        Ok(students)
    }
}
