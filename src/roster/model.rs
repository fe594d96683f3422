use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single student record, exactly as it appears in the backing file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub major: String,
    pub gpa: f64,
    pub email: String,
}

impl Student {
    /// Builds a record with a freshly generated v4 UUID.
    pub fn new(fields: NewStudent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            age: fields.age,
            major: fields.major,
            gpa: fields.gpa,
            email: fields.email,
        }
    }

    /// Applies every field the patch carries. The id is never touched.
    pub fn apply(&mut self, patch: &StudentPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(major) = &patch.major {
            self.major = major.clone();
        }
        if let Some(gpa) = patch.gpa {
            self.gpa = gpa;
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
    }
}

/// The caller-supplied fields of a record that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub age: u32,
    pub major: String,
    pub gpa: f64,
    pub email: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        major: impl Into<String>,
        gpa: f64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            major: major.into(),
            gpa,
            email: email.into(),
        }
    }
}

/// Partial update of a record: `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub email: Option<String>,
}

impl StudentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = Some(gpa);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.major.is_none()
            && self.gpa.is_none()
            && self.email.is_none()
    }
}

/// JSON has no representation for NaN or infinity, so such a value would
/// make the backing file unreadable on the next load.
pub fn check_gpa(gpa: f64) -> Result<()> {
    if gpa.is_finite() {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "GPA must be a finite number, got {}",
            gpa
        )))
    }
}
