//! User profile types
//!
//! This module defines the shape of the current-user profile returned by
//! the people service, plus small helpers over it.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Employee identifier
    pub employee_id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Work email address
    pub work_email: String,
    /// Thumbnail image URL (absent for employees without a photo)
    pub employee_thumbnail: Option<String>,
    /// Job role title
    pub job_role: String,
    /// Privilege identifiers granted to this employee, in grant order
    pub privileges: Vec<i32>,
}

impl UserInfo {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether a privilege has been granted
    pub fn has_privilege(&self, privilege: i32) -> bool {
        self.privileges.contains(&privilege)
    }
}
