use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Role attached to an authenticated principal by the remote auth API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Chef,
}

impl Role {
    /// Dashboard route the UI sends this role to after login, or when it
    /// opens a page reserved for the other role.
    pub fn home_route(self) -> &'static str {
        match self {
            Role::Employee => "/user/dashboard",
            Role::Chef => "/chef/dashboard",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Chef => write!(f, "chef"),
        }
    }
}

/// Type-safe identifier for employees (e.g. `EMP001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An already authenticated identity: either an employee or kitchen staff.
///
/// For employees `id` is the employee id; for chefs it is the chef id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Principal {
    pub fn employee(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: Role::Employee,
        }
    }

    pub fn chef(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: Role::Chef,
        }
    }

    /// The principal's id viewed as an employee id.
    pub fn employee_id(&self) -> EmployeeId {
        EmployeeId(self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_route_per_role() {
        assert_eq!(Role::Employee.home_route(), "/user/dashboard");
        assert_eq!(Role::Chef.home_route(), "/chef/dashboard");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Chef).unwrap();
        assert_eq!(json, "\"chef\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }
}
