//! Role gating for the session layer.

use super::SessionError;
use crate::domain::{Principal, Role};
use tracing::warn;

/// Allows `principal` through iff its role is one of `allowed`.
///
/// The UI redirects a rejected principal to [`Role::home_route`].
pub fn authorize(principal: &Principal, allowed: &[Role]) -> Result<(), SessionError> {
    if allowed.contains(&principal.role) {
        return Ok(());
    }
    warn!(principal = %principal.id, role = %principal.role, "Access denied");
    Err(SessionError::Forbidden {
        role: principal.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_by_role() {
        let chef = Principal::chef("CHEF01", "Ravi");
        let employee = Principal::employee("EMP001", "John Doe");

        assert!(authorize(&chef, &[Role::Chef]).is_ok());
        assert!(authorize(&employee, &[Role::Employee, Role::Chef]).is_ok());
        assert_eq!(
            authorize(&employee, &[Role::Chef]),
            Err(SessionError::Forbidden {
                role: Role::Employee
            })
        );
    }
}
