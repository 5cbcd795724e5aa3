//! Supervisory platform identities.

use supervisor_contracts::{
    error::{SupervisorError, SupervisorResult},
    records::Role,
};

const ROLES: [(&str, &str); 4] = [
    ("SUPER", "超级管理员"),
    ("PROV", "省级监管平台"),
    ("CITY", "市级监管平台"),
    ("COUNTY", "县级监管平台"),
];

/// All roles, the default one first.
pub fn roles() -> Vec<Role> {
    ROLES
        .iter()
        .map(|(id, name)| Role {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn default_role() -> Role {
    Role {
        id: ROLES[0].0.to_string(),
        name: ROLES[0].1.to_string(),
    }
}

/// Look up a role by id, ignoring ASCII case.
pub fn find_role(id: &str) -> SupervisorResult<Role> {
    roles()
        .into_iter()
        .find(|r| r.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| SupervisorError::UnknownRole { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_roles_super_first() {
        let all = roles();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], default_role());
        assert_eq!(all[0].name, "超级管理员");
    }

    #[test]
    fn find_role_is_case_insensitive() {
        let role = find_role("county").unwrap();
        assert_eq!(role.id, "COUNTY");
        assert_eq!(role.name, "县级监管平台");
    }

    #[test]
    fn find_role_rejects_unknown() {
        match find_role("ADMIN") {
            Err(SupervisorError::UnknownRole { id }) => assert_eq!(id, "ADMIN"),
            other => panic!("expected UnknownRole, got {:?}", other),
        }
    }
}
