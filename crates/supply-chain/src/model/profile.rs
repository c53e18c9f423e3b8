use super::{DocumentId, Role};
use serde::{Deserialize, Serialize};

/// Per-identity profile stored in the `users` collection under the identity id.
///
/// The role tag is kept as stored rather than parsed, so a record carrying a
/// tag outside the known set still loads and resolves to the unknown-role view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip)]
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "userType")]
    pub user_type: String,
}

impl Profile {
    pub fn new(
        id: DocumentId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            user_type: role.as_str().to_string(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user_type.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_is_persisted_as_user_type() {
        let profile = Profile::new("uid-1".into(), "Asha", "asha@farm.test", "555", Role::Farmer);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["userType"], "Farmer");
        assert!(json.get("id").is_none());
        assert!(json.get("user_type").is_none());
    }

    #[test]
    fn test_every_role_survives_storage_as_its_tag() {
        for role in Role::ALL {
            let profile = Profile::new("uid-2".into(), "Kim", "kim@town.test", "", role);
            let stored = serde_json::to_string(&profile).unwrap();
            let loaded: Profile = serde_json::from_str(&stored).unwrap();
            assert_eq!(loaded.user_type, role.as_str());
            assert_eq!(loaded.role(), Some(role));
        }
    }

    #[test]
    fn test_unknown_stored_tag_loads_without_a_role() {
        let json = r#"{"name":"X","email":"x@y","phone":"","userType":"Wholesaler"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_type, "Wholesaler");
        assert_eq!(profile.role(), None);
    }
}
