//! The six participant types of the supply chain.
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Farmer,
    Trader,
    Manufacturer,
    Distributor,
    Shops,
    User,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Farmer,
        Role::Trader,
        Role::Manufacturer,
        Role::Distributor,
        Role::Shops,
        Role::User,
    ];

    /// The tag stored in a profile's `userType` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
            Role::Trader => "Trader",
            Role::Manufacturer => "Manufacturer",
            Role::Distributor => "Distributor",
            Role::Shops => "Shops",
            Role::User => "User",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

/// Matches stored tags exactly; "farmer" is not a role.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == tag)
            .ok_or_else(|| UnknownRole(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_round_trips_through_its_tag() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(
            "farmer".parse::<Role>(),
            Err(UnknownRole("farmer".to_string()))
        );
        assert!("".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }
}
