use std::{fmt, str::FromStr};

/// Subscription tier of a guild, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PremiumTier {
    #[default]
    None,
    Premium,
    Whitelabel,
}

impl PremiumTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Premium => "premium",
            Self::Whitelabel => "whitelabel",
        }
    }

    /// Whether the tier unlocks premium-only settings.
    pub fn is_premium(&self) -> bool {
        *self >= Self::Premium
    }
}

impl fmt::Display for PremiumTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct UnknownPremiumTier(pub String);

impl fmt::Display for UnknownPremiumTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown premium tier '{}'", self.0)
    }
}

impl FromStr for PremiumTier {
    type Err = UnknownPremiumTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "premium" => Ok(Self::Premium),
            "whitelabel" => Ok(Self::Whitelabel),
            _ => Err(UnknownPremiumTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_tiers_by_privilege() {
        assert!(PremiumTier::None < PremiumTier::Premium);
        assert!(PremiumTier::Premium < PremiumTier::Whitelabel);
        assert!(PremiumTier::Whitelabel.is_premium());
        assert!(!PremiumTier::None.is_premium());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Premium".parse::<PremiumTier>().unwrap(), PremiumTier::Premium);
        assert!("gold".parse::<PremiumTier>().is_err());
    }
}
