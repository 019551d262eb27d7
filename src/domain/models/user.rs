use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumString, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Free,
    Basic,
    Pro,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub is_logged_in: bool,
    pub tier: Tier,
}

impl User {
    pub fn guest() -> User {
        return User {
            is_logged_in: false,
            tier: Tier::Free,
        };
    }

    pub fn is_free(&self) -> bool {
        return self.tier == Tier::Free;
    }

    pub fn display_name(&self) -> &'static str {
        if self.is_logged_in {
            return "Registered User";
        }

        return "Guest User";
    }

    pub fn plan_label(&self) -> &'static str {
        match self.tier {
            Tier::Free => return "Free Plan",
            Tier::Basic => return "Basic Plan",
            Tier::Pro => return "Pro Plan",
        }
    }
}
