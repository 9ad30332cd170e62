/// One tier of the reward & loyalty program
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoyaltyTier {
    pub name: &'static str,
    pub css_class: &'static str,
    /// `None` for the entry tier
    pub required_reviews: Option<u32>,
    pub benefits: &'static [&'static str],
}

impl LoyaltyTier {
    pub fn requirement_label(&self) -> String {
        match self.required_reviews {
            Some(n) => format!("Requirement: {} reviews", n),
            None => "Starting Tier".to_string(),
        }
    }
}

pub const PROGRAM_TITLE: &str = "Reward & Loyalty Program";

pub const PROGRAM_DESCRIPTION: &str = "Join our Reward & Loyalty Program to earn exciting rewards as you review, \
update, and charge at our EV stations! Climb the tiers and enjoy exclusive benefits.";

pub const TIERS: [LoyaltyTier; 4] = [
    LoyaltyTier {
        name: "Bronze",
        css_class: "bronze",
        required_reviews: None,
        benefits: &["1 Air Mile for every 10 reviews or status updates"],
    },
    LoyaltyTier {
        name: "Silver",
        css_class: "silver",
        required_reviews: Some(100),
        benefits: &[
            "1 Air Mile for every 5 reviews or status updates",
            "10% off every 10 charges",
        ],
    },
    LoyaltyTier {
        name: "Gold",
        css_class: "gold",
        required_reviews: Some(250),
        benefits: &[
            "1 Air Mile for every 3 reviews or status updates",
            "10% off every 10 charges",
            "100 Scene Points every other use",
        ],
    },
    LoyaltyTier {
        name: "Platinum",
        css_class: "platinum",
        required_reviews: Some(500),
        benefits: &[
            "1 Air Mile for every review",
            "200 Scene Points every other use",
            "1 Free Full Charge every 15 reviews",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_requirement() {
        let reqs: Vec<u32> = TIERS.iter().map(|t| t.required_reviews.unwrap_or(0)).collect();
        let mut sorted = reqs.clone();
        sorted.sort();
        assert_eq!(reqs, sorted);
        assert_eq!(TIERS[0].requirement_label(), "Starting Tier");
        assert_eq!(TIERS[3].requirement_label(), "Requirement: 500 reviews");
    }
}
