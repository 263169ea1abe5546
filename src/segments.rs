//! Static segment catalog: centroid profiles, descriptions, and strategies

use crate::error::SegmentationError;

/// Display metadata for one customer segment.
///
/// Centroid income/spend are the raw-space averages of the trained cluster
/// and are used for explanation text only, never for assignment.
#[derive(Debug, PartialEq)]
pub struct SegmentProfile {
    pub centroid_income: f64,
    pub centroid_spend: f64,
    pub name: &'static str,
    pub description: &'static str,
    pub strategies: &'static [&'static str],
}

/// The five segments the model was trained on, indexed by cluster id.
pub static SEGMENT_PROFILES: [SegmentProfile; 5] = [
    SegmentProfile {
        centroid_income: 55.0,
        centroid_spend: 50.0,
        name: "Balanced Customers",
        description: "Mid Income + Mid Spending — stable and average shoppers.",
        strategies: &[
            "Upsell through complementary products",
            "Provide loyalty points to increase retention",
            "Give seasonal or festival-based offers",
        ],
    },
    SegmentProfile {
        centroid_income: 87.0,
        centroid_spend: 82.0,
        name: "Premium Customers",
        description: "High Income + High Spending — loyal and highly profitable.",
        strategies: &[
            "Exclusive VIP membership programs",
            "Premium or luxury product upgrades",
            "Invite-only events or early access sales",
        ],
    },
    SegmentProfile {
        centroid_income: 26.0,
        centroid_spend: 79.0,
        name: "Impulsive Buyers",
        description: "Low Income + High Spending — trend-driven and offer-sensitive.",
        strategies: &[
            "Flash deals and limited-time offers",
            "Product bundles to increase cart size",
            "Influencer-based marketing and trending items",
        ],
    },
    SegmentProfile {
        centroid_income: 88.0,
        centroid_spend: 17.0,
        name: "Cautious High Earners",
        description: "High Income + Low Spending — spend carefully despite wealth.",
        strategies: &[
            "Value-focused communication (show benefits)",
            "Free demos or trials to build trust",
            "Follow-up reminders to reduce hesitation",
        ],
    },
    SegmentProfile {
        centroid_income: 26.0,
        centroid_spend: 21.0,
        name: "Budget Customers",
        description: "Low Income + Low Spending — highly price-sensitive shoppers.",
        strategies: &[
            "Regular discounts and price drops",
            "Essential collections and basic product ranges",
            "Low-cost subscription or EMI-based plans",
        ],
    },
];

/// Look up the profile for a cluster id.
pub fn lookup(cluster: usize) -> crate::Result<&'static SegmentProfile> {
    SEGMENT_PROFILES
        .get(cluster)
        .ok_or(SegmentationError::UnknownCluster(cluster))
}
