//! Landing Page Tables - Stats, testimonials, and service pillars
//!
//! Static read-only content consumed by the landing page sections.
//! Loaded once at module initialization, never mutated.

// =============================================================================
// STATS
// =============================================================================

/// Duration of the stat count-up animation.
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Number of equal ticks the count-up is divided into.
pub const COUNTER_STEPS: u32 = 60;

/// One animated statistic in the proof section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// The four headline statistics, counted up once their section scrolls
/// into view.
pub static STATS: [Stat; 4] = [
    Stat {
        value: 18.0,
        suffix: "%",
        label: "Average Sales Increase",
        description: "Growth our clients achieve",
    },
    Stat {
        value: 45.0,
        suffix: "+",
        label: "Completed Projects",
        description: "Successfully delivered research",
    },
    Stat {
        value: 87.0,
        suffix: "%",
        label: "Forecast Accuracy",
        description: "Precision in our predictions",
    },
    Stat {
        value: 5.0,
        suffix: "+",
        label: "Years Experience",
        description: "Deep retail market expertise",
    },
];

// =============================================================================
// TESTIMONIALS
// =============================================================================

/// One rotating client quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
    pub initials: &'static str,
}

/// The testimonial carousel's item sequence.
pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "They helped us better understand our customers. Sales increased \
                by 12% in the first year of collaboration.",
        author: "Ana Petrovic",
        role: "Owner",
        company: "Fashion House Ana",
        rating: 5,
        initials: "AP",
    },
    Testimonial {
        quote: "The consumer analysis was eye-opening. We changed our approach \
                and immediately saw results.",
        author: "Mark Johnson",
        role: "Director",
        company: "HomeStyle Co.",
        rating: 5,
        initials: "MJ",
    },
    Testimonial {
        quote: "Their forecasting accuracy is impressive. We reduced inventory \
                costs by 15%.",
        author: "Emily Watson",
        role: "Operations Manager",
        company: "Tech Shop",
        rating: 5,
        initials: "EW",
    },
];

// =============================================================================
// SERVICE PILLARS
// =============================================================================

/// One of the three service pillars, with its reveal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePillar {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub reveal_delay_ms: u64,
}

/// The service pillar cards, staggered left to right.
pub static SERVICE_PILLARS: [ServicePillar; 3] = [
    ServicePillar {
        title: "Market Research",
        description: "Deep-dive analysis of your retail market, identifying trends, \
                      opportunities, and competitive positioning to inform strategic decisions.",
        features: &[
            "Market sizing & segmentation",
            "Trend analysis & forecasting",
            "Competitive landscape mapping",
        ],
        reveal_delay_ms: 0,
    },
    ServicePillar {
        title: "Consumer Insights",
        description: "Understand your customers at a granular level through behavioral \
                      analysis, purchase patterns, and preference mapping.",
        features: &[
            "Customer journey mapping",
            "Behavioral segmentation",
            "Purchase pattern analysis",
        ],
        reveal_delay_ms: 100,
    },
    ServicePillar {
        title: "Marketing Strategy",
        description: "Data-driven marketing strategies that maximize ROI, optimize \
                      channel mix, and drive measurable revenue growth.",
        features: &[
            "Channel optimization",
            "Campaign performance",
            "ROI measurement",
        ],
        reveal_delay_ms: 200,
    },
];

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_targets_are_integers() {
        // The stat counters render whole numbers; fractional targets
        // would change the display format
        for stat in STATS.iter() {
            assert_eq!(stat.value.fract(), 0.0, "{} target", stat.label);
            assert!(stat.value > 0.0);
        }
    }

    #[test]
    fn test_testimonial_ratings_in_range() {
        for testimonial in TESTIMONIALS.iter() {
            assert!(testimonial.rating >= 1 && testimonial.rating <= 5);
            assert_eq!(testimonial.initials.chars().count(), 2);
        }
    }

    #[test]
    fn test_pillar_delays_staggered() {
        let delays: Vec<u64> = SERVICE_PILLARS.iter().map(|p| p.reveal_delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
