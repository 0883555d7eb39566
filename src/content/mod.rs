//! Content Module - Immutable site content tables
//!
//! Static read-only tables loaded once at module initialization:
//!
//! - **Home** - Stats, testimonials, service pillars
//! - **Articles** - Blog posts, case studies
//! - **Markup** - The minimal article body format

pub mod articles;
pub mod home;
pub mod markup;

pub use articles::{find_post, BlogPost, CaseMetric, CaseStudy, BLOG_POSTS, CASE_STUDIES};
pub use home::{
    ServicePillar, Stat, Testimonial, COUNTER_DURATION_MS, COUNTER_STEPS, SERVICE_PILLARS, STATS,
    TESTIMONIALS,
};
pub use markup::{parse, Block};
