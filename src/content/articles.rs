//! Article Tables - Blog posts and case studies
//!
//! Static editorial content. Bodies use the minimal markup of
//! [`markup`](super::markup): plain paragraphs plus `"## "` headings.

// =============================================================================
// BLOG POSTS
// =============================================================================

/// One blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub featured: bool,
    pub body: &'static str,
}

/// Look up a post by its slug.
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// All posts, newest first.
pub static BLOG_POSTS: [BlogPost; 5] = [
    BlogPost {
        slug: "retail-trends-2024",
        title: "5 Retail Trends That Will Define 2024",
        excerpt: "From AI-powered personalization to sustainable shopping, discover \
                  the trends shaping the future of retail.",
        category: "Industry Trends",
        author: "Alexandra Mitchell",
        date: "Dec 15, 2024",
        read_time: "8 min read",
        featured: true,
        body: "The retail landscape is evolving faster than ever. Here are the five trends that will define the industry in 2024:

## 1. AI-Powered Personalization
Artificial intelligence is revolutionizing how retailers understand and serve customers. From personalized product recommendations to dynamic pricing, AI is becoming the backbone of modern retail strategy.

## 2. Sustainable Shopping
Consumers are increasingly demanding eco-friendly options. Retailers who prioritize sustainability in their supply chains and product offerings will gain a significant competitive advantage.

## 3. Omnichannel Excellence
The line between online and offline continues to blur. Successful retailers are those who create seamless experiences across all touchpoints.

## 4. Social Commerce
Social media platforms are becoming full-fledged shopping destinations. Brands that master social commerce will capture the next generation of consumers.

## 5. Experience-First Retail
Physical stores are transforming into experience centers. The future of retail is about creating memorable moments, not just transactions.",
    },
    BlogPost {
        slug: "consumer-behavior-post-pandemic",
        title: "How Consumer Behavior Has Permanently Changed Post-Pandemic",
        excerpt: "New shopping habits formed during COVID-19 are here to stay. Learn \
                  how to adapt your strategy.",
        category: "Consumer Insights",
        author: "Marcus Rodriguez",
        date: "Dec 10, 2024",
        read_time: "6 min read",
        featured: true,
        body: "The pandemic fundamentally altered how consumers shop. While some changes were temporary, many have become permanent fixtures of the retail landscape.

## The Rise of Digital-First Consumers
Even consumers who never shopped online before 2020 have now embraced e-commerce. This shift has created new expectations around convenience, delivery speed, and digital experiences.

## Value-Conscious Shopping
Economic uncertainty has made consumers more price-sensitive and value-conscious. Retailers need to clearly communicate value propositions to win customer loyalty.

## Health and Safety Priorities
Hygiene and safety concerns remain elevated. Contactless payments, curbside pickup, and clean store environments are now baseline expectations.",
    },
    BlogPost {
        slug: "data-driven-marketing",
        title: "The Complete Guide to Data-Driven Retail Marketing",
        excerpt: "How to leverage customer data to create hyper-targeted campaigns \
                  that convert.",
        category: "Marketing Strategy",
        author: "Emily Park",
        date: "Dec 5, 2024",
        read_time: "10 min read",
        featured: false,
        body: "Data is the new oil of retail marketing. Here's how to extract maximum value from your customer data.

## Understanding Your Data Sources
From POS systems to website analytics, retailers have access to vast amounts of data. The key is integrating these sources to create a unified customer view.

## Segmentation Strategies
Not all customers are created equal. Learn how to segment your audience for more effective targeting.

## Measuring What Matters
Vanity metrics can be misleading. Focus on KPIs that directly tie to business outcomes.",
    },
    BlogPost {
        slug: "inventory-optimization",
        title: "Inventory Optimization: Balancing Stock and Demand",
        excerpt: "Strategies to reduce carrying costs while maintaining product \
                  availability.",
        category: "Operations",
        author: "James Chen",
        date: "Nov 28, 2024",
        read_time: "7 min read",
        featured: false,
        body: "Inventory optimization is one of the most impactful ways to improve retail profitability.

## The True Cost of Inventory
Beyond the purchase price, inventory carries hidden costs: storage, insurance, obsolescence, and opportunity cost.

## Demand Forecasting Techniques
Modern forecasting combines historical data, market trends, and machine learning for unprecedented accuracy.

## Just-in-Time vs. Safety Stock
Finding the right balance between lean inventory and buffer stock is crucial for customer satisfaction.",
    },
    BlogPost {
        slug: "omnichannel-success",
        title: "Building a Winning Omnichannel Strategy",
        excerpt: "Create seamless customer experiences across all touchpoints.",
        category: "Strategy",
        author: "Sarah Williams",
        date: "Nov 20, 2024",
        read_time: "9 min read",
        featured: false,
        body: "Omnichannel retail is no longer optional - it's essential for survival.

## Understanding the Omnichannel Customer
Today's consumers expect to move seamlessly between channels. A purchase might start on social media, continue on your website, and complete in-store.

## Technology Infrastructure
The backbone of omnichannel success is a unified technology platform that connects inventory, customer data, and fulfillment.

## Measuring Omnichannel Performance
Traditional channel-specific metrics don't capture the full picture. Learn how to measure true omnichannel performance.",
    },
];

// =============================================================================
// CASE STUDIES
// =============================================================================

/// One headline result metric on a case study card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMetric {
    pub metric: &'static str,
    pub value: &'static str,
}

/// One client engagement write-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [CaseMetric],
    pub quote: &'static str,
    pub author: &'static str,
}

/// All case studies, in display order.
pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: "fashion-house",
        title: "Fashion House Ana",
        industry: "Fashion Retail",
        challenge: "Declining foot traffic and online competition.",
        solution: "Consumer research and omnichannel marketing strategy.",
        results: &[
            CaseMetric { metric: "Sales Increase", value: "12%" },
            CaseMetric { metric: "Customer Retention", value: "18%" },
            CaseMetric { metric: "Marketing ROI", value: "1.8x" },
        ],
        quote: "They gave us concrete steps for improvement, not just data.",
        author: "Ana Petrovic, Owner",
    },
    CaseStudy {
        id: "tech-shop",
        title: "Tech Shop",
        industry: "Consumer Electronics",
        challenge: "Excess inventory and poor demand forecasting.",
        solution: "Sales forecasting system and inventory optimization.",
        results: &[
            CaseMetric { metric: "Inventory Costs", value: "-15%" },
            CaseMetric { metric: "Stockout Reduction", value: "25%" },
            CaseMetric { metric: "Margin Improvement", value: "5%" },
        ],
        quote: "Their forecasting accuracy is impressive.",
        author: "Emily Watson, Manager",
    },
    CaseStudy {
        id: "homestyle",
        title: "HomeStyle Co.",
        industry: "Home Goods",
        challenge: "High acquisition cost and low repeat purchase rate.",
        solution: "Loyalty program based on behavioral segmentation.",
        results: &[
            CaseMetric { metric: "CAC Reduction", value: "-20%" },
            CaseMetric { metric: "Repeat Purchases", value: "+25%" },
            CaseMetric { metric: "LTV Increase", value: "1.4x" },
        ],
        quote: "Understanding our customers changed everything.",
        author: "Mark Johnson, Director",
    },
];

// =============================================================================
// TESTS
// =============================================================================
