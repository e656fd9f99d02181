//! Static page content
//!
//! Navigation, hero copy, solution topics, the career roadmap, About page
//! media and the share menu.

use serde::Serialize;
use std::str::FromStr;

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Top-level nav entry. Entries with a dropdown have no page of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub dropdown: &'static [NavLink],
}

impl NavItem {
    pub fn has_dropdown(&self) -> bool {
        !self.dropdown.is_empty()
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/", dropdown: &[] },
    NavItem {
        label: "Solutions",
        href: "#",
        dropdown: &[
            NavLink { label: "Solar Energy", href: "/solutions/solar" },
            NavLink { label: "Wind Power", href: "/solutions/wind" },
            NavLink { label: "Hydroelectric", href: "/solutions/hydro" },
        ],
    },
    NavItem { label: "Resources", href: "/resources", dropdown: &[] },
    NavItem { label: "CFC", href: "/calculator", dropdown: &[] },
    NavItem { label: "About", href: "/about", dropdown: &[] },
    NavItem { label: "Contact", href: "/contact", dropdown: &[] },
];

// ============================================================================
// Home
// ============================================================================

pub struct Hero {
    pub headline_top: &'static str,
    pub headline_bottom: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

pub const HERO: Hero = Hero {
    headline_top: "Powering a",
    headline_bottom: "Sustainable Future",
    tagline: "Join us in the revolution towards clean, renewable energy and a greener tomorrow.",
    cta_label: "Get Started",
    cta_href: "/resources",
};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolutionCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const HOME_SOLUTIONS: &[SolutionCard] = &[
    SolutionCard {
        icon: "sun",
        title: "Solar Energy",
        description: "Harness the power of the sun with our advanced solar solutions",
        href: "/solutions/solar",
    },
    SolutionCard {
        icon: "wind",
        title: "Wind Power",
        description: "Clean, efficient wind energy systems for sustainable power generation",
        href: "/solutions/wind",
    },
    SolutionCard {
        icon: "droplets",
        title: "Hydroelectric",
        description: "Reliable hydroelectric solutions for continuous renewable energy",
        href: "/solutions/hydro",
    },
];

// ============================================================================
// Solution Topics
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionTopic {
    Solar,
    Wind,
    Hydro,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Offering {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

/// Everything rendered on a `/solutions/:topic` page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopicPage {
    pub topic: SolutionTopic,
    pub icon: &'static str,
    /// Accent used for icons and bullets
    pub accent: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    pub offerings: &'static [Offering],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no solution page for '{0}'")]
pub struct UnknownTopic(pub String);

impl FromStr for SolutionTopic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(SolutionTopic::Solar),
            "wind" => Ok(SolutionTopic::Wind),
            "hydro" => Ok(SolutionTopic::Hydro),
            _ => Err(UnknownTopic(s.to_string())),
        }
    }
}

impl SolutionTopic {
    pub fn page(&self) -> &'static TopicPage {
        match self {
            SolutionTopic::Solar => &SOLAR,
            SolutionTopic::Wind => &WIND,
            SolutionTopic::Hydro => &HYDRO,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SolutionTopic::Solar => "solar",
            SolutionTopic::Wind => "wind",
            SolutionTopic::Hydro => "hydro",
        }
    }
}

static SOLAR: TopicPage = TopicPage {
    topic: SolutionTopic::Solar,
    icon: "sun",
    accent: "yellow",
    heading: "Solar Energy Solutions",
    intro: "Harness the power of the sun with our cutting-edge solar technologies. \
            Sustainable, efficient, and future-ready solutions for homes and businesses.",
    offerings: &[
        Offering {
            icon: "home",
            title: "Residential Solar",
            description: "Transform your home with rooftop solar panels. Save on electricity bills while reducing carbon emissions.",
            benefits: &["30-50% reduction in bills", "25-year warranty", "Government incentives"],
        },
        Offering {
            icon: "factory",
            title: "Commercial Solar",
            description: "Large-scale solar solutions for businesses and industries. Maximize efficiency and sustainability.",
            benefits: &["ROI within 5-7 years", "Enhanced brand value", "Tax benefits"],
        },
        Offering {
            icon: "battery",
            title: "Solar Storage",
            description: "Advanced battery systems to store solar energy for use during non-sunny hours.",
            benefits: &["24/7 power availability", "Grid independence", "Emergency backup"],
        },
    ],
};

static WIND: TopicPage = TopicPage {
    topic: SolutionTopic::Wind,
    icon: "wind",
    accent: "blue",
    heading: "Wind Power Solutions",
    intro: "Harness the power of wind with our innovative turbine technologies. \
            Clean, efficient, and sustainable energy solutions for a better future.",
    offerings: &[
        Offering {
            icon: "wind",
            title: "Onshore Wind Farms",
            description: "Large-scale wind farms for maximum power generation in optimal wind conditions.",
            benefits: &["High power output", "Low maintenance costs", "Proven technology"],
        },
        Offering {
            icon: "cloud-lightning",
            title: "Offshore Wind",
            description: "Harness powerful ocean winds with offshore turbine installations.",
            benefits: &["Consistent wind speeds", "No land use", "Higher efficiency"],
        },
        Offering {
            icon: "gauge",
            title: "Wind Monitoring",
            description: "Advanced monitoring systems for optimal turbine performance.",
            benefits: &["Real-time data", "Predictive maintenance", "Performance optimization"],
        },
    ],
};

static HYDRO: TopicPage = TopicPage {
    topic: SolutionTopic::Hydro,
    icon: "droplets",
    accent: "cyan",
    heading: "Hydroelectric Solutions",
    intro: "Convert the power of flowing water into clean, renewable energy. \
            Reliable, sustainable, and environmentally conscious power generation.",
    offerings: &[
        Offering {
            icon: "waves",
            title: "Run-of-River",
            description: "Eco-friendly hydropower that uses natural river flow for continuous energy generation.",
            benefits: &["Minimal environmental impact", "Continuous power", "Natural flow"],
        },
        Offering {
            icon: "power",
            title: "Storage Systems",
            description: "Reservoir-based systems for controlled power generation and water management.",
            benefits: &["On-demand power", "Flood control", "Water management"],
        },
        Offering {
            icon: "activity",
            title: "Micro Hydro",
            description: "Small-scale hydroelectric solutions perfect for local communities and remote areas.",
            benefits: &["Low cost", "Easy maintenance", "Community powered"],
        },
    ],
};

// ============================================================================
// Resources: career roadmap
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoadmapStep {
    pub step: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub resources: &'static [NavLink],
}

pub const ROADMAP_HEADING: &str = "Green Tech Career Roadmap";
pub const ROADMAP_INTRO: &str = "Your journey to becoming a green tech professional starts here";

pub const ROADMAP: &[RoadmapStep] = &[
    RoadmapStep {
        step: 1,
        icon: "book-open",
        title: "Fundamentals",
        description: "Start with basic understanding of renewable energy and environmental science",
        resources: &[
            NavLink {
                label: "Introduction to Renewable Energy (Coursera)",
                href: "https://www.coursera.org/learn/renewable-energy",
            },
            NavLink {
                label: "Environmental Science: Earth and Energy (edX)",
                href: "https://www.edx.org/learn/environmental-science",
            },
        ],
    },
    RoadmapStep {
        step: 2,
        icon: "code",
        title: "Technical Skills",
        description: "Learn relevant technical skills and tools used in green tech",
        resources: &[
            NavLink {
                label: "Solar Energy Engineering (MIT OpenCourseWare)",
                href: "https://ocw.mit.edu/courses/mechanical-engineering/2-627-fundamentals-of-photovoltaics-fall-2013/",
            },
            NavLink {
                label: "Energy Systems Engineering (Stanford Online)",
                href: "https://online.stanford.edu/courses/cee-263f-energy-systems-i-fundamentals",
            },
        ],
    },
    RoadmapStep {
        step: 3,
        icon: "lightbulb",
        title: "Specialization",
        description: "Choose your focus area: Solar, Wind, Hydro, or Energy Storage",
        resources: &[
            NavLink {
                label: "Wind Energy Technology (DTU Online)",
                href: "https://www.coursera.org/learn/wind-energy",
            },
            NavLink {
                label: "Energy Storage Technologies (TU Delft)",
                href: "https://www.edx.org/learn/engineering/delft-university-of-technology-energy-storage",
            },
        ],
    },
    RoadmapStep {
        step: 4,
        icon: "graduation-cap",
        title: "Certification",
        description: "Get certified in your chosen specialization",
        resources: &[
            NavLink { label: "NABCEP Certification (Solar)", href: "https://www.nabcep.org/" },
            NavLink {
                label: "Renewable Energy Professional Certification",
                href: "https://www.aeecenter.org/certifications/rep",
            },
        ],
    },
    RoadmapStep {
        step: 5,
        icon: "briefcase",
        title: "Industry Experience",
        description: "Gain practical experience through internships and projects",
        resources: &[
            NavLink { label: "Clean Energy Jobs Board", href: "https://www.cleanenergyjobboard.com/" },
            NavLink { label: "Green Energy Projects Network", href: "https://www.cleanenergyprojects.com/" },
        ],
    },
];

// ============================================================================
// About
// ============================================================================

pub const ABOUT_HEADING: &str = "Transforming Tomorrow with Green Technology";
pub const ABOUT_INTRO: &str = "Pioneering sustainable solutions for a cleaner, greener future \
                               through innovative renewable energy projects worldwide.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Video {
    pub title: &'static str,
    pub embed_url: &'static str,
}

pub const VIDEOS: &[Video] = &[
    Video {
        title: "Renewable Energy Innovation",
        embed_url: "https://www.youtube.com/embed/zx04Kl8y4dE?rel=0&showinfo=0",
    },
    Video {
        title: "Green Technology Solutions",
        embed_url: "https://www.youtube.com/embed/dtnYMEDLKYU?rel=0&showinfo=0",
    },
    Video {
        title: "Sustainable Future",
        embed_url: "https://www.youtube.com/embed/Giek094C_l4?rel=0&showinfo=0",
    },
    Video {
        title: "Clean Energy Revolution",
        embed_url: "https://www.youtube.com/embed/TCtIRAFyTIY?rel=0&showinfo=0",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogCard {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub source: &'static str,
    pub link: &'static str,
}

pub const BLOGS: &[BlogCard] = &[
    BlogCard {
        title: "What is Renewable Energy?",
        description: "Renewable energy is energy derived from natural sources that are replenished at a higher rate than they are consumed. Sunlight and wind, for example, are such sources that are constantly being replenished.",
        image: "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=800&auto=format&fit=crop",
        source: "UN Climate Change",
        link: "https://www.un.org/en/climatechange/what-is-renewable-energy",
    },
    BlogCard {
        title: "Green Tech Innovation: Transforming Business",
        description: "Policy investment for clean energy technologies, such as green hydrogen, carbon capture and biofuels, is gaining traction. Additional support could spur innovation and make low-carbon solutions more affordable.",
        image: "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?w=800&auto=format&fit=crop",
        source: "Moody's",
        link: "https://www.moodys.com/web/en/us/creditview/blog/Green-tech-innovation",
    },
    BlogCard {
        title: "Solar Deployment in Open Seas",
        description: "Commercial-scale ocean solar projects are bringing new momentum to offshore floating solar, opening up potentially limitless deployment opportunities in marine environments.",
        image: "https://imgs.search.brave.com/3sr2cvU7AVidqTcfUTaTGue2MiIlXAlkmX2SAawLPxU/rs:fit:500:0:0:0/g:ce/aHR0cHM6Ly93d3cu/c2NpZW5jZWFsZXJ0/LmNvbS9pbWFnZXMv/aGVsaW9mbG9hdC0y/LmpwZw",
        source: "GreenTech Media",
        link: "https://www.greentechmedia.com/articles/read/race-on-for-commercial-deployment-of-solar-in-open-seas",
    },
    BlogCard {
        title: "Understanding Wind Energy",
        description: "Wind energy is electricity from the naturally flowing air in Earth's atmosphere. As a renewable resource that won't get depleted through use, its impact on climate crisis is significantly smaller.",
        image: "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=800&auto=format&fit=crop",
        source: "TreeHugger",
        link: "https://www.treehugger.com/what-is-wind-energy-definition-and-how-it-works-8734016",
    },
];

// ============================================================================
// Share Menu
// ============================================================================

pub const SHARE_TEXT: &str = "Check out this amazing Green Tech website!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub name: &'static str,
    pub url: String,
}

/// Outbound share URLs for the site at `public_url`
pub fn share_links(public_url: &str) -> Vec<ShareLink> {
    let url = urlencoding::encode(public_url);
    let text = urlencoding::encode(SHARE_TEXT);
    let text_with_url = urlencoding::encode(&format!("{} {}", SHARE_TEXT, public_url)).into_owned();

    vec![
        ShareLink {
            name: "Instagram",
            url: "https://www.instagram.com/".to_string(),
        },
        ShareLink {
            name: "WhatsApp",
            url: format!("https://wa.me/?text={}", text_with_url),
        },
        ShareLink {
            name: "Twitter",
            url: format!("https://twitter.com/intent/tweet?url={}&text={}", url, text),
        },
        ShareLink {
            name: "Facebook",
            url: format!("https://www.facebook.com/sharer/sharer.php?u={}", url),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_slugs_round_trip() {
        for topic in [SolutionTopic::Solar, SolutionTopic::Wind, SolutionTopic::Hydro] {
            assert_eq!(topic.slug().parse::<SolutionTopic>(), Ok(topic));
            assert_eq!(topic.page().topic, topic);
            assert_eq!(topic.page().offerings.len(), 3);
        }
        assert!("geothermal".parse::<SolutionTopic>().is_err());
    }

    #[test]
    fn test_home_cards_point_at_topic_pages() {
        for card in HOME_SOLUTIONS {
            let slug = card.href.trim_start_matches("/solutions/");
            assert!(slug.parse::<SolutionTopic>().is_ok(), "{}", card.href);
        }
    }

    #[test]
    fn test_nav_dropdown() {
        let solutions = NAV_ITEMS.iter().find(|i| i.has_dropdown()).unwrap();
        assert_eq!(solutions.label, "Solutions");
        assert_eq!(solutions.dropdown.len(), 3);
        assert_eq!(NAV_ITEMS.iter().filter(|i| i.has_dropdown()).count(), 1);
    }

    #[test]
    fn test_roadmap_order() {
        let steps: Vec<u8> = ROADMAP.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        assert!(ROADMAP.iter().all(|s| s.resources.len() == 2));
    }

    #[test]
    fn test_share_links_are_encoded() {
        let links = share_links("https://eco.example/?a=1");
        let twitter = links.iter().find(|l| l.name == "Twitter").unwrap();
        assert_eq!(
            twitter.url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Feco.example%2F%3Fa%3D1\
             &text=Check%20out%20this%20amazing%20Green%20Tech%20website%21"
        );
        let facebook = links.iter().find(|l| l.name == "Facebook").unwrap();
        assert!(facebook.url.ends_with("u=https%3A%2F%2Feco.example%2F%3Fa%3D1"));
    }
}
