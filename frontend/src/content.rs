//! Static page data. Text that changes with the language is referenced by
//! translation key; names, numbers and addresses are shown as-is.

/// Element ids the header and footer links scroll to.
pub mod section {
    pub const SERVICES: &str = "services";
    pub const PORTFOLIO: &str = "portfolio";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";

    /// Navigation order; each section's label key matches its id.
    pub const NAV: &[&str] = &[SERVICES, PORTFOLIO, ABOUT, CONTACT];
}

pub const OFFICE_ADDRESS: &str = "West Bay, Doha, Qatar";
pub const PO_BOX: &str = "P.O. Box 12345";
pub const PHONE: &str = "+974 1234 5678";
pub const PHONE_ALT: &str = "+974 8765 4321";
pub const EMAIL: &str = "info@qatardigital.com";
pub const EMAIL_ALT: &str = "contact@qatardigital.com";
pub const COPYRIGHT_YEAR: u32 = 2025;

pub const HERO_IMAGE: &str =
    "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=600";
pub const ABOUT_IMAGE: &str =
    "https://images.pexels.com/photos/3184338/pexels-photo-3184338.jpeg?auto=compress&cs=tinysrgb&w=600";

pub struct Service {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { icon: "🔍", title_key: "seoTitle", description_key: "seoDescription", accent: "#2563eb" },
    Service { icon: "📣", title_key: "socialMediaTitle", description_key: "socialMediaDescription", accent: "#9333ea" },
    Service { icon: "🎯", title_key: "ppcTitle", description_key: "ppcDescription", accent: "#16a34a" },
    Service { icon: "📝", title_key: "contentTitle", description_key: "contentDescription", accent: "#ea580c" },
    Service { icon: "💻", title_key: "webDevTitle", description_key: "webDevDescription", accent: "#dc2626" },
    Service { icon: "📊", title_key: "analyticsTitle", description_key: "analyticsDescription", accent: "#4f46e5" },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub outcome: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Qatar Airways Campaign",
        category: "Social Media Marketing",
        image: "https://images.pexels.com/photos/1089549/pexels-photo-1089549.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Increased social engagement by 300%",
    },
    Project {
        title: "Doha Shopping Mall",
        category: "SEO & Web Development",
        image: "https://images.pexels.com/photos/2292837/pexels-photo-2292837.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Boosted online traffic by 250%",
    },
    Project {
        title: "Local Restaurant Chain",
        category: "Digital Marketing",
        image: "https://images.pexels.com/photos/958545/pexels-photo-958545.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Generated 150% more leads",
    },
    Project {
        title: "Real Estate Agency",
        category: "PPC Campaign",
        image: "https://images.pexels.com/photos/1396122/pexels-photo-1396122.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Achieved 180% ROI improvement",
    },
    Project {
        title: "Healthcare Provider",
        category: "Content Marketing",
        image: "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Built trusted brand presence",
    },
    Project {
        title: "Tech Startup",
        category: "Full Digital Solution",
        image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=600",
        outcome: "Launched successful digital presence",
    },
];

pub struct Stat {
    pub icon: &'static str,
    pub value: u32,
    pub label_key: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "🏆", value: 5, label_key: "yearsExperience" },
    Stat { icon: "👥", value: 150, label_key: "clientsServed" },
    Stat { icon: "🎯", value: 500, label_key: "projectsCompleted" },
    Stat { icon: "📈", value: 25, label_key: "teamMembers" },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub details: &'static [&'static str],
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "📍", title_key: "officeAddress", details: &[OFFICE_ADDRESS, PO_BOX] },
    ContactChannel { icon: "📞", title_key: "callUs", details: &[PHONE, PHONE_ALT] },
    ContactChannel { icon: "✉️", title_key: "emailUs", details: &[EMAIL, EMAIL_ALT] },
];

pub struct Social {
    pub name: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[Social] = &[
    Social { name: "Facebook", glyph: "f", href: "#" },
    Social { name: "Twitter", glyph: "𝕏", href: "#" },
    Social { name: "Instagram", glyph: "◎", href: "#" },
    Social { name: "LinkedIn", glyph: "in", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations::KEYS;

    #[test]
    fn section_ids_are_stable() {
        assert_eq!(section::NAV, &["services", "portfolio", "about", "contact"]);
    }

    #[test]
    fn every_referenced_key_is_translated() {
        let referenced = section::NAV
            .iter()
            .copied()
            .chain(SERVICES.iter().flat_map(|s| [s.title_key, s.description_key]))
            .chain(STATS.iter().map(|s| s.label_key))
            .chain(CONTACT_CHANNELS.iter().map(|c| c.title_key));

        for key in referenced {
            assert!(KEYS.contains(&key), "{} missing from translation tables", key);
        }
    }

    #[test]
    fn counters_match_the_about_copy() {
        let values: Vec<u32> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5, 150, 500, 25]);
    }
}
