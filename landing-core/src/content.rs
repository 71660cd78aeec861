//! Static copy and asset references for the landing page.

/// Brand name shown in the header and footer.
pub const BRAND: &str = "NovaDigital";

pub const LOGO_URL: &str = "https://dummyimage.com/72x72/00e5ff/000.png&text=∎";
pub const FOOTER_LOGO_URL: &str = "https://dummyimage.com/72x72/12FEDD/000.png&text=∎";

/// Spline scene rendered behind the hero copy.
pub const SPLINE_SCENE_URL: &str = "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode";

pub const CONTACT_MAILTO: &str = "mailto:hello@novadigital.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "About", href: "#why" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const FOOTER_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Contact", href: "#contact" },
];

pub struct Hero {
    pub title: &'static str,
    pub description: &'static str,
    pub primary: NavLink,
    pub secondary: NavLink,
}

pub const HERO: Hero = Hero {
    title: "Next-Generation Digital Solutions",
    description: "Customized online management systems, web development, mobile apps, graphic design, \
                  Shopify builds and more — crafted with precision and powered by cutting‑edge tech.",
    primary: NavLink { label: "Get Started", href: "#contact" },
    secondary: NavLink { label: "See Our Work", href: "#services" },
};

/// Title plus one-line description, shared by the service and "why us" grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Card; 5] = [
    Card {
        title: "Customized Online Management Systems",
        description: "Tailored dashboards, automation and analytics that fit your exact workflow and grow with you.",
    },
    Card {
        title: "Web Development",
        description: "High‑performance sites with modern architectures, accessibility, and SEO baked in.",
    },
    Card {
        title: "Graphic Design",
        description: "Brand identities, UI assets, and visuals that communicate clearly and look stunning.",
    },
    Card {
        title: "Mobile App Development",
        description: "iOS and Android experiences that are fast, intuitive, and delightful to use.",
    },
    Card {
        title: "Shopify Store Development",
        description: "Conversion‑focused storefronts with custom themes, apps, and integrations.",
    },
];

/// Icon for the service card at `index`; colours alternate.
pub fn service_icon_url(index: usize) -> String {
    let colour = if index % 2 == 0 { "00e5ff" } else { "1a75ff" };
    format!("https://dummyimage.com/48x48/{colour}/000.png&text=✦")
}

pub const WHY_US: [Card; 4] = [
    Card {
        title: "Tailored Digital Solutions",
        description: "Every build is custom‑fit to your goals, workflows, and scale.",
    },
    Card {
        title: "Cutting‑Edge Technologies",
        description: "Modern stacks and best practices from infrastructure to UI.",
    },
    Card {
        title: "Fast Delivery",
        description: "Adaptive sprints and clear milestones keep momentum high.",
    },
    Card {
        title: "Professional Support",
        description: "We partner long‑term with proactive maintenance and insights.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Avery C.",
        quote: "They translated our complex operations into a clean system our whole team loves. \
                Delivery was ahead of schedule and support is top‑notch.",
    },
    Testimonial {
        name: "Jordan M.",
        quote: "Our new website is blazing fast and conversions jumped within weeks. \
                The process was collaborative and crystal clear.",
    },
    Testimonial {
        name: "Samira P.",
        quote: "From design to mobile app, the craftsmanship shows. \
                We finally have a product that feels premium and performs flawlessly.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Twitter,
    LinkedIn,
    GitHub,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 3] = [
        SocialNetwork::Twitter,
        SocialNetwork::LinkedIn,
        SocialNetwork::GitHub,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::GitHub => "GitHub",
        }
    }

    /// 24x24 SVG path for the network's icon.
    pub fn icon_path(&self) -> &'static str {
        match self {
            SocialNetwork::Twitter => {
                "M22 5.8c-.7.3-1.4.5-2.1.6.8-.5 1.3-1.2 1.6-2.1-.7.5-1.6.8-2.4 1-1.4-1.5-3.8-1.4-5.1.1-1 1.1-1.2 2.7-.6 4-3.1-.2-5.9-1.7-7.8-4.1-1 1.8-.5 4.1 1.2 5.2-.6 0-1.1-.2-1.6-.5 0 2.1 1.5 3.9 3.5 4.3-.4.1-.8.1-1.2 0 .4 1.7 2 2.9 3.8 2.9-1.4 1.1-3.1 1.7-4.8 1.7H2c1.8 1.1 3.9 1.7 6 1.7 7.2 0 11.2-6 11.2-11.2v-.5c.8-.5 1.4-1.2 1.8-2z"
            }
            SocialNetwork::LinkedIn => {
                "M4.98 3.5C4.98 4.88 3.86 6 2.5 6S0 4.88 0 3.5 1.12 1 2.5 1s2.48 1.12 2.48 2.5zM.5 8.5h4V23h-4V8.5zM8.5 8.5h3.8v2h.1c.5-1 1.8-2 3.7-2 4 0 4.7 2.6 4.7 6V23h-4v-7.3c0-1.7 0-3.8-2.3-3.8-2.3 0-2.7 1.8-2.7 3.7V23h-4V8.5z"
            }
            SocialNetwork::GitHub => {
                "M12 .5C5.7.5.8 5.4.8 11.7c0 4.9 3.1 9 7.5 10.5.6.1.8-.3.8-.6v-2.1c-3.1.7-3.8-1.3-3.8-1.3-.5-1.2-1.2-1.6-1.2-1.6-1-.6.1-.6.1-.6 1.1.1 1.7 1.1 1.7 1.1 1 .1.9-1 .9-1 0-1.2-.8-1.6-.8-1.6-2.5-.2-3.7-1.3-3.7-3.3 0-.8.3-1.5.8-2.1-.1-.2-.4-1 .1-2.1 0 0 .8-.2 2.2.8.7-.2 1.5-.3 2.2-.3s1.5.1 2.2.3c1.4-1 2.2-.8 2.2-.8.5 1.1.2 1.9.1 2.1.5.6.8 1.3.8 2.1 0 2-1.2 3.1-3.7 3.3 0 0-.8.4-.8 1.6 0 .7 0 1.6 0 1.8v2.7c0 .3.2.7.8.6 4.4-1.5 7.5-5.6 7.5-10.5C23.2 5.4 18.3.5 12 .5z"
            }
        }
    }
}

pub fn copyright(year: u32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn service_icons_alternate_colours() {
        assert!(service_icon_url(0).contains("/00e5ff/"));
        assert!(service_icon_url(1).contains("/1a75ff/"));
        assert!(service_icon_url(4).contains("/00e5ff/"));
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(2025), "© 2025 NovaDigital. All rights reserved.");
    }

    #[test]
    fn nav_targets_exist_on_page() {
        let anchors = ["#home", "#services", "#why", "#contact"];
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()) {
            assert!(anchors.contains(&link.href), "dangling link {}", link.href);
        }
    }
}
