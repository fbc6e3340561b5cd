/// Page sections in document order. The order matters for scroll-spy:
/// the first section containing the reference point wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Achievements,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "HOME",
            SectionId::About => "ABOUT",
            SectionId::Skills => "SKILLS",
            SectionId::Projects => "PROJECTS",
            SectionId::Achievements => "ACHIEVEMENTS",
            SectionId::Blog => "BLOG",
            SectionId::Contact => "CONTACT",
        }
    }
}

/// Sections listed in the navigation bar. Home is reached through the logo.
pub fn nav_items() -> impl Iterator<Item = SectionId> {
    SectionId::ALL.into_iter().filter(|s| *s != SectionId::Home)
}

pub const OWNER_NAME: &str = "Kamau Johnson";
pub const OWNER_EMAIL: &str = "johnsonkamau542@gmail.com";
pub const OWNER_PHONE: &str = "+254 768280952";
pub const OWNER_LOCATION: &str = "Nairobi, Kenya";
pub const RESUME_PATH: &str = "/Kamau Johnson's Resume.pdf";
pub const GITHUB_PROFILE: &str = "https://github.com/Kamau-Johnson";
pub const MEDIUM_PROFILE: &str = "https://medium.com/@Kamau_Johnson";

pub const ROLES: &[&str] = &["Software Developer", "Data Scientist"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkillCategory {
    Development,
    DataScience,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML", category: SkillCategory::Development, icon: "/icons/HTML.webp" },
    Skill { name: "CSS", category: SkillCategory::Development, icon: "/icons/CSS.webp" },
    Skill { name: "JavaScript", category: SkillCategory::Development, icon: "/icons/Javascript.gif" },
    Skill { name: "Next.js", category: SkillCategory::Development, icon: "/icons/Next.js.webp" },
    Skill { name: "Tailwind CSS", category: SkillCategory::Development, icon: "/icons/Tailwind CSS.webp" },
    Skill { name: "Python", category: SkillCategory::DataScience, icon: "/icons/Python.webp" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct FocusArea {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        title: "Frontend Development",
        description: "I build modern, responsive, and intuitive user interfaces using React, Next.js, and Tailwind CSS to create seamless user experiences.",
        icon: "/icons/Front-End-Development.gif",
    },
    FocusArea {
        title: "Backend Development",
        description: "I create robust, scalable backend systems and secure APIs that handle complex data flows and power high-performance applications.",
        icon: "/icons/Backend-End-Developement.gif",
    },
    FocusArea {
        title: "Data Science & AI",
        description: "Leveraging Python, I develop machine learning models and perform data analysis to uncover insights and drive data-informed decisions.",
        icon: "/icons/Data Science and AI.gif",
    },
    FocusArea {
        title: "Tech Content Creator",
        description: "I build scalable, resilient software systems and create tech content across platforms like YouTube, where I share my journey, projects, and insights to educate and inspire others in tech.",
        icon: "/icons/Tech Content Creator.gif",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub takeaways: &'static [&'static str],
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Power Hacks Hackathon - 4th Runners-Up",
        tagline: "October 2024 • First Hackathon Experience",
        summary: "In October 2024 I took part in my first hackathon, the Power Hacks Hackathon, representing SOSTOS Blog. Sponsored by PLP, Safaricom, SpaceYaTech, Payd and others, we built an app that verifies statement accuracy. I led full-stack development with HTML, CSS, JS, React Native and PHP, delivering a secure platform that addressed misinformation. We secured 4th Runners-Up, which fueled my passion for tech innovation.",
        takeaways: &[],
    },
    Achievement {
        title: "Blockchain & Web3 Bootcamp - First Runners-Up",
        tagline: "April 2025 • $1000 Prize Winner",
        summary: "In April 2025 I joined a Blockchain and Web3 Bootcamp hosted by MUIAA, Nairobi County Government and ComputerAid Kenya, where we were introduced to Cypherium Blockchain. With my teammates Risper, Mitau and Keziah we built BebaPay, a tokenized recycling platform. I designed and implemented the smart contract layer. We earned First Runners-Up and a $1000 cash prize.",
        takeaways: &[
            "Learned to build and deploy smart contracts using Cypherium's blockchain stack",
            "Sharpened pitching techniques under pressure with clarity and confidence",
            "Collaborated across design, contracts and frontend in a tight timeline",
        ],
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Moment {
    pub image: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const MOMENTS: &[Moment] = &[
    Moment { image: "/BebaPay Hackathon.webp", title: "BebaPay Hackathon Victory", caption: "First Runners-Up • $1000 Prize" },
    Moment { image: "/Power Hacks Hackathon.webp", title: "Power Hacks Hackathon", caption: "4th Runners-Up" },
    Moment {
        image: "/Blockchain Bootcamp 1.webp",
        title: "Blockchain Bootcamp (MUIAA, Nairobi County & Computer Aid)",
        caption: "Web3 & Smart Contracts Learning",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Image for the hero row, glyph class for the icon buttons.
    pub icon: &'static str,
}

pub const HERO_SOCIALS: &[SocialLink] = &[
    SocialLink { href: "https://www.linkedin.com/in/kamau-johnson-4bab25276/", label: "LinkedIn", icon: "/icons/Linkedin.webp" },
    SocialLink { href: GITHUB_PROFILE, label: "GitHub", icon: "/icons/Github.gif" },
    SocialLink { href: "https://www.youtube.com/@Kamau_Johnson", label: "YouTube", icon: "/icons/Youtube.webp" },
    SocialLink { href: MEDIUM_PROFILE, label: "Medium", icon: "/icons/Medium.gif" },
    SocialLink { href: "mailto:johnsonkamau542@gmail.com", label: "Email", icon: "/icons/Email.webp" },
    SocialLink { href: "https://wa.me/+254768280952", label: "WhatsApp", icon: "/icons/Whatsapp.webp" },
];

pub const CONTACT_SOCIALS: &[SocialLink] = &[
    SocialLink { href: "https://www.linkedin.com/in/kamau-johnson-4bab25276/", label: "LinkedIn Profile", icon: "icon-linkedin" },
    SocialLink { href: GITHUB_PROFILE, label: "GitHub Profile", icon: "icon-github" },
    SocialLink { href: "https://www.youtube.com/@Kamau_Johnson", label: "YouTube Channel", icon: "icon-play" },
    SocialLink { href: MEDIUM_PROFILE, label: "Medium Profile", icon: "icon-message" },
];

pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink { href: "https://www.linkedin.com/in/kamau-johnson-4bab25276/", label: "LinkedIn Profile", icon: "icon-linkedin" },
    SocialLink { href: GITHUB_PROFILE, label: "GitHub Profile", icon: "icon-github" },
    SocialLink { href: "https://www.youtube.com/@Kamau_Johnson", label: "YouTube Channel", icon: "icon-youtube" },
    SocialLink { href: "https://x.com/Kamau_Johnson_", label: "Twitter Profile", icon: "icon-twitter" },
    SocialLink { href: MEDIUM_PROFILE, label: "Medium Profile", icon: "icon-message" },
    SocialLink { href: "mailto:johnsonkamau542@gmail.com", label: "Send Email", icon: "icon-mail" },
    SocialLink { href: "tel:+254768280952", label: "Phone Call", icon: "icon-phone" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_skip_home_and_keep_order() {
        let ids: Vec<&str> = nav_items().map(SectionId::as_str).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "achievements", "blog", "contact"]);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }
}
