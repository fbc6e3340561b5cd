#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Dev,
    Data,
}

impl ProjectCategory {
    pub fn badge(self) -> &'static str {
        match self {
            ProjectCategory::Dev => "Dev",
            ProjectCategory::Data => "Data",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub image: &'static str,
    pub hero_image: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub video_url: &'static str,
    pub category: ProjectCategory,
}

impl Project {
    /// Number of tech tags shown on a card before the "+N more" badge.
    pub const CARD_TAG_LIMIT: usize = 3;

    pub fn card_tags(&self) -> &'static [&'static str] {
        &self.tech[..self.tech.len().min(Self::CARD_TAG_LIMIT)]
    }

    pub fn hidden_tag_count(&self) -> usize {
        self.tech.len().saturating_sub(Self::CARD_TAG_LIMIT)
    }

    pub fn overflow_label(&self) -> Option<String> {
        match self.hidden_tag_count() {
            0 => None,
            n => Some(format!("+{} more", n)),
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "ovault",
        title: "O-VAULT System",
        description: "Securely stores and manages personal IDs and documents.",
        detailed_description: "O VAULT is a secure and user-friendly system built to manage and protect personal IDs and sensitive documents. It simulates real-world authentication with session control, enabling users to log in, access stored credentials, and maintain privacy throughout the session. The platform focuses on simplicity, data privacy, and seamless user access, making it ideal for safe and efficient document handling.",
        image: "/O-VAULT Thumbnail.webp",
        hero_image: "/O-VAULT Thumbnail.webp",
        tech: &["HTML", "CSS", "Javascript", "PHP", "MySQL"],
        live_url: "https://o-vault.netlify.app/",
        github_url: "https://github.com/Kamau-Johnson/O-VAULT-SYSTEM---personal-id-document-keeper-system.",
        video_url: "https://www.youtube.com/@Kamau_Johnson",
        category: ProjectCategory::Dev,
    },
    Project {
        id: "bebapay",
        title: "BebaPay",
        description: "♻️ Recycle to Earn. Empower the Future. Go Green Initiative",
        detailed_description: "BebaPay is an innovative recycling and rewards platform designed to promote environmental responsibility through a unique incentive-based model. Users are rewarded with eco-points for recycling materials such as plastic, glass, and paper, which can be redeemed for goods or services. The system features secure user authentication, real-time activity tracking, and a personalized dashboard that visualizes individual environmental impact. The platform leverages modern web technologies and integrates the Web Crypto API to ensure secure transactions and data integrity.",
        image: "/BebaPay Thumbnail.webp",
        hero_image: "/BebaPay Thumbnail.webp",
        tech: &["Next.js", "React", "Tailwind CSS", "TypeScript", "Cypherium Blockchain", "Superbase"],
        live_url: "https://v0-deploy-to-vercel-plum-seven.vercel.app/",
        github_url: "https://github.com/Kamau-Johnson/BebaPay-Refined-Version",
        video_url: "https://www.youtube.com/@Kamau_Johnson",
        category: ProjectCategory::Dev,
    },
    Project {
        id: "sostos-blog",
        title: "Sostos Blog",
        description: "A clean, fast, and responsive blog platform for sharing tech insights, tutorials, and personal thoughts.",
        detailed_description: "Sostos Blog is a modern, responsive blogging platform designed for sharing technical insights, tutorials, and personal reflections. It delivers a distraction-free reading experience with a minimalist interface that emphasizes clarity and performance. The platform supports dynamic content, intuitive navigation, and scalable content organization. With a focus on speed, accessibility, and clean design, Sostos empowers creators to publish meaningful content that connects and informs.",
        image: "/Sostos Blog Thumbnail.webp",
        hero_image: "/Sostos Blog Thumbnail.webp",
        tech: &["HTML", "CSS", "Next.js", "React", "Tailwind CSS", "Firebase"],
        live_url: "https://sostosblog-git-main-johnson-tech-droids-projects.vercel.app/",
        github_url: "https://github.com/Kamau-Johnson/Sostos-Blog---PowerHack-Competition.",
        video_url: "https://www.youtube.com/@Kamau_Johnson",
        category: ProjectCategory::Dev,
    },
];

pub fn find_project(projects: &'static [Project], id: &str) -> Option<&'static Project> {
    projects.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_project_by_id() {
        assert_eq!(find_project(PROJECTS, "ovault").map(|p| p.title), Some("O-VAULT System"));
        assert!(find_project(PROJECTS, "missing").is_none());
    }

    #[test]
    fn test_card_tags_overflow() {
        let bebapay = find_project(PROJECTS, "bebapay").unwrap();
        assert_eq!(bebapay.card_tags(), &["Next.js", "React", "Tailwind CSS"]);
        assert_eq!(bebapay.hidden_tag_count(), 3);
        assert_eq!(bebapay.overflow_label().as_deref(), Some("+3 more"));
    }

    #[test]
    fn test_no_overflow_label_within_limit() {
        let project = Project {
            tech: &["Rust", "Yew", "Trunk"],
            ..PROJECTS[0].clone()
        };
        assert_eq!(project.card_tags().len(), 3);
        assert!(project.overflow_label().is_none());
    }

    #[test]
    fn test_project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
