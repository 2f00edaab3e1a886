//! Static portfolio content rendered by the page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
    pub experience: &'static [Job],
}

pub const PROFILE: Profile = Profile {
    name: "Sukitha Bandara",
    title: "Creative Full Stack Developer",
    about: "I create stunning web applications with modern technologies. \
            Passionate about design, user experience, and scalable architecture.",
    email: "sukithabandara13@gmail.com",
    phone: "+94 761148054",
    skills: &["React", "Node.js", "Python", "AWS", "GraphQL", "Docker"],
    projects: &[
        Project {
            title: "E-Commerce Platform",
            description: "Built a full-stack platform with payment integration.",
            tags: &["React", "Node.js"],
            link: "#",
        },
        Project {
            title: "Social Media App",
            description: "Developed a real-time social media app with chat.",
            tags: &["React", "Firebase"],
            link: "#",
        },
        Project {
            title: "Portfolio Site",
            description: "Designed a responsive portfolio with animations.",
            tags: &["React", "Tailwind"],
            link: "#",
        },
    ],
    experience: &[
        Job {
            company: "Tech Innovators",
            position: "Lead Developer",
            period: "2020 - Present",
        },
        Job {
            company: "Creative Startups",
            position: "Full Stack Developer",
            period: "2018 - 2020",
        },
    ],
};

/// Page sections in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Element id, also the `href` fragment the nav links target.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Position in [`Section::ALL`], used to key per-section UI state.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_match_labels() {
        for section in Section::ALL {
            assert_eq!(section.id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn profile_content_is_populated() {
        assert!(!PROFILE.skills.is_empty());
        assert!(!PROFILE.projects.is_empty());
        assert!(!PROFILE.experience.is_empty());
        for project in PROFILE.projects {
            assert!(!project.tags.is_empty());
        }
    }
}
