use chrono::{DateTime, Datelike, Utc};

pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub resume: &'static str,
    pub portrait: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Amirun Nahar",
    greeting: "I'm Amirun Nahar",
    role: "Full Stack Developer",
    tagline: "Passionate about creating beautiful and functional web applications",
    bio: "A passionate full-stack developer dedicated to creating interactive and user-friendly web applications. Let's work together to bring your ideas to life!",
    resume: "/assets/Amirun_Nahar_CV.pdf",
    portrait: "/assets/Profile_image.jpeg",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    GitHub,
    LinkedIn,
    Email,
    Phone,
    Location,
}

impl Icon {
    /// Devicon / extra icon-font class.
    pub fn class(self) -> &'static str {
        match self {
            Icon::GitHub => "devicon-github-plain",
            Icon::LinkedIn => "devicon-linkedin-plain",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
        }
    }
}

pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub footer_label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        icon: Icon::GitHub,
        label: "GitHub",
        footer_label: "Follow on GitHub",
        href: "https://github.com/Amirun-Nahar",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        label: "LinkedIn",
        footer_label: "Connect on LinkedIn",
        href: "https://www.linkedin.com/in/amirun-nahar-899473344",
    },
];

pub struct AboutBlock {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static ABOUT_BLOCKS: [AboutBlock; 2] = [
    AboutBlock {
        title: "My Journey",
        paragraphs: &[
            "I am a passionate Full Stack Developer with a keen eye for creating elegant solutions to complex problems. My journey in programming began with a curiosity about how websites work, which led me to dive deep into web development technologies.",
            "Throughout my programming journey, I've developed a strong foundation in both frontend and backend technologies. I enjoy working with modern JavaScript frameworks, particularly React, and have experience with Node.js and various database systems.",
        ],
    },
    AboutBlock {
        title: "My Passion",
        paragraphs: &[
            "What I love most about development is the opportunity to build solutions that make a real difference in people's lives. I'm particularly interested in creating intuitive user interfaces and optimizing application performance.",
            "Outside of programming, I enjoy reading books and watching movies. These hobbies help me maintain a creative perspective and problem-solving mindset that I bring back to my development work. I also enjoy reading technical blogs and participating in coding communities to stay updated with the latest technology trends.",
        ],
    },
];

pub struct FeatureCard {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        emoji: "🎯",
        title: "Problem Solver",
        description: "Turning complex challenges into elegant solutions with a methodical approach",
    },
    FeatureCard {
        emoji: "💡",
        title: "Creative Mind",
        description: "Bringing innovative ideas and unique perspectives to every project",
    },
    FeatureCard {
        emoji: "📚",
        title: "Continuous Learner",
        description: "Always exploring new technologies and staying ahead of industry trends",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0-100.
    pub level: u8,
}

pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "frontend",
        title: "Frontend Development",
        icon: "devicon-react-original",
        skills: &[
            Skill { name: "React.js", level: 90 },
            Skill { name: "HTML5 & CSS3", level: 95 },
            Skill { name: "JavaScript (ES6+)", level: 85 },
            Skill { name: "Tailwind CSS", level: 80 },
            Skill { name: "Responsive Design", level: 90 },
        ],
    },
    SkillCategory {
        id: "backend",
        title: "Backend Development",
        icon: "devicon-nodejs-plain",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "Express.js", level: 80 },
            Skill { name: "RESTful APIs", level: 85 },
            Skill { name: "Authentication", level: 75 },
        ],
    },
    SkillCategory {
        id: "database",
        title: "Databases",
        icon: "devicon-mongodb-plain",
        skills: &[
            Skill { name: "MongoDB", level: 80 },
            Skill { name: "MySQL", level: 75 },
        ],
    },
    SkillCategory {
        id: "tools",
        title: "Tools & Others",
        icon: "devicon-git-plain",
        skills: &[Skill { name: "Git & GitHub", level: 85 }],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EDUCATION: [Education; 1] = [Education {
    degree: "Bachelor of Science in Computer Science",
    institution: "Independent University, Bangladesh (IUB)",
    duration: "2022 - Present",
    description: "Focused on software development, algorithms, and web technologies.",
    achievements: &[
        "Participated in various coding competitions and workshops",
        "Maintained a strong academic record with focus on practical applications",
    ],
}];

pub struct Project {
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub main_tech: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub improvements: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl Project {
    /// Tags shown on a card, plus how many were left out.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], Option<usize>) {
        let tech = self.main_tech;
        if tech.len() > limit {
            (&tech[..limit], Some(tech.len() - limit))
        } else {
            (tech, None)
        }
    }

    pub fn slug(&self) -> String {
        self.title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Runlytic",
        short_description: "A modern and responsive landing page built with React, focusing on clean design and seamless user experience.",
        description: "Marathon is a modern and responsive landing page built with React. It showcases a clean, single-page design focused on providing a seamless user experience across all devices, from mobile phones to desktops.",
        image: "/assets/runlytic.png",
        main_tech: &["React", "MongoDB", "Node.js", "Express"],
        technologies: &[
            "React",
            "HTML5 & JSX",
            "CSS3",
            "JavaScript (ES6+)",
            "Tailwind CSS",
            "Framer Motion",
            "React Icons",
            "MongoDB",
            "Express.js",
            "Node.js",
        ],
        features: &[
            "Modern and clean single-page design",
            "Fully responsive layout for all devices",
            "Interactive navigation menu",
            "Smooth scrolling and animations",
            "Contact form with MongoDB integration",
            "Performance optimized assets",
            "Cross-browser compatibility",
        ],
        challenges: &[
            "Component Architecture: Structuring the website into reusable and manageable React components was a key focus",
            "Backend Integration: Setting up MongoDB and Express.js for efficient data management and API endpoints",
            "State Management: Managing the state for interactive elements, like the mobile navigation menu, required careful use of React hooks",
        ],
        improvements: &[
            "Enhanced Backend Features: Expand the MongoDB integration with advanced querying and data analytics",
            "Performance Optimization: I plan to improve load times by compressing images and minifying the code bundle",
            "Add Micro-interactions: I will enhance the user experience by adding subtle animations and transitions to interactive elements",
        ],
        github: Some("https://github.com/Amirun-Nahar/Marathon-Frontend"),
        live: Some("https://runlytic-marathon.netlify.app/"),
    },
    Project {
        title: "HobbyHub",
        short_description: "A full-stack application built with React and Firebase, featuring real-time updates and user authentication.",
        description: "HobbyHub is a full-stack web application that functions as a community platform. It allows users to create accounts, log in, create new groups, and join existing groups. The project demonstrates the integration of a React frontend with Firebase and MongoDB backend.",
        image: "/assets/hobbyhub.png",
        main_tech: &["React", "Firebase", "MongoDB", "Node.js"],
        technologies: &[
            "React",
            "React Router",
            "Tailwind CSS",
            "Firebase Authentication",
            "Firebase Realtime Database",
            "MongoDB",
            "Express.js",
            "Node.js",
        ],
        features: &[
            "User authentication and account management",
            "Real-time group creation and updates",
            "Protected routes for authenticated users",
            "Responsive and modern UI design",
            "Secure data management with Firebase and MongoDB",
            "Client-side routing with React Router",
            "Utility-first styling with Tailwind CSS",
        ],
        challenges: &[
            "Firebase Integration: Setting up Firebase for user authentication and real-time updates",
            "Database Architecture: Designing an efficient schema that works with both Firebase and MongoDB",
            "Protected Routes: Implementing private routes to restrict access to certain pages only to authenticated users",
            "Real-time Data Syncing: Ensuring that new group creation and updates were reflected instantly across the application",
        ],
        improvements: &[
            "Advanced Search and Filtering: Implement advanced search functionality for filtering groups by category, location, or group type",
            "User Profile Dashboard: Create a dedicated dashboard where users can view and manage their posted groups",
            "Data Analytics: Implement MongoDB aggregation for insights and recommendations",
            "UI/UX Refinement: Continue refining the interface with more interactive elements and polished design",
        ],
        github: Some("https://github.com/Amirun-Nahar/HobbyHub"),
        live: Some("https://hobbyhub-new.netlify.app/"),
    },
    Project {
        title: "DevBoard",
        short_description: "An interactive personal dashboard application built with vanilla JavaScript, featuring real-time search and dynamic content loading.",
        description: "DevBoard is a modern and interactive web application designed as a personal dashboard or a lightweight task management tool. It provides a visual workspace to organize tasks, track progress, or display key information, offering a streamlined user experience.",
        image: "/assets/devboard.png",
        main_tech: &["HTML5", "Tailwind CSS", "DaisyUI"],
        technologies: &[
            "HTML5",
            "Tailwind CSS",
            "DaisyUI",
            "JavaScript ES6+",
            "Local Storage",
            "DOM Manipulation",
            "CSS Grid & Flexbox",
        ],
        features: &[
            "Task organization and tracking",
            "Dynamic dashboard layout",
            "Progress visualization",
            "Quick task search and filtering",
            "Responsive grid system",
            "Modern UI with DaisyUI components",
            "Persistent data storage",
        ],
        challenges: &[
            "Dashboard Layout: Creating a flexible and responsive grid system for various dashboard widgets",
            "State Management: Implementing efficient state management using vanilla JavaScript and Local Storage",
            "Dynamic UI Updates: Ensuring smooth updates of task status and progress without page refresh",
        ],
        improvements: &[
            "Refactor with React: Rebuild using React for better state management and component organization",
            "Add Customization: Implement drag-and-drop functionality for dashboard widget arrangement",
            "Data Visualization: Add charts and graphs for better progress tracking",
            "Cloud Sync: Add backend integration for data synchronization across devices",
        ],
        github: Some("https://github.com/Amirun-Nahar/Assignment-5-DevBoard-"),
        live: Some("https://amirun-nahar.github.io/Assignment-5-DevBoard-"),
    },
];

pub struct ContactChannel {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactChannel {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Email,
        title: "Email",
        value: "naharamina68@gmail.com",
        href: "mailto:naharamina68@gmail.com",
    },
    ContactChannel {
        icon: Icon::Phone,
        title: "Phone",
        value: "+8801603490972",
        href: "tel:+880160349097",
    },
    ContactChannel {
        icon: Icon::Location,
        title: "Location",
        value: "Dhaka, Bangladesh",
        href: "https://maps.google.com",
    },
];

/// Shown in the footer's "About Me" column.
pub static FOOTER_CONTACTS: [ContactChannel; 2] = [
    ContactChannel {
        icon: Icon::Email,
        title: "Email",
        value: "amirunnahar2001@gmail.com",
        href: "mailto:amirunnahar2001@gmail.com",
    },
    ContactChannel {
        icon: Icon::Location,
        title: "Location",
        value: "Dhaka, Bangladesh",
        href: "#",
    },
];

/// Year of the build, so server render and hydration agree.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_preview_overflow() {
        let runlytic = &PROJECTS[0];
        let (shown, more) = runlytic.tech_preview(3);
        assert_eq!(shown, &["React", "MongoDB", "Node.js"]);
        assert_eq!(more, Some(1));
    }

    #[test]
    fn test_tech_preview_fits() {
        let devboard = &PROJECTS[2];
        let (shown, more) = devboard.tech_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, None);
        let (shown, more) = devboard.tech_preview(10);
        assert_eq!(shown, devboard.main_tech);
        assert_eq!(more, None);
    }

    #[test]
    fn test_project_slugs() {
        let slugs = PROJECTS.iter().map(Project::slug).collect::<Vec<_>>();
        assert_eq!(slugs, vec!["runlytic", "hobbyhub", "devboard"]);
        let p = Project {
            title: "My  Cool: App 2",
            ..clone_project(&PROJECTS[0])
        };
        assert_eq!(p.slug(), "my-cool-app-2");
    }

    fn clone_project(p: &Project) -> Project {
        Project {
            title: p.title,
            short_description: p.short_description,
            description: p.description,
            image: p.image,
            main_tech: p.main_tech,
            technologies: p.technologies,
            features: p.features,
            challenges: p.challenges,
            improvements: p.improvements,
            github: p.github,
            live: p.live,
        }
    }

    #[test]
    fn test_external_channels() {
        let external = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.title)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["Location"]);
        assert!(FOOTER_CONTACTS.iter().all(|c| !c.is_external()));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for cat in &SKILL_CATEGORIES {
            assert!(!cat.skills.is_empty(), "{} has no skills", cat.id);
            for skill in cat.skills {
                assert!(skill.level <= 100, "{} is {}%", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn test_copyright_year_from_build() {
        let year = copyright_year();
        assert!(year >= 2024);
        assert!(year <= Utc::now().year());
    }
}
