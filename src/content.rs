//! Static page content as fixed record types.

use crate::pagination::Filterable;

pub const OWNER_NAME: &str = "Navoda Chathurya";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/navoda001";
pub const CV_URL: &str = "/cv.pdf";
pub const PROFILE_IMAGE: &str = "/Profile.jpg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
    Facebook,
    WhatsApp,
    Instagram,
}

impl SocialIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::GitHub => "GH",
            Self::LinkedIn => "in",
            Self::Mail => "@",
            Self::Facebook => "f",
            Self::WhatsApp => "WA",
            Self::Instagram => "IG",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const INTRO_SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Navoda001",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Gmail",
        href: "mailto:navodachathurya2001@gmail.com",
        icon: SocialIcon::Mail,
    },
    SocialLink {
        label: "Facebook",
        href: "https://facebook.com",
        icon: SocialIcon::Facebook,
    },
];

pub const CONTACT_SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/share/1BsnzU3eni/?mibextid=wwXIfr",
        icon: SocialIcon::Facebook,
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://api.whatsapp.com/send/?phone=94762085246&text&type=phone_number&app_absent=0",
        icon: SocialIcon::WhatsApp,
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/navoda_c001",
        icon: SocialIcon::Instagram,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        number: "9",
        label: "Years of experience",
    },
    Stat {
        number: "20",
        label: "Projects completed",
    },
    Stat {
        number: "6",
        label: "Technologies mastered",
    },
    Stat {
        number: "378",
        label: "Code commits",
    },
];

pub const ROLES: [&str; 6] = [
    "Software Developer",
    "Full Stack Developer",
    "Embedded Systems Enthusiast",
    "React & Spring Boot Developer",
    "ASP.NET Developer",
    "Tech Explorer",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
    pub image: &'static str,
}

const UNIVERSITY_EMBLEM: &str = "https://uom.lk/assets/images/Uni_emblem.jpg";

pub const EDUCATION: [EducationEntry; 4] = [
    EducationEntry {
        year: "2023",
        title: "Full Stack Web Development Bootcamp",
        institution: "Online Course Platform",
        kind: "Bootcamp",
        duration: "6 months",
        skills: &["React", "Node.js", "MongoDB", "TypeScript"],
        accent: "accent-emerald",
        image: UNIVERSITY_EMBLEM,
    },
    EducationEntry {
        year: "2022",
        title: "Front-end Track",
        institution: "Codecademy",
        kind: "Certification",
        duration: "4 months",
        skills: &["HTML5", "CSS3", "JavaScript", "React"],
        accent: "accent-blue",
        image: UNIVERSITY_EMBLEM,
    },
    EducationEntry {
        year: "2020 - 2021",
        title: "Programming Course",
        institution: "Online Course",
        kind: "Certificate",
        duration: "1 year",
        skills: &["Python", "Java", "Data Structures", "Algorithms"],
        accent: "accent-purple",
        image: UNIVERSITY_EMBLEM,
    },
    EducationEntry {
        year: "2019",
        title: "Certified Web Developer",
        institution: "Tech Institute",
        kind: "Professional",
        duration: "8 months",
        skills: &["PHP", "MySQL", "WordPress", "jQuery"],
        accent: "accent-orange",
        image: UNIVERSITY_EMBLEM,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub devicon: &'static str,
}

const fn skill(name: &'static str, devicon: &'static str) -> Skill {
    Skill { name, devicon }
}

pub const SKILLS: [Skill; 19] = [
    skill("Next.js", "devicon-nextjs-plain"),
    skill("React.js", "devicon-react-original"),
    skill("JavaScript", "devicon-javascript-plain"),
    skill("HTML5", "devicon-html5-plain"),
    skill("CSS3", "devicon-css3-plain"),
    skill("Tailwind CSS", "devicon-tailwindcss-plain"),
    skill("Material-UI", "devicon-materialui-plain"),
    skill("Node.js", "devicon-nodejs-plain-wordmark"),
    skill("Java", "devicon-java-plain"),
    skill("C#", "devicon-csharp-plain"),
    skill(".NET Core", "devicon-dotnetcore-plain"),
    skill("C", "devicon-c-line"),
    skill("PHP", "devicon-php-plain"),
    skill("SQL Server", "devicon-microsoftsqlserver-plain"),
    skill("MySQL", "devicon-mysql-plain-wordmark"),
    skill("Azure Sql Database", "devicon-azure-plain"),
    skill("Linux", "devicon-linux-plain"),
    skill("Git", "devicon-git-plain"),
    skill("Github", "devicon-github-original"),
];

/// Splits the skill list into the two marquee rows, the first row taking
/// the extra item when the count is odd.
pub fn skill_rows() -> (&'static [Skill], &'static [Skill]) {
    SKILLS.split_at(SKILLS.len().div_ceil(2))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub phone: &'static str,
    pub nationality: &'static str,
    pub language: &'static str,
    pub email: &'static str,
}

pub const ABOUT: PersonalInfo = PersonalInfo {
    name: OWNER_NAME,
    phone: "+94 76 208 5246",
    nationality: "Sri Lankan",
    language: "English, Sinhala",
    email: "navodachathurya2001@gmail.com",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CertificateKind {
    Competition,
    Learning,
}

impl CertificateKind {
    pub const ALL: [CertificateKind; 2] = [Self::Competition, Self::Learning];

    pub fn label(self) -> &'static str {
        match self {
            Self::Competition => "Competitions",
            Self::Learning => "Learning",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::Competition => "competition",
            Self::Learning => "learning",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub kind: CertificateKind,
    pub description: &'static str,
    pub credential_id: Option<&'static str>,
    pub credential_url: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub image: Option<&'static str>,
}

impl Filterable for Certificate {
    type Category = CertificateKind;

    fn category(&self) -> CertificateKind {
        self.kind
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.issuer];
        fields.extend_from_slice(self.skills);
        fields
    }
}

const CODL: &str = "Centre for Open & Distance Learning (CODL) University of Moratuwa, Sri Lanka";

pub const CERTIFICATES: [Certificate; 5] = [
    Certificate {
        id: "1",
        title: "Innovate with Ballerina Coding Challenge",
        issuer: "WSO2",
        date: "2024",
        kind: CertificateKind::Competition,
        description: "Participated in the \"Innovate with Ballerina\" Coding Challenge organized by the IEEE Student Branch of the University of Moratuwa in collaboration with WSO2. Worked as part of a four-member team to develop an innovative solution using Ballerina Swan Lake, enhancing skills in creative problem-solving, teamwork, and collaborative software development.",
        credential_id: None,
        credential_url: Some("https://certificates.ballerina.io/IWB24P-tcBH7IGJsu"),
        skills: &["React + Vite", "Ballerina", "MongoDB", "Firebase"],
        image: Some("/certificate/competition1.png"),
    },
    Certificate {
        id: "2",
        title: "MoraXtreme 9.0",
        issuer: "IEEE Student Branch University of Moratuwa",
        date: "2024-11-19",
        kind: CertificateKind::Competition,
        description: "Participated in MoraXtreme 9.0, a premier national-level coding competition organized by the IEEE Student Branch of the University of Moratuwa. Solved challenging algorithmic problems under time constraints, strengthening skills in problem-solving, teamwork, and competitive programming.",
        credential_id: None,
        credential_url: None,
        skills: &[
            "Algorithms",
            "Problem Solving",
            "Time Management",
            "Teamwork",
            "Competitive Programming",
        ],
        image: Some("/certificate/competition2.jpeg"),
    },
    Certificate {
        id: "3",
        title: "AlgoXplore 1.0",
        issuer: "Hackathon Hub of NSBM Green University",
        date: "2025",
        kind: CertificateKind::Competition,
        description: "Participated in AlgoXplore 1.0, organized by the Hackathon Hub of NSBM Green University. Competed as part of a team to solve algorithmic challenges and Capture The Flag (CTF) tasks, enhancing technical knowledge, problem-solving abilities, and collaboration skills.",
        credential_id: None,
        credential_url: None,
        skills: &[
            "Algorithms",
            "CTF Challenges",
            "Cybersecurity",
            "Problem Solving",
            "Teamwork",
            "Analytical Thinking",
        ],
        image: Some("/certificate/competition3.jpeg"),
    },
    Certificate {
        id: "4",
        title: "Python for Beginners",
        issuer: CODL,
        date: "2023-07-19",
        kind: CertificateKind::Learning,
        description: "Completed the 'Python for Beginners' course offered by the Centre for Open & Distance Learning (CODL) at the University of Moratuwa, Sri Lanka. Gained foundational knowledge of Python programming, including syntax, control structures, functions, and basic problem-solving techniques.",
        credential_id: Some("PtDIcBxDTS"),
        credential_url: Some("https://open.uom.lk/lms/mod/customcert/verify_certificate.php"),
        skills: &["Python", "Problem Solving"],
        image: Some("/certificate/learning1.png"),
    },
    Certificate {
        id: "5",
        title: "Web Design for Beginners",
        issuer: CODL,
        date: "2023-09",
        kind: CertificateKind::Learning,
        description: "Completed the 'Web Design for Beginners' course offered by the Centre for Open & Distance Learning (CODL) at the University of Moratuwa, Sri Lanka. Learned the fundamentals of web design, including HTML, CSS, responsive layouts, and best practices for creating user-friendly websites.",
        credential_id: Some("zhUKF5f0Ai"),
        credential_url: Some("https://open.uom.lk/verify"),
        skills: &["HTML", "CSS", "Responsive Design", "UI Design", "Web Accessibility"],
        image: Some("/certificate/learning2.jpeg"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Frontend,
    FullStack,
    Mobile,
    Design,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [Self::Frontend, Self::FullStack, Self::Mobile, Self::Design];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
            Self::Mobile => "Mobile",
            Self::Design => "Design",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
    pub year: &'static str,
}

impl Project {
    /// Zero-padded number shown behind the card.
    pub fn number(&self) -> String {
        format!("{:02}", self.id)
    }
}

impl Filterable for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

const PLACEHOLDER_IMAGE: &str = "/projects/placeholder.svg";
const EXAMPLE_LIVE_URL: &str = "https://example.com";
const EXAMPLE_GITHUB_URL: &str = "https://github.com/example";

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "FurnShop E-commerce",
        category: ProjectCategory::Frontend,
        description: "Modern furniture e-commerce platform with stunning UI/UX design and smooth animations.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: true,
        year: "2024",
    },
    Project {
        id: 2,
        title: "Creative Portfolio",
        category: ProjectCategory::FullStack,
        description: "Personal portfolio website with CMS integration and dynamic content management.",
        technologies: &["Next.js", "Sanity", "SCSS", "Node.js"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: false,
        year: "2024",
    },
    Project {
        id: 3,
        title: "Task Management App",
        category: ProjectCategory::Mobile,
        description: "Cross-platform mobile app for task management with real-time collaboration features.",
        technologies: &["React Native", "Firebase", "Redux", "Expo"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: true,
        year: "2023",
    },
    Project {
        id: 4,
        title: "Brand Identity Design",
        category: ProjectCategory::Design,
        description: "Complete brand identity package including logo, color palette, and design guidelines.",
        technologies: &["Figma", "Adobe Illustrator", "Photoshop"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: false,
        year: "2023",
    },
    Project {
        id: 5,
        title: "Dashboard Analytics",
        category: ProjectCategory::Frontend,
        description: "Advanced analytics dashboard with interactive charts and real-time data visualization.",
        technologies: &["Vue.js", "D3.js", "Chart.js", "API Integration"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: false,
        year: "2023",
    },
    Project {
        id: 6,
        title: "Social Media Platform",
        category: ProjectCategory::FullStack,
        description: "Social networking platform with real-time messaging and content sharing capabilities.",
        technologies: &["MERN", "Socket.io", "AWS", "Redis"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        featured: true,
        year: "2024",
    },
];

/// Entries of the large one-at-a-time showcase above the project grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseProject {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub kind: ProjectCategory,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub year: &'static str,
    pub featured: bool,
}

impl Filterable for ShowcaseProject {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.kind
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }
}

pub const SHOWCASE: [ShowcaseProject; 3] = [
    ShowcaseProject {
        id: "01",
        title: "Frontend Project",
        category: "Web Development",
        kind: ProjectCategory::Frontend,
        description: "Responsive landing page built from scratch with semantic markup and hand-written styles.",
        technologies: &["Html 5", "Css 3", "Javascript"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        year: "2024",
        featured: true,
    },
    ShowcaseProject {
        id: "02",
        title: "E-Commerce Platform",
        category: "Full Stack",
        kind: ProjectCategory::FullStack,
        description: "Modern e-commerce solution with advanced features and seamless user experience.",
        technologies: &["React", "Node.js", "MongoDB"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        year: "2024",
        featured: false,
    },
    ShowcaseProject {
        id: "03",
        title: "Mobile App Design",
        category: "UI/UX Design",
        kind: ProjectCategory::Mobile,
        description: "Clean and intuitive mobile application design with modern user interface elements.",
        technologies: &["React Native", "TypeScript", "Firebase"],
        image: PLACEHOLDER_IMAGE,
        live_url: EXAMPLE_LIVE_URL,
        github_url: EXAMPLE_GITHUB_URL,
        year: "2023",
        featured: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub whatsapp: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    phone: "(+94) 76 208 5246",
    email: "navodachathurya2001@gmail.com",
    address: "Moratuwa, Sri Lanka",
    whatsapp: "076 208 5246",
};

pub const SERVICES: [&str; 6] = [
    "Web Development",
    "Mobile App Development",
    "UI/UX Design",
    "E-commerce Solutions",
    "Consulting",
    "Other",
];

/// `tel:` href for a display-formatted phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{CategoryFilter, FilterPaginator};

    #[test]
    fn skill_rows_split_odd_count_towards_first_row() {
        let (first, second) = skill_rows();
        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 9);
        assert_eq!(first[0].name, "Next.js");
        assert_eq!(second[0].name, "PHP");
    }

    #[test]
    fn certificate_filter_counts() {
        let competitions = CategoryFilter::Only(CertificateKind::Competition);
        assert_eq!(FilterPaginator::count_for(competitions, &CERTIFICATES), 3);
        assert_eq!(
            FilterPaginator::count_for(CategoryFilter::Only(CertificateKind::Learning), &CERTIFICATES),
            2
        );
    }

    #[test]
    fn certificate_search_covers_issuer_and_skills() {
        let mut pager = FilterPaginator::new(&CERTIFICATES, 3);

        pager.set_search("wso2", &CERTIFICATES);
        assert_eq!(pager.filtered_count(), 1);

        pager.set_search("problem solving", &CERTIFICATES);
        assert_eq!(pager.filtered_count(), 3);
    }

    #[test]
    fn project_search_matches_title_or_description() {
        let mut pager = FilterPaginator::new(&PROJECTS, 3);
        pager.set_search("real-time", &PROJECTS);

        let titles: Vec<_> = pager.filtered(&PROJECTS).iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Task Management App", "Dashboard Analytics", "Social Media Platform"]
        );
    }

    #[test]
    fn showcase_dots_jump_to_each_project() {
        let mut pager = FilterPaginator::new(&SHOWCASE, 1);
        assert_eq!(pager.total_pages(), 3);

        for (index, expected) in ["01", "02", "03"].into_iter().enumerate().rev() {
            assert!(pager.go_to_page(index));
            assert_eq!(pager.page_window(&SHOWCASE)[0].id, expected);
        }
        assert!(!pager.go_to_page(3));
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn project_numbers_are_zero_padded() {
        assert_eq!(PROJECTS[0].number(), "01");
    }

    #[test]
    fn tel_href_keeps_digits_and_plus() {
        assert_eq!(tel_href("(+94) 76 208 5246"), "tel:+94762085246");
    }
}
