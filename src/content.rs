//! Static site content. Everything here is compile-time data; the sections
//! render it and own whatever little UI state they need.

use crate::lightbox::CertificateImage;

pub const NAME: &str = "Nichamon Pamorn";
pub const FIRST_NAME: &str = "Nichamon";
pub const INITIALS: &str = "NP";
pub const EMAIL: &str = "khana.ncm@gmail.com";
pub const EMAIL_HREF: &str = "mailto:khana.ncm@gmail.com";
pub const PHONE: &str = "+66 95 251 5258";
pub const PHONE_HREF: &str = "tel:+66952515258";
pub const LOCATION: &str = "Bangkok, Thailand";

pub const TAGLINE: &str = "Administrative Officer with expertise in Information Technology, \
    Data Analytics, and Creative Design. Passionate about leveraging technology to improve \
    operations and create impactful solutions.";

/// Roles cycled in the hero headline.
pub const ROLES: &[&str] = &[
    "Administrative Officer",
    "Data Analyst",
    "IT Professional",
    "Creative Designer",
];

/// How long each role stays on screen before the next one rotates in.
pub const ROLE_HOLD_MS: u32 = 2_000;

pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "💼", value: "3+", label: "Years Experience" },
    Stat { icon: "🎓", value: "2", label: "Degrees" },
    Stat { icon: "✨", value: "10+", label: "Skills" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm Nichamon Pamorn, an Administrative Officer at Sripatum University with a passion \
     for technology and innovation. With a Master's degree in Information Technology and a \
     Bachelor's in Airline Business, I bring a unique blend of administrative excellence \
     and technical expertise.",
    "My journey started in the aviation industry, where I developed strong organizational \
     and communication skills. Recognizing the transformative power of technology, I \
     pursued advanced studies in IT, focusing on data analytics and digital transformation.",
    "Today, I leverage my diverse background to streamline academic operations, implement \
     data-driven solutions, and create engaging educational content. I'm proficient in \
     tools like Power BI, Looker Studio, and various creative software, enabling me to \
     turn complex data into actionable insights.",
    "Beyond my professional work, I'm passionate about photography, videography, and \
     design, which allows me to express creativity and attention to detail in everything \
     I do.",
];

pub const TRAITS: &[&str] = &[
    "Problem Solving",
    "Team Collaboration",
    "Continuous Learning",
    "Innovation",
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, drives the bar width.
    pub level: u8,
    pub icon: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    /// CSS gradient accent for the group.
    pub color: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Creative Skills",
        color: "linear-gradient(90deg, #ec4899, #f43f5e)",
        skills: &[
            Skill { name: "Logo Design", level: 85, icon: "💡" },
            Skill { name: "Photography", level: 90, icon: "📷" },
            Skill { name: "Videography", level: 88, icon: "🎥" },
            Skill { name: "Photo Editing", level: 85, icon: "🖼️" },
            Skill { name: "Video Editing", level: 80, icon: "🎬" },
        ],
    },
    SkillGroup {
        title: "Technical Skills",
        color: "linear-gradient(90deg, #3b82f6, #6366f1)",
        skills: &[
            Skill { name: "Data Analytics", level: 85, icon: "📊" },
            Skill { name: "PowerBI", level: 80, icon: "📈" },
            Skill { name: "Python", level: 70, icon: "🐍" },
            Skill { name: "JavaScript", level: 65, icon: "🟨" },
            Skill { name: "React", level: 70, icon: "⚛️" },
        ],
    },
    SkillGroup {
        title: "Tools & Software",
        color: "linear-gradient(90deg, #a855f7, #8b5cf6)",
        skills: &[
            Skill { name: "Canva", level: 95, icon: "🎨" },
            Skill { name: "Figma", level: 75, icon: "✏️" },
            Skill { name: "PowerPoint", level: 90, icon: "📽️" },
            Skill { name: "Excel", level: 88, icon: "📑" },
            Skill { name: "Looker Studio", level: 82, icon: "📊" },
        ],
    },
    SkillGroup {
        title: "Soft Skills",
        color: "linear-gradient(90deg, #10b981, #14b8a6)",
        skills: &[
            Skill { name: "Creative Thinking", level: 90, icon: "💡" },
            Skill { name: "Presentation", level: 88, icon: "🗣️" },
            Skill { name: "Data Interpretation", level: 85, icon: "🔍" },
            Skill { name: "Communication", level: 92, icon: "💬" },
            Skill { name: "Problem Solving", level: 87, icon: "🧩" },
        ],
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub current: bool,
    pub responsibilities: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Administrative Officer",
        company: "Sripatum University",
        department: "Office of the Secretariat",
        location: "Bangkok, Thailand",
        period: "October 2021 – Present",
        current: true,
        responsibilities: &[
            "Coordinating academic affairs for graduate students",
            "Assist in verifying and coordinating student course registration",
            "Organize and maintain documents related to graduate students",
        ],
    },
    Experience {
        title: "Part-time Lecturer",
        company: "Sripatum University",
        department: "Information Technology Department",
        location: "Bangkok, Thailand",
        period: "Various Terms",
        current: true,
        responsibilities: &[
            "Taught Information Technology for Career and Work",
            "Covered Looker Studio, Canva, and Google tools",
            "Guided students in Microsoft Office suite applications",
        ],
    },
    Experience {
        title: "Registrar Office Staff",
        company: "Sripatum University",
        department: "Registrar Office",
        location: "Bangkok, Thailand",
        period: "Past",
        current: false,
        responsibilities: &[
            "Organized class and examination schedules for students",
            "Provided guidance on curricula and course registration",
            "Reviewed and tested registration system to prevent issues",
            "Prepared reports on student numbers and registration statistics",
        ],
    },
    Experience {
        title: "Part-Time Human Resources Officer",
        company: "AOT Aviation Security Company Limited",
        department: "Human Resources",
        location: "Bangkok, Thailand",
        period: "October 2020 – December 2020",
        current: false,
        responsibilities: &[
            "Screened initial applications and scheduled interviews",
            "Recorded and updated employee information in database",
            "Organized and maintained personal documents",
        ],
    },
    Experience {
        title: "Intern",
        company: "AOT Personal Data Protection Policy",
        department: "Business Development and Marketing",
        location: "Bangkok, Thailand",
        period: "August 2019 – November 2019",
        current: false,
        responsibilities: &[
            "Received and sent documents within and outside the company",
            "Entered document numbers into company system",
            "Scanned documents for electronic system input",
        ],
    },
];

pub struct Degree {
    pub degree: &'static str,
    pub field: &'static str,
    pub program: Option<&'static str>,
    pub faculty: Option<&'static str>,
    pub school: &'static str,
    pub period: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub highlights: &'static [&'static str],
}

pub const DEGREES: &[Degree] = &[
    Degree {
        degree: "Master's Degree",
        field: "Master of Science in Information Technology",
        program: None,
        faculty: Some("Faculty of Information Technology"),
        school: "Sripatum University",
        period: "2023 - 2024",
        icon: "🎓",
        color: "linear-gradient(135deg, #2563eb, #4f46e5)",
        highlights: &[
            "Specialized in Data Analytics and Digital Transformation",
            "Completed advanced coursework in IT management",
            "Applied technology solutions to educational operations",
        ],
    },
    Degree {
        degree: "Bachelor's Degree",
        field: "College of Tourism and Hospitality",
        program: Some("Airline Business Program"),
        faculty: None,
        school: "Sripatum University",
        period: "2016 - 2020",
        icon: "✈️",
        color: "linear-gradient(135deg, #9333ea, #db2777)",
        highlights: &[
            "Developed strong organizational and communication skills",
            "Gained expertise in customer service excellence",
            "Built foundation in business operations and management",
        ],
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub icon: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AI Basics: Overview of AI",
        issuer: "CRA Training Program",
        icon: "🤖",
    },
    Certification {
        name: "Digital Marketing on Smartphones",
        issuer: "Sales Promotion Course",
        icon: "📱",
    },
    Certification {
        name: "Infographic Design",
        issuer: "Design Training",
        icon: "🎨",
    },
    Certification {
        name: "Cloud Basics: Development and Concepts",
        issuer: "Cloud Training",
        icon: "☁️",
    },
];

pub struct FeaturedCertification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub note: &'static str,
    pub images: &'static [CertificateImage],
}

/// Featured certification with scanned certificates; the thumbnails open
/// the lightbox.
pub const FEATURED_CERTIFICATION: FeaturedCertification = FeaturedCertification {
    name: "Professional Development Certificates",
    issuer: "Sripatum University & Partner Programs",
    note: "Click a certificate to enlarge it.",
    images: &[
        CertificateImage {
            src: "/assets/certificates/ai-basics.webp",
            alt: "AI Basics certificate",
        },
        CertificateImage {
            src: "/assets/certificates/digital-marketing.webp",
            alt: "Digital Marketing certificate",
        },
        CertificateImage {
            src: "/assets/certificates/infographic-design.webp",
            alt: "Infographic Design certificate",
        },
    ],
};

pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        value: EMAIL,
        href: Some(EMAIL_HREF),
        icon: "✉️",
        color: "linear-gradient(135deg, #ef4444, #ec4899)",
    },
    ContactChannel {
        title: "Phone",
        value: PHONE,
        href: Some(PHONE_HREF),
        icon: "📞",
        color: "linear-gradient(135deg, #22c55e, #10b981)",
    },
    ContactChannel {
        title: "Location",
        value: LOCATION,
        href: None,
        icon: "📍",
        color: "linear-gradient(135deg, #3b82f6, #6366f1)",
    },
];

/// (label, href, short glyph shown in the round button)
pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "GH"),
    ("LinkedIn", "https://linkedin.com", "in"),
    ("Facebook", "https://facebook.com", "fb"),
    ("Instagram", "https://instagram.com", "ig"),
];

/// (label, fragment href) pairs for the navbar and footer quick links.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Education", "#education"),
    ("Portfolio", "#portfolio"),
    ("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} exceeds 100%", skill.name);
            }
        }
    }

    #[test]
    fn section_links_are_fragment_anchors() {
        for (label, href) in SECTION_LINKS {
            assert!(href.starts_with('#'), "{label} must be an in-page anchor");
        }
    }

    #[test]
    fn external_links_are_absolute() {
        for (label, href, _) in SOCIAL_LINKS {
            assert!(href.starts_with("https://"), "{label} must be external");
        }
    }

    #[test]
    fn featured_certification_has_images() {
        assert!(!FEATURED_CERTIFICATION.images.is_empty());
        for image in FEATURED_CERTIFICATION.images {
            assert!(image.src.starts_with("/assets/certificates/"));
            assert!(!image.alt.is_empty());
        }
    }
}
