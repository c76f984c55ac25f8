//! # Owner Profile
//!
//! Static content backing the Home, About, and Contact pages: bio, skill
//! groups, experience timeline, and social links. Like the catalog, it is
//! authored once and read-only at runtime.

use serde::{Deserialize, Serialize};

/// A titled group of related skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One experience or education entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

/// An outbound social/profile link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Everything the presentational pages need about the site owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub tech_stack: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub interests: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

impl Profile {
    /// The profile bundled with the binary
    pub fn builtin() -> Self {
        Self {
            name: "Gaurav Rai".to_string(),
            headline: "Frontend Developer / Full Stack Engineer".to_string(),
            tagline: "Hi, I'm a passionate developer specializing in creating modern, \
                      responsive web applications. I transform ideas into elegant \
                      solutions using cutting-edge technologies."
                .to_string(),
            bio: vec![
                "I'm a full-stack developer with a passion for building modern, \
                 responsive web applications that solve real-world problems. With \
                 expertise in the MERN stack and a keen eye for design, I bridge the \
                 gap between functionality and aesthetics."
                    .to_string(),
                "My journey into web development started with curiosity about how \
                 websites work, which evolved into a career building scalable \
                 applications. I love the challenge of turning complex requirements \
                 into elegant solutions."
                    .to_string(),
                "When I'm not coding, you'll find me exploring new technologies, \
                 contributing to open-source projects, or sharing knowledge with the \
                 developer community through blog posts and tutorials."
                    .to_string(),
            ],
            skills: vec![
                SkillGroup {
                    category: "Frontend".to_string(),
                    items: strings(&[
                        "React",
                        "TypeScript",
                        "Tailwind CSS",
                        "Next.js",
                        "Redux",
                        "React Query",
                    ]),
                },
                SkillGroup {
                    category: "Backend".to_string(),
                    items: strings(&[
                        "Node.js",
                        "Express",
                        "MongoDB",
                        "PostgreSQL",
                        "REST APIs",
                        "GraphQL",
                    ]),
                },
                SkillGroup {
                    category: "Tools & Others".to_string(),
                    items: strings(&["Git", "Docker", "AWS", "Firebase", "Vercel", "Jest"]),
                },
            ],
            tech_stack: strings(&[
                "React",
                "TypeScript",
                "Node.js",
                "MongoDB",
                "Tailwind CSS",
                "Express",
                "PostgreSQL",
                "REST APIs",
            ]),
            timeline: vec![
                TimelineEntry {
                    year: "2024 - Present".to_string(),
                    title: "Senior Frontend Developer".to_string(),
                    organization: "Tech Company".to_string(),
                    description: "Leading frontend development for enterprise \
                                  applications, mentoring junior developers."
                        .to_string(),
                },
                TimelineEntry {
                    year: "2022 - 2024".to_string(),
                    title: "Full Stack Developer".to_string(),
                    organization: "Startup Inc".to_string(),
                    description: "Built and deployed multiple web applications using \
                                  MERN stack."
                        .to_string(),
                },
                TimelineEntry {
                    year: "2018 - 2022".to_string(),
                    title: "Bachelor's in Computer Science".to_string(),
                    organization: "University Name".to_string(),
                    description: "Focused on web development, algorithms, and software \
                                  engineering."
                        .to_string(),
                },
            ],
            interests: strings(&[
                "Modern Frontend Frameworks",
                "API Design & Development",
                "Performance Optimization",
                "UI/UX Design Principles",
                "Cloud Architecture",
                "Open Source Contribution",
            ]),
            social_links: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/gauravrai80".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/gaurav-rai-3718aa255".to_string(),
                },
                SocialLink {
                    label: "Instagram".to_string(),
                    url: "https://www.instagram.com/gaurav_rai8055/".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:gauravrai241005@gmail.com".to_string(),
                },
            ],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_complete() {
        let profile = Profile::builtin();
        assert!(!profile.bio.is_empty());
        assert_eq!(profile.skills.len(), 3);
        assert_eq!(profile.timeline.len(), 3);
        assert_eq!(profile.social_links.len(), 4);
    }
}
