use crate::core::{Project, Skill, SkillMatrix};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};

pub const HEALTH_MESSAGE: &str = "Portfolio server is running";
pub const CONTACT_THANKS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Compiled-in portfolio data. Built once at process start and shared
/// read-only; every call site sees identical content.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    skills: SkillMatrix,
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    technologies: &[&str],
    github: &str,
    image: &str,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github: github.to_string(),
        demo: "https://demo.example.com".to_string(),
        image: image.to_string(),
    }
}

fn skills(entries: &[(&str, u8)]) -> Vec<Skill> {
    entries
        .iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level: *level,
        })
        .collect()
}

impl Catalog {
    pub fn new() -> Self {
        let projects = vec![
            project(
                1,
                "E-Commerce Platform",
                "A full-featured e-commerce platform with real-time inventory management, \
                 payment processing, and admin dashboard.",
                &["React", "Node.js", "MongoDB"],
                "https://github.com/username/ecommerce",
                "/images/project1.jpg",
            ),
            project(
                2,
                "Task Management App",
                "Collaborative task management tool with real-time updates, team collaboration \
                 features, and analytics dashboard.",
                &["Vue.js", "Firebase", "Tailwind"],
                "https://github.com/username/taskmanager",
                "/images/project2.jpg",
            ),
            project(
                3,
                "Social Media Dashboard",
                "Analytics dashboard for social media management with data visualization, \
                 scheduling, and performance tracking.",
                &["Next.js", "TypeScript", "PostgreSQL"],
                "https://github.com/username/socialdashboard",
                "/images/project3.jpg",
            ),
        ];

        let skills = SkillMatrix {
            frontend: skills(&[
                ("React", 90),
                ("Vue.js", 85),
                ("CSS3/SASS", 95),
                ("TypeScript", 88),
            ]),
            backend: skills(&[
                ("Node.js", 92),
                ("Express", 90),
                ("Python", 80),
                ("GraphQL", 75),
            ]),
            database: skills(&[
                ("MongoDB", 87),
                ("PostgreSQL", 85),
                ("Redis", 78),
                ("Firebase", 82),
            ]),
            tools: skills(&[("Git", 93), ("Docker", 80), ("AWS", 75), ("CI/CD", 82)]),
        };

        Self { projects, skills }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &SkillMatrix {
        &self.skills
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Catalog {
    /// Startup sanity check over the compiled-in data: project links must be
    /// real http(s) URLs and proficiency levels must stay within 0..=100.
    fn validate(&self) -> Result<()> {
        for p in &self.projects {
            validate_url("github", &p.github)?;
            validate_url("demo", &p.demo)?;
        }

        let categories = [
            &self.skills.frontend,
            &self.skills.backend,
            &self.skills.database,
            &self.skills.tools,
        ];
        for category in categories {
            for skill in category {
                validate_range("level", skill.level, 0, 100)?;
            }
        }

        Ok(())
    }
}
