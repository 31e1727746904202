//! Project gallery data: static literals defined once, never mutated.

/// One portfolio project. The collection lives in [`PROJECTS`]; ids are
/// unique and stable so a selection can be held as an id across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
    pub lighthouse_score: u8,
    pub category: &'static str,
}

/// Filter values offered in the gallery. `"All"` is the sentinel that
/// bypasses filtering entirely.
pub const CATEGORIES: [&str; 4] = ["All", "AI/ML", "Full Stack", "Data Science"];

pub const ALL_CATEGORY: &str = "All";

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "AI-Powered Content Generator",
        description: "A full-stack application that uses advanced LLMs to generate \
            high-quality content for various use cases.",
        long_description: "This project leverages state-of-the-art language models to \
            create an intelligent content generation platform. Built with React, \
            Node.js, and integrated with OpenAI APIs, it features real-time content \
            generation, user authentication, and a responsive design.",
        image: "/placeholder.svg",
        technologies: &[
            "React",
            "Node.js",
            "OpenAI API",
            "MongoDB",
            "Express.js",
            "Tailwind CSS",
        ],
        github_url: "https://github.com/jagadeswar/ai-content-generator",
        live_url: "https://ai-content-gen-demo.com",
        featured: true,
        lighthouse_score: 95,
        category: "AI/ML",
    },
    Project {
        id: 2,
        title: "Smart Analytics Dashboard",
        description: "A comprehensive data visualization platform with real-time \
            analytics and machine learning insights.",
        long_description: "An advanced analytics dashboard built with modern web \
            technologies and machine learning algorithms. Features include real-time \
            data processing, predictive analytics, interactive visualizations, and \
            automated reporting.",
        image: "/placeholder.svg",
        technologies: &["Next.js", "Python", "TensorFlow", "PostgreSQL", "D3.js", "AWS"],
        github_url: "https://github.com/jagadeswar/analytics-dashboard",
        live_url: "https://analytics-dashboard-demo.com",
        featured: true,
        lighthouse_score: 92,
        category: "Data Science",
    },
    Project {
        id: 3,
        title: "E-commerce Platform",
        description: "A modern, scalable e-commerce solution with advanced features \
            and seamless user experience.",
        long_description: "A full-featured e-commerce platform built with modern \
            technologies. Includes user authentication, payment processing, inventory \
            management, order tracking, and an admin dashboard.",
        image: "/placeholder.svg",
        technologies: &["React", "Node.js", "Stripe API", "Redis", "Docker", "AWS"],
        github_url: "https://github.com/jagadeswar/ecommerce-platform",
        live_url: "https://ecommerce-demo.com",
        featured: false,
        lighthouse_score: 89,
        category: "Full Stack",
    },
    Project {
        id: 4,
        title: "Real-time Chat Application",
        description: "A scalable chat application with real-time messaging, file \
            sharing, and group management.",
        long_description: "A modern chat application built with Socket.io and React. \
            Features include real-time messaging, file sharing, group chat, user \
            authentication, message encryption, and mobile responsiveness.",
        image: "/placeholder.svg",
        technologies: &["React", "Socket.io", "Node.js", "MongoDB", "JWT", "Cloudinary"],
        github_url: "https://github.com/jagadeswar/chat-app",
        live_url: "https://chat-app-demo.com",
        featured: false,
        lighthouse_score: 91,
        category: "Full Stack",
    },
];

/// Sublist of `projects` whose category equals `selector`, in original
/// order. `"All"` returns everything; a selector outside [`CATEGORIES`]
/// matches nothing and yields an empty list.
pub fn filter_by_category<'a>(projects: &'a [Project], selector: &str) -> Vec<&'a Project> {
    if selector == ALL_CATEGORY {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.category == selector).collect()
}

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Ids must be unique across the collection; checked by tests over the
/// static data rather than at runtime (the data never changes).
pub fn ids_unique(projects: &[Project]) -> bool {
    for (i, a) in projects.iter().enumerate() {
        if projects[i + 1..].iter().any(|b| b.id == a.id) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert!(ids_unique(&PROJECTS));
    }

    #[test]
    fn test_categories_are_declared() {
        for project in &PROJECTS {
            assert!(
                CATEGORIES.contains(&project.category),
                "undeclared category: {}",
                project.category
            );
        }
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let filtered = filter_by_category(&PROJECTS, "All");
        assert_eq!(filtered.len(), PROJECTS.len());
        for (got, want) in filtered.iter().zip(PROJECTS.iter()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_filter_matches_only_that_category() {
        for category in &CATEGORIES[1..] {
            let filtered = filter_by_category(&PROJECTS, category);
            assert!(filtered.iter().all(|p| p.category == *category));
        }
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let filtered = filter_by_category(&PROJECTS, "Full Stack");
        let titles: Vec<_> = filtered.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["E-commerce Platform", "Real-time Chat Application"]);
    }

    #[test]
    fn test_filter_ai_ml_sample() {
        let filtered = filter_by_category(&PROJECTS, "AI/ML");
        let titles: Vec<_> = filtered.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["AI-Powered Content Generator"]);
    }

    #[test]
    fn test_filter_unknown_selector_is_empty() {
        assert!(filter_by_category(&PROJECTS, "Gardening").is_empty());
        assert!(filter_by_category(&PROJECTS, "").is_empty());
    }

    #[test]
    fn test_filter_empty_collection() {
        assert!(filter_by_category(&[], "All").is_empty());
        assert!(filter_by_category(&[], "AI/ML").is_empty());
    }

    #[test]
    fn test_project_by_id() {
        assert_eq!(project_by_id(2).map(|p| p.title), Some("Smart Analytics Dashboard"));
        assert!(project_by_id(99).is_none());
    }
}
