//! Skill constellation data: category -> ordered skill list, plus the
//! glyph mapping used when a skill is revealed. Glyph lookup is by exact
//! name; a miss simply renders no glyph.

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// At most this many skills are displayed per category. Longer lists are
/// truncated, not paginated.
pub const MAX_DISPLAY_SKILLS: usize = 8;

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        name: "Web Development",
        skills: &[
            "React/Next.js",
            "TypeScript",
            "Node.js",
            "Express.js",
            "HTML5/CSS3",
            "Tailwind CSS",
            "REST APIs",
            "ShadCN UI",
            "Framer Motion",
            "React Router",
            "Redux Toolkit",
            "JavaScript",
            "JWT",
            "Social OAuth",
            "MongoDB",
        ],
    },
    SkillCategory {
        name: "Machine Learning",
        skills: &[
            "Python",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "OpenCV",
            "MLflow",
            "TensorFlow",
            "PyTorch",
        ],
    },
    SkillCategory {
        name: "Generative AI",
        skills: &[
            "LLMs",
            "RAG",
            "Vector Databases",
            "Langchain",
            "OpenAI API",
            "Hugging Face",
        ],
    },
];

impl SkillCategory {
    /// Displayed sublist, truncated to [`MAX_DISPLAY_SKILLS`].
    pub fn display_skills(&self) -> &'static [&'static str] {
        let count = self.skills.len().min(MAX_DISPLAY_SKILLS);
        &self.skills[..count]
    }
}

/// Terminal stand-in for the icon set: one glyph per known skill name.
pub fn skill_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "React/Next.js" => "▲",
        "React" => "⚛",
        "JavaScript" => "JS",
        "TypeScript" => "TS",
        "Node.js" => "⬢",
        "Express.js" => "ex",
        "HTML5/CSS3" => "</>",
        "Tailwind CSS" => "~",
        "REST APIs" => "⇄",
        "ShadCN UI" => "▣",
        "Framer Motion" => "◇",
        "React Router" => "⇶",
        "Redux Toolkit" => "◎",
        "Python" => "🐍",
        "Scikit-learn" => "sk",
        "Pandas" => "🐼",
        "NumPy" => "№",
        "OpenCV" => "👁",
        "MLflow" => "∿",
        "TensorFlow" => "TF",
        "PyTorch" => "🔥",
        "LLMs" => "🧠",
        "RAG" => "📚",
        "Vector Databases" => "⊞",
        "Langchain" => "🔗",
        "OpenAI API" => "✳",
        "Hugging Face" => "🤗",
        "JWT" => "🔑",
        "Social OAuth" => "🔐",
        "MongoDB" => "🍃",
        _ => return None,
    };
    Some(glyph)
}

/// Tools grid entry for the About section. `color` is a hex token handed
/// to the theme's color parser at draw time.
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

pub static TOOLS: [Tool; 7] = [
    Tool { name: "VS Code", glyph: "⌨", color: "#007ACC" },
    Tool { name: "Git", glyph: "⎇", color: "#F05032" },
    Tool { name: "GitHub", glyph: "🐙", color: "#E8E8E8" },
    Tool { name: "GitHub Actions", glyph: "⚙", color: "#2088FF" },
    Tool { name: "Vercel", glyph: "▲", color: "#E8E8E8" },
    Tool { name: "Netlify", glyph: "◆", color: "#00C7B7" },
    Tool { name: "Render", glyph: "☁", color: "#46E3B7" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_skills_truncates_to_eight() {
        let web = &SKILL_CATEGORIES[0];
        assert!(web.skills.len() > MAX_DISPLAY_SKILLS);
        assert_eq!(web.display_skills().len(), MAX_DISPLAY_SKILLS);
        assert_eq!(web.display_skills(), &web.skills[..MAX_DISPLAY_SKILLS]);
    }

    #[test]
    fn test_display_skills_short_list_untouched() {
        let genai = &SKILL_CATEGORIES[2];
        assert!(genai.skills.len() <= MAX_DISPLAY_SKILLS);
        assert_eq!(genai.display_skills(), genai.skills);
    }

    #[test]
    fn test_glyph_lookup_is_exact_match() {
        assert_eq!(skill_glyph("Python"), Some("🐍"));
        assert_eq!(skill_glyph("python"), None);
        assert_eq!(skill_glyph("Not A Skill"), None);
    }

    #[test]
    fn test_every_displayed_skill_has_a_glyph() {
        // The full icon map covers everything we actually display.
        for category in &SKILL_CATEGORIES {
            for skill in category.display_skills() {
                assert!(skill_glyph(skill).is_some(), "no glyph for {skill}");
            }
        }
    }
}
