//! Static biography content for the About section.

pub static BIO_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate Full Stack AI Engineer with a B.Tech in Data Science from \
     IIIT Dharwad and a minor in Generative AI. I love creating intelligent \
     solutions that bridge the gap between complex AI technologies and \
     user-friendly applications.",
    "My journey in tech started with web development, but I quickly discovered my \
     passion for artificial intelligence and machine learning. Today, I specialize \
     in building full-stack applications that leverage cutting-edge AI \
     technologies to solve real-world problems.",
    "When I'm not coding, you can find me exploring the latest AI research papers, \
     contributing to open-source projects, or experimenting with new technologies \
     that push the boundaries of what's possible.",
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub years: &'static str,
    pub details: &'static str,
}

pub static EDUCATION: Education = Education {
    degree: "B.Tech in Data Science",
    school: "IIIT Dharwad",
    years: "2020 - 2024",
    details: "Full-Stack development • Minor in Generative AI • Focus on Machine \
        Learning, Deep Learning, and AI Applications.",
};

pub static LEARNING_PATH: [&str; 4] = [
    "Deep Learning & Transformers (CNNs, LLMs)",
    "Advanced ML Frameworks (JAX, Flax)",
    "MLOps & AI Infrastructure (Docker, Kubernetes)",
    "Systems Programming (Rust & Go)",
];
