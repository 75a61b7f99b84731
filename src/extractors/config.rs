// src/extractors/config.rs

/// All fixed vocabularies and pattern lists the heuristic extractors run
/// against, hoisted into one place so they can be tuned (or replaced by
/// small fixtures in tests) without touching extractor logic.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Header keywords that open the experience section.
    pub experience_aliases: Vec<String>,
    /// Header keywords that terminate the experience section.
    pub experience_terminators: Vec<String>,
    pub education_aliases: Vec<String>,
    pub education_terminators: Vec<String>,
    /// A line containing one of these is taken as the position/title.
    pub role_keywords: Vec<String>,
    /// An education entry without one of these is silently dropped.
    pub degree_keywords: Vec<String>,
    /// A line containing one of these is taken as the institution.
    pub institution_keywords: Vec<String>,
    /// Technology terms matched by lowercase containment over the whole text.
    pub skill_vocabulary: Vec<String>,
    /// Regex source strings for certificate mentions. Matches are collected
    /// per pattern and never deduplicated across patterns.
    pub certificate_patterns: Vec<String>,
    /// Ordered keyword -> issuing organization mapping; first containment
    /// match on the certificate name wins, otherwise "Unknown".
    pub issuer_map: Vec<(String, String)>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            experience_aliases: strings(&["experience", "work history", "employment"]),
            experience_terminators: strings(&[
                "education",
                "academic",
                "skills",
                "projects",
                "certifications",
                "certificates",
            ]),
            education_aliases: strings(&["education", "academic", "qualification"]),
            education_terminators: strings(&[
                "experience",
                "skills",
                "projects",
                "certifications",
                "certificates",
            ]),
            role_keywords: strings(&[
                "developer", "engineer", "manager", "analyst", "designer", "lead",
            ]),
            degree_keywords: strings(&[
                "bachelor", "master", "phd", "b.tech", "m.tech", "b.sc", "m.sc", "mba",
                "b.e.", "m.e.",
            ]),
            institution_keywords: strings(&["university", "college", "institute", "school"]),
            skill_vocabulary: strings(&[
                // Programming languages and frameworks
                "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby",
                "rust", "swift", "kotlin", "scala", "sql", "html", "css", "react",
                "angular", "vue", "node.js", "express", "django", "flask", "spring",
                // Databases
                "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "sqlite",
                // Cloud and infrastructure
                "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform",
                "ansible",
                // Tools
                "git", "github", "gitlab", "jira", "postman", "figma",
            ]),
            certificate_patterns: strings(&[
                r"(?i)aws\s+certified(?:\s+[a-z]+){1,4}",
                r"(?i)azure\s+(?:certified|associate|professional|administrator|developer|architect|fundamentals)(?:\s+[a-z]+){0,3}",
                r"(?i)gcp\s+(?:certified|associate|professional)(?:\s+[a-z]+){0,3}",
                r"(?i)microsoft\s+certified:?(?:\s+[a-z]+){1,4}|microsoft\s+(?:azure|office)(?:\s+[a-z]+){0,3}",
                r"(?i)cisco\s+certified(?:\s+[a-z]+){1,4}|\b(?:ccna|ccnp|ccie)\b",
                r"(?i)\bpmp\b|scrum\s+master|six\s+sigma|\bcsm\b|\bcspo\b",
                r"(?i)google\s+cloud\s+(?:professional|associate)(?:\s+[a-z]+){0,3}|associate\s+cloud\s+engineer",
            ]),
            issuer_map: vec![
                ("aws".to_string(), "Amazon Web Services".to_string()),
                ("azure".to_string(), "Microsoft".to_string()),
                ("microsoft".to_string(), "Microsoft".to_string()),
                ("google".to_string(), "Google".to_string()),
                ("cisco".to_string(), "Cisco".to_string()),
                ("pmp".to_string(), "Project Management Institute".to_string()),
                ("scrum".to_string(), "Scrum Alliance".to_string()),
            ],
        }
    }
}
