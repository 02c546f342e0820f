use super::{SkillTaxonomy, TaxonomyError};

const LANGUAGES: &[&str] = &[
    "python", "java", "c", "c++", "c#", "javascript", "typescript", "dart", "go", "rust", "php",
    "kotlin", "swift", "ruby", "scala", "r", "matlab", "perl", "html", "css", "sql", "bash",
    "powershell",
];

const FRAMEWORKS: &[&str] = &[
    "react", "flutter", "angular", "vue", "svelte", "django", "flask", "fastapi", "spring",
    "spring boot", "node", "nodejs", "express", "nest", "nextjs", "gatsby", "nuxt", "laravel",
    "rails", "asp.net", "blazor", "xamarin", "react native", "ionic",
];

const DATABASES: &[&str] = &[
    "mysql", "postgresql", "mongodb", "firebase", "sqlite", "redis", "cassandra", "dynamodb",
    "oracle", "sql server", "mariadb", "elasticsearch", "neo4j", "couchdb", "influxdb",
];

const TOOLS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "docker", "kubernetes", "jenkins", "travis ci",
    "circle ci", "terraform", "ansible", "vagrant", "linux", "ubuntu", "windows", "macos", "aws",
    "azure", "gcp", "heroku", "netlify", "vercel", "ci/cd", "devops", "agile", "scrum", "jira",
    "confluence", "slack", "figma", "adobe xd", "postman", "swagger", "graphql", "rest api",
    "microservices", "serverless", "nginx", "apache",
];

const AI_ML: &[&str] = &[
    "machine learning", "deep learning", "tensorflow", "pytorch", "keras", "scikit-learn",
    "pandas", "numpy", "opencv", "nltk", "spacy", "hugging face", "ai", "ml", "nlp",
    "computer vision", "data science",
];

const TESTING: &[&str] = &[
    "jest", "mocha", "chai", "pytest", "unittest", "selenium", "cypress", "junit", "testng",
    "cucumber", "testing", "tdd", "bdd",
];

/// The software-engineering skill catalog shipped with the service.
pub fn software_taxonomy() -> Result<SkillTaxonomy, TaxonomyError> {
    SkillTaxonomy::new([
        ("languages", LANGUAGES.to_vec()),
        ("frameworks", FRAMEWORKS.to_vec()),
        ("databases", DATABASES.to_vec()),
        ("tools", TOOLS.to_vec()),
        ("ai_ml", AI_ML.to_vec()),
        ("testing", TESTING.to_vec()),
    ])
}
