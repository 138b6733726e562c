// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary sources.
//!
//! A vocabulary is an ordered list of display-cased terms. Order matters in
//! one place only: when two entries fold to the same term, the first one is
//! the one an exact match reports.

use crate::error::{Result, TypeaheadError};
use std::path::Path;

/// A technology-flavored vocabulary for demos and benchmarks.
///
/// Contains a few duplicates ("operating system") and mixed casing
/// ("rabbitMQ") on purpose; both are normal in real vocabularies.
pub fn demo() -> Vec<String> {
    DEMO.iter().map(|s| (*s).to_string()).collect()
}

/// Parse vocabulary text.
///
/// A document whose first non-blank char is `[` is read as a JSON array of
/// strings. Anything else is one term per line; blank lines and lines
/// starting with `#` are skipped and surrounding whitespace is trimmed.
pub fn parse_vocabulary(text: &str) -> std::result::Result<Vec<String>, serde_json::Error> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text);
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Read and parse a vocabulary file.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path).map_err(|e| TypeaheadError::io(path, e))?;
    let words = parse_vocabulary(&raw).map_err(|e| TypeaheadError::json(path, e))?;
    tracing::debug!(target: "typeahead::vocabulary", path = %path.display(), words = words.len(), "loaded vocabulary");
    Ok(words)
}

#[rustfmt::skip]
const DEMO: &[&str] = &[
    "algorithm", "data structure", "trie", "hash map", "linked list", "binary tree", "graph theory",
    "recursion", "dynamic programming", "object-oriented programming", "functional programming",
    "operating system", "database management", "network protocols", "cybersecurity", "cloud computing",
    "distributed systems", "parallel computing", "quantum computing",

    "javascript", "python", "java", "c++", "c#", "go", "rust", "swift", "kotlin", "php",
    "ruby", "typescript", "scala", "haskell", "r", "matlab", "perl", "sql", "html", "css",

    "react", "angular", "vue.js", "next.js", "node.js", "express.js", "django", "flask",
    "spring boot", "ruby on rails", "asp.net", "laravel", "tailwind css", "bootstrap",
    "webpack", "babel", "npm", "yarn", "rest api", "graphql", "websocket", "http", "https",
    "frontend development", "backend development", "full stack development", "responsive design",
    "web accessibility",

    "aws", "amazon web services", "azure", "google cloud platform", "gcp", "firebase",
    "heroku", "netlify", "vercel", "docker", "kubernetes", "serverless", "lambda functions",
    "s3", "ec2", "rds", "cloudfront", "firestore", "google bigquery", "machine learning engine",

    "machine learning", "deep learning", "artificial intelligence", "ai", "data science",
    "natural language processing", "nlp", "computer vision", "cv", "reinforcement learning",
    "neural network", "convolutional neural network", "recurrent neural network", "transformer model",
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras", "matplotlib", "seaborn",
    "data analysis", "data visualization", "big data", "data mining", "predictive analytics",

    "git", "github", "gitlab", "bitbucket", "vscode", "intellij idea", "pycharm",
    "jira", "confluence", "slack", "zoom", "microsoft teams", "postman", "insomnia",
    "nginx", "apache", "mongodb", "mysql", "postgresql", "redis", "kafka", "rabbitMQ",
    "blockchain", "cryptocurrency", "devops", "ci/cd", "agile", "scrum", "kanban",

    "operating system", "linux", "windows", "macos", "unix", "virtual machine", "containerization",
    "api", "sdk", "ide", "cli", "gui", "ux", "ui", "user interface", "user experience",
    "debugging", "testing", "unit testing", "integration testing", "system design",
    "software architecture", "agile methodology", "design patterns", "software engineering",
    "version control", "cyber security", "encryption", "firewall", "vpn", "malware", "phishing",
    "authentication", "authorization", "computer science", "internship", "career", "interview",
    "portfolio", "resume", "google", "microsoft", "amazon",

    "how to learn javascript", "best data structures for interviews", "machine learning basics",
    "what is cloud computing", "guide to frontend development", "python for data science",
    "build a react app", "deploy nodejs app", "algorithms explained", "firebase tutorial",
    "google internship application tips", "interview preparation", "system design interview questions",
    "design patterns in python", "docker for beginners", "kubernetes deployment",
    "understanding blockchain", "cybersecurity fundamentals",
    "web security best practices", "data visualization tools", "clean code principles",
];
