//! The lexicon of skill terms analysis scans for in evidence text.
//!
//! Terms carry alternate spellings matched verbatim and `implies` links
//! used to surface related skills that were never named directly.

use anyhow::Context;
use serde::Deserialize;

/// One recognizable skill term.
#[derive(Debug, Clone, Deserialize)]
pub struct TermSpec {
    /// Canonical skill name as it should appear on a profile.
    pub name: String,
    /// Alternate spellings and surface forms matched in evidence text.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Skills this term counts toward as indirect evidence.
    #[serde(default)]
    pub implies: Vec<String>,
}

/// Shape of a lexicon TOML file: a list of `[[term]]` tables.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default, rename = "term")]
    terms: Vec<TermSpec>,
}

/// The set of skill terms one analysis run recognizes.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    terms: Vec<TermSpec>,
}

impl SkillLexicon {
    /// Create a lexicon from explicit terms.
    #[must_use]
    pub fn new(terms: Vec<TermSpec>) -> Self {
        Self { terms }
    }

    /// Parse a lexicon from TOML text.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexr_engine::SkillLexicon;
    ///
    /// let lexicon = SkillLexicon::from_toml_str(
    ///     r#"
    ///     [[term]]
    ///     name = "React"
    ///     aliases = ["reactjs"]
    ///     implies = ["Frontend Architecture"]
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(lexicon.len(), 1);
    /// ```
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let file: LexiconFile = toml::from_str(raw).context("failed to parse lexicon TOML")?;
        Ok(Self::new(file.terms))
    }

    /// Terms in definition order.
    #[must_use]
    pub fn terms(&self) -> &[TermSpec] {
        &self.terms
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the lexicon holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The built-in lexicon covering common product-engineering skills.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            spec(
                "React",
                &["reactjs", "react.js", "redux"],
                &["Frontend Architecture", "UI/UX Design"],
            ),
            spec("TypeScript", &["tsx"], &["Frontend Architecture"]),
            spec(
                "API Integration",
                &["api", "apis", "rest", "rest api", "restful", "graphql"],
                &["Backend Architecture"],
            ),
            spec(
                "UI/UX Design",
                &["ui/ux", "ui kit", "ux design", "design system", "component library"],
                &[],
            ),
            spec(
                "Data Visualization",
                &["dataviz", "charts", "charting", "plotting"],
                &[],
            ),
            spec(
                "Authentication",
                &["oauth", "oauth2", "sso", "auth", "jwt", "token refresh", "login flows"],
                &["Security Engineering", "Backend Architecture"],
            ),
            spec(
                "Testing",
                &["test", "tests", "test suites", "unit testing", "integration testing", "qa"],
                &[],
            ),
            spec(
                "CI/CD",
                &[
                    "ci",
                    "continuous integration",
                    "continuous delivery",
                    "github actions",
                    "pipeline",
                    "pipelines",
                ],
                &[],
            ),
            spec(
                "Database Design",
                &["sql", "postgres", "postgresql", "database", "databases", "schema design"],
                &["Backend Architecture"],
            ),
            spec(
                "Performance Optimization",
                &["performance", "profiling", "caching", "optimization"],
                &[],
            ),
            spec(
                "Accessibility",
                &["a11y", "wcag", "screen reader", "keyboard navigation"],
                &["UI/UX Design"],
            ),
            spec(
                "Technical Writing",
                &["documentation", "docs", "guide", "guides", "how-to"],
                &[],
            ),
            spec(
                "Frontend Architecture",
                &["spa architecture", "component architecture"],
                &[],
            ),
            spec(
                "Backend Architecture",
                &["microservices", "distributed systems", "backend"],
                &[],
            ),
            spec(
                "Security Engineering",
                &["hmac", "request signing", "encryption", "appsec", "threat modeling"],
                &[],
            ),
        ])
    }
}

impl Default for SkillLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn spec(name: &str, aliases: &[&str], implies: &[&str]) -> TermSpec {
    TermSpec {
        name: name.to_string(),
        aliases: aliases.iter().map(|s| (*s).to_string()).collect(),
        implies: implies.iter().map(|s| (*s).to_string()).collect(),
    }
}
