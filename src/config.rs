use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::NotifierError;

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository identifier in "owner/name" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = NotifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        let malformed = parts
            .iter()
            .any(|p| p.is_empty() || p.contains(char::is_whitespace));
        if parts.len() != 2 || malformed {
            return Err(NotifierError::Configuration(format!(
                "Invalid repo format. Expected 'owner/repo', got: {}",
                s
            )));
        }
        Ok(Self {
            owner: parts[0].to_string(),
            name: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Raw invocation inputs, as collected from flags and environment
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub repo: Option<String>,
    pub pr_number: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub dry_run: bool,
}

/// Validated configuration for one run
#[derive(Clone)]
pub struct Config {
    pub repo: RepoId,
    pub pr_number: u64,
    pub token: String,
    pub api_url: String,
    pub dry_run: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("repo", &self.repo)
            .field("pr_number", &self.pr_number)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Config {
    /// Validate raw inputs. All missing inputs are reported at once.
    pub fn from_inputs(inputs: Inputs) -> Result<Self, NotifierError> {
        let repo = non_empty(inputs.repo);
        let pr_number = non_empty(inputs.pr_number);
        let token = non_empty(inputs.token);

        let mut missing = Vec::new();
        if repo.is_none() {
            missing.push("GITHUB_REPOSITORY");
        }
        if pr_number.is_none() {
            missing.push("GITHUB_PULL_REQUEST_NUMBER");
        }
        if token.is_none() {
            missing.push("GITHUB_TOKEN");
        }

        let (Some(repo), Some(pr_number), Some(token)) = (repo, pr_number, token) else {
            return Err(NotifierError::Configuration(format!(
                "missing required inputs: {}",
                missing.join(", ")
            )));
        };

        let repo: RepoId = repo.parse()?;
        let pr_number = parse_pr_number(&pr_number)?;
        let api_url = non_empty(inputs.api_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let config = Self {
            repo,
            pr_number,
            token,
            api_url,
            dry_run: inputs.dry_run,
        };

        debug!(?config, "Validated configuration");

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_pr_number(value: &str) -> Result<u64, NotifierError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(NotifierError::Configuration(format!(
            "Invalid pull request number: {}",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inputs() -> Inputs {
        Inputs {
            repo: Some("octocat/hello-world".to_string()),
            pr_number: Some("42".to_string()),
            token: Some("ghs_test".to_string()),
            api_url: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_parse_repo() {
        let repo: RepoId = "octocat/hello-world".parse().unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_parse_repo_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("too/many/parts".parse::<RepoId>().is_err());
        assert!("/name".parse::<RepoId>().is_err());
        assert!("acme/ widgets".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_parse_repo_surrounding_whitespace() {
        let repo: RepoId = " acme/widgets\n".parse().unwrap();
        assert_eq!(repo.owner, "acme");
        assert_eq!(repo.name, "widgets");

        let inputs = Inputs {
            repo: Some(" acme/widgets".to_string()),
            ..full_inputs()
        };
        let config = Config::from_inputs(inputs).unwrap();
        assert_eq!(config.repo.to_string(), "acme/widgets");
    }

    #[test]
    fn test_valid_inputs() {
        let config = Config::from_inputs(full_inputs()).unwrap();
        assert_eq!(config.repo.to_string(), "octocat/hello-world");
        assert_eq!(config.pr_number, 42);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_missing_token() {
        let inputs = Inputs {
            token: None,
            ..full_inputs()
        };

        match Config::from_inputs(inputs) {
            Err(NotifierError::Configuration(msg)) => {
                assert!(msg.contains("GITHUB_TOKEN"));
                assert!(!msg.contains("GITHUB_REPOSITORY"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let inputs = Inputs {
            repo: Some(String::new()),
            pr_number: Some("  ".to_string()),
            ..full_inputs()
        };

        let err = Config::from_inputs(inputs).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("GITHUB_REPOSITORY"));
        assert!(msg.contains("GITHUB_PULL_REQUEST_NUMBER"));
    }

    #[test]
    fn test_invalid_pr_number() {
        for value in ["abc", "0", "-3"] {
            let inputs = Inputs {
                pr_number: Some(value.to_string()),
                ..full_inputs()
            };
            assert!(matches!(
                Config::from_inputs(inputs),
                Err(NotifierError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_api_url_override() {
        let inputs = Inputs {
            api_url: Some("https://github.example.com/api/v3/".to_string()),
            ..full_inputs()
        };
        let config = Config::from_inputs(inputs).unwrap();
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_inputs(full_inputs()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("ghs_test"));
    }
}
