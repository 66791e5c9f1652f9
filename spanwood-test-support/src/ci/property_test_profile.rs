//! Property-test run profile read from the environment.
//!
//! Every spanwood property suite loads the same profile so CI can widen or
//! narrow the search without touching test code.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const SPANWOOD_PBT_FORK_ENV_KEY: &str = "SPANWOOD_PBT_FORK";
/// Environment variable capping the vertex count of generated graphs.
pub const SPANWOOD_PBT_MAX_VERTICES_ENV_KEY: &str = "SPANWOOD_PBT_MAX_VERTICES";

/// Smallest vertex cap accepted from the environment.
const MIN_VERTEX_CAP: usize = 2;

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_vertices: usize,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanwood_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false, 24);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_vertices() >= 2);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool, default_max_vertices: usize) -> Self {
        let cases = read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = read_env_or_default(SPANWOOD_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        let max_vertices = read_env_or_default(
            SPANWOOD_PBT_MAX_VERTICES_ENV_KEY,
            default_max_vertices.max(MIN_VERTEX_CAP),
            parse_vertex_cap,
        );
        Self {
            cases,
            fork,
            max_vertices,
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on the number of vertices a generated graph may have.
    #[must_use]
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_vertex_cap(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .trim()
        .parse::<usize>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed < MIN_VERTEX_CAP {
        return Err(format!("vertex cap must be >= {MIN_VERTEX_CAP}"));
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
