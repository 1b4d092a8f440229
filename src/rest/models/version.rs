use std::fmt;
use std::str::FromStr;

/// A subject version: a positive number, or the most recent one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Version {
    Number(i32),
    Latest,
}

impl From<i32> for Version {
    fn from(version: i32) -> Self {
        Version::Number(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Number(v) => write!(f, "{v}"),
            Version::Latest => f.write_str("latest"),
        }
    }
}

impl FromStr for Version {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "latest" {
            Ok(Version::Latest)
        } else {
            s.parse().map(Version::Number)
        }
    }
}
