//! CLI subcommands

pub mod play;
pub mod selfplay;
pub mod solve;

use anyhow::Result;

use crate::game::Side;

/// Parse a `human`/`computer` side token (short forms accepted)
pub fn parse_side_token(value: &str, flag: &str) -> Result<Side> {
    match value.to_lowercase().as_str() {
        "human" | "h" => Ok(Side::Human),
        "computer" | "c" => Ok(Side::Computer),
        other => Err(anyhow::anyhow!(
            "Invalid value '{other}' for {flag}. Expected 'human' or 'computer'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side_token() {
        assert_eq!(parse_side_token("human", "--first").unwrap(), Side::Human);
        assert_eq!(parse_side_token("C", "--first").unwrap(), Side::Computer);
        assert!(parse_side_token("robot", "--first").is_err());
    }
}
