//! # Listing Record Parser
//!
//! Turns rows of `docker container ls -a` output into [`Container`] values.
//!
//! ## Field Layout
//!
//! Rows are split on runs of whitespace and fields are assigned by position,
//! matching the runtime's fixed column layout:
//!
//! | Tokens | Field |
//! |--------|-------|
//! | `0` | identifier |
//! | `1` | image |
//! | `2` | command |
//! | `3..6` | created |
//! | `6..10` | status (only when the row has more than 10 tokens) |
//! | last | name |
//!
//! There is no quoting support: a quoted command such as `"nginx -g"` spills
//! into the following columns. Ports are never populated.
//!
//! The header row must be removed before rows reach [`parse_record`];
//! [`parse_listing`] does that for a whole listing.

use crate::error::{Result, WhaleError};

/// Minimum number of tokens needed to fill identifier, image and command.
pub const MIN_RECORD_FIELDS: usize = 3;

const CREATED_FIELDS: std::ops::Range<usize> = 3..6;
const STATUS_FIELDS: std::ops::Range<usize> = 6..10;

/// One container row from the runtime listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub image: String,
    pub command: String,
    pub created: String,
    /// Empty when the row is too short to carry a status column.
    pub status: String,
    /// Always empty: the listing layout gives no reliable way to find it.
    pub ports: String,
    pub name: String,
    /// The untouched listing row, used as the label in the container picker.
    pub row: String,
}

/// A listing row that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number within the listing, header included.
    pub line_number: usize,
    pub error: WhaleError,
}

/// Result of parsing a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    pub containers: Vec<Container>,
    pub rejected: Vec<RejectedLine>,
}

/// Parse a single listing row into a [`Container`].
///
/// Fails with [`WhaleError::MalformedRecord`] when the row has fewer than
/// [`MIN_RECORD_FIELDS`] tokens; such rows are never partially parsed.
pub fn parse_record(line: &str) -> Result<Container> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_RECORD_FIELDS {
        return Err(WhaleError::MalformedRecord {
            line: line.to_string(),
            found: fields.len(),
        });
    }

    let status = if fields.len() > STATUS_FIELDS.end {
        join_fields(&fields, STATUS_FIELDS)
    } else {
        String::new()
    };

    Ok(Container {
        id: fields[0].to_string(),
        image: fields[1].to_string(),
        command: fields[2].to_string(),
        created: join_fields(&fields, CREATED_FIELDS),
        status,
        ports: String::new(),
        name: fields[fields.len() - 1].to_string(),
        row: line.trim().to_string(),
    })
}

/// Parse the full output of a container listing.
///
/// The first line is the column header and is skipped, as are blank lines.
/// Malformed rows are collected in [`ParsedListing::rejected`] and do not
/// stop the remaining rows from being parsed.
pub fn parse_listing(output: &str) -> ParsedListing {
    let mut listing = ParsedListing::default();

    for (idx, line) in output.trim().lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        match parse_record(line) {
            Ok(container) => listing.containers.push(container),
            Err(error) => {
                tracing::warn!(line_number = idx + 1, %error, "skipping listing row");
                listing.rejected.push(RejectedLine {
                    line_number: idx + 1,
                    error,
                });
            }
        }
    }

    listing
}

/// Join the tokens in `range` with single spaces, clamped to what exists.
fn join_fields(fields: &[&str], range: std::ops::Range<usize>) -> String {
    let end = range.end.min(fields.len());
    let start = range.start.min(end);
    fields[start..end].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "CONTAINER ID   IMAGE     COMMAND                  CREATED        STATUS                    PORTS     NAMES";

    #[test]
    fn test_parse_record_scenario_row() {
        let line = r#"abc123 nginx:latest "nginx -g" 2 days ago Up 2 days 0.0.0.0:80->80/tcp web"#;
        let container = parse_record(line).expect("parse row");

        assert_eq!(container.id, "abc123");
        assert_eq!(container.image, "nginx:latest");
        assert_eq!(container.name, "web");
        assert_eq!(container.row, line);
    }

    #[test]
    fn test_parse_record_positional_fields() {
        let line = "f00dbabe redis:7 redis-server 3 weeks ago Up 5 minutes ago 6379/tcp cache";
        let container = parse_record(line).expect("parse row");

        assert_eq!(container.command, "redis-server");
        assert_eq!(container.created, "3 weeks ago");
        assert_eq!(container.status, "Up 5 minutes ago");
        assert_eq!(container.ports, "");
        assert_eq!(container.name, "cache");
    }

    #[test]
    fn test_parse_record_short_row_has_empty_status() {
        // A never-started container: no status column, exactly 7 tokens.
        let line = "deadbeef alpine sh 2 hours ago builder";
        let container = parse_record(line).expect("parse row");

        assert_eq!(container.created, "2 hours ago");
        assert_eq!(container.status, "");
        assert_eq!(container.name, "builder");
    }

    #[test]
    fn test_parse_record_exactly_ten_tokens_has_empty_status() {
        let line = "a b c d e f g h i j";
        let container = parse_record(line).expect("parse row");
        assert_eq!(container.status, "");
        assert_eq!(container.name, "j");
    }

    #[test]
    fn test_parse_record_three_tokens() {
        let container = parse_record("abc nginx run").expect("parse row");
        assert_eq!(container.id, "abc");
        assert_eq!(container.command, "run");
        assert_eq!(container.created, "");
        assert_eq!(container.name, "run");
    }

    #[test]
    fn test_parse_record_collapses_whitespace_runs() {
        let line = "abc123    nginx\t\t\"nginx\"   1   day   ago   web";
        let container = parse_record(line).expect("parse row");
        assert_eq!(container.created, "1 day ago");
        assert_eq!(container.name, "web");
    }

    #[test]
    fn test_parse_record_rejects_short_rows() {
        for line in ["", "   ", "abc123", "abc123 nginx"] {
            let err = parse_record(line).expect_err("row should be rejected");
            assert!(
                matches!(err, WhaleError::MalformedRecord { .. }),
                "unexpected error for {line:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_listing_skips_header() {
        let output = "CONTAINER ID IMAGE COMMAND CREATED STATUS PORTS NAMES\nabc123 nginx:latest \"nginx -g\" 2 days ago Up 2 days 0.0.0.0:80->80/tcp web\n";
        let listing = parse_listing(output);

        assert_eq!(listing.containers.len(), 1);
        assert!(listing.rejected.is_empty());
        assert_eq!(listing.containers[0].id, "abc123");
        assert_eq!(listing.containers[0].image, "nginx:latest");
        assert_eq!(listing.containers[0].name, "web");
    }

    #[test]
    fn test_parse_listing_yields_one_container_per_row() {
        let rows = [
            "1111 nginx nginx 2 days ago Up 2 days 80/tcp web",
            "2222 redis redis 3 days ago Exited (0) 3 days ago cache",
            "3333 postgres postgres 4 days ago db",
        ];
        let output = format!("{HEADER}\n{}\n", rows.join("\n"));
        let listing = parse_listing(&output);

        assert_eq!(listing.containers.len(), rows.len());
        for container in &listing.containers {
            assert!(!container.id.is_empty());
            assert!(!container.name.is_empty());
        }
        let names: Vec<&str> = listing.containers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["web", "cache", "db"]);
    }

    #[test]
    fn test_parse_listing_header_only() {
        let listing = parse_listing(&format!("{HEADER}\n"));
        assert!(listing.containers.is_empty());
        assert!(listing.rejected.is_empty());
    }

    #[test]
    fn test_parse_listing_empty_output() {
        assert_eq!(parse_listing(""), ParsedListing::default());
    }

    #[test]
    fn test_parse_listing_rejects_bad_row_without_aborting() {
        let output = format!("{HEADER}\n1111 nginx nginx 2 days ago web\nbroken row\n2222 redis redis 1 day ago cache\n");
        let listing = parse_listing(&output);

        assert_eq!(listing.containers.len(), 2);
        assert_eq!(listing.rejected.len(), 1);
        assert_eq!(listing.rejected[0].line_number, 3);
        assert!(matches!(
            listing.rejected[0].error,
            WhaleError::MalformedRecord { found: 2, .. }
        ));
    }

    #[test]
    fn test_parse_listing_ignores_blank_lines() {
        let output = format!("{HEADER}\n\n1111 nginx nginx 2 days ago web\n   \n");
        let listing = parse_listing(&output);
        assert_eq!(listing.containers.len(), 1);
        assert!(listing.rejected.is_empty());
    }
}
