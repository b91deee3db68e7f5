//! TSPLIB-style format parser.
//!
//! Reference: Reinelt (1991) "TSPLIB—A Traveling Salesman Problem Library"
//!
//! Only the coordinate convention matters here: everything before a
//! `NODE_COORD_SECTION` marker line (matched case-insensitively) is
//! preamble, each city line after it carries an identifier followed by
//! coordinates (the last two whitespace-separated tokens are x and y),
//! and a line starting with `EOF` ends the section.

use crate::error::{TspError, TspResult};
use crate::instance::TspInstance;
use std::path::Path;

/// Parser for TSPLIB-style coordinate files
#[derive(Debug)]
pub struct TsplibParser;

impl TsplibParser {
    /// Parse a TSPLIB-style file
    pub fn parse_file(path: &Path) -> TspResult<TspInstance> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse TSPLIB-style content
    pub fn parse(content: &str, path: &Path) -> TspResult<TspInstance> {
        let mut name = String::new();
        let mut coords: Vec<(f64, f64)> = Vec::new();
        let mut in_node_coord_section = false;

        for (line_num, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if !in_node_coord_section {
                if line.eq_ignore_ascii_case("NODE_COORD_SECTION") {
                    in_node_coord_section = true;
                    continue;
                }
                // Preamble: only NAME is of interest, the rest is ignored
                if let Some((key, value)) = line.split_once(':') {
                    if key.trim().eq_ignore_ascii_case("NAME") {
                        name = value.trim().to_string();
                    }
                }
                continue;
            }

            if line.starts_with("EOF") {
                break;
            }

            // One city per line: identifier then coordinates; the last
            // two tokens are x and y. Shorter lines are skipped.
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }

            let x: f64 = parts[parts.len() - 2]
                .parse()
                .map_err(|_| TspError::ParseError {
                    file: path.to_path_buf(),
                    line: Some(line_num + 1),
                    cause: format!("invalid x coordinate: {}", parts[parts.len() - 2]),
                })?;
            let y: f64 = parts[parts.len() - 1]
                .parse()
                .map_err(|_| TspError::ParseError {
                    file: path.to_path_buf(),
                    line: Some(line_num + 1),
                    cause: format!("invalid y coordinate: {}", parts[parts.len() - 1]),
                })?;
            coords.push((x, y));
        }

        if coords.is_empty() {
            return Err(TspError::EmptyInstance);
        }

        if name.is_empty() {
            name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed")
                .to_string();
        }

        TspInstance::from_coords(&name, coords)
    }
}
