use pathrider_core::config::DuplicateEdgePolicy;
use pathrider_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse duplicate edge policy from string
pub fn parse_duplicate_edges(s: &str) -> std::result::Result<DuplicateEdgePolicy, String> {
    s.parse::<DuplicateEdgePolicy>().map_err(|e| e.to_string())
}
