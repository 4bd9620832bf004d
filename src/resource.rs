use thiserror::Error;
use url::Url;

use crate::figma::normalize_node_id;

/// File key and node id extracted from a Figma share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaInfo {
    pub file_key: String,
    /// Node id in API form (`12:34`).
    pub node_id: String,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}. Hint: include https:// and ensure the URL is well-formed.")]
    InvalidUrl { value: String, message: String },
    #[error("'{url}' is not a figma.com link")]
    NotFigma { url: String },
    #[error("Figma URL missing file key in '{url}'. Hint: use https://www.figma.com/design/<FILE_KEY>/...")]
    MissingFileKey { url: String },
    #[error("Figma URL missing node-id in '{url}'. Hint: select the frame and copy its link so it includes ?node-id=...")]
    MissingNodeId { url: String },
}

const FILE_SEGMENTS: &[&str] = &["file", "design", "proto", "board"];

/// Parse a Figma share link into its file key and API node id.
pub fn parse_figma_link(value: &str) -> Result<FigmaInfo, ResourceParseError> {
    let url = Url::parse(value.trim()).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if host != "figma.com" && !host.ends_with(".figma.com") {
        return Err(ResourceParseError::NotFigma {
            url: value.to_string(),
        });
    }

    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|s| FILE_SEGMENTS.contains(s))
        .and_then(|i| path_segments.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::MissingFileKey {
            url: value.to_string(),
        })?;

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| normalize_node_id(&v))
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ResourceParseError::MissingNodeId {
            url: value.to_string(),
        })?;

    Ok(FigmaInfo { file_key, node_id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_figma_file_url() {
        let url = "https://www.figma.com/file/ABC123/My-Design?node-id=12-34";
        let info = parse_figma_link(url).unwrap();
        assert_eq!(info.file_key, "ABC123");
        assert_eq!(info.node_id, "12:34");
    }

    #[test]
    fn test_parse_figma_design_url() {
        let url = "https://www.figma.com/design/XYZ789/Another-Design?node-id=5-10&t=abc";
        let info = parse_figma_link(url).unwrap();
        assert_eq!(info.file_key, "XYZ789");
        assert_eq!(info.node_id, "5:10");
    }

    #[test]
    fn test_percent_encoded_node_id_is_decoded() {
        let url = "https://www.figma.com/design/XYZ789/Name?node-id=5%3A10";
        let info = parse_figma_link(url).unwrap();
        assert_eq!(info.node_id, "5:10");
    }

    #[test]
    fn test_missing_node_id_errors() {
        let url = "https://www.figma.com/file/ABC123/My-Design";
        assert!(matches!(
            parse_figma_link(url),
            Err(ResourceParseError::MissingNodeId { .. })
        ));
    }

    #[test]
    fn test_missing_file_key_errors() {
        let url = "https://www.figma.com/files/recent?node-id=1-2";
        assert!(matches!(
            parse_figma_link(url),
            Err(ResourceParseError::MissingFileKey { .. })
        ));
    }

    #[test]
    fn test_non_figma_host_errors() {
        assert!(matches!(
            parse_figma_link("https://example.com/design/ABC?node-id=1-2"),
            Err(ResourceParseError::NotFigma { .. })
        ));
    }

    #[test]
    fn test_look_alike_host_is_not_figma() {
        assert!(matches!(
            parse_figma_link("https://evilfigma.com/design/ABC/x?node-id=1-2"),
            Err(ResourceParseError::NotFigma { .. })
        ));
        let info = parse_figma_link("https://figma.com/design/ABC/x?node-id=1-2").unwrap();
        assert_eq!(info.file_key, "ABC");
    }

    #[test]
    fn test_garbage_is_invalid_url() {
        assert!(matches!(
            parse_figma_link("not a link"),
            Err(ResourceParseError::InvalidUrl { .. })
        ));
    }
}
