use crate::catalog::Selection;
use crate::error::{Result, StubError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Image paths referenced by the site config, one list per key, in order of
/// appearance. Repeated keys repeat their values.
#[derive(Clone, Debug, Default)]
pub struct SourceConfig {
    pub posters: Vec<String>,
    pub frames: Vec<String>,
    pub finals: Vec<String>,
}

impl SourceConfig {
    /// Fixed order: posters, then frames, then finals. No deduplication.
    pub fn select(&self, sel: Selection) -> Vec<String> {
        let mut out = Vec::new();
        if matches!(sel, Selection::Posters | Selection::All) {
            out.extend(self.posters.iter().cloned());
        }
        if matches!(sel, Selection::Frames | Selection::All) {
            out.extend(self.frames.iter().cloned());
        }
        if matches!(sel, Selection::Finals | Selection::All) {
            out.extend(self.finals.iter().cloned());
        }
        out
    }

    pub fn total(&self) -> usize {
        self.posters.len() + self.frames.len() + self.finals.len()
    }
}

/// Read the site config and pull out every image path it references.
/// A missing config is fatal.
pub fn load_config(path: &Path) -> Result<SourceConfig> {
    if !path.exists() {
        return Err(StubError::ConfigMissing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<SourceConfig> {
    Ok(SourceConfig {
        posters: capture_values(text, r#"\bposter\s*:\s*"([^"]+)""#)?,
        frames: capture_values(text, r#"\bframe\s*:\s*"([^"]+)""#)?,
        finals: capture_values(text, r#"\bfinalImage\s*:\s*"([^"]+)""#)?,
    })
}

fn capture_values(text: &str, pattern: &str) -> Result<Vec<String>> {
    let re = Regex::new(pattern).map_err(|e| StubError::Pattern(e.to_string()))?;
    Ok(re.captures_iter(text).map(|c| c[1].to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    days: {
      1: {
        title: "Coraline (2009)",
        poster: "/posters/coraline-2009.jpg",
        frame: "/frames/coraline-door.jpg",
        finalTitle: "Coraline (2009)",
        finalImage: "/final/coraline.jpg",
      },
      2: {
        title: "Get Out (2017)",
        poster: "/posters/get-out-2017.jpg",
        frame: "/frames/getout-teacup.jpg",
        finalImage: "/final/getout.jpg",
      },
    },
    "#;

    #[test]
    fn extracts_each_key_in_order() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(
            cfg.posters,
            vec!["/posters/coraline-2009.jpg", "/posters/get-out-2017.jpg"]
        );
        assert_eq!(
            cfg.frames,
            vec!["/frames/coraline-door.jpg", "/frames/getout-teacup.jpg"]
        );
        assert_eq!(cfg.finals, vec!["/final/coraline.jpg", "/final/getout.jpg"]);
    }

    #[test]
    fn title_keys_never_leak_into_finals() {
        // finalTitle holds a display string, not a path
        let cfg = parse_config(SAMPLE).unwrap();
        assert!(cfg.finals.iter().all(|p| p.starts_with("/final/")));
    }

    #[test]
    fn repeated_keys_yield_repeated_entries() {
        let text = r#"frame: "/frames/a.jpg", frame: "/frames/a.jpg""#;
        let cfg = parse_config(text).unwrap();
        assert_eq!(cfg.frames, vec!["/frames/a.jpg", "/frames/a.jpg"]);
    }

    #[test]
    fn whitespace_around_colon_is_tolerated() {
        let cfg = parse_config("poster : \"/posters/x.jpg\"").unwrap();
        assert_eq!(cfg.posters, vec!["/posters/x.jpg"]);
    }

    #[test]
    fn missing_config_is_fatal() {
        let err = load_config(Path::new("no/such/config.ts")).unwrap_err();
        assert!(matches!(err, StubError::ConfigMissing(_)));
    }

    #[test]
    fn select_order_is_posters_frames_finals() {
        let cfg = parse_config(SAMPLE).unwrap();
        let all = cfg.select(Selection::All);
        assert_eq!(all.len(), cfg.total());
        assert!(all[0].starts_with("/posters/"));
        assert!(all[2].starts_with("/frames/"));
        assert!(all[4].starts_with("/final/"));
    }
}
