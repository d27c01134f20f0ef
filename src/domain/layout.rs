//! Timestamp layouts
//!
//! A layout is either a token layout (`YYYY-MM-DD_hh-mm-ss.mmm_ZZZ`) or, when
//! it contains a `%`, a chrono strftime pattern. Token layouts are translated
//! to strftime once so both dialects share one rendering path; only the zone
//! abbreviation token is rendered separately so it stays tag-safe.

use crate::error::{Result, TagError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;
use std::fmt::Write;
use std::sync::OnceLock;

/// Layout used when no custom format is configured
pub const DEFAULT_LAYOUT: &str = "YYYY-MM-DD_hh-mm-ss.mmm_ZZZ";

// Longer tokens come first so `YYYY` and `mmm` win over `YY` and `mm`.
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"YYYY|YY|MM|DD|hh|mmm|mm|ss|ZZZ").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// chrono strftime pattern
    Pattern(String),
    /// `ZZZ`: zone abbreviation with numeric offsets made tag-safe
    Zone,
}

/// A parsed timestamp layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    source: String,
    segments: Vec<Segment>,
}

impl Layout {
    /// Parse a layout string in either dialect.
    ///
    /// Rejects patterns chrono cannot parse as well as those it parses but
    /// refuses to format (e.g. `%#z`), so rendering a parsed layout does not
    /// fail.
    pub fn parse(layout: &str) -> Result<Self> {
        let segments = if layout.contains('%') {
            vec![Segment::Pattern(layout.to_string())]
        } else {
            translate_tokens(layout)
        };

        let malformed = segments.iter().any(|segment| match segment {
            Segment::Pattern(p) => StrftimeItems::new(p).any(|item| matches!(item, Item::Error)),
            Segment::Zone => false,
        });
        if malformed {
            return Err(TagError::InvalidLayout(layout.to_string()));
        }

        let parsed = Layout {
            source: layout.to_string(),
            segments,
        };
        if let Some(epoch) = Tz::UTC.timestamp_opt(0, 0).single() {
            parsed.render(&epoch)?;
        }

        Ok(parsed)
    }

    /// The configured format if non-empty, otherwise the default layout
    pub fn resolve(custom: &str) -> Result<Self> {
        if custom.is_empty() {
            Self::parse(DEFAULT_LAYOUT)
        } else {
            Self::parse(custom)
        }
    }

    /// The layout string as it was configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render a zoned timestamp
    pub fn render(&self, at: &DateTime<Tz>) -> Result<String> {
        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Pattern(p) => write!(rendered, "{}", at.format(p)),
                Segment::Zone => {
                    write!(rendered, "{}", tag_safe_zone(&at.offset().to_string()))
                }
            }
            .map_err(|_| TagError::InvalidLayout(self.source.clone()))?;
        }

        Ok(rendered)
    }
}

fn translate_tokens(layout: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pattern = String::with_capacity(layout.len() * 2);
    let mut last = 0;

    for token in token_regex().find_iter(layout) {
        pattern.push_str(&layout[last..token.start()]);
        last = token.end();

        let specifier = match token.as_str() {
            "YYYY" => "%Y",
            "YY" => "%y",
            "MM" => "%m",
            "DD" => "%d",
            "hh" => "%H",
            "mm" => "%M",
            "ss" => "%S",
            "mmm" => "%3f",
            "ZZZ" => {
                if !pattern.is_empty() {
                    segments.push(Segment::Pattern(std::mem::take(&mut pattern)));
                }
                segments.push(Segment::Zone);
                continue;
            }
            other => other,
        };
        pattern.push_str(specifier);
    }
    pattern.push_str(&layout[last..]);
    if !pattern.is_empty() {
        segments.push(Segment::Pattern(pattern));
    }

    segments
}

/// Zones without a letter abbreviation render as offsets like `+04`; `+` is
/// not allowed in image tags, so signs become `p`/`m`.
pub(crate) fn tag_safe_zone(abbreviation: &str) -> String {
    abbreviation
        .chars()
        .filter_map(|c| match c {
            '+' => Some('p'),
            '-' => Some('m'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn instant() -> DateTime<Tz> {
        Utc.timestamp_opt(1234, 123_456_789)
            .unwrap()
            .with_timezone(&Tz::UTC)
    }

    fn pattern(p: &str) -> Segment {
        Segment::Pattern(p.to_string())
    }

    #[test]
    fn test_translate_default_layout() {
        assert_eq!(
            translate_tokens(DEFAULT_LAYOUT),
            vec![pattern("%Y-%m-%d_%H-%M-%S.%3f_"), Segment::Zone]
        );
    }

    #[test]
    fn test_translate_prefers_longest_token() {
        assert_eq!(translate_tokens("YYYYMMDD"), vec![pattern("%Y%m%d")]);
        assert_eq!(translate_tokens("YY.mm.mmm"), vec![pattern("%y.%M.%3f")]);
    }

    #[test]
    fn test_translate_keeps_literals() {
        assert_eq!(translate_tokens("build-YYYY"), vec![pattern("build-%Y")]);
        assert_eq!(translate_tokens("v1"), vec![pattern("v1")]);
        assert_eq!(
            translate_tokens("ZZZ-YYYY"),
            vec![Segment::Zone, pattern("-%Y")]
        );
    }

    #[test]
    fn test_render_default_layout() {
        let layout = Layout::resolve("").unwrap();
        assert_eq!(layout.source(), DEFAULT_LAYOUT);
        assert_eq!(layout.render(&instant()).unwrap(), "1970-01-01_00-20-34.123_UTC");
    }

    #[test]
    fn test_render_pads_milliseconds() {
        let at = Utc
            .timestamp_opt(1234, 5_000_000)
            .unwrap()
            .with_timezone(&Tz::UTC);
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        assert_eq!(layout.render(&at).unwrap(), "1970-01-01_00-20-34.005_UTC");
    }

    #[test]
    fn test_render_custom_token_layout() {
        let layout = Layout::resolve("YYYY-MM-DD").unwrap();
        assert_eq!(layout.render(&instant()).unwrap(), "1970-01-01");
    }

    #[test]
    fn test_render_strftime_layout() {
        let layout = Layout::parse("%Y%m%d-%H%M%S").unwrap();
        assert_eq!(layout.render(&instant()).unwrap(), "19700101-002034");
    }

    #[test]
    fn test_invalid_strftime_layout() {
        let result = Layout::parse("%Y-%Q");
        assert!(matches!(result, Err(TagError::InvalidLayout(l)) if l == "%Y-%Q"));
    }

    #[test]
    fn test_format_only_specifier_is_invalid() {
        // chrono parses `%#z` but cannot format it
        let result = Layout::parse("%Y-%#z");
        assert!(matches!(result, Err(TagError::InvalidLayout(l)) if l == "%Y-%#z"));
    }

    #[test]
    fn test_numeric_zone_abbreviation_is_tag_safe() {
        let layout = Layout::parse(DEFAULT_LAYOUT).unwrap();
        let dubai = instant().with_timezone(&Tz::Asia__Dubai);
        assert_eq!(layout.render(&dubai).unwrap(), "1970-01-01_04-20-34.123_p04");

        let sao_paulo = Utc
            .with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
            .unwrap()
            .with_timezone(&Tz::America__Sao_Paulo);
        assert_eq!(layout.render(&sao_paulo).unwrap(), "2020-01-01_09-00-00.000_m03");
    }

    #[test]
    fn test_tag_safe_zone() {
        assert_eq!(tag_safe_zone("PST"), "PST");
        assert_eq!(tag_safe_zone("+0530"), "p0530");
        assert_eq!(tag_safe_zone("-03"), "m03");
    }

    #[test]
    fn test_trailing_percent_is_invalid() {
        assert!(Layout::parse("YYYY%").is_err());
    }
}
