//! HTTP Accept header negotiation.

/// Well-known media types the gateway negotiates between.
pub mod media {
    pub const HTML: &str = "text/html";
    pub const JSON: &str = "application/json";
    pub const TEXT: &str = "text/plain";
}

/// A single media range from an Accept header (e.g. `text/*;q=0.8`).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    /// Primary type, `*` for any.
    pub kind: String,
    /// Subtype, `*` for any.
    pub subtype: String,
    /// Quality value in `0.0..=1.0`.
    pub quality: f32,
}

impl MediaRange {
    /// Parse one comma-separated element of an Accept header.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut params = raw.split(';');
        let essence = params.next()?.trim();
        let (kind, subtype) = essence.split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in params {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().unwrap_or(0.0).clamp(0.0, 1.0);
                }
            }
        }

        Some(Self {
            kind: kind.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            quality,
        })
    }

    /// Whether this range covers the given `type/subtype`.
    pub fn matches(&self, kind: &str, subtype: &str) -> bool {
        (self.kind == "*" || self.kind == kind) && (self.subtype == "*" || self.subtype == subtype)
    }

    fn specificity(&self) -> u8 {
        match (self.kind.as_str(), self.subtype.as_str()) {
            ("*", _) => 0,
            (_, "*") => 1,
            _ => 2,
        }
    }
}

/// Parsed Accept header.
///
/// A missing or empty header accepts every media type. A header whose
/// ranges are all malformed accepts nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptHeader {
    ranges: Vec<MediaRange>,
    /// Whether a non-empty header was sent.
    present: bool,
}

impl AcceptHeader {
    /// Parse a raw header value. `None` means the header was absent.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::default();
        };
        Self {
            ranges: value.split(',').filter_map(MediaRange::parse).collect(),
            present: true,
        }
    }

    /// Whether the client accepts `media_type` (a full `type/subtype`).
    ///
    /// The most specific matching range decides; `q=0` rejects.
    pub fn accepts(&self, media_type: &str) -> bool {
        if !self.present {
            return true;
        }

        let Some((kind, subtype)) = media_type.split_once('/') else {
            return false;
        };
        let (kind, subtype) = (kind.to_ascii_lowercase(), subtype.to_ascii_lowercase());

        self.ranges
            .iter()
            .filter(|range| range.matches(&kind, &subtype))
            .max_by_key(|range| range.specificity())
            .is_some_and(|range| range.quality > 0.0)
    }

    /// Return the first of `offered` the client accepts, in the given order.
    pub fn first_accepted<'a>(&self, offered: &[&'a str]) -> Option<&'a str> {
        offered.iter().copied().find(|media_type| self.accepts(media_type))
    }

    /// Parsed media ranges in header order.
    pub fn ranges(&self) -> &[MediaRange] {
        &self.ranges
    }
}
