//! Removal of non-content regions from markup.
//!
//! Regions are matched literally against their tag boundaries, not by walking a
//! document tree: an opening tag is matched up to the nearest closing tag of the same
//! name, across line breaks. Unterminated regions do not match and are left intact.
use lazy_static::lazy_static;
use regex::bytes::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref HEAD_RE: Regex = Regex::new(r"(?s-u)<head[^>]*>.*?</head>").unwrap();
    static ref SCRIPT_RE: Regex = Regex::new(r"(?s-u)<script[^>]*>.*?</script>").unwrap();
    static ref STYLE_RE: Regex = Regex::new(r"(?s-u)<style[^>]*>.*?</style>").unwrap();
    static ref AD_BANNER_RE: Regex =
        Regex::new(r#"(?s-u)<div[^>]*id="ad-banner"[^>]*>.*?</div>"#).unwrap();
    static ref HEADER_RE: Regex = Regex::new(r"(?s-u)<header[^>]*>.*?</header>").unwrap();
    static ref FOOTER_RE: Regex = Regex::new(r"(?s-u)<footer[^>]*>.*?</footer>").unwrap();
}

/// A non-content region of a document.
///
/// The declaration order is the order in which regions are removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// `<head ...> ... </head>`
    Head,
    /// `<script ...> ... </script>`
    Script,
    /// `<style ...> ... </style>`
    Style,
    /// `<div ... id="ad-banner" ...> ... </div>`
    AdBanner,
    /// `<header ...> ... </header>`
    Header,
    /// `<footer ...> ... </footer>`
    Footer,
}

impl Region {
    /// All regions in removal order.
    pub const ALL: [Self; 6] = [
        Self::Head,
        Self::Script,
        Self::Style,
        Self::AdBanner,
        Self::Header,
        Self::Footer,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Head => &*HEAD_RE,
            Self::Script => &*SCRIPT_RE,
            Self::Style => &*STYLE_RE,
            Self::AdBanner => &*AD_BANNER_RE,
            Self::Header => &*HEADER_RE,
            Self::Footer => &*FOOTER_RE,
        }
    }
}

/// Strips a set of regions from raw markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalizer {
    regions: Vec<Region>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Region::ALL)
    }
}

impl Normalizer {
    /// Creates a normalizer removing the given regions.
    /// Duplicates are ignored and the removal order is always that of [`Region::ALL`].
    pub fn new<I>(regions: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        let mut regions: Vec<_> = regions.into_iter().collect();
        regions.sort_unstable();
        regions.dedup();
        Self { regions }
    }

    /// Gets the regions to be removed, in removal order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Removes every non-overlapping match of each region, one region after another.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardup::normalize::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// let raw = b"<html><head><title>X</title></head><body>Y</body></html>";
    /// assert_eq!(normalizer.normalize(raw), b"<html><body>Y</body></html>".to_vec());
    /// ```
    pub fn normalize(&self, raw: &[u8]) -> Vec<u8> {
        let mut text = raw.to_vec();
        for &region in &self.regions {
            let re = region.pattern();
            if !re.is_match(&text) {
                continue;
            }
            let stripped = re.replace_all(&text, &b""[..]).into_owned();
            log::trace!(
                "Removed {:?} regions: {} -> {} bytes",
                region,
                text.len(),
                stripped.len()
            );
            text = stripped;
        }
        text
    }
}

/// Removes all regions of [`Region::ALL`] from raw markup.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    Normalizer::default().normalize(raw)
}
