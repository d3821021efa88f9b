//! Word features of normalized text.
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// A word token, i.e., a maximal run of alphanumeric or underscore characters.
///
/// Every occurrence of a token is a separate feature of weight 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Feature<'a>(Cow<'a, [u8]>);

impl<'a> Feature<'a> {
    /// Gets the bytes of the token.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Detaches the token from its source text.
    pub fn into_owned(self) -> Feature<'static> {
        Feature(Cow::Owned(self.0.into_owned()))
    }
}

impl AsRef<[u8]> for Feature<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for Feature<'a> {
    fn from(token: &'a [u8]) -> Self {
        Self(Cow::Borrowed(token))
    }
}

impl<'a> From<&'a str> for Feature<'a> {
    fn from(token: &'a str) -> Self {
        Self(Cow::Borrowed(token.as_bytes()))
    }
}

/// Configuration of feature extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureConfig {
    lowercase: bool,
}

impl FeatureConfig {
    /// Creates a configuration.
    ///
    /// # Arguments
    ///
    /// * `lowercase` - Folds tokens to lowercase. If `false`, case is preserved and
    ///                 tokens differing only in case are different features.
    pub const fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// Does it fold tokens to lowercase?
    pub const fn lowercase(&self) -> bool {
        self.lowercase
    }
}

/// Splits text into word features.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Creates an instance.
    pub const fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    pub const fn config(&self) -> FeatureConfig {
        self.config
    }

    /// Extracts features in document order into `feature`, which is cleared first.
    /// Non-word characters and invalid UTF-8 bytes are separators.
    pub fn extract<'a>(&self, text: &'a [u8], feature: &mut Vec<Feature<'a>>) {
        feature.clear();
        for m in WORD_RE.find_iter(text) {
            let token = m.as_bytes();
            feature.push(if self.config.lowercase {
                Feature(Cow::Owned(to_lowercase(token)))
            } else {
                Feature(Cow::Borrowed(token))
            });
        }
    }
}

fn to_lowercase(token: &[u8]) -> Vec<u8> {
    match std::str::from_utf8(token) {
        Ok(s) => s.to_lowercase().into_bytes(),
        Err(_) => token.to_ascii_lowercase(),
    }
}

/// Extracts case-preserving word features.
///
/// # Examples
///
/// ```
/// use neardup::feature::{extract_features, Feature};
///
/// let features = extract_features(b"<p>Hello, world_1!</p>");
/// assert_eq!(
///     features,
///     vec![Feature::from("p"), Feature::from("Hello"), Feature::from("world_1"), Feature::from("p")]
/// );
/// ```
pub fn extract_features(text: &[u8]) -> Vec<Feature<'_>> {
    let mut feature = vec![];
    FeatureExtractor::default().extract(text, &mut feature);
    feature
}
