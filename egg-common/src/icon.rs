use std::fmt;

/// Base URL of the remotely hosted icon assets
pub const ASSET_HOST: &str = "https://eggincassets.tcl.sh";

/// Size selector for an icon asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSize {
    /// Unscaled asset, rendered as `orig`
    Original,
    /// Pre-scaled square variant
    Px(u32),
    /// Any other variant token, interpolated verbatim
    Variant(String),
}

#[allow(clippy::derivable_impls)]
impl Default for IconSize {
    fn default() -> Self {
        IconSize::Original
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Original => f.write_str("orig"),
            IconSize::Px(px) => write!(f, "{px}"),
            IconSize::Variant(token) => f.write_str(token),
        }
    }
}

impl From<u32> for IconSize {
    fn from(px: u32) -> Self {
        IconSize::Px(px)
    }
}

impl From<&str> for IconSize {
    fn from(token: &str) -> Self {
        IconSize::Variant(token.to_string())
    }
}

impl From<String> for IconSize {
    fn from(token: String) -> Self {
        IconSize::Variant(token)
    }
}

/// Where icon assets are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHost {
    base: String,
}

impl Default for AssetHost {
    fn default() -> Self {
        Self::new(ASSET_HOST)
    }
}

impl AssetHost {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Neither `relpath` nor `size` is validated.
    pub fn icon_url(&self, relpath: &str, size: impl Into<IconSize>) -> String {
        format!("{}/{}/{}", self.base, size.into(), relpath)
    }
}

/// URL of an icon on the default asset host.
pub fn icon_url(relpath: &str, size: impl Into<IconSize>) -> String {
    AssetHost::default().icon_url(relpath, size)
}

pub fn icon_url_orig(relpath: &str) -> String {
    icon_url(relpath, IconSize::Original)
}
