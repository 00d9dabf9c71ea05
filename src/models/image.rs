// Container image reference model (registry / repository / tag)

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parsed image reference. An empty `registry` means the default public registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub registry: String,
    /// Always `namespace/name`; single-segment names get the `library/` namespace.
    pub repository: String,
    pub tag: String,
}

impl ImageReference {
    pub fn is_default_registry(&self) -> bool {
        self.registry.is_empty()
    }
}

/// Canonical form `[registry/]repository:tag`.
impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_default_registry() {
            write!(f, "{}/", self.registry)?;
        }
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

impl FromStr for ImageReference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::image_ref::parse_image(s))
    }
}

impl From<ImageReference> for (String, String, String) {
    fn from(r: ImageReference) -> Self {
        (r.registry, r.repository, r.tag)
    }
}
