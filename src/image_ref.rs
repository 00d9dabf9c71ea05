// Docker-style image reference parsing: [registry/]repository[:tag]

use crate::models::ImageReference;

pub const DEFAULT_TAG: &str = "latest";
/// Namespace for single-segment names on the default registry (official images).
pub const DEFAULT_NAMESPACE: &str = "library";

/// Bare hostnames accepted as a registry even without a dot or port.
const KNOWN_HOSTS: &[&str] = &["localhost"];

/// Splits an image reference into registry, repository and tag. Never fails.
///
/// The tag is only looked for after the last `/`, so a registry port
/// (`host:5000/app`) is never mistaken for a tag. The first path segment is a
/// registry when it contains `.` or `:` or is a known bare hostname. Names on
/// the default registry without a namespace get `library/`.
pub fn parse_image(reference: &str) -> ImageReference {
    let name_start = reference.rfind('/').map_or(0, |i| i + 1);
    let (path, tag) = match reference[name_start..].find(':') {
        Some(i) => {
            let colon = name_start + i;
            (&reference[..colon], &reference[colon + 1..])
        }
        None => (reference, DEFAULT_TAG),
    };

    let (registry, repository) = match path.split_once('/') {
        Some((first, rest)) if is_registry_host(first) => (first, rest),
        _ => ("", path),
    };

    let repository = if registry.is_empty() && !repository.contains('/') {
        format!("{DEFAULT_NAMESPACE}/{repository}")
    } else {
        repository.to_string()
    };

    ImageReference {
        registry: registry.to_string(),
        repository,
        tag: tag.to_string(),
    }
}

fn is_registry_host(segment: &str) -> bool {
    segment.contains(['.', ':']) || KNOWN_HOSTS.contains(&segment)
}
