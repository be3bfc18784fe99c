//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from endpoint and parameters.
///
/// The key is a SHA-256 hash of the endpoint, resource id (slug or product
/// id), and sorted parameters, so keys are stable regardless of parameter
/// order.
pub fn cache_key(endpoint: &str, resource: Option<&str>, params: &[(&str, &str)]) -> String {
    let mut hasher = Sha256::new();

    hasher.update(endpoint.as_bytes());
    hasher.update(b"|");

    if let Some(resource) = resource {
        hasher.update(resource.as_bytes());
    }
    hasher.update(b"|");

    // Sort params for a deterministic key
    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    for (k, v) in sorted_params {
        hasher.update(k.as_bytes());
        hasher.update(b"=");
        hasher.update(v.as_bytes());
        hasher.update(b"&");
    }

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_deterministic() {
        let key1 = cache_key("category", Some("drills"), &[("a", "1"), ("b", "2")]);
        let key2 = cache_key("category", Some("drills"), &[("b", "2"), ("a", "1")]);
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_key_different_endpoints() {
        let key1 = cache_key("category", Some("drills"), &[]);
        let key2 = cache_key("product_detail", Some("drills"), &[]);
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_different_resources() {
        let key1 = cache_key("category", Some("drills"), &[]);
        let key2 = cache_key("category", Some("saws"), &[]);
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_nested_slug() {
        let key1 = cache_key("category", Some("appliances/refrigerators"), &[]);
        let key2 = cache_key("category", Some("appliances/refrigerators"), &[]);
        assert_eq!(key1, key2);
    }
}
