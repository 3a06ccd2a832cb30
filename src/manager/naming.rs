use uuid::Uuid;

/// Prefix shared by every container this service creates. The list
/// operation uses it to tell managed containers apart from ones created
/// by other means.
pub const NAME_PREFIX: &str = "container";

/// Build a unique container name for an already-resolved image reference.
///
/// Colons are not legal in container names, so the tag separator becomes a
/// hyphen. The random UUID suffix keeps concurrent creations from
/// colliding without any coordination.
pub fn generate_name(resolved_reference: &str) -> String {
    let sanitized = resolved_reference.replace(':', "-");
    format!("{NAME_PREFIX}-{sanitized}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_carries_prefix_and_no_colon() {
        let name = generate_name("alpine:latest");
        assert!(name.starts_with("container-alpine-latest-"));
        assert!(!name.contains(':'));
    }

    #[test]
    fn successive_names_differ() {
        assert_ne!(generate_name("alpine:latest"), generate_name("alpine:latest"));
    }
}
