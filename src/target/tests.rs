#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_image_references_are_lowercased() {
        let target = ImageTarget::from_repository("MyOrg", "MyOrg/MyRepo").unwrap();
        assert_eq!(target.owner(), "myorg");
        assert_eq!(target.name(), "myrepo");
        assert_eq!(
            target.image_for("server"),
            "ghcr.io/myorg/myrepo/server:latest"
        );
        assert_eq!(
            target.image_for("client"),
            "ghcr.io/myorg/myrepo/client:latest"
        );
    }

    #[test]
    fn test_name_is_second_segment() {
        let target = ImageTarget::from_repository("acme", "acme/Widgets/extra").unwrap();
        assert_eq!(target.name(), "widgets");
    }

    #[test]
    fn test_owner_comes_from_owner_value() {
        // The owner segment of the repository identity is ignored
        let target = ImageTarget::from_repository("Forked", "Upstream/App").unwrap();
        assert_eq!(target.image_for("server"), "ghcr.io/forked/app/server:latest");
    }

    #[test]
    fn test_registry_and_tag_overrides() {
        let target = ImageTarget::from_repository("acme", "acme/app")
            .unwrap()
            .with_registry("registry.example.com")
            .with_tag("v1.0.0");
        assert_eq!(
            target.image_for("client"),
            "registry.example.com/acme/app/client:v1.0.0"
        );
    }

    #[test]
    fn test_repository_without_separator() {
        assert_eq!(
            ImageTarget::from_repository("acme", "acme-app"),
            Err(TargetError::MalformedRepository("acme-app".to_string()))
        );
    }

    #[test]
    fn test_repository_with_empty_name() {
        assert_eq!(
            ImageTarget::from_repository("acme", "acme/"),
            Err(TargetError::EmptyName("acme/".to_string()))
        );
    }

    #[test]
    fn test_empty_owner() {
        assert_eq!(
            ImageTarget::from_repository("", "acme/app"),
            Err(TargetError::EmptyOwner)
        );
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let target = ImageTarget::from_repository(" Acme", "acme/App ").unwrap();
        assert_eq!(target.owner(), " acme");
        assert_eq!(target.name(), "app ");
    }
}
