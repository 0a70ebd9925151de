/// Registry constants
pub mod registry {
    /// GitHub Container Registry host
    pub const GHCR: &str = "ghcr.io";
}

/// Container image tag constants
pub mod tag {
    /// Default container image tag
    pub const DEFAULT: &str = "latest";
}

/// Compose manifest constants
pub mod compose {
    /// Manifest path, relative to the working directory
    pub const DEFAULT_FILE: &str = "docker-compose.yml";

    /// Root key holding the service definitions
    pub const SERVICES_KEY: &str = "services";

    /// Service key removed from rewritten services
    pub const BUILD_KEY: &str = "build";

    /// Service key set on rewritten services
    pub const IMAGE_KEY: &str = "image";

    /// Services that get pointed at published images, in rewrite order
    pub const PUBLISHED_SERVICES: [&str; 2] = ["server", "client"];
}

/// Environment variables provided by GitHub Actions
pub mod env {
    /// Repository owner, e.g. `MyOrg`
    pub const REPOSITORY_OWNER: &str = "GITHUB_REPOSITORY_OWNER";

    /// Full repository identity, e.g. `MyOrg/MyRepo`
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
}
