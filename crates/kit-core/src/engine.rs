//! Install engine
//!
//! Runs a resolved [`InstallRequest`]:
//!
//! 1. resolve every requested kit (nothing is written if one is unknown)
//! 2. pre-flight the destination
//! 3. apply the [`ConflictPolicy`] if an installation exists
//! 4. install each kit in request order, stopping at the first failure

use crate::backup::backup_existing;
use crate::{ConflictPolicy, Error, InstallOutcome, InstallRequest, KitCatalog, Preflight, Result};
use kit_fs::NormalizedPath;
use kit_meta::Scope;
use kit_tools::{InstallContext, installer_for};

pub struct InstallEngine<'a> {
    catalog: &'a KitCatalog,
    home: Option<NormalizedPath>,
}

impl<'a> InstallEngine<'a> {
    pub fn new(catalog: &'a KitCatalog) -> Self {
        Self { catalog, home: None }
    }

    /// Use `home` as the global scope base instead of the user's home directory.
    pub fn with_home(mut self, home: NormalizedPath) -> Self {
        self.home = Some(home);
        self
    }

    fn home(&self) -> Result<NormalizedPath> {
        match &self.home {
            Some(home) => Ok(home.clone()),
            None => Ok(kit_meta::home_dir()?),
        }
    }

    /// Base directory of `request`. The home directory is only looked up
    /// for global installs.
    fn base(&self, request: &InstallRequest) -> Result<NormalizedPath> {
        resolve_base(request, || self.home())
    }

    /// Inspect the destination of `request` without writing anything.
    pub fn preflight(&self, request: &InstallRequest) -> Result<Preflight> {
        let base = self.base(request)?;
        Ok(Preflight::check(&request.tool, request.scope, &base))
    }

    /// Run `request`, applying `policy` if an installation already exists.
    pub fn run(&self, request: &InstallRequest, policy: ConflictPolicy) -> Result<InstallOutcome> {
        if request.kits.is_empty() {
            return Err(Error::NoKitsRequested);
        }
        let kits = self.catalog.resolve(&request.kits)?;

        let base = self.base(request)?;
        let preflight = Preflight::check(&request.tool, request.scope, &base);

        if preflight.existing {
            match policy {
                ConflictPolicy::Cancel => {
                    tracing::info!("Install cancelled; {} exists", preflight.target_root);
                    return Ok(InstallOutcome::Cancelled);
                }
                ConflictPolicy::Skip => {
                    tracing::info!("Keeping existing installation at {}", preflight.target_root);
                    return Ok(InstallOutcome::Skipped);
                }
                ConflictPolicy::Replace => {
                    backup_existing(&preflight.target_root)?;
                    if preflight.rules_outside_root() {
                        backup_existing(&preflight.rules_path)?;
                    }
                }
                ConflictPolicy::Merge => {
                    tracing::debug!("Merging into {}", preflight.target_root);
                }
            }
        }

        let ctx = InstallContext::new(&request.tool, request.scope, &base)
            .with_common_dir(self.catalog.common_dir().cloned());
        let installer = installer_for(&request.tool);

        let mut results = Vec::with_capacity(kits.len());
        for kit in &kits {
            results.push(installer.install(kit, &ctx)?);
        }

        tracing::info!(
            "Installed {} kit(s) for {} into {}",
            results.len(),
            request.tool.name,
            preflight.target_root
        );
        Ok(InstallOutcome::Installed(results))
    }
}

fn resolve_base(
    request: &InstallRequest,
    home: impl FnOnce() -> Result<NormalizedPath>,
) -> Result<NormalizedPath> {
    match request.scope {
        Scope::Workspace => Ok(request.target_path.clone()),
        Scope::Global => home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_tools::ToolRegistry;

    fn request(scope: Scope) -> InstallRequest {
        let registry = ToolRegistry::with_builtins();
        let tool = registry.tool("claude").cloned().unwrap();
        InstallRequest::new(tool, scope, NormalizedPath::new("/work/project"))
    }

    fn no_home() -> Result<NormalizedPath> {
        Err(kit_meta::Error::HomeDirNotFound.into())
    }

    #[test]
    fn test_workspace_base_ignores_home() {
        let base = resolve_base(&request(Scope::Workspace), no_home).unwrap();
        assert_eq!(base.as_str(), "/work/project");
    }

    #[test]
    fn test_global_base_needs_home() {
        let err = resolve_base(&request(Scope::Global), no_home).unwrap_err();
        assert!(matches!(err, Error::Meta(kit_meta::Error::HomeDirNotFound)));

        let base = resolve_base(&request(Scope::Global), || Ok(NormalizedPath::new("/home/dev"))).unwrap();
        assert_eq!(base.as_str(), "/home/dev");
    }
}
