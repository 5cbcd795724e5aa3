//! Trait seam between the projection logic and the region data.
//!
//! `supervisor-core` never names a concrete region table. The mock crate
//! supplies one through `RegionDirectory`, and tests supply their own.

use supervisor_contracts::region::Region;

/// A read-only view of the administrative region hierarchy.
///
/// Implementations must hold at least one region; the first entry is the
/// root and is what unknown names resolve to.
pub trait RegionDirectory: Send + Sync {
    /// Every listed region, root first.
    fn regions(&self) -> &[Region];

    /// The top-level region.
    fn root(&self) -> &Region;

    /// Look up a listed region by display name.
    fn find(&self, name: &str) -> Option<&Region> {
        self.regions().iter().find(|r| r.name == name)
    }

    /// The listed region whose children include `name`.
    fn parent_of(&self, name: &str) -> Option<&Region> {
        self.regions().iter().find(|r| r.has_child(name))
    }
}
