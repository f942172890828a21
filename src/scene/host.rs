//! The render-host seam.

use crate::error::WidgetResult;
use crate::scene::VisualNode;
use crate::types::Size;

/// Host-provided rendering surface.
///
/// Implementations install a constructed visual tree as the active one and
/// report the surface dimensions widgets bound their movement against. A
/// rejected commit must surface as
/// [`WidgetError::RenderCommitFailure`](crate::WidgetError::RenderCommitFailure);
/// callers treat it as fatal to the committing component and never retry.
pub trait RenderHost {
    /// Current surface dimensions in surface coordinates.
    fn surface_size(&self) -> Size;

    /// Install `root` as the active visual tree for this component.
    fn commit(&mut self, root: VisualNode) -> WidgetResult<()>;
}
