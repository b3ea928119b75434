//! Outside-interaction coordinator for floating header regions.
//!
//! Regions are identified by a key type `K` (the app uses
//! [`HeaderElement`](crate::HeaderElement)). A pointer-down is described by
//! the path from the event target up through its ancestors; a region stays
//! open when that path passes through the region itself or one of its
//! exempted triggers.

/// Whether a region is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }
}

/// A floating panel that closes on interaction outside its bounds.
#[derive(Debug, Clone)]
pub struct DismissibleRegion<K> {
    pub id: K,
    pub visibility: Visibility,
    /// Elements outside the region whose pointer-downs must not dismiss it,
    /// typically the button that toggles it.
    pub exemptions: Vec<K>,
}

impl<K: Copy + Eq> DismissibleRegion<K> {
    pub fn new(id: K) -> Self {
        Self {
            id,
            visibility: Visibility::Hidden,
            exemptions: Vec::new(),
        }
    }

    #[must_use]
    pub fn exempt(mut self, element: K) -> Self {
        if !self.exemptions.contains(&element) {
            self.exemptions.push(element);
        }
        self
    }

    /// Whether a pointer-down along `path` counts as inside this region.
    pub fn contains(&self, path: &[K]) -> bool {
        path.iter()
            .any(|el| *el == self.id || self.exemptions.contains(el))
    }
}

/// Owns every dismissible region and routes pointer-downs to them.
#[derive(Debug, Clone)]
pub struct DismissCoordinator<K> {
    regions: Vec<DismissibleRegion<K>>,
}

impl<K: Copy + Eq> DismissCoordinator<K> {
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Register a region, replacing any earlier registration with the same id.
    pub fn register(&mut self, region: DismissibleRegion<K>) {
        if let Some(existing) = self.region_mut(region.id) {
            *existing = region;
        } else {
            self.regions.push(region);
        }
    }

    pub fn show(&mut self, id: K) {
        self.set(id, Visibility::Visible);
    }

    pub fn hide(&mut self, id: K) {
        self.set(id, Visibility::Hidden);
    }

    /// Flip a region and return its new visibility.
    pub fn toggle(&mut self, id: K) -> Visibility {
        self.region_mut(id).map_or(Visibility::Hidden, |region| {
            region.visibility = region.visibility.toggled();
            region.visibility
        })
    }

    pub fn is_visible(&self, id: K) -> bool {
        self.regions
            .iter()
            .find(|r| r.id == id)
            .is_some_and(|r| r.visibility.is_visible())
    }

    /// Handle a pointer-down whose target has ancestor path `path`.
    ///
    /// Hides every visible region the path lies outside of and returns
    /// their ids in registration order.
    pub fn pointer_down(&mut self, path: &[K]) -> Vec<K> {
        let mut dismissed = Vec::new();
        for region in &mut self.regions {
            if region.visibility.is_visible() && !region.contains(path) {
                region.visibility = Visibility::Hidden;
                dismissed.push(region.id);
            }
        }
        dismissed
    }

    fn set(&mut self, id: K, visibility: Visibility) {
        if let Some(region) = self.region_mut(id) {
            region.visibility = visibility;
        }
    }

    fn region_mut(&mut self, id: K) -> Option<&mut DismissibleRegion<K>> {
        self.regions.iter_mut().find(|r| r.id == id)
    }
}

impl<K: Copy + Eq> Default for DismissCoordinator<K> {
    fn default() -> Self {
        Self::new()
    }
}
