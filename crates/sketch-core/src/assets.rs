//! Readiness bookkeeping for images and curves loaded by the front-end.

use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Curve,
}

/// Something a sketch needs fetched before it can draw everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRequest {
    pub name: &'static str,
    pub url: &'static str,
    pub kind: AssetKind,
}

impl AssetRequest {
    pub const fn image(name: &'static str, url: &'static str) -> Self {
        Self {
            name,
            url,
            kind: AssetKind::Image,
        }
    }

    pub const fn curve(name: &'static str, url: &'static str) -> Self {
        Self {
            name,
            url,
            kind: AssetKind::Curve,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssetState {
    Pending,
    Ready { size: Vec2 },
    Failed { reason: String },
}

#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    entries: FnvHashMap<String, AssetState>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) {
        self.entries
            .entry(name.to_owned())
            .or_insert(AssetState::Pending);
    }

    pub fn mark_ready(&mut self, name: &str, size: Vec2) {
        log::debug!("[assets] {} ready ({}x{})", name, size.x, size.y);
        self.entries
            .insert(name.to_owned(), AssetState::Ready { size });
    }

    pub fn mark_failed(&mut self, name: &str, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("[assets] {} failed: {}", name, reason);
        self.entries
            .insert(name.to_owned(), AssetState::Failed { reason });
    }

    pub fn state(&self, name: &str) -> Option<&AssetState> {
        self.entries.get(name)
    }

    #[inline]
    pub fn is_ready(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(AssetState::Ready { .. }))
    }

    pub fn all_ready(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.is_ready(n))
    }

    pub fn size_of(&self, name: &str) -> Option<Vec2> {
        match self.entries.get(name) {
            Some(AssetState::Ready { size }) => Some(*size),
            _ => None,
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, s)| matches!(s, AssetState::Pending))
            .map(|(n, _)| n.as_str())
    }
}
