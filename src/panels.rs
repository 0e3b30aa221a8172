//! Bounded selection of active panels for a toggleable split layout.

/// Which panels of a split layout are showing.
///
/// The active set is kept in panel declaration order. Any mutation that would
/// leave fewer than `minimum` or more than `maximum` active panels is rejected
/// and the previous selection is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSelection {
    panel_ids: Vec<String>,
    active: Vec<String>,
    minimum: usize,
    maximum: usize,
}

impl PanelSelection {
    /// `maximum` defaults to the number of panels. The initial panel is
    /// activated when it names a known panel; bounds only apply to later
    /// changes.
    pub fn new(panel_ids: Vec<String>, initial: Option<&str>, minimum: usize, maximum: Option<usize>) -> Self {
        let maximum = maximum.unwrap_or(panel_ids.len());
        let active = initial
            .filter(|id| panel_ids.iter().any(|p| p == id))
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();
        Self {
            panel_ids,
            active,
            minimum,
            maximum,
        }
    }

    pub fn panel_ids(&self) -> &[String] {
        &self.panel_ids
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|a| a == id)
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }

    /// Flip one panel on or off. Returns false when the change was rejected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let mut candidate = self.active.clone();
        if let Some(pos) = candidate.iter().position(|a| a == id) {
            candidate.remove(pos);
        } else {
            candidate.push(id.to_string());
        }
        self.set_active(candidate)
    }

    /// Replace the whole active set. Returns false when the candidate names an
    /// unknown panel or violates the bounds.
    pub fn set_active(&mut self, candidate: Vec<String>) -> bool {
        if candidate.iter().any(|id| !self.panel_ids.contains(id)) {
            log::debug!("Panels: rejecting unknown panel in {:?}", candidate);
            return false;
        }

        // Rebuild in declaration order, which also drops duplicates
        let ordered: Vec<String> = self
            .panel_ids
            .iter()
            .filter(|id| candidate.contains(id))
            .cloned()
            .collect();

        if ordered.len() > self.maximum || ordered.len() < self.minimum {
            log::debug!(
                "Panels: rejecting {} active panels (bounds {}..={})",
                ordered.len(),
                self.minimum,
                self.maximum
            );
            return false;
        }

        self.active = ordered;
        true
    }
}
