use super::{display_order, find, first, IntegrationDescriptor};

/// The shell's "currently selected integration". Always names a catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    selected: &'static IntegrationDescriptor,
}

impl Default for Selection {
    fn default() -> Self {
        Self { selected: first() }
    }
}

impl Selection {
    /// Start at `initial`, or the first entry if it is unknown.
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            selected: initial.and_then(find).unwrap_or_else(first),
        }
    }

    pub fn selected(&self) -> &'static IntegrationDescriptor {
        self.selected
    }

    pub fn selected_id(&self) -> &'static str {
        self.selected.id
    }

    /// Select `id`, falling back to the first entry for unknown ids.
    ///
    /// Returns `true` when the selection actually changed.
    pub fn select(&mut self, id: &str) -> bool {
        let target = find(id).unwrap_or_else(|| {
            tracing::debug!("Unknown integration id {:?}, using first entry", id);
            first()
        });
        self.set(target)
    }

    /// Position of the selection in sidebar order.
    pub fn display_index(&self) -> usize {
        display_order()
            .iter()
            .position(|d| d.id == self.selected.id)
            .unwrap_or(0)
    }

    /// Select by sidebar position. Out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match display_order().get(index) {
            Some(target) => self.set(target),
            None => false,
        }
    }

    /// Move through the sidebar by `delta`, clamped at both ends.
    pub fn step(&mut self, delta: i32) -> bool {
        let order = display_order();
        let max = order.len().saturating_sub(1) as i64;
        let next = (self.display_index() as i64 + i64::from(delta)).clamp(0, max);
        self.set(order[next as usize])
    }

    fn set(&mut self, target: &'static IntegrationDescriptor) -> bool {
        if target.id == self.selected.id {
            return false;
        }
        self.selected = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Selection::default().selected_id(), "cat");
        assert_eq!(Selection::new(Some("nope")).selected_id(), "cat");
        assert_eq!(Selection::new(Some("ip")).selected_id(), "ip");
    }

    #[test]
    fn test_select_reports_change() {
        let mut selection = Selection::default();
        assert!(selection.select("joke"));
        assert!(!selection.select("joke"));
        assert_eq!(selection.selected_id(), "joke");
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let mut selection = Selection::new(Some("zip"));
        assert!(selection.select("does-not-exist"));
        assert_eq!(selection.selected_id(), "cat");

        // Already on the first entry: nothing changes
        assert!(!selection.select("does-not-exist"));
    }

    #[test]
    fn test_step_follows_sidebar_order_and_clamps() {
        let mut selection = Selection::new(Some("agify"));
        assert!(!selection.step(-1));
        assert!(selection.step(1));
        assert_eq!(selection.selected_id(), "genderize");
        assert!(selection.step(100));
        assert_eq!(selection.selected_id(), "advice");
    }

    #[test]
    fn test_select_index() {
        let mut selection = Selection::default();
        assert!(selection.select_index(2));
        assert_eq!(selection.selected_id(), "ip");
        assert!(!selection.select_index(42));
        assert_eq!(selection.selected_id(), "ip");
    }
}
