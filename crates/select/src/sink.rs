use cubepick_common::Color;

/// What the UI should show for the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionDisplay {
    /// An object is selected. `emphasis` is the color to draw its name in.
    Selected { name: String, emphasis: Color },
    /// Nothing is selected. Displays as `None`.
    #[default]
    Empty,
}

impl SelectionDisplay {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Selected { name, .. } => Some(name),
            Self::Empty => None,
        }
    }

    pub fn emphasis(&self) -> Option<Color> {
        match self {
            Self::Selected { emphasis, .. } => Some(*emphasis),
            Self::Empty => None,
        }
    }
}

impl std::fmt::Display for SelectionDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selected { name, .. } => f.write_str(name),
            Self::Empty => f.write_str("None"),
        }
    }
}

/// The UI collaborator that is told about selection changes.
pub trait SelectionSink {
    fn show(&mut self, display: &SelectionDisplay);
}

/// Keeps only the latest display. Backs the on-screen selection label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionLabel {
    current: SelectionDisplay,
}

impl SelectionLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &SelectionDisplay {
        &self.current
    }
}

impl SelectionSink for SelectionLabel {
    fn show(&mut self, display: &SelectionDisplay) {
        self.current = display.clone();
    }
}

/// Records every display in order.
impl SelectionSink for Vec<SelectionDisplay> {
    fn show(&mut self, display: &SelectionDisplay) {
        self.push(display.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_displays_as_none() {
        assert_eq!(SelectionDisplay::Empty.to_string(), "None");
        assert_eq!(SelectionDisplay::default(), SelectionDisplay::Empty);
        assert!(SelectionDisplay::Empty.emphasis().is_none());
    }

    #[test]
    fn selected_displays_name() {
        let d = SelectionDisplay::Selected {
            name: "Cube-1-1".into(),
            emphasis: Color::from_hex(0xffd700),
        };
        assert_eq!(d.to_string(), "Cube-1-1");
        assert_eq!(d.name(), Some("Cube-1-1"));
        assert_eq!(d.emphasis().map(Color::to_hex), Some(0xffd700));
    }

    #[test]
    fn label_keeps_latest() {
        let mut label = SelectionLabel::new();
        label.show(&SelectionDisplay::Selected {
            name: "A".into(),
            emphasis: Color::WHITE,
        });
        label.show(&SelectionDisplay::Empty);
        assert_eq!(label.current(), &SelectionDisplay::Empty);
    }

    #[test]
    fn vec_records_all() {
        let mut log: Vec<SelectionDisplay> = Vec::new();
        log.show(&SelectionDisplay::Empty);
        log.show(&SelectionDisplay::Empty);
        assert_eq!(log.len(), 2);
    }
}
