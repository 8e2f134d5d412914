//! Exclusive "which skill popup is open" selection for the About section.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Pointer,
    Touch,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupSelection {
    mode: InputMode,
    open: Option<String>,
}

impl PopupSelection {
    pub fn new(mode: InputMode) -> Self {
        Self { mode, open: None }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Input mode is probed once after mount; switching closes any popup.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            self.mode = mode;
            self.open = None;
        }
    }

    pub fn open(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open.as_deref() == Some(name)
    }

    pub fn pointer_enter(&mut self, name: &str) {
        if self.mode == InputMode::Pointer {
            self.open = Some(name.to_string());
        }
    }

    pub fn pointer_leave(&mut self, name: &str) {
        if self.mode == InputMode::Pointer && self.is_open(name) {
            self.open = None;
        }
    }

    pub fn tap(&mut self, name: &str) {
        if self.mode != InputMode::Touch {
            return;
        }
        if self.is_open(name) {
            self.open = None;
        } else {
            self.open = Some(name.to_string());
        }
    }

    pub fn dismiss(&mut self) {
        self.open = None;
    }
}

/// Label shown under the proficiency percentage.
pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        90.. => "Expert Level",
        80..=89 => "Advanced",
        _ => "Intermediate",
    }
}
