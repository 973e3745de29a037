use serde::{Deserialize, Serialize};

/// Tools the frontend can hold over the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Point-by-point outline placement.
    Line,
    /// Pan the stage (held spacebar in the frontend).
    Hand,
}

impl Tool {
    pub fn from_key(key: &str) -> Option<Tool> {
        match key {
            "line" => Some(Tool::Line),
            "hand" => Some(Tool::Hand),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Hand => "hand",
        }
    }
}

/// `[previous, current]` tool pair. Keeping the previous tool lets the
/// frontend restore it when a momentary tool (hand) is released.
#[derive(Clone, Copy, Debug)]
pub struct ToolChain {
    previous: Option<Tool>,
    current: Tool,
}

impl ToolChain {
    pub fn new() -> Self {
        Self {
            previous: None,
            current: Tool::Line,
        }
    }

    /// Select a tool; the current one becomes the previous.
    pub fn select(&mut self, tool: Tool) {
        self.previous = Some(self.current);
        self.current = tool;
    }

    pub fn current(&self) -> Tool {
        self.current
    }

    pub fn previous(&self) -> Option<Tool> {
        self.previous
    }
}

impl Default for ToolChain {
    fn default() -> Self {
        Self::new()
    }
}
