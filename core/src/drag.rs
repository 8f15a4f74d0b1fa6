use crate::config::DRAG_ACTIVATION_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pointer is down on a tile but has not travelled far enough yet.
    Pending,
    Active,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropOutcome {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug)]
struct Gesture {
    source: String,
    pointer_id: i32,
    start_x: f32,
    start_y: f32,
    cursor_x: f32,
    cursor_y: f32,
    active: bool,
    over: Option<String>,
}

/// One pointer-driven drag at a time. The session never reorders anything
/// itself; a completed drop is handed back as a [`DropOutcome`].
#[derive(Clone, Debug)]
pub struct DragSession {
    activation_px: f32,
    gesture: Option<Gesture>,
}

impl DragSession {
    pub fn new(activation_px: f32) -> Self {
        Self {
            activation_px: activation_px.max(0.0),
            gesture: None,
        }
    }

    pub fn phase(&self) -> DragPhase {
        match &self.gesture {
            None => DragPhase::Idle,
            Some(gesture) if gesture.active => DragPhase::Active,
            Some(_) => DragPhase::Pending,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == DragPhase::Active
    }

    pub fn source(&self) -> Option<&str> {
        self.gesture.as_ref().map(|gesture| gesture.source.as_str())
    }

    pub fn over(&self) -> Option<&str> {
        self.gesture.as_ref().and_then(|gesture| gesture.over.as_deref())
    }

    pub fn pointer_id(&self) -> Option<i32> {
        self.gesture.as_ref().map(|gesture| gesture.pointer_id)
    }

    /// Offset of the pointer from where the press began, zero until active.
    pub fn offset(&self) -> (f32, f32) {
        match &self.gesture {
            Some(gesture) if gesture.active => (
                gesture.cursor_x - gesture.start_x,
                gesture.cursor_y - gesture.start_y,
            ),
            _ => (0.0, 0.0),
        }
    }

    /// Starts a gesture on `source`, replacing any unfinished one.
    pub fn press(&mut self, source: &str, pointer_id: i32, x: f32, y: f32) {
        self.gesture = Some(Gesture {
            source: source.to_string(),
            pointer_id,
            start_x: x,
            start_y: y,
            cursor_x: x,
            cursor_y: y,
            active: false,
            over: None,
        });
    }

    /// Returns true when the visible state changed (activation or offset).
    pub fn motion(&mut self, pointer_id: i32, x: f32, y: f32) -> bool {
        let activation_px = self.activation_px;
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        if gesture.pointer_id != pointer_id {
            return false;
        }
        gesture.cursor_x = x;
        gesture.cursor_y = y;
        if !gesture.active {
            let dx = x - gesture.start_x;
            let dy = y - gesture.start_y;
            if (dx * dx + dy * dy).sqrt() < activation_px {
                return false;
            }
            gesture.active = true;
        }
        true
    }

    pub fn hover(&mut self, target: Option<&str>) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.over = target.map(str::to_string);
        }
    }

    pub fn release(&mut self, pointer_id: i32) -> Option<DropOutcome> {
        if self.pointer_id() != Some(pointer_id) {
            return None;
        }
        let gesture = self.gesture.take()?;
        if !gesture.active {
            return None;
        }
        let target = gesture.over?;
        if target == gesture.source {
            return None;
        }
        Some(DropOutcome {
            source: gesture.source,
            target,
        })
    }

    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DRAG_ACTIVATION_PX)
    }
}
