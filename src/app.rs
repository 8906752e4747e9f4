use winit::event::WindowEvent;

/// Lifecycle of the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Tracks the running/closed transition driven by window events.
///
/// The loop starts running and closes exactly once, when the windowing layer
/// reports a close request. Events arriving after that leave it closed.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Feeds one window event through the state machine. Returns true when
    /// the event ended the loop.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.state = LoopState::Closed;
                true
            }
            _ => false,
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_starts_running() {
        assert_eq!(FrameLoop::new().state(), LoopState::Running);
    }

    #[test]
    fn test_close_request_closes_the_loop() {
        let mut frame_loop = FrameLoop::new();
        assert!(frame_loop.handle_window_event(&WindowEvent::CloseRequested));
        assert_eq!(frame_loop.state(), LoopState::Closed);
    }

    #[test]
    fn test_other_events_keep_it_running() {
        let mut frame_loop = FrameLoop::new();
        assert!(!frame_loop.handle_window_event(&WindowEvent::Focused(true)));
        assert!(!frame_loop.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))));
        assert!(frame_loop.is_running());
    }

    #[test]
    fn test_stays_closed_after_further_events() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.handle_window_event(&WindowEvent::CloseRequested);
        frame_loop.handle_window_event(&WindowEvent::Focused(false));
        assert_eq!(frame_loop.state(), LoopState::Closed);
    }
}
