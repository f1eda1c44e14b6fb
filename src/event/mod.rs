mod bus;
mod events;

pub use bus::EventBus;
pub use events::ModelEvent;

pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &ModelEvent);
}

/// Asks egui for a new frame whenever the model changes
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &ModelEvent) {
        self.ctx.request_repaint();
    }
}
