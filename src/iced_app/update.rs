//! App::update() and message handlers.

use iced::Task;

use super::app::App;
use super::state::CanvasMessage;
use super::Message;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CanvasEvent(canvas_msg) => self.handle_canvas_event(canvas_msg),
            Message::Reload => self.reload(),
        }
        Task::none()
    }

    fn handle_canvas_event(&mut self, msg: CanvasMessage) {
        match msg {
            CanvasMessage::MouseMove(pos) => self.handle_mouse_move(pos),
            CanvasMessage::MouseDown(pos) => self.handle_mouse_down(pos),
            CanvasMessage::MouseUp(pos) => self.handle_mouse_up(pos),
            CanvasMessage::Cancel => self.handle_cancel(),
        }
    }
}
