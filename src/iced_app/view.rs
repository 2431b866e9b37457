//! App::view() plus UI building helpers.

use iced::widget::{button, canvas, column, container, row, space, text, Container};
use iced::{Element, Length};

use super::app::App;
use super::styles::{canvas_container_style, palette, status_bar_style};
use super::Message;

impl App {
    fn build_title_bar(&self) -> Element<'_, Message> {
        let mouse_str = match self.mouse_position {
            Some(pos) => format!("  mouse:({:.0},{:.0})", pos.x, pos.y),
            None => String::new(),
        };
        let title_text = format!(
            "{} bubble(s) at density {:.2}{}",
            self.bubbles.len(),
            self.config.density,
            mouse_str
        );
        text(title_text).size(16).color(palette::TEXT_PRIMARY).into()
    }

    fn build_canvas_area(&self) -> Container<'_, Message> {
        let canvas = canvas(self).width(Length::Fill).height(Length::Fill);
        container(canvas)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(canvas_container_style(self.background))
    }

    fn build_status_bar(&self) -> Container<'_, Message> {
        let reload = button(text("Reload").size(12))
            .on_press_maybe(self.source.as_ref().map(|_| Message::Reload))
            .padding([2, 8]);
        let status = text(&self.status).size(12).color(palette::TEXT_SECONDARY);
        container(row![status, space::horizontal(), reload].spacing(8))
            .width(Length::Fill)
            .padding(4)
            .style(status_bar_style)
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![self.build_title_bar(), self.build_canvas_area(), self.build_status_bar()]
            .spacing(5)
            .padding(7)
            .into()
    }
}
