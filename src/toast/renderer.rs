use egui::{Align2, Button, Context, CornerRadius, Id, Margin, Order, RichText, Stroke, Ui, Vec2};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{id::ToastId, modal::CLOSE_GLYPH};

use super::variant::ToastStyle;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl ToastPosition {
    pub fn align(&self) -> Align2 {
        match self {
            ToastPosition::TopLeft => Align2::LEFT_TOP,
            ToastPosition::TopRight => Align2::RIGHT_TOP,
            ToastPosition::BottomLeft => Align2::LEFT_BOTTOM,
            ToastPosition::BottomRight => Align2::RIGHT_BOTTOM,
        }
    }

    /// Offset from the anchored corner towards the center of the screen.
    pub fn offset(&self, margin: f32) -> Vec2 {
        let align = self.align();
        let x = match align.x() {
            egui::Align::Max => -margin,
            _ => margin,
        };
        let y = match align.y() {
            egui::Align::Max => -margin,
            _ => margin,
        };
        Vec2::new(x, y)
    }
}

/// The building blocks a toast is composed of.
///
/// [`super::ToastProvider`] only talks to this trait, so the way toasts look can
/// be replaced without touching code that pushes them.
pub trait ToastRenderer {
    /// Region toasts are stacked in.
    fn viewport(&self, ctx: &Context, position: ToastPosition, add_contents: impl FnOnce(&mut Ui));

    /// Container of a single toast.
    fn root<R>(
        &self,
        ui: &mut Ui,
        id: ToastId,
        style: &ToastStyle,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> R;

    fn title(&self, ui: &mut Ui, style: &ToastStyle, text: &str);

    fn description(&self, ui: &mut Ui, style: &ToastStyle, text: &str);

    /// Returns true when the dismiss control was clicked.
    fn close(&self, ui: &mut Ui, style: &ToastStyle) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EguiToastRenderer {
    pub margin: f32,
    pub width: f32,
}

impl Default for EguiToastRenderer {
    fn default() -> Self {
        Self {
            margin: 16.0,
            width: 300.0,
        }
    }
}

impl ToastRenderer for EguiToastRenderer {
    fn viewport(&self, ctx: &Context, position: ToastPosition, add_contents: impl FnOnce(&mut Ui)) {
        egui::Area::new(Id::new("toast_viewport"))
            .anchor(position.align(), position.offset(self.margin))
            .order(Order::Tooltip)
            .interactable(true)
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                ui.vertical(add_contents);
            });
    }

    fn root<R>(
        &self,
        ui: &mut Ui,
        id: ToastId,
        style: &ToastStyle,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> R {
        ui.push_id(("toast", id), |ui| {
            egui::Frame::new()
                .fill(style.fill)
                .stroke(Stroke::new(1.0, style.stroke))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(self.width);
                    add_contents(ui)
                })
                .inner
        })
        .inner
    }

    fn title(&self, ui: &mut Ui, style: &ToastStyle, text: &str) {
        ui.label(RichText::new(text).strong().color(style.title));
    }

    fn description(&self, ui: &mut Ui, style: &ToastStyle, text: &str) {
        ui.label(RichText::new(text).small().color(style.body));
    }

    fn close(&self, ui: &mut Ui, style: &ToastStyle) -> bool {
        ui.add(Button::new(RichText::new(CLOSE_GLYPH).color(style.body)).frame(false))
            .on_hover_text("Dismiss")
            .clicked()
    }
}
