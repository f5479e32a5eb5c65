use egui::{Align, Color32, Id, Key, Layout, Margin, Order, Rect, ScrollArea, Sense, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const CLOSE_GLYPH: &str = "✕";

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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ModalVariant {
    /// Plain centered panel at the normal window layer.
    #[default]
    Compact,
    /// Large panel above everything else, capped to the viewport.
    Spacious,
}

struct ModalLayout {
    order: Order,
    /// One step below `order`: above side panels, under the modal window.
    backdrop_order: Order,
    inner_margin: Margin,
    min_size: Vec2,
    max_fraction: Option<f32>,
    backdrop_alpha: u8,
}

impl ModalVariant {
    fn layout(&self) -> ModalLayout {
        match self {
            ModalVariant::Compact => ModalLayout {
                order: Order::Middle,
                backdrop_order: Order::PanelResizeLine,
                inner_margin: Margin::same(12),
                min_size: Vec2::new(320.0, 160.0),
                max_fraction: None,
                backdrop_alpha: 96,
            },
            ModalVariant::Spacious => ModalLayout {
                order: Order::Foreground,
                backdrop_order: Order::Middle,
                inner_margin: Margin::same(24),
                min_size: Vec2::new(400.0, 300.0),
                max_fraction: Some(0.9),
                backdrop_alpha: 160,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalResponse<R> {
    pub close_requested: bool,
    /// `None` when the modal was not open this frame.
    pub inner: Option<R>,
}

impl<R> ModalResponse<R> {
    fn hidden() -> Self {
        Self {
            close_requested: false,
            inner: None,
        }
    }
}

/// An overlay dialog drawn on top of the current viewport.
///
/// The modal owns no state. Whether it is open is decided by the caller every
/// frame, and a click on the close glyph (or Escape) is reported back
/// through [`ModalResponse::close_requested`] or the `on_close` callback of
/// [`Modal::show_with_close`].
///
/// # Example
/// ```ignore
/// Modal::new("crop_details")
///     .variant(ModalVariant::Spacious)
///     .title("Tomato")
///     .show_with_close(ui, is_open, || is_open = false, |ui| {
///         ui.label("Planted in April");
///     });
/// ```
pub struct Modal {
    id: Id,
    title: Option<String>,
    variant: ModalVariant,
}

impl Modal {
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_salt),
            title: None,
            variant: ModalVariant::default(),
        }
    }

    pub fn variant(mut self, variant: ModalVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Same as [`Modal::show`], but runs `on_close` once for each activation of
    /// the close affordance.
    pub fn show_with_close<R>(
        self,
        ui: &mut egui::Ui,
        open: bool,
        on_close: impl FnOnce(),
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> ModalResponse<R> {
        let response = self.show(ui, open, add_contents);
        if response.close_requested {
            on_close();
        }
        response
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        open: bool,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> ModalResponse<R> {
        if !open {
            return ModalResponse::hidden();
        }

        let layout = self.variant.layout();

        let viewport_rect = ui.ctx().screen_rect();
        self.backdrop(ui.ctx(), &layout, viewport_rect);

        let frame = egui::Frame::window(ui.style()).inner_margin(layout.inner_margin);

        let mut window = egui::Window::new(self.title.clone().unwrap_or_default())
            .id(self.id)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .order(layout.order)
            .frame(frame)
            .min_size(layout.min_size);

        if let Some(fraction) = layout.max_fraction {
            window = window.max_size(viewport_rect.size() * fraction);
        }

        let mut close_requested = false;

        let inner = window
            .show(ui.ctx(), |ui| {
                ui.horizontal(|ui| {
                    if let Some(title) = &self.title {
                        ui.heading(title);
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(CLOSE_GLYPH).on_hover_text("Close").clicked() {
                            close_requested = true;
                        }
                    });
                });

                ui.separator();

                match self.variant {
                    ModalVariant::Compact => add_contents(ui),
                    ModalVariant::Spacious => ScrollArea::vertical()
                        .auto_shrink([false, true])
                        .show(ui, add_contents)
                        .inner,
                }
            })
            .and_then(|response| response.inner);

        // Escape that dismisses a popup (this frame or the last) belongs to the popup.
        let popup_key = self.id.with("popup_open");
        let popup_open = ui.ctx().memory(|mem| mem.any_popup_open());
        let popup_was_open = ui
            .ctx()
            .data(|data| data.get_temp::<bool>(popup_key))
            .unwrap_or(false);
        ui.ctx()
            .data_mut(|data| data.insert_temp(popup_key, popup_open));

        if !popup_open && !popup_was_open && ui.input(|input| input.key_pressed(Key::Escape)) {
            close_requested = true;
        }

        if close_requested {
            debug!("Close requested for modal {:?}", self.id);
        }

        ModalResponse {
            close_requested,
            inner,
        }
    }

    /// Dims the whole screen and swallows pointer input meant for what is underneath.
    fn backdrop(&self, ctx: &egui::Context, layout: &ModalLayout, viewport_rect: Rect) {
        let area = egui::Area::new(self.id.with("backdrop"))
            .order(layout.backdrop_order)
            .fixed_pos(viewport_rect.min)
            .movable(false);
        let layer_id = area.layer();

        area.show(ctx, |ui| {
            ui.allocate_rect(viewport_rect, Sense::click());
        });

        ctx.layer_painter(layer_id).rect_filled(
            viewport_rect,
            0.0,
            Color32::from_black_alpha(layout.backdrop_alpha),
        );
    }
}
