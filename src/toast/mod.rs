use std::{collections::VecDeque, time::Duration};

use log::{debug, info};

use crate::id::{ToastId, next_toast_id};

mod renderer;
mod variant;

pub use renderer::{EguiToastRenderer, ToastPosition, ToastRenderer};
pub use variant::ToastVariant;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    /// Overrides [`ToastOptions::duration`] when set.
    pub duration: Option<Duration>,
    shown_at: Option<f64>,
}

impl Toast {
    pub fn new(variant: ToastVariant, title: impl Into<String>) -> Self {
        Self {
            id: next_toast_id(),
            variant,
            title: title.into(),
            description: None,
            duration: None,
            shown_at: None,
        }
    }

    /// Builds a toast from a loosely typed variant tag such as `"success"`.
    pub fn from_tag(tag: Option<&str>, title: impl Into<String>) -> Self {
        Self::new(ToastVariant::resolve(tag), title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    fn is_expired(&self, now: f64, default_duration: Duration) -> bool {
        let duration = self.duration.unwrap_or(default_duration);
        match self.shown_at {
            Some(shown_at) => now - shown_at >= duration.as_secs_f64(),
            None => false,
        }
    }

    fn remaining(&self, now: f64, default_duration: Duration) -> Option<Duration> {
        let duration = self.duration.unwrap_or(default_duration).as_secs_f64();
        self.shown_at
            .map(|shown_at| Duration::from_secs_f64((duration - (now - shown_at)).max(0.0)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
    pub max_visible: usize,
    pub position: ToastPosition,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TOAST_DURATION,
            max_visible: DEFAULT_MAX_VISIBLE,
            position: ToastPosition::default(),
        }
    }
}

/// Owns the toast queue and draws it through a [`ToastRenderer`].
///
/// Only the first `max_visible` toasts are drawn. A toast's timer starts the
/// first frame it is actually drawn, so queued toasts do not expire unseen.
pub struct ToastProvider<R: ToastRenderer = EguiToastRenderer> {
    renderer: R,
    options: ToastOptions,
    queue: VecDeque<Toast>,
}

impl Default for ToastProvider<EguiToastRenderer> {
    fn default() -> Self {
        Self::new(EguiToastRenderer::default(), ToastOptions::default())
    }
}

impl<R: ToastRenderer> ToastProvider<R> {
    pub fn new(renderer: R, options: ToastOptions) -> Self {
        Self {
            renderer,
            options,
            queue: VecDeque::new(),
        }
    }

    pub fn set_options(&mut self, options: ToastOptions) {
        self.options = options;
    }

    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = toast.id;
        info!("Toast {} ({}): {}", id, toast.variant, toast.title);
        self.queue.push_back(toast);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|toast| toast.id != id);
        let removed = self.queue.len() != before;
        if removed {
            debug!("Dismissed toast {}", id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter().take(self.options.max_visible)
    }

    /// Drops every toast whose duration has elapsed at `now` (seconds, egui input time).
    pub fn expire(&mut self, now: f64) {
        let duration = self.options.duration;
        self.queue.retain(|toast| {
            let expired = toast.is_expired(now, duration);
            if expired {
                debug!("Toast {} expired", toast.id);
            }
            !expired
        });
    }

    fn mark_shown(&mut self, now: f64) {
        self.queue
            .iter_mut()
            .take(self.options.max_visible)
            .filter(|toast| toast.shown_at.is_none())
            .for_each(|toast| toast.shown_at = Some(now));
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|input| input.time);
        self.expire(now);

        if self.queue.is_empty() {
            return;
        }

        self.mark_shown(now);

        let mut closed = Vec::new();
        let renderer = &self.renderer;
        let visible: Vec<&Toast> = self.queue.iter().take(self.options.max_visible).collect();

        renderer.viewport(ctx, self.options.position, |ui| {
            for toast in &visible {
                let style = toast.variant.style();
                let close_clicked = renderer.root(ui, toast.id, &style, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            renderer.title(ui, &style, &toast.title);
                            if let Some(description) = &toast.description {
                                renderer.description(ui, &style, description);
                            }
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            renderer.close(ui, &style)
                        })
                        .inner
                    })
                    .inner
                });
                if close_clicked {
                    closed.push(toast.id);
                }
            }
        });

        for id in closed {
            self.dismiss(id);
        }

        let default_duration = self.options.duration;
        if let Some(next_expiry) = self
            .visible()
            .filter_map(|toast| toast.remaining(now, default_duration))
            .min()
        {
            ctx.request_repaint_after(next_expiry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::CLOSE_GLYPH;
    use egui_kittest::Harness;

    fn step(harness: &mut Harness<'_, ToastProvider>, frames: usize) {
        for _ in 0..frames {
            harness.step();
        }
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = ToastProvider::default();
        let first = toasts.push(Toast::success("Saved"));
        let second = toasts.push(Toast::error("Failed"));
        assert_eq!(toasts.len(), 2);

        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.queue.iter().map(|t| t.id).collect::<Vec<_>>(), vec![second]);
    }

    #[test]
    fn test_from_tag_uses_resolver() {
        assert_eq!(Toast::from_tag(Some("success"), "a").variant, ToastVariant::Success);
        assert_eq!(Toast::from_tag(Some("error"), "b").variant, ToastVariant::Error);
        assert_eq!(Toast::from_tag(Some("fancy"), "c").variant, ToastVariant::Default);
        assert_eq!(Toast::from_tag(None, "d").variant, ToastVariant::Default);
    }

    #[test]
    fn test_expiry_starts_when_shown() {
        let mut toasts = ToastProvider::default();
        toasts.push(Toast::new(ToastVariant::Default, "Queued"));

        // Never shown, never expires.
        toasts.expire(100.0);
        assert_eq!(toasts.len(), 1);

        toasts.mark_shown(100.0);
        toasts.expire(104.0);
        assert_eq!(toasts.len(), 1);
        toasts.expire(105.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_per_toast_duration_overrides_default() {
        let mut toasts = ToastProvider::default();
        toasts.push(Toast::success("Quick").duration(Duration::from_secs(1)));
        toasts.push(Toast::success("Slow"));
        toasts.mark_shown(0.0);

        toasts.expire(1.5);
        let titles: Vec<&str> = toasts.queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Slow"]);
    }

    #[test]
    fn test_only_max_visible_are_started() {
        let mut toasts = ToastProvider::new(
            EguiToastRenderer::default(),
            ToastOptions {
                max_visible: 2,
                ..Default::default()
            },
        );
        for i in 0..4 {
            toasts.push(Toast::success(format!("Toast {i}")));
        }
        toasts.mark_shown(0.0);
        toasts.expire(10.0);

        let titles: Vec<&str> = toasts.queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Toast 2", "Toast 3"]);
    }

    #[test]
    fn test_toasts_render_in_viewport() {
        let mut toasts = ToastProvider::default();
        toasts.push(Toast::success("Harvest saved").description("Field 3"));

        let mut harness = Harness::new_ui_state(
            |ui, toasts: &mut ToastProvider| toasts.show(ui.ctx()),
            toasts,
        );
        step(&mut harness, 3);

        assert!(harness.query_by_label("Harvest saved").is_some());
        assert!(harness.query_by_label("Field 3").is_some());
    }

    #[test]
    fn test_close_click_dismisses_only_that_toast() {
        let mut toasts = ToastProvider::default();
        toasts.push(Toast::error("Irrigation offline"));

        let mut harness = Harness::new_ui_state(
            |ui, toasts: &mut ToastProvider| toasts.show(ui.ctx()),
            toasts,
        );
        step(&mut harness, 3);

        harness.state_mut().push(Toast::success("Soil sample logged"));
        step(&mut harness, 3);
        assert_eq!(harness.query_all_by_label(CLOSE_GLYPH).count(), 2);

        if let Some(node) = harness.get_all_by_label(CLOSE_GLYPH).next() {
            node.click();
        }
        step(&mut harness, 3);

        let titles: Vec<String> = harness.state().queue.iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["Soil sample logged".to_string()]);
        assert!(harness.query_by_label("Irrigation offline").is_none());
    }

    #[test]
    fn test_renders_at_most_max_visible() {
        let mut toasts = ToastProvider::new(
            EguiToastRenderer::default(),
            ToastOptions {
                max_visible: 2,
                ..Default::default()
            },
        );
        toasts.push(Toast::success("One"));
        toasts.push(Toast::success("Two"));
        toasts.push(Toast::success("Three"));

        let mut harness = Harness::new_ui_state(
            |ui, toasts: &mut ToastProvider| toasts.show(ui.ctx()),
            toasts,
        );
        step(&mut harness, 3);

        assert!(harness.query_by_label("One").is_some());
        assert!(harness.query_by_label("Two").is_some());
        assert!(harness.query_by_label("Three").is_none());
        assert_eq!(harness.state().len(), 3);
    }
}
