use egui::{Context, Id};
use log::debug;

use crate::crop::Crop;

/// Which crop is selected and whether its modal is showing.
///
/// The two fields always move together: opening selects, closing clears the
/// selection as well as hiding the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelectionState<C = Crop> {
    selected_crop: Option<C>,
    is_modal_open: bool,
}

impl<C> Default for CropSelectionState<C> {
    fn default() -> Self {
        Self {
            selected_crop: None,
            is_modal_open: false,
        }
    }
}

impl<C> CropSelectionState<C> {
    pub fn selected_crop(&self) -> Option<&C> {
        self.selected_crop.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    pub fn open_modal(&mut self, crop: C) {
        self.selected_crop = Some(crop);
        self.is_modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.is_modal_open = false;
        self.selected_crop = None;
    }
}

impl<C> CropSelectionState<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// State stored under `id`, or the initial state if nothing was stored yet.
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data(|data| data.get_temp::<Self>(id))
            .unwrap_or_default()
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|data| data.insert_temp(id, self));
    }

    pub fn open_modal_in(ctx: &Context, id: Id, crop: C) {
        let mut state = Self::load(ctx, id);
        state.open_modal(crop);
        state.store(ctx, id);
        debug!("Opened crop modal {:?}", id);
        ctx.request_repaint();
    }

    pub fn close_modal_in(ctx: &Context, id: Id) {
        let mut state = Self::load(ctx, id);
        if !state.is_modal_open && state.selected_crop.is_none() {
            return;
        }
        state.close_modal();
        state.store(ctx, id);
        debug!("Closed crop modal {:?}", id);
        ctx.request_repaint();
    }
}
