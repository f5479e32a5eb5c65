use std::str::FromStr;

use egui::Color32;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::theme::color;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Error,
}

/// Colors a toast is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub fill: Color32,
    pub stroke: Color32,
    pub title: Color32,
    pub body: Color32,
}

impl ToastVariant {
    /// Unknown or missing tags fall back to [`ToastVariant::Default`].
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(|tag| ToastVariant::from_str(tag.trim()).ok())
            .unwrap_or_default()
    }

    pub fn style(&self) -> ToastStyle {
        match self {
            ToastVariant::Default => ToastStyle {
                fill: color::TOAST_DEFAULT_FILL,
                stroke: color::TOAST_DEFAULT_STROKE,
                title: color::TOAST_DEFAULT_TEXT,
                body: color::MUTED_TEXT,
            },
            ToastVariant::Success => ToastStyle {
                fill: color::TOAST_SUCCESS_FILL,
                stroke: color::TOAST_SUCCESS_STROKE,
                title: color::TOAST_SUCCESS_TEXT,
                body: color::TOAST_SUCCESS_TEXT.gamma_multiply(0.8),
            },
            ToastVariant::Error => ToastStyle {
                fill: color::TOAST_ERROR_FILL,
                stroke: color::TOAST_ERROR_STROKE,
                title: color::TOAST_ERROR_TEXT,
                body: color::TOAST_ERROR_TEXT.gamma_multiply(0.8),
            },
        }
    }
}
