pub mod color {
    use egui::Color32;

    pub const TOAST_DEFAULT_FILL: Color32 = Color32::from_rgb(0x24, 0x24, 0x27);
    pub const TOAST_DEFAULT_STROKE: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46);
    pub const TOAST_DEFAULT_TEXT: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf5);

    pub const TOAST_SUCCESS_FILL: Color32 = Color32::from_rgb(0x14, 0x53, 0x2d);
    pub const TOAST_SUCCESS_STROKE: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
    pub const TOAST_SUCCESS_TEXT: Color32 = Color32::from_rgb(0xdc, 0xfc, 0xe7);

    pub const TOAST_ERROR_FILL: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d);
    pub const TOAST_ERROR_STROKE: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
    pub const TOAST_ERROR_TEXT: Color32 = Color32::from_rgb(0xfe, 0xe2, 0xe2);

    pub const MUTED_TEXT: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa);
}
