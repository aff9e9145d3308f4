/// Appearance edited in the barbershop panel.
///
/// Opaque to the camera logic: it is handed to the panel on open and forwarded
/// to the server on every edit.
#[derive(Clone, Debug, PartialEq)]
pub struct BarbershopData {
    pub hair_style: u32,
    pub hair_collection: String,
    pub hair_color: u8,
    pub highlight_color: u8,
    pub facial_hair: u32,
    pub facial_hair_color: u8,
    pub facial_hair_opacity: f32, // Between 0.0 and 1.0.
    pub eyebrows: u32,
    pub eyebrow_color: u8,
    pub eye_color: u8,
}

impl std::default::Default for BarbershopData {
    fn default() -> Self {
        Self {
            hair_style: 0,
            hair_collection: "mpbeach_overlays".to_string(),
            hair_color: 0,
            highlight_color: 0,
            facial_hair: 0,
            facial_hair_color: 0,
            facial_hair_opacity: 1.0,
            eyebrows: 0,
            eyebrow_color: 0,
            eye_color: 0,
        }
    }
}
