/// combo colour carried by hit objects and copied onto their nested objects
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}
impl Color {
    pub const WHITE:Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[inline]
    pub const fn new(r:f32, g:f32, b:f32, a:f32) -> Self { Self { r, g, b, a } }

    pub fn from_hex(hex:impl AsRef<str>) -> Self {
        let hex = hex.as_ref();
        Self::try_from_hex(hex).unwrap_or_else(|| {
            warn!("malformed hex: '{hex}'");
            Color::new(0.0, 0.0, 0.0, 0.0)
        })
    }

    pub fn try_from_hex(hex:impl AsRef<str>) -> Option<Color> {
        let chars = hex.as_ref().trim_matches('#').chars().collect::<Vec<char>>();
        fn parse(c1:char, c2:char) -> Option<f32> {
            let n = u8::from_str_radix(&format!("{c1}{c2}"), 16).ok()?;
            Some(n as f32 / 255.0)
        }

        match chars.len() {
            // rrggbb
            6 => Some(Color::new(
                parse(chars[0], chars[1])?,
                parse(chars[2], chars[3])?,
                parse(chars[4], chars[5])?,
                1.0
            )),
            // rrggbbaa
            8 => Some(Color::new(
                parse(chars[0], chars[1])?,
                parse(chars[2], chars[3])?,
                parse(chars[4], chars[5])?,
                parse(chars[6], chars[7])?,
            )),
            _ => None
        }
    }

    pub fn to_hex(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        let a = (self.a * 255.0).round() as u8;

        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self::from_hex(s)
    }
}
impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}
