//! Static bilingual page text

/// A label shown in Arabic with its English counterpart
#[derive(Debug, Clone, Copy)]
pub struct Bilingual {
    pub arabic: &'static str,
    pub english: &'static str,
}

impl Bilingual {
    const fn new(arabic: &'static str, english: &'static str) -> Self {
        Self { arabic, english }
    }

    /// "عربي (English)", the form the control labels use
    pub fn inline(&self) -> String {
        format!("{} ({})", self.arabic, self.english)
    }
}

pub const WINDOW_TITLE: &str = "ازدواجية الموجة والجسيم - Wave-Particle Duality";

pub const TITLE: Bilingual = Bilingual::new("ازدواجية الموجة والجسيم", "Wave-Particle Duality");

pub const SHOW_WAVE: Bilingual = Bilingual::new("عرض الموجة", "Show Wave");
pub const SHOW_PARTICLES: Bilingual = Bilingual::new("عرض الجسيمات", "Show Particles");
pub const SPEED: Bilingual = Bilingual::new("السرعة", "Speed");
pub const WAVELENGTH: Bilingual = Bilingual::new("الطول الموجي", "Wavelength");

pub const WAVE_HEADING: &str = "🌊 خصائص الموجة";
pub const WAVE_PROPERTIES: [Bilingual; 4] = [
    Bilingual::new("التردد", "Frequency"),
    Bilingual::new("الطول الموجي", "Wavelength"),
    Bilingual::new("التداخل", "Interference"),
    Bilingual::new("الحيود", "Diffraction"),
];

pub const PARTICLE_HEADING: &str = "⚛️ خصائص الجسيم";
pub const PARTICLE_PROPERTIES: [Bilingual; 4] = [
    Bilingual::new("الكتلة", "Mass"),
    Bilingual::new("الشحنة", "Charge"),
    Bilingual::new("الموضع", "Position"),
    Bilingual::new("الزخم", "Momentum"),
];

pub const DESCRIPTION_LEAD: &str = "ازدواجية الموجة والجسيم:";
pub const DESCRIPTION: [&str; 2] = [
    "تمتلك الجسيمات المادية، مثل الإلكترونات، خصائص جسيمات (كالكتلة والشحنة) وخصائص موجات (كالتردد والطول الموجي) في نفس الوقت.",
    "هذه الظاهرة الكمية تُظهر أن الجسيمات دون الذرية تتصرف كموجات وجسيمات معًا، وهي واحدة من أهم مبادئ ميكانيكا الكم.",
];

pub const FOOTER: &str = "تفاعلي - تصور فيزياء الكم | Interactive Quantum Physics Visualization";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_label() {
        assert_eq!(SPEED.inline(), "السرعة (Speed)");
    }

    #[test]
    fn test_title_contains_both_languages() {
        assert!(WINDOW_TITLE.contains(TITLE.arabic));
        assert!(WINDOW_TITLE.contains(TITLE.english));
    }
}
