const MOBILE_MAX_WIDTH: f64 = 768.0;
const NARROW_MAX_WIDTH: f64 = 600.0;
const PORTRAIT_MAX_RATIO: f64 = 0.8;

const MIN_CARD_EDGE: f64 = 240.0;
const MAX_CARD_EDGE: f64 = 400.0;
const CARD_HEIGHT_RATIO: f64 = 1.4;
const CONTAINER_HEIGHT_RATIO: f64 = 1.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn classify(width: f64, height: f64) -> Self {
        let tall = height > 0.0 && width / height < PORTRAIT_MAX_RATIO;
        if width < MOBILE_MAX_WIDTH || tall || width < NARROW_MAX_WIDTH {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportMode::Mobile
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn mode(&self) -> ViewportMode {
        ViewportMode::classify(self.width, self.height)
    }

    pub fn card_size(&self) -> CardSize {
        CardSize::for_viewport(self.width, self.height)
    }
}

/// Card and container dimensions for the mobile drag stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
    pub container_height: f64,
}

impl CardSize {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let (width_ratio, height_ratio) = if width < 480.0 {
            (0.75, 0.5)
        } else if width < MOBILE_MAX_WIDTH {
            (0.7, 0.55)
        } else {
            (0.6, 0.5)
        };
        let edge = (width * width_ratio)
            .min(height * height_ratio)
            .clamp(MIN_CARD_EDGE, MAX_CARD_EDGE);
        Self {
            width: edge,
            height: edge * CARD_HEIGHT_RATIO,
            container_height: edge * CONTAINER_HEIGHT_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_viewports() {
        assert_eq!(ViewportMode::classify(767.0, 1000.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::classify(1024.0, 768.0), ViewportMode::Desktop);
        // Tall and narrow enough for the ratio rule alone.
        assert_eq!(ViewportMode::classify(500.0, 2000.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::classify(1000.0, 1400.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::classify(1440.0, 900.0), ViewportMode::Desktop);
    }

    #[test]
    fn zero_height_falls_back_to_width_rules() {
        assert_eq!(ViewportMode::classify(1280.0, 0.0), ViewportMode::Desktop);
        assert_eq!(ViewportMode::classify(320.0, 0.0), ViewportMode::Mobile);
    }

    #[test]
    fn small_phone_card_size() {
        // min(400 * 0.75, 800 * 0.5) = 300
        let size = CardSize::for_viewport(400.0, 800.0);
        assert_eq!(size.width, 300.0);
        assert!((size.height - 420.0).abs() < 1e-9);
        assert!((size.container_height - 540.0).abs() < 1e-9);
    }

    #[test]
    fn card_size_is_clamped() {
        let tiny = CardSize::for_viewport(300.0, 400.0);
        assert_eq!(tiny.width, 240.0);

        let huge = CardSize::for_viewport(2000.0, 1400.0);
        assert_eq!(huge.width, 400.0);
        assert!((huge.height - 560.0).abs() < 1e-9);
    }

    #[test]
    fn card_size_uses_breakpoint_ratios() {
        // 600 * 0.7 = 420, 700 * 0.55 = 385
        assert!((CardSize::for_viewport(600.0, 700.0).width - 385.0).abs() < 1e-9);
        // 500 * 0.7 = 350, 800 * 0.55 = 440
        assert!((CardSize::for_viewport(500.0, 800.0).width - 350.0).abs() < 1e-9);
        // Tablet bucket: 900 * 0.6 = 540, 700 * 0.5 = 350
        assert!((CardSize::for_viewport(900.0, 700.0).width - 350.0).abs() < 1e-9);
    }
}
