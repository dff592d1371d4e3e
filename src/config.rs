/// How the contact form hands a submission off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    WhatsApp,
}

pub struct EmailRelay {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

pub const EMAIL_RELAY: EmailRelay = EmailRelay {
    endpoint: "https://api.emailjs.com/api/v1.0/email/send",
    service_id: "service_0jdmqqt",
    template_id: "template_iwcojgg",
    public_key: "izJ9flFrw4YXA0ChA",
};

// International format, digits only.
pub const WHATSAPP_NUMBER: &str = "919876543210";

#[cfg(debug_assertions)]
pub fn contact_channel() -> ContactChannel {
    ContactChannel::WhatsApp
}

#[cfg(not(debug_assertions))]
pub fn contact_channel() -> ContactChannel {
    ContactChannel::Email
}

/// Id of the section whose scroll position drives the expanding gallery.
pub const GALLERY_ANCHOR_ID: &str = "home";

/// Tunables for the scroll driven desktop gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    /// Cascade offset between neighbouring cards while stacked, in px.
    pub stack_step: f64,
    /// Horizontal distance between neighbouring cards once expanded, in px.
    pub spacing: f64,
    /// Index that stays at x = 0 while expanding. `None` picks the middle item.
    pub center_index: Option<usize>,
    pub tilt_deg: f64,
    pub stacked_scale: f64,
    /// Progress at which cards drop out of transformed layout into normal flow.
    pub settle_threshold: f64,
    pub max_z_index: i32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            stack_step: 12.0,
            spacing: 320.0,
            center_index: None,
            tilt_deg: 2.0,
            stacked_scale: 0.8,
            settle_threshold: 0.95,
            max_z_index: 5,
        }
    }
}

/// Tunables for the mobile drag stack.
#[derive(Clone, Debug, PartialEq)]
pub struct StackConfig {
    pub random_rotation: bool,
    /// Raw pointer travel (px) past which a released card goes to the back.
    pub sensitivity: f64,
    pub send_to_back_on_click: bool,
    /// Fraction of pointer travel the card actually follows.
    pub elastic: f64,
    pub max_drag_rotation: f64,
    pub max_random_tilt: f64,
    pub rotation_step: f64,
    pub scale_step: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            random_rotation: false,
            sensitivity: 200.0,
            send_to_back_on_click: false,
            elastic: 0.6,
            max_drag_rotation: 60.0,
            max_random_tilt: 5.0,
            rotation_step: 4.0,
            scale_step: 0.06,
        }
    }
}

impl StackConfig {
    /// Settings the home page gallery uses on phones.
    pub fn gallery() -> Self {
        Self {
            random_rotation: true,
            sensitivity: 180.0,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScrollConfig {
    /// Seconds a programmatic `scroll_to` takes.
    pub duration: f64,
    /// Fraction of the remaining distance covered each frame while wheeling.
    pub lerp: f64,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: 1.2,
            lerp: 0.1,
            wheel_multiplier: 1.0,
        }
    }
}
