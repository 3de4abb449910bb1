pub const RENDER_WIDTH: i32 = 1920;             // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;            // Height of the render texture
pub const FPS: u32 = 60;                        // Default frames per second

pub const TRANSITION_DURATION: f32 = 0.6;       // Slide transition and input lockout (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;          // Minimum horizontal travel for a swipe (pixels)

pub const NAVBAR_SCROLL_THRESHOLD: f32 = 100.0; // Scroll offset past which the navbar is "scrolled"
pub const NAV_HIGHLIGHT_OFFSET: f32 = 150.0;    // Offset below the viewport top of the link highlight line
pub const MOBILE_BREAKPOINT: f32 = 768.0;       // Max viewport width treated as mobile

pub const SCROLL_THROTTLE: f32 = 0.01;          // Navbar style update throttle (seconds)
pub const HIGHLIGHT_THROTTLE: f32 = 0.05;       // Active link highlight throttle (seconds)
pub const RESIZE_DEBOUNCE: f32 = 0.25;          // Resize re-highlight debounce (seconds)
pub const DEEP_LINK_DELAY: f32 = 0.1;           // Delay before resolving a deep link (seconds)

pub const REVEAL_THRESHOLD: f32 = 0.1;          // Visible fraction at which a feature card counts as in view
pub const REVEAL_BOTTOM_MARGIN: f32 = 100.0;    // Viewport bottom shrink for the reveal check (pixels)
pub const REVEAL_STAGGER: f32 = 0.1;            // Extra reveal delay per card index (seconds)
