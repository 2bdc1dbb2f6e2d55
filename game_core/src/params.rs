/// Game tuning parameters for Pong
///
/// Distances are in field units (canvas pixels). Speeds are per nominal frame:
/// an elapsed value of 1.0 corresponds to one frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 20.0; // Gap between field edge and paddle
    pub const PADDLE_SPEED: f32 = 8.0; // Player paddle, units per frame
    pub const CPU_SPEED: f32 = 0.45; // Scaled by MOTION_SCALE

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 0.6; // Scaled by MOTION_SCALE
    pub const SPEED_INCREMENT: f32 = 0.2; // Added on every paddle hit, uncapped
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0; // 75°
    pub const MAX_SERVE_ANGLE: f32 = std::f32::consts::PI / 6.0; // 30°
    pub const UNSTICK_MARGIN: f32 = 0.5;

    // Ball and CPU paddle positions integrate as `vel * elapsed * MOTION_SCALE`.
    // Both must share this factor or the CPU's speed relative to the ball drifts.
    pub const MOTION_SCALE: f32 = 10.0;

    // Score
    pub const SCORE_MARGIN: f32 = 50.0;
    pub const SCORE_PAUSE_MS: f64 = 700.0;

    // Physics
    pub const MAX_ELAPSED: f32 = 4.0; // Clamp to prevent tunnelling after a stall
}
