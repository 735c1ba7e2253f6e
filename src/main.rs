//! Pressure gauge simulator window.
//!
//! Runs the [`Dashboard`] against the embedded-graphics SDL2 simulator at a
//! fixed 50 FPS loop. Inflation ticks are polled from the loop, so a slow frame
//! is caught up on the next one rather than dropping ticks.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `U` / `Up` | Target +1 PSI |
//! | `D` / `Down` | Target -1 PSI |
//! | `A` / `Space` | Activate / deactivate inflation |
//! | `M` | Toggle manual override |
//! | `C` | Trigger critical warning |
//! | `R` | Reset demo |
//!
//! Every on-screen button can also be clicked. Key repeat is ignored to prevent
//! toggle spam when holding keys.
//!
//! # Logging
//!
//! See [`logging`](pressure_gauge_sim::logging) for the filter variables.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use pressure_gauge_sim::config::{FRAME_TIME, GaugeConfig, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use pressure_gauge_sim::dashboard::Dashboard;
use pressure_gauge_sim::error::ConfigError;
use pressure_gauge_sim::input::{Action, action_for_point};
use pressure_gauge_sim::logging;
use pressure_gauge_sim::render::RenderState;
use pressure_gauge_sim::widgets::draw_dashboard;
use tracing::{debug, info};

/// Keyboard shortcut for `keycode`, if it has one.
fn action_for_key(keycode: Keycode) -> Option<Action> {
    match keycode {
        Keycode::U | Keycode::Up => Some(Action::IncreaseTarget),
        Keycode::D | Keycode::Down => Some(Action::DecreaseTarget),
        Keycode::A | Keycode::Space => Some(Action::ToggleActivation),
        Keycode::M => Some(Action::ToggleManualWarning),
        Keycode::C => Some(Action::TriggerCriticalWarning),
        Keycode::R => Some(Action::ResetDemo),
        _ => None,
    }
}

fn main() -> Result<(), ConfigError> {
    logging::init_subscriber();

    let mut dashboard = Dashboard::new(GaugeConfig::default())?;

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Pressure Gauge", &output_settings);

    // Redraw only when the projected frame changes
    let mut render_state = RenderState::new();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Window events are only available after the first update
        if !render_state.is_first_frame() {
            for ev in window.events() {
                let action = match ev {
                    SimulatorEvent::Quit => {
                        info!(redraws = render_state.redraws(), "window closed");
                        return Ok(());
                    }
                    SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                        // Ignore OS key repeat to prevent toggle spam when holding keys
                        if repeat {
                            continue;
                        }
                        action_for_key(keycode)
                    }
                    SimulatorEvent::MouseButtonUp { point, .. } => action_for_point(point),
                    _ => None,
                };
                if let Some(action) = action {
                    dashboard.handle(action, frame_start);
                }
            }
        }

        let ticks = dashboard.advance(frame_start);
        if ticks > 1 {
            debug!(ticks, "caught up on late inflation ticks");
        }

        if render_state.needs_redraw(dashboard.frame()) {
            // SimulatorDisplay drawing is infallible
            let _ = draw_dashboard(&mut display, &dashboard);
            render_state.mark_drawn(dashboard.frame());
        }
        window.update(&display);

        // Frame rate limiting: sleep for the rest of the frame budget
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
