// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{config::Config, editor::Editor, input::InputState, ui::ToolbarLayout};

const APP_ID: &str = "sketchpad";
const WINDOW_TITLE: &str = "Sketchpad";

/// Track consecutive render failures for error recovery
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Config,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Builds the editor and input state described by the configuration.
    fn build_input_state(config: &Config) -> InputState {
        let editor = Editor::new(
            config.canvas.width,
            config.canvas.height,
            config.drawing_color(),
            config.drawing.default_thickness,
        );
        let toolbar = ToolbarLayout::new(config.ui.toolbar_height, config.ui.font_size);
        InputState::new(editor, toolbar)
    }

    pub fn run(self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        debug!("Initialized output state");

        let seat_state = SeatState::new(&globals, &qh);
        debug!("Initialized seat state");

        let registry_state = RegistryState::new(&globals);

        let config = self.config;
        debug!("  Color: {:?}", config.drawing.default_color);
        debug!("  Thickness: {}px", config.drawing.default_thickness);
        debug!("  Canvas: {}x{}", config.canvas.width, config.canvas.height);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        let input_state = Self::build_input_state(&config);
        let (width, height) = input_state.window_size();

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
        );

        // Create the toplevel window
        info!("Creating {}x{} window", width, height);
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window = state.xdg_shell.create_window(
            wl_surface,
            WindowDecorations::RequestServer,
            &qh,
        );
        window.set_title(WINDOW_TITLE);
        window.set_app_id(APP_ID);
        // Fixed-size window: the canvas does not resize
        window.set_min_size(Some((width, height)));
        window.set_max_size(Some((width, height)));

        // Commit the surface
        window.commit();

        state.surface.set_window(window);
        info!("Window created");

        let mut consecutive_render_failures = 0u32;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            // Check if we should exit before blocking
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Dispatch all pending events (blocking) but check should_exit after each batch
            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.input_state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Render if configured and needs redraw, but only if no frame callback pending
            // This throttles rendering to display refresh rate (when vsync is enabled)
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        // Reset failure counter on successful render
                        consecutive_render_failures = 0;
                        state.input_state.needs_redraw = false;
                        // Only set frame_callback_pending if vsync is enabled
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.input_state.needs_redraw = false;
                    }
                }
            } else if state.input_state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!(
            "Wayland backend exiting ({} items discarded)",
            state.input_state.editor.canvas().len()
        );

        // Return error if loop exited due to error, otherwise success
        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
