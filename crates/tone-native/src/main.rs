use clap::Parser;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::Key;
use winit::window::WindowBuilder;

use tone_core::{AudioSession, SynthConfig, ToneController, ACTIVE_LEVEL, NATIVE_RAMP_MS};
use tone_native::{tone_key_for, CpalDevice, HeldKeys, ToneCommand};

/// Hold G or F to sound G4 or F4.
#[derive(Parser, Debug)]
#[command(name = "tone-native", version, about)]
struct Args {
    /// Linear output level while a key is held, 0..1.
    #[arg(long, default_value_t = ACTIVE_LEVEL)]
    level: f32,

    /// Attack/release ramp in milliseconds; 0 steps instantly.
    #[arg(long, default_value_t = NATIVE_RAMP_MS)]
    ramp_ms: f32,
}

fn apply(controller: &mut ToneController<CpalDevice>, command: ToneCommand) {
    match command {
        ToneCommand::Start(hz) => {
            if let Err(err) = controller.start_tone(hz) {
                log::warn!("{err}");
            }
        }
        ToneCommand::Stop => controller.stop_tone(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = SynthConfig {
        active_level: args.level,
        ramp_ms: args.ramp_ms,
    };
    config.validate()?;

    // Opened once for the whole run; a failure leaves the keys silent.
    let mut controller = ToneController::new(AudioSession::new(CpalDevice::new(), config));
    _ = controller.open();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Hold G or F")
        .with_inner_size(LogicalSize::new(360.0, 160.0))
        .build(&event_loop)?;
    let mut held = HeldKeys::default();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Focused(false) => {
                    if let Some(command) = held.release_all() {
                        apply(&mut controller, command);
                    }
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Character(text),
                            state,
                            repeat: false,
                            ..
                        },
                    ..
                } => {
                    let Some(key) = tone_key_for(text.as_str()) else {
                        return;
                    };
                    let command = match state {
                        ElementState::Pressed => held.press(key),
                        ElementState::Released => held.release(key),
                    };
                    if let Some(command) = command {
                        apply(&mut controller, command);
                    }
                }
                _ => {}
            },
            Event::LoopExiting => controller.close(),
            _ => {}
        }
    })?;
    Ok(())
}
